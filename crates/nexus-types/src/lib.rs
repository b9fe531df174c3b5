//! Validated primitive types shared across the Nexus crates.

/// Errors that can occur when creating validated primitive types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input number was NaN or infinite
    #[error("value must be a finite number, got {0}")]
    NotFinite(f64),
    /// The input number was outside the permitted range
    #[error("value {value} is outside the range {min}..={max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A percentage guaranteed to lie within `0.0..=100.0`.
///
/// Similarity scores and thresholds are carried as `Percentage` so that the range invariant is
/// checked once at construction instead of at every comparison.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0.0);
    pub const FULL: Percentage = Percentage(100.0);

    /// Creates a percentage, rejecting non-finite or out-of-range input.
    pub fn new(value: f64) -> Result<Self, TextError> {
        if !value.is_finite() {
            return Err(TextError::NotFinite(value));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(TextError::OutOfRange {
                value,
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage from a fraction in `0.0..=1.0`.
    pub fn from_fraction(fraction: f64) -> Result<Self, TextError> {
        if !fraction.is_finite() {
            return Err(TextError::NotFinite(fraction));
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(TextError::OutOfRange {
                value: fraction,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(Self(fraction * 100.0))
    }

    /// Clamps an arbitrary computed value into range. NaN maps to zero.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded to the nearest whole percent, halves away from zero.
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

impl serde::Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Percentage::new(v).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_rejects_blank() {
        assert_eq!(NonEmptyText::new("  Case-A ").unwrap().as_str(), "Case-A");
        assert_eq!(NonEmptyText::new(" \n\t").unwrap_err(), TextError::Empty);
    }

    #[test]
    fn non_empty_text_deserialize_rejects_blank() {
        let err = serde_json::from_str::<NonEmptyText>("\"   \"");
        assert!(err.is_err());
    }

    #[test]
    fn percentage_rejects_out_of_range() {
        assert!(Percentage::new(100.0).is_ok());
        assert!(Percentage::new(100.01).is_err());
        assert!(Percentage::new(-0.5).is_err());
        assert!(matches!(
            Percentage::new(f64::NAN),
            Err(TextError::NotFinite(_))
        ));
    }

    #[test]
    fn percentage_from_fraction_scales() {
        let p = Percentage::from_fraction(0.65).unwrap();
        assert!((p.value() - 65.0).abs() < 1e-9);
        assert!(Percentage::from_fraction(1.5).is_err());
    }

    #[test]
    fn percentage_saturating_clamps() {
        assert_eq!(Percentage::saturating(140.0), Percentage::FULL);
        assert_eq!(Percentage::saturating(-3.0), Percentage::ZERO);
        assert_eq!(Percentage::saturating(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn percentage_display_rounds() {
        assert_eq!(Percentage::new(77.5).unwrap().to_string(), "78%");
        assert_eq!(Percentage::new(80.4).unwrap().to_string(), "80%");
    }
}
