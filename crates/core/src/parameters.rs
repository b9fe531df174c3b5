//! Report parameters supplied by the caller.
//!
//! Every field is optional: the front end sends whatever the user has filled in so far, and the
//! letter templates substitute defaults for anything missing. Blank strings are treated the same
//! as absent fields.

use serde::{Deserialize, Serialize};

/// An immutable snapshot of a strategic scenario.
///
/// Accepted on the wire in camelCase. Unknown fields are ignored so the full front-end report
/// object can be posted as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportParameters {
    pub organization_name: Option<String>,
    pub country: Option<String>,
    pub strategic_intent: Option<String>,
    pub revenue_band: Option<String>,
    pub decision_authority: Option<String>,
    pub expansion_timeline: Option<String>,
    pub target_counterpart_type: Option<String>,
    pub calibration: Option<Calibration>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calibration {
    pub constraints: Option<Constraints>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    pub budget_cap: Option<BudgetCap>,
}

/// Budget cap as entered: either a bare amount or free text such as "$5M".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetCap {
    Amount(f64),
    Text(String),
}

impl std::fmt::Display for BudgetCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetCap::Amount(amount) => write!(f, "{amount}"),
            BudgetCap::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}

/// Returns the trimmed value when present and not blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ReportParameters {
    pub fn organization_name(&self) -> Option<&str> {
        present(&self.organization_name)
    }

    pub fn country(&self) -> Option<&str> {
        present(&self.country)
    }

    pub fn strategic_intent(&self) -> Option<&str> {
        present(&self.strategic_intent)
    }

    pub fn revenue_band(&self) -> Option<&str> {
        present(&self.revenue_band)
    }

    pub fn decision_authority(&self) -> Option<&str> {
        present(&self.decision_authority)
    }

    pub fn expansion_timeline(&self) -> Option<&str> {
        present(&self.expansion_timeline)
    }

    pub fn target_counterpart_type(&self) -> Option<&str> {
        present(&self.target_counterpart_type)
    }

    /// The budget cap from `calibration.constraints`, skipping blank text and non-finite amounts.
    pub fn budget_cap(&self) -> Option<&BudgetCap> {
        let cap = self.calibration.as_ref()?.constraints.as_ref()?.budget_cap.as_ref()?;
        match cap {
            BudgetCap::Amount(amount) if !amount.is_finite() => None,
            BudgetCap::Text(text) if text.trim().is_empty() => None,
            _ => Some(cap),
        }
    }

    /// Scale tier inferred from the revenue band, if it can be read.
    pub fn scale_tier(&self) -> Option<ScaleTier> {
        self.revenue_band().and_then(ScaleTier::from_revenue_band)
    }
}

/// Ordinal bucket for organisation or project scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleTier {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl ScaleTier {
    fn rank(self) -> u8 {
        match self {
            ScaleTier::Micro => 0,
            ScaleTier::Small => 1,
            ScaleTier::Medium => 2,
            ScaleTier::Large => 3,
            ScaleTier::Enterprise => 4,
        }
    }

    /// Number of tiers between `self` and `other`.
    pub fn distance(self, other: ScaleTier) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    /// Buckets an annual revenue amount in US dollars.
    pub fn from_amount_usd(amount: f64) -> Self {
        if amount < 1_000_000.0 {
            ScaleTier::Micro
        } else if amount < 10_000_000.0 {
            ScaleTier::Small
        } else if amount < 100_000_000.0 {
            ScaleTier::Medium
        } else if amount < 1_000_000_000.0 {
            ScaleTier::Large
        } else {
            ScaleTier::Enterprise
        }
    }

    /// Reads a free-text revenue band such as `"$10M-$50M"`, `"Enterprise"` or `"2 billion"`.
    ///
    /// Keywords win over amounts. For ranges the lower bound is used.
    pub fn from_revenue_band(band: &str) -> Option<Self> {
        let lower = band.trim().to_ascii_lowercase();
        if lower.is_empty() {
            return None;
        }

        const KEYWORDS: &[(&str, ScaleTier)] = &[
            ("enterprise", ScaleTier::Enterprise),
            ("multinational", ScaleTier::Enterprise),
            ("fortune", ScaleTier::Enterprise),
            ("large", ScaleTier::Large),
            ("medium", ScaleTier::Medium),
            ("mid", ScaleTier::Medium),
            ("small", ScaleTier::Small),
            ("sme", ScaleTier::Small),
            ("micro", ScaleTier::Micro),
            ("startup", ScaleTier::Micro),
            ("seed", ScaleTier::Micro),
        ];
        for (keyword, tier) in KEYWORDS {
            if lower
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|word| word.starts_with(keyword))
            {
                return Some(*tier);
            }
        }

        first_amount(&lower).map(ScaleTier::from_amount_usd)
    }
}

/// Parses the first money amount in `text`, honouring k/m/b and word multipliers.
fn first_amount(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.' || bytes[end] == b',')
    {
        end += 1;
    }
    let digits: String = text[start..end].chars().filter(|c| *c != ',').collect();
    let value: f64 = digits.trim_end_matches('.').parse().ok()?;

    let suffix: String = text[end..]
        .trim_start()
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    let multiplier = match suffix.as_str() {
        "k" | "thousand" => 1_000.0,
        "m" | "mn" | "mm" | "million" => 1_000_000.0,
        "b" | "bn" | "billion" => 1_000_000_000.0,
        "t" | "tn" | "trillion" => 1_000_000_000_000.0,
        _ => 1.0,
    };
    Some(value * multiplier)
}
