//! Source of the date embedded in generated letters.

use chrono::NaiveDate;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
