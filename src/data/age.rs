use chrono::NaiveDate;
use serde::Serialize;

/// Age derived from a birth date, at the granularities the vaccine
/// schedule brackets are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeInfo {
    pub weeks: u32,
    pub months: u32,
    pub years: u32,
}

impl AgeInfo {
    /// Returns `None` for a birth date in the future.
    pub fn from_birth_date(birth: NaiveDate, today: NaiveDate) -> Option<AgeInfo> {
        let days = (today - birth).num_days();
        if days < 0 {
            return None;
        }
        let days = days as f64;
        Some(AgeInfo {
            weeks: (days / 7.0).floor() as u32,
            months: (days / 30.44).floor() as u32,
            years: (days / 365.25).floor() as u32,
        })
    }
}
