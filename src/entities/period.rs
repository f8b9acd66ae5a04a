// ⏳ Period Entity - a named date range
//
// start <= end is not checked: reversed ranges are stored as given.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Period {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Period {
            name: name.into(),
            start_date,
            end_date,
        }
    }

    /// True when the range runs backwards (end before start)
    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_period_is_kept() {
        let start = NaiveDate::from_ymd_opt(1923, 7, 24).unwrap();
        let end = NaiveDate::from_ymd_opt(1919, 5, 19).unwrap();
        let period = Period::new("Ters", start, end);

        assert!(period.is_reversed());
        assert_eq!(period.start_date, start);
        assert_eq!(period.end_date, end);
    }

    #[test]
    fn test_single_day_period_is_not_reversed() {
        let day = NaiveDate::from_ymd_opt(1453, 5, 29).unwrap();
        assert!(!Period::new("Fetih", day, day).is_reversed());
    }
}
