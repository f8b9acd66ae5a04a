// 👤 Figure Entity - a historical person and the periods they are known for

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::Period;

/// A historical person.
///
/// `periods` keeps the order the periods were entered in. The input boundary
/// guarantees at least one period; the store itself does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub name: String,
    pub periods: Vec<Period>,
}

impl Figure {
    pub fn new(name: impl Into<String>, periods: Vec<Period>) -> Self {
        Figure {
            name: name.into(),
            periods,
        }
    }

    /// Start date of the first listed period (the "leaders" sort key)
    pub fn first_period_start(&self) -> Option<NaiveDate> {
        self.periods.first().map(|p| p.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_period_start_uses_list_order() {
        let figure = Figure::new(
            "Test Kişi",
            vec![
                Period::new("İkinci", date(1950, 1, 1), date(1960, 1, 1)),
                Period::new("Birinci", date(1900, 1, 1), date(1910, 1, 1)),
            ],
        );

        // First listed, not earliest
        assert_eq!(figure.first_period_start(), Some(date(1950, 1, 1)));
    }

    #[test]
    fn test_first_period_start_empty() {
        let figure = Figure::new("Boş", Vec::new());
        assert_eq!(figure.first_period_start(), None);
    }
}
