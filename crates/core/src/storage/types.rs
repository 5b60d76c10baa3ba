use chrono::NaiveDate;

use super::DateRangeError;

/// A date range with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_valid_range_construction() {
        let range = DateRange::new(date(1, 1), date(1, 31)).unwrap();
        assert_eq!(range.start, date(1, 1));
        assert_eq!(range.end, date(1, 31));
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let range = DateRange::new(date(6, 15), date(6, 15)).unwrap();
        assert!(range.contains(date(6, 15)));
    }

    #[test]
    fn test_invalid_range_returns_error() {
        assert_eq!(
            DateRange::new(date(1, 31), date(1, 1)),
            Err(DateRangeError::InvalidRange)
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2, 1), date(2, 29)).unwrap();
        assert!(range.contains(date(2, 1)));
        assert!(range.contains(date(2, 29)));
        assert!(!range.contains(date(3, 1)));
        assert!(!range.contains(date(1, 31)));
    }
}
