use std::fmt;

use crate::{
    error::{Error, Result},
    record::ScoreRecord,
};

const HIGH_TOTAL: f64 = 1000.0;
const HIGH_RECENT: f64 = 100.0;
const MEDIUM_TOTAL: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Influence {
    High,
    Medium,
    Low,
}

impl Influence {
    /// All thresholds are strict: 1000 total is not High, 500 total is not Medium.
    pub fn of(record: &ScoreRecord) -> Influence {
        if record.yaps_all() > HIGH_TOTAL && record.yaps_l7d() > HIGH_RECENT {
            Influence::High
        } else if record.yaps_all() > MEDIUM_TOTAL {
            Influence::Medium
        } else {
            Influence::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Influence::High => "High Influence",
            Influence::Medium => "Medium Influence",
            Influence::Low => "Low Influence",
        }
    }
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a fetch outcome. A missing record is an error, never a default tier.
pub fn classify(record: Option<&ScoreRecord>) -> Result<Influence> {
    record.map(Influence::of).ok_or(Error::NoRecord)
}

/// Which side of a two-user comparison has the greater all-time total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    First,
    Second,
    Tie,
}

pub fn compare(a: &ScoreRecord, b: &ScoreRecord) -> Standing {
    if a.yaps_all() > b.yaps_all() {
        Standing::First
    } else if b.yaps_all() > a.yaps_all() {
        Standing::Second
    } else {
        Standing::Tie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(yaps_all: f64, yaps_l7d: f64) -> Influence {
        classify(Some(&ScoreRecord::new("user", yaps_all, yaps_l7d))).unwrap()
    }

    #[test]
    fn high_needs_both_thresholds() {
        assert_eq!(tier(1500.0, 150.0), Influence::High);
        assert_eq!(tier(1000.01, 100.01), Influence::High);
    }

    #[test]
    fn high_total_with_quiet_week_is_medium() {
        assert_eq!(tier(5000.0, 100.0), Influence::Medium);
        assert_eq!(tier(1001.0, 0.0), Influence::Medium);
    }

    #[test]
    fn total_of_exactly_1000_is_not_high() {
        assert_eq!(tier(1000.0, 150.0), Influence::Medium);
    }

    #[test]
    fn medium_band() {
        assert_eq!(tier(750.0, 10.0), Influence::Medium);
        assert_eq!(tier(500.5, 0.0), Influence::Medium);
    }

    #[test]
    fn total_of_exactly_500_is_low() {
        assert_eq!(tier(500.0, 0.0), Influence::Low);
        assert_eq!(tier(500.0, 999.0), Influence::Low);
        assert_eq!(tier(0.0, 0.0), Influence::Low);
    }

    #[test]
    fn missing_record_is_an_error() {
        assert!(matches!(classify(None), Err(Error::NoRecord)));
    }

    #[test]
    fn tier_names() {
        assert_eq!(Influence::High.to_string(), "High Influence");
        assert_eq!(Influence::Medium.name(), "Medium Influence");
        assert_eq!(Influence::Low.name(), "Low Influence");
    }

    #[test]
    fn compare_picks_greater_total() {
        let a = ScoreRecord::new("a", 800.0, 0.0);
        let b = ScoreRecord::new("b", 300.0, 900.0);
        assert_eq!(compare(&a, &b), Standing::First);
        assert_eq!(compare(&b, &a), Standing::Second);
    }

    #[test]
    fn compare_declares_ties() {
        let a = ScoreRecord::new("a", 420.0, 1.0);
        let b = ScoreRecord::new("b", 420.0, 2.0);
        assert_eq!(compare(&a, &b), Standing::Tie);
    }
}
