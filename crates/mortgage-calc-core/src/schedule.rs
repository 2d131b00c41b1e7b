use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MortgageError;
use crate::MortgageResult;

/// How often mortgage payments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSchedule {
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentSchedule {
    pub const ALL: [PaymentSchedule; 3] = [
        PaymentSchedule::Weekly,
        PaymentSchedule::Biweekly,
        PaymentSchedule::Monthly,
    ];

    /// Parse a schedule label, ignoring ASCII case.
    pub fn from_label(label: &str) -> MortgageResult<Self> {
        Self::ALL
            .into_iter()
            .find(|schedule| label.eq_ignore_ascii_case(schedule.label()))
            .ok_or_else(|| MortgageError::UnknownSchedule(label.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentSchedule::Weekly => "weekly",
            PaymentSchedule::Biweekly => "biweekly",
            PaymentSchedule::Monthly => "monthly",
        }
    }

    pub fn payments_per_year(self) -> u32 {
        match self {
            PaymentSchedule::Weekly => 52,
            PaymentSchedule::Biweekly => 26,
            PaymentSchedule::Monthly => 12,
        }
    }
}

/// Convert a schedule label straight to its payments-per-year count.
pub fn to_payments_per_year(label: &str) -> MortgageResult<u32> {
    PaymentSchedule::from_label(label).map(PaymentSchedule::payments_per_year)
}

impl FromStr for PaymentSchedule {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(to_payments_per_year("weekly").unwrap(), 52);
        assert_eq!(to_payments_per_year("biweekly").unwrap(), 26);
        assert_eq!(to_payments_per_year("monthly").unwrap(), 12);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(
            PaymentSchedule::from_label("WEEKLY").unwrap(),
            PaymentSchedule::Weekly
        );
        assert_eq!(
            PaymentSchedule::from_label("BiWeekly").unwrap(),
            PaymentSchedule::Biweekly
        );
        assert_eq!(
            "Monthly".parse::<PaymentSchedule>().unwrap(),
            PaymentSchedule::Monthly
        );
    }

    #[test]
    fn test_unknown_labels_rejected() {
        for label in ["", "daily", "bi-weekly", "month", " monthly", "annually"] {
            let err = PaymentSchedule::from_label(label).unwrap_err();
            match err {
                MortgageError::UnknownSchedule(got) => assert_eq!(got, label),
                other => panic!("expected UnknownSchedule, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for schedule in PaymentSchedule::ALL {
            assert_eq!(
                PaymentSchedule::from_label(&schedule.to_string()).unwrap(),
                schedule
            );
        }
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&PaymentSchedule::Biweekly).unwrap();
        assert_eq!(json, "\"biweekly\"");
    }
}
