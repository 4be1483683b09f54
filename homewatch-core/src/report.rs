//! API report validation
//!
//! The upstream API returns loosely-shaped JSON. The payload is inspected
//! as a raw value; wrong-type, missing-key, and empty cases are reported
//! separately.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportError;

/// Validated homework-status report
///
/// `current_date` is the server-side timestamp to use as the next poll's
/// lower bound. `homeworks` is ordered newest-first and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

impl StatusReport {
    /// Validates a raw payload against the API contract
    ///
    /// Record-level fields are not checked here; they are verified when a
    /// record is turned into a [`crate::Homework`].
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let object = value.as_object().ok_or(ReportError::NotAnObject)?;

        let homeworks = object
            .get("homeworks")
            .ok_or(ReportError::MissingKey("homeworks"))?
            .as_array()
            .ok_or(ReportError::WrongType("`homeworks` is not an array"))?
            .clone();

        let current_date = object
            .get("current_date")
            .ok_or(ReportError::MissingKey("current_date"))?
            .as_i64()
            .ok_or(ReportError::WrongType("`current_date` is not an integer"))?;

        Ok(Self {
            homeworks,
            current_date,
        })
    }

    /// Most recent homework record, if the report carries any
    ///
    /// An empty record object counts as absent.
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks
            .first()
            .filter(|record| record.as_object().is_none_or(|o| !o.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_report() {
        let payload = json!({
            "homeworks": [{"homework_name": "X", "status": "approved"}],
            "current_date": 1700000000,
        });

        let report = StatusReport::from_value(&payload).unwrap();
        assert_eq!(report.current_date, 1700000000);
        assert_eq!(report.homeworks.len(), 1);
        assert!(report.latest().is_some());
    }

    #[test]
    fn test_empty_homeworks_is_valid_but_has_no_latest() {
        let payload = json!({"homeworks": [], "current_date": 1});

        let report = StatusReport::from_value(&payload).unwrap();
        assert!(report.latest().is_none());
    }

    #[test]
    fn test_empty_record_counts_as_absent() {
        let payload = json!({"homeworks": [{}], "current_date": 1});

        let report = StatusReport::from_value(&payload).unwrap();
        assert!(report.latest().is_none());
    }

    #[test]
    fn test_latest_is_first_record() {
        let payload = json!({
            "homeworks": [
                {"homework_name": "newest", "status": "reviewing"},
                {"homework_name": "older", "status": "approved"},
            ],
            "current_date": 1,
        });

        let report = StatusReport::from_value(&payload).unwrap();
        assert_eq!(report.latest().unwrap()["homework_name"], "newest");
    }

    #[test]
    fn test_not_an_object() {
        let err = StatusReport::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject));
    }

    #[test]
    fn test_missing_homeworks_key() {
        let err = StatusReport::from_value(&json!({"current_date": 1})).unwrap_err();
        assert!(matches!(err, ReportError::MissingKey("homeworks")));
    }

    #[test]
    fn test_homeworks_wrong_type() {
        let payload = json!({"homeworks": "none", "current_date": 1});
        let err = StatusReport::from_value(&payload).unwrap_err();
        assert!(matches!(err, ReportError::WrongType(_)));
    }

    #[test]
    fn test_missing_current_date_key() {
        let err = StatusReport::from_value(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, ReportError::MissingKey("current_date")));
    }

    #[test]
    fn test_current_date_wrong_type() {
        let payload = json!({"homeworks": [], "current_date": "today"});
        let err = StatusReport::from_value(&payload).unwrap_err();
        assert!(matches!(err, ReportError::WrongType(_)));
    }
}
