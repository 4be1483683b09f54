//! Homework domain types
//!
//! A homework record is one reviewable submission. Its review status maps
//! to a fixed human-readable verdict shown to the student.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportError;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parses a wire status string, rejecting anything outside the fixed set
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        match raw {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(ReportError::UnknownStatus(other.to_string())),
        }
    }

    /// Verdict text shown to the student for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Reviewing => write!(f, "reviewing"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// One reviewable homework submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    /// Name of the submitted work
    pub homework_name: String,

    /// Current review status
    pub status: HomeworkStatus,
}

impl Homework {
    /// Builds a record from a raw API object, checking the required fields
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let object = value
            .as_object()
            .ok_or(ReportError::WrongType("homework record is not an object"))?;

        let homework_name = object
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(ReportError::MissingField("homework_name"))?
            .to_string();

        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or(ReportError::MissingField("status"))?;

        Ok(Self {
            homework_name,
            status: HomeworkStatus::parse(status)?,
        })
    }

    /// Notification text for the current review status
    pub fn status_message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}
