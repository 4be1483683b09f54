//! Homewatch Core
//!
//! Core types for the homework status notification bot.
//!
//! This crate contains:
//! - Domain types: homework records and their review statuses
//! - Report validation: checking raw API payloads against the documented
//!   contract before any field is trusted
//!
//! No I/O happens here; the HTTP plumbing lives in `homewatch-client`.

pub mod error;
pub mod homework;
pub mod report;

pub use error::ReportError;
pub use homework::{Homework, HomeworkStatus};
pub use report::StatusReport;
