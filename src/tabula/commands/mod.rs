use crate::model::{Record, RecordFields};
use chrono::NaiveDate;

pub mod create;
pub mod delete;
pub mod list;
pub mod page;
pub mod query;
pub mod search;
pub mod sort;
pub mod update;

/// Feedback a mutation reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}

/// The rows a fresh table is seeded with.
pub fn sample_fields() -> Vec<RecordFields> {
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        RecordFields {
            name: "Иван Иванов".to_string(),
            date: day(2025, 5, 15),
            value: 78.0,
        },
        RecordFields {
            name: "Петр Петров".to_string(),
            date: day(2025, 6, 24),
            value: 99.0,
        },
        RecordFields {
            name: "Сидор Сидоров".to_string(),
            date: day(2025, 4, 10),
            value: 98.0,
        },
    ]
}
