use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical storage form of a record date.
pub const ISO_DATE: &str = "%Y-%m-%d";
/// Form used when a date is shown in the table or the edit form.
pub const DISPLAY_DATE: &str = "%d.%m.%Y";
/// Day and month without zero padding.
pub const SHORT_DATE: &str = "%-d.%-m.%Y";

/// Stable identifier of a record. Assigned once by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(RecordId)
            .map_err(|_| format!("Invalid record id: {}", s))
    }
}

/// The editable columns of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Date,
    Value,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Date, Field::Value];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Date => "date",
            Field::Value => "value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "date" => Ok(Field::Date),
            "value" => Ok(Field::Value),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// A validated field triple. Only this type reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// One committed row of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub date: NaiveDate,
    pub value: f64,
}

impl Record {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            date: fields.date,
            value: fields.value,
        }
    }

    /// Overwrites the data fields, keeping the id.
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.date = fields.date;
        self.value = fields.value;
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            date: self.date,
            value: self.value,
        }
    }

    pub fn iso_date(&self) -> String {
        self.date.format(ISO_DATE).to_string()
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE).to_string()
    }

    pub fn display_value(&self) -> String {
        format_value(self.value)
    }
}

/// Renders a number the way it is typed and searched: `78`, `1.5`, `-3`.
///
/// Zero has no sign, and magnitudes outside `[1e-6, 1e21)` switch to
/// exponent form (`1e+21`, `1.5e-7`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) || !value.is_finite() {
        return value.to_string();
    }
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// Raw form input, kept exactly as typed until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub date: String,
    pub value: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            value: value.into(),
        }
    }

    /// Prefills a draft from a committed record, using the form's date format.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            date: record.display_date(),
            value: record.display_value(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Date => &self.date,
            Field::Value => &self.value,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Date => self.date = value,
            Field::Value => self.value = value,
        }
    }
}

impl From<&RecordFields> for Draft {
    fn from(fields: &RecordFields) -> Self {
        Self {
            name: fields.name.clone(),
            date: fields.date.format(ISO_DATE).to_string(),
            value: format_value(fields.value),
        }
    }
}
