//! # Value Formatting
//!
//! Every field shown in a report table is first turned into a
//! [`FieldValue`], then rendered to text through a [`FormatContext`].
//! `FieldValue` is closed, so rendering is total: there is no value a
//! descriptor can produce that the renderer does not know how to print.

use std::fmt::Write;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use gdpr_core::{RiskLevel, Timestamp};

/// Long English calendar date, e.g. `25 May 2018`.
pub const DEFAULT_DATE_FORMAT: &str = "%-d %B %Y";
/// Long English timestamp, e.g. `Friday 25 May 2018, 09:30:00`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%A %-d %b %Y, %H:%M:%S";

/// Presentation settings for report values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatContext {
    /// Rendering of `true`.
    pub yes: String,
    /// Rendering of `false`.
    pub no: String,
    /// Rendering of empty text, absent values and empty collections.
    pub empty: String,
    /// `chrono` format string for calendar dates.
    pub date_format: String,
    /// `chrono` format string for timestamps.
    pub datetime_format: String,
    /// Offset timestamps are shown in. Stored values are always UTC.
    pub offset: FixedOffset,
}

impl Default for FormatContext {
    fn default() -> Self {
        Self {
            yes: "Yes".into(),
            no: "No".into(),
            empty: "-".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            datetime_format: DEFAULT_DATETIME_FORMAT.into(),
            offset: Utc.fix(),
        }
    }
}

impl FormatContext {
    /// Render a timestamp in the configured offset and format.
    ///
    /// A format asking for something a timestamp cannot supply falls back
    /// to [`DEFAULT_DATETIME_FORMAT`].
    pub fn datetime(&self, ts: &Timestamp) -> String {
        let local = ts.with_offset(&self.offset);
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.datetime_format)).is_err() {
            tracing::warn!(format = %self.datetime_format, "unusable datetime format, using the default");
            out.clear();
            let _ = write!(out, "{}", local.format(DEFAULT_DATETIME_FORMAT));
        }
        out
    }

    /// Render a calendar date in the configured format.
    ///
    /// Time-of-day specifiers cannot be filled from a date; such a format
    /// falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn date(&self, date: &NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            tracing::warn!(format = %self.date_format, "unusable date format, using the default");
            out.clear();
            let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
        }
        out
    }

    /// Render one field value, or `None` when the field must be omitted.
    pub fn render(&self, value: &FieldValue) -> Option<String> {
        let text = match value {
            FieldValue::Hidden => return None,
            FieldValue::Text(s) => self.or_empty(s.trim()),
            FieldValue::Bool(b) => {
                if *b {
                    self.yes.clone()
                } else {
                    self.no.clone()
                }
            }
            FieldValue::Int(n) => n.map_or_else(|| self.empty.clone(), |n| n.to_string()),
            FieldValue::Choice(label) => self.or_empty(label),
            FieldValue::Date(d) => d.map_or_else(|| self.empty.clone(), |d| self.date(&d)),
            FieldValue::DateTime(ts) => {
                ts.map_or_else(|| self.empty.clone(), |ts| self.datetime(&ts))
            }
            FieldValue::Ref(name) => name
                .as_deref()
                .map_or_else(|| self.empty.clone(), |n| self.or_empty(n)),
            FieldValue::Refs(names) => {
                let names: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|n| !n.is_empty())
                    .collect();
                self.or_empty(&names.join(", "))
            }
        };
        Some(text)
    }

    fn or_empty(&self, s: &str) -> String {
        if s.is_empty() {
            self.empty.clone()
        } else {
            s.to_string()
        }
    }
}

/// A field value before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text. Blank text renders as the empty marker.
    Text(String),
    Bool(bool),
    Int(Option<i64>),
    /// Label of a choice-coded value.
    Choice(&'static str),
    Date(Option<NaiveDate>),
    DateTime(Option<Timestamp>),
    /// Display name of a referenced record, `None` when unset or dangling.
    Ref(Option<String>),
    /// Display names of referenced records, in stored order.
    Refs(Vec<String>),
    /// The field does not apply to this record and is left out.
    Hidden,
}

impl FieldValue {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }

    pub fn risk(level: RiskLevel) -> Self {
        Self::Choice(level.label())
    }
}
