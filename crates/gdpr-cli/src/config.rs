//! Registry configuration.
//!
//! Defaults render dates in UTC with the long English formats. Override via
//! environment variables; command-line flags override both.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate};

use gdpr_core::Timestamp;
use gdpr_report::format::{DEFAULT_DATE_FORMAT, DEFAULT_DATETIME_FORMAT};
use gdpr_report::{FormatContext, ReportOptions};
const DEFAULT_BRANDING: &str = "GDPR Registry";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Snapshot file holding the registry.
    pub snapshot: Option<PathBuf>,
    /// Offset dates and timestamps are presented in.
    pub utc_offset: FixedOffset,
    pub date_format: String,
    pub datetime_format: String,
    /// Branding mark on report covers and page headers.
    pub branding: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let format = FormatContext::default();
        Self {
            snapshot: None,
            utc_offset: format.offset,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            branding: DEFAULT_BRANDING.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `REGISTRY_SNAPSHOT` (no default)
    /// - `REGISTRY_UTC_OFFSET` (default: `+00:00`)
    /// - `REGISTRY_DATE_FORMAT` (default: `%-d %B %Y`)
    /// - `REGISTRY_DATETIME_FORMAT` (default: `%A %-d %b %Y, %H:%M:%S`)
    /// - `REGISTRY_BRANDING` (default: `GDPR Registry`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let utc_offset = match lookup("REGISTRY_UTC_OFFSET") {
            Some(raw) => parse_offset(&raw)?,
            None => defaults.utc_offset,
        };
        let date_format = match lookup("REGISTRY_DATE_FORMAT") {
            Some(raw) => checked_format("REGISTRY_DATE_FORMAT", raw, FormatTarget::Date)?,
            None => defaults.date_format,
        };
        let datetime_format = match lookup("REGISTRY_DATETIME_FORMAT") {
            Some(raw) => checked_format("REGISTRY_DATETIME_FORMAT", raw, FormatTarget::DateTime)?,
            None => defaults.datetime_format,
        };
        let branding = match lookup("REGISTRY_BRANDING") {
            Some(raw) if raw.trim().is_empty() => {
                tracing::warn!("REGISTRY_BRANDING is blank; using the default branding");
                defaults.branding
            }
            Some(raw) => raw,
            None => defaults.branding,
        };
        Ok(Self {
            snapshot: lookup("REGISTRY_SNAPSHOT").map(PathBuf::from),
            utc_offset,
            date_format,
            datetime_format,
            branding,
        })
    }

    /// Value formatting for reports.
    pub fn format_context(&self) -> FormatContext {
        FormatContext {
            date_format: self.date_format.clone(),
            datetime_format: self.datetime_format.clone(),
            offset: self.utc_offset,
            ..FormatContext::default()
        }
    }

    /// Report settings, stamped with the current time.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.format_context(),
            branding: self.branding.clone(),
            generated_at: Timestamp::now(),
        }
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `Z` or `UTC`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidOffset(raw.to_string());
    let s = raw.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// What a format string will be applied to.
#[derive(Debug, Clone, Copy)]
enum FormatTarget {
    Date,
    DateTime,
}

/// Reject blank or malformed formats, and formats the target value cannot
/// fill (a time of day asked of a calendar date).
fn checked_format(var: &str, raw: String, target: FormatTarget) -> Result<String, ConfigError> {
    let broken = StrftimeItems::new(&raw).any(|item| matches!(item, Item::Error));
    if raw.trim().is_empty() || broken || sample_format(&raw, target).is_err() {
        return Err(ConfigError::InvalidFormat(var.to_string(), raw));
    }
    Ok(raw)
}

fn sample_format(raw: &str, target: FormatTarget) -> std::fmt::Result {
    let mut out = String::new();
    match target {
        FormatTarget::Date => {
            let sample = NaiveDate::from_ymd_opt(2018, 5, 25).ok_or(std::fmt::Error)?;
            write!(out, "{}", sample.format(raw))
        }
        FormatTarget::DateTime => {
            let sample = DateTime::parse_from_rfc3339("2018-05-25T09:30:00+00:00")
                .map_err(|_| std::fmt::Error)?;
            write!(out, "{}", sample.format(raw))
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid UTC offset {0:?}: expected +HH:MM or -HH:MM")]
    InvalidOffset(String),
    #[error("invalid date format for {0}: {1:?}")]
    InvalidFormat(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let cfg = RegistryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, RegistryConfig::default());
        assert_eq!(cfg.utc_offset.local_minus_utc(), 0);
        assert!(cfg.snapshot.is_none());
    }

    #[test]
    fn test_variables_override_defaults() {
        let cfg = RegistryConfig::from_lookup(lookup(&[
            ("REGISTRY_SNAPSHOT", "registry.yaml"),
            ("REGISTRY_UTC_OFFSET", "+02:00"),
            ("REGISTRY_DATE_FORMAT", "%Y-%m-%d"),
            ("REGISTRY_BRANDING", "Acme Privacy"),
        ]))
        .unwrap();
        assert_eq!(cfg.snapshot, Some(PathBuf::from("registry.yaml")));
        assert_eq!(cfg.utc_offset.local_minus_utc(), 7200);
        assert_eq!(cfg.format_context().date_format, "%Y-%m-%d");
        assert_eq!(cfg.report_options().branding, "Acme Privacy");
    }

    #[test]
    fn test_blank_branding_falls_back() {
        let cfg = RegistryConfig::from_lookup(lookup(&[("REGISTRY_BRANDING", "  ")])).unwrap();
        assert_eq!(cfg.branding, DEFAULT_BRANDING);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(parse_offset("-05:30").unwrap().local_minus_utc(), -(5 * 3600 + 30 * 60));
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        for bad in ["0200", "+2:00", "+24:00", "+02:60", "abc", ""] {
            assert!(parse_offset(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = RegistryConfig::from_lookup(lookup(&[("REGISTRY_DATETIME_FORMAT", "%Q")]));
        assert!(matches!(result, Err(ConfigError::InvalidFormat(..))));
    }

    #[test]
    fn test_time_of_day_date_format_is_rejected() {
        let result = RegistryConfig::from_lookup(lookup(&[("REGISTRY_DATE_FORMAT", "%H:%M")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFormat(ref var, _)) if var == "REGISTRY_DATE_FORMAT"
        ));
        // The same string is fine for timestamps.
        let cfg =
            RegistryConfig::from_lookup(lookup(&[("REGISTRY_DATETIME_FORMAT", "%H:%M")])).unwrap();
        assert_eq!(cfg.datetime_format, "%H:%M");
    }
}
