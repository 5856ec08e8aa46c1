//! Position records: the wire shape and the parsed shape.
//!
//! The data source returns one record per job title held, several per
//! employer when titles changed. Dates arrive as strings and are parsed
//! here; an unparsable date fails the whole pass.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DataError;

/// A position record as returned by the content API.
///
/// Field names match the upstream columns, so this deserializes straight
/// from the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPosition {
    /// Upstream row id.
    pub id: i64,

    /// Job title held.
    pub position_name: String,

    /// Employer name; the grouping key, matched case-sensitively.
    pub company_name: String,

    /// Employer homepage, if any.
    #[serde(default)]
    pub company_url: Option<String>,

    /// Start date string (`YYYY-MM-DD`, `YYYY-MM`, or RFC 3339).
    pub start_date: String,

    /// End date string; absent means the position is ongoing.
    #[serde(default)]
    pub end_date: Option<String>,

    /// City the position was held in.
    pub city: String,

    /// State or region, unabbreviated.
    pub state: String,

    /// Whether the record is flagged as the current position.
    #[serde(default)]
    pub current: bool,

    /// Avatar gradient start color.
    #[serde(default)]
    pub gradient_start: String,

    /// Avatar gradient end color.
    #[serde(default)]
    pub gradient_end: String,

    /// Free-text description, if any.
    #[serde(default)]
    pub description: Option<String>,
}

/// A position with its dates parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Upstream row id.
    pub id: i64,

    /// Job title held.
    pub title: String,

    /// Start of the position.
    pub start: NaiveDate,

    /// End of the position; `None` means ongoing.
    pub end: Option<NaiveDate>,

    /// City the position was held in.
    pub city: String,

    /// State or region, unabbreviated.
    pub state: String,

    /// Whether the record is flagged as the current position.
    pub current: bool,

    /// Free-text description, if any.
    pub description: Option<String>,
}

impl Position {
    /// Parses a raw record's dates into a [`Position`].
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MalformedDate`] if either date string cannot
    /// be parsed.
    pub fn parse(raw: &RawPosition) -> Result<Self, DataError> {
        let start = parse_date(&raw.start_date).ok_or_else(|| DataError::MalformedDate {
            field: "start_date",
            value: raw.start_date.clone(),
            company: raw.company_name.clone(),
        })?;

        let end = match raw.end_date.as_deref() {
            None => None,
            Some(value) => Some(parse_date(value).ok_or_else(|| DataError::MalformedDate {
                field: "end_date",
                value: value.to_string(),
                company: raw.company_name.clone(),
            })?),
        };

        Ok(Self {
            id: raw.id,
            title: raw.position_name.clone(),
            start,
            end,
            city: raw.city.clone(),
            state: raw.state.clone(),
            current: raw.current,
            description: raw.description.clone(),
        })
    }
}

/// Parses a date string in any of the accepted formats.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM` (resolved to the first of the month),
/// and RFC 3339 timestamps (date part only).
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    // YYYY-MM: chrono needs a day component, so pin it to the 1st.
    if value.len() == 7 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
            return Some(date);
        }
    }

    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
