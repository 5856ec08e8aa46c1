//! Display view model layered over the aggregates.
//!
//! Formatting matches the original site: `Jan 2022`-style month-year
//! dates, `Present` for ongoing ranges, `City, ST` locations, and a
//! `Multiple Roles` label when an employer has more than one position.

use chrono::NaiveDate;
use serde::Serialize;

use crate::experience::aggregate::CompanyExperience;
use crate::experience::record::Position;

/// US state and territory names to postal abbreviations.
///
/// Explicit lookup table; regions not listed here pass through unchanged
/// (foreign locations, already-abbreviated input).
const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Abbreviates a full US state name; unknown regions pass through.
#[must_use]
pub fn abbreviate_state(state: &str) -> &str {
    STATE_ABBREVIATIONS
        .iter()
        .find(|&&(name, _)| name == state)
        .map_or(state, |&(_, abbr)| abbr)
}

/// Formats a date as `Jan 2022`.
#[must_use]
pub fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Formats a date range, with `Present` when the end is open.
#[must_use]
pub fn date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) => format!("{} - {}", month_year(start), month_year(end)),
        None => format!("{} - Present", month_year(start)),
    }
}

/// Formats a `City, ST` location string.
#[must_use]
pub fn location(city: &str, state: &str) -> String {
    format!("{city}, {}", abbreviate_state(state))
}

/// Lowercase dash-separated identifier for a company name.
#[must_use]
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// One position, ready for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PositionView {
    /// Upstream row id, usable as a stable list key.
    pub id: i64,
    /// Job title held.
    pub title: String,
    /// Whether this is the current position.
    pub current: bool,
    /// Formatted date range.
    pub date_range: String,
    /// Free-text description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One employer entry, ready for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanyView {
    /// Employer name.
    pub company: String,
    /// Employer homepage, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Element id derived from the company name.
    pub slug: String,
    /// Avatar gradient start color.
    pub gradient_start: String,
    /// Avatar gradient end color.
    pub gradient_end: String,
    /// Formatted combined date range.
    pub date_range: String,
    /// Formatted location of the most recent position.
    pub location: String,
    /// Whether to render the multi-role view.
    pub multiple_roles: bool,
    /// Positions at this employer, most recent first.
    pub positions: Vec<PositionView>,
}

fn position_view(position: &Position) -> PositionView {
    PositionView {
        id: position.id,
        title: position.title.clone(),
        current: position.current,
        date_range: date_range(position.start, position.end),
        description: position.description.clone(),
    }
}

/// Builds the display view model from ordered aggregates.
///
/// The location shown for an employer comes from its most recent
/// position, as the original rendered it.
#[must_use]
pub fn build_views(companies: &[CompanyExperience]) -> Vec<CompanyView> {
    companies
        .iter()
        .map(|company| CompanyView {
            company: company.company.clone(),
            url: company.url.clone(),
            slug: slug(&company.company),
            gradient_start: company.gradient_start.clone(),
            gradient_end: company.gradient_end.clone(),
            date_range: date_range(company.start, company.end),
            location: company
                .positions
                .first()
                .map(|p| location(&p.city, &p.state))
                .unwrap_or_default(),
            multiple_roles: company.multiple_roles(),
            positions: company.positions.iter().map(position_view).collect(),
        })
        .collect()
}

/// Renders the timeline as plain text, one employer per block.
#[must_use]
pub fn render_text(views: &[CompanyView]) -> String {
    let mut out = String::new();

    for view in views {
        if view.multiple_roles {
            out.push_str(&format!(
                "{} (Multiple Roles)  {}  {}\n",
                view.company, view.date_range, view.location
            ));
            for position in &view.positions {
                let marker = if position.current { " (Current)" } else { "" };
                out.push_str(&format!(
                    "  - {}{}  {}\n",
                    position.title, marker, position.date_range
                ));
                if let Some(description) = &position.description {
                    out.push_str(&format!("      {description}\n"));
                }
            }
        } else if let Some(position) = view.positions.first() {
            let marker = if position.current { " (Current)" } else { "" };
            out.push_str(&format!(
                "{}{}  {}  {}  {}\n",
                position.title, marker, view.company, view.date_range, view.location
            ));
            if let Some(description) = &position.description {
                out.push_str(&format!("      {description}\n"));
            }
        }
        out.push('\n');
    }

    out
}
