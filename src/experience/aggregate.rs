//! Employer aggregation and chronological ordering.
//!
//! Folds the flat position list into one aggregate per employer (exact
//! `company_name` match), computing the combined tenure range, then orders
//! aggregates and their positions most-recent-first.

use chrono::NaiveDate;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::DataError;
use crate::experience::record::{Position, RawPosition};

/// Sort key for "most recent first" ordering.
///
/// An ongoing position has no end date and always sorts above any dated
/// end, so the ordering is a pure function of the records rather than of
/// the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EffectiveEnd {
    /// Ended on a known date.
    Ended(NaiveDate),
    /// Still ongoing; displayed as "Present".
    Ongoing,
}

impl EffectiveEnd {
    /// Maps an optional end date to its sort key.
    #[must_use]
    pub const fn of(end: Option<NaiveDate>) -> Self {
        match end {
            Some(date) => Self::Ended(date),
            None => Self::Ongoing,
        }
    }
}

/// All positions held at one employer, with the combined date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyExperience {
    /// Employer name.
    pub company: String,

    /// Employer homepage, if any.
    pub url: Option<String>,

    /// Avatar gradient start color.
    pub gradient_start: String,

    /// Avatar gradient end color.
    pub gradient_end: String,

    /// Earliest start date across the employer's positions.
    pub start: NaiveDate,

    /// Latest end date across the employer's positions; `None` as soon as
    /// any position is ongoing.
    pub end: Option<NaiveDate>,

    /// Positions held at this employer, most recent first.
    pub positions: Vec<Position>,
}

impl CompanyExperience {
    /// Sort key for this aggregate.
    #[must_use]
    pub const fn effective_end(&self) -> EffectiveEnd {
        EffectiveEnd::of(self.end)
    }

    /// Whether this aggregate renders as the multi-role view.
    #[must_use]
    pub fn multiple_roles(&self) -> bool {
        self.positions.len() > 1
    }

    fn seed(raw: &RawPosition, position: Position) -> Self {
        Self {
            company: raw.company_name.clone(),
            url: raw.company_url.clone(),
            gradient_start: raw.gradient_start.clone(),
            gradient_end: raw.gradient_end.clone(),
            start: position.start,
            end: position.end,
            positions: vec![position],
        }
    }

    fn absorb(&mut self, position: Position) {
        self.start = self.start.min(position.start);
        // Once any position is ongoing the aggregate stays ongoing; a
        // later dated end never narrows it back.
        self.end = match (self.end, position.end) {
            (Some(current), Some(new)) => Some(current.max(new)),
            _ => None,
        };
        self.positions.push(position);
    }
}

/// Groups position records by employer and orders everything most recent
/// first.
///
/// The grouping is a single fold over the input; aggregates and their
/// position lists are then sorted descending by [`EffectiveEnd`]. Both
/// sorts are stable, so records with equal effective ends keep their
/// encounter order.
///
/// # Errors
///
/// Returns [`DataError::MalformedDate`] on the first record whose date
/// strings cannot be parsed; no partial output is produced.
pub fn aggregate(records: &[RawPosition]) -> Result<Vec<CompanyExperience>, DataError> {
    let grouped = records.iter().try_fold(
        IndexMap::<String, CompanyExperience>::new(),
        |mut acc, raw| {
            let position = Position::parse(raw)?;
            match acc.entry(raw.company_name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(CompanyExperience::seed(raw, position));
                }
                Entry::Occupied(mut slot) => slot.get_mut().absorb(position),
            }
            Ok(acc)
        },
    )?;

    let mut companies: Vec<CompanyExperience> = grouped.into_values().collect();
    for company in &mut companies {
        company
            .positions
            .sort_by(|a, b| EffectiveEnd::of(b.end).cmp(&EffectiveEnd::of(a.end)));
    }
    companies.sort_by(|a, b| b.effective_end().cmp(&a.effective_end()));

    Ok(companies)
}
