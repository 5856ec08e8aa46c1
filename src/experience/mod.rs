//! Experience aggregation: position records, employer grouping, and the
//! display view model.
//!
//! The whole pipeline is a pure transform: records in, ordered view out.
//! Nothing here touches the network or the clock.

pub mod aggregate;
pub mod record;
pub mod view;

pub use aggregate::{CompanyExperience, EffectiveEnd, aggregate};
pub use record::{Position, RawPosition, parse_date};
pub use view::{CompanyView, PositionView, build_views, render_text};
