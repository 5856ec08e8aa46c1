//! `tenure` - work-history timeline core for a personal site.
//!
//! Fetches position records from a read-only content API, aggregates
//! them into per-employer experience entries with combined date ranges,
//! and produces a chronologically ordered view model for rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod experience;
pub mod fetch;
pub mod observability;
pub mod serve;
