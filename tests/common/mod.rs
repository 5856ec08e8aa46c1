//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;

use tenure::error::FetchError;
use tenure::experience::RawPosition;
use tenure::fetch::PositionSource;

/// In-memory [`PositionSource`] returning canned records.
pub struct FakeSource {
    pub records: Vec<RawPosition>,
}

#[async_trait]
impl PositionSource for FakeSource {
    async fn fetch_positions(&self) -> Result<Vec<RawPosition>, FetchError> {
        Ok(self.records.clone())
    }
}

/// [`PositionSource`] that always fails with an upstream status error.
pub struct FailingSource {
    pub status: u16,
}

#[async_trait]
impl PositionSource for FailingSource {
    async fn fetch_positions(&self) -> Result<Vec<RawPosition>, FetchError> {
        Err(FetchError::Status {
            status: self.status,
        })
    }
}

/// Builds a position record with sensible defaults.
pub fn position(
    id: i64,
    company: &str,
    title: &str,
    start: &str,
    end: Option<&str>,
) -> RawPosition {
    RawPosition {
        id,
        position_name: title.to_string(),
        company_name: company.to_string(),
        company_url: None,
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
        city: "Chicago".to_string(),
        state: "Illinois".to_string(),
        current: end.is_none(),
        gradient_start: "#1e3a8a".to_string(),
        gradient_end: "#3b82f6".to_string(),
        description: None,
    }
}
