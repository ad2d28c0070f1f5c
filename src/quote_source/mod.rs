use crate::quote::QuoteSnapshot;
use crate::quote_source::error::AcquisitionError;

pub mod error;
pub mod fixture;
pub use fixture::FixtureQuoteSource;

#[cfg(test)]
use mockall::automock;

/// Provider of quote snapshots for the dashboard.
///
/// The refresh scheduler keeps at most one `acquire` call outstanding per view.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Symbol this source reports on, used for loading messages.
    fn symbol(&self) -> &str;

    /// Acquire a fresh snapshot.
    async fn acquire(&self) -> Result<QuoteSnapshot, AcquisitionError>;
}
