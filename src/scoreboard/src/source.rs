use crate::BoardResult;
use crate::models::{Fixture, MatchDetail};
use async_trait::async_trait;

/// Read side of the gateway as the board consumes it.
#[async_trait]
pub trait BoardDataSource: Send + Sync {
    async fn rounds(&self, current_only: bool) -> BoardResult<Vec<String>>;

    async fn fixtures(&self, round: &str) -> BoardResult<Vec<Fixture>>;

    async fn match_detail(&self, fixture_id: u64) -> BoardResult<MatchDetail>;

    /// Raw bytes of a badge image, fetched through the image relay.
    async fn image(&self, url: &str) -> BoardResult<Vec<u8>>;
}
