use crate::game::GameRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Supplies the full season of box-score rows.
///
/// Loading is the only asynchronous step; callers await it once and then run
/// every aggregation over the returned snapshot.
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn load(&self) -> Result<Vec<GameRecord>>;
    fn name(&self) -> &str;
}
