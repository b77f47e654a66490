mod response;
pub use response::Response;

use crate::{async_trait, stmt, Error, Result};

use std::fmt::Debug;

/// The connection adapter boundary.
///
/// The core compiles statements and hands them here; it never opens or
/// closes transactions itself. Adapter failures propagate directly to the
/// awaiting caller with no retry. Timeouts and cancellation, if wanted,
/// belong to implementations of this trait.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Execute one statement with bound parameters.
    async fn execute(&self, sql: &str, params: &[stmt::Value]) -> Result<Response>;

    /// Transaction control is the caller's responsibility; adapters that
    /// support it override these.
    async fn begin_transaction(&self) -> Result<()> {
        Err(Error::driver(anyhow::anyhow!(
            "transactions not supported by this connection"
        )))
    }

    async fn commit(&self) -> Result<()> {
        Err(Error::driver(anyhow::anyhow!(
            "transactions not supported by this connection"
        )))
    }

    async fn rollback(&self) -> Result<()> {
        Err(Error::driver(anyhow::anyhow!(
            "transactions not supported by this connection"
        )))
    }
}
