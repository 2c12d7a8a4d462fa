//! Error type for `rinkside-store-mem`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] rinkside_core::Error),

  #[error("failed to read seed file: {0}")]
  SeedRead(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
