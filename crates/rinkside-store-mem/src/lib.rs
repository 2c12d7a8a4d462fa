//! In-memory backend for the Rinkside roster store.
//!
//! The roster is decoded from a JSON seed, validated once, indexed by id,
//! and never written again. Reads clone out of the shared snapshot.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemRoster;
