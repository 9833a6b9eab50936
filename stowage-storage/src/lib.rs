//! Key-value storage for Stowage
//!
//! Settings are persisted as JSON values under string keys through the
//! [`KeyValueStore`] trait. Two backends are provided:
//!
//! - [`MemoryStore`] - process-local, for tests and ephemeral use
//! - [`FileStore`] - one JSON file per key in a directory
//!
//! # Quick Start
//!
//! ```no_run
//! use serde_json::json;
//! use stowage_storage::*;
//!
//! # async fn example() -> Result<()> {
//! let store = FileStore::with_path("./settings").await?;
//!
//! store.set_item("s3-bucket", json!({"bucket": "media"})).await?;
//! let stored = store.get_item("s3-bucket").await?;
//! assert_eq!(stored, Some(json!({"bucket": "media"})));
//! # Ok(())
//! # }
//! ```

mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{Result, StoreError};
pub use file::*;
pub use memory::*;
pub use store::*;
