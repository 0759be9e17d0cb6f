//! # shelter-store
//!
//! Document-store adapter for animal shelter records.
//!
//! This crate wraps the MongoDB driver behind a two-operation surface:
//! insert a record into one configured collection, and query records back
//! out of it. Per-call driver failures are converted to sentinel return
//! values (`false` / empty vector) so calling scripts never have to handle
//! database errors; a `try_*` variant of each operation exposes the real
//! error when callers want it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shelter_store::{bson::doc, ShelterConfig, ShelterStore};
//!
//! #[tokio::main]
//! async fn main() -> shelter_store::Result<()> {
//!     // Connects and pings; fails fast on a bad host or credentials.
//!     let config = ShelterConfig::new("aacuser", "secret");
//!     let store = ShelterStore::connect(config).await?;
//!
//!     // Insert a record
//!     let ok = store.create(&doc! { "animal_id": "A123", "name": "Buddy" }).await;
//!     assert!(ok);
//!
//!     // Query records; an empty filter matches everything
//!     let rows = store.read(doc! { "animal_id": "A123" }).await;
//!     println!("found {} records", rows.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod store;

// Re-export main types
pub use config::{ConnectOptions, ConnectOptionsBuilder, ShelterConfig, ShelterConfigBuilder};
pub use error::{ErrorKind, Result, ShelterError};
pub use store::ShelterStore;

// Re-export bson for convenience
pub use bson;
pub use bson::doc;

/// Prelude module for common imports.
pub mod prelude {
    pub use super::config::{ConnectOptions, ShelterConfig};
    pub use super::error::{ErrorKind, Result, ShelterError};
    pub use super::store::ShelterStore;
    pub use bson::{doc, Bson, Document};
}

/// Get the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.1.0");
    }

    #[test]
    fn test_doc_macro() {
        let document = doc! {
            "animal_id": "A123",
            "name": "Buddy",
            "age": 3,
        };
        assert_eq!(document.get_str("animal_id").unwrap(), "A123");
        assert_eq!(document.get_str("name").unwrap(), "Buddy");
        assert_eq!(document.get_i32("age").unwrap(), 3);
    }

    #[test]
    fn test_prelude_imports() {
        // This test verifies that the prelude exports are correct
        use crate::prelude::*;

        let _: Result<()> = Ok(());
        let _doc = doc! { "animal_id": "A123" };
        let _config = ShelterConfig::default();
    }
}
