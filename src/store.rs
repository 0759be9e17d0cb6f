//! The shelter store adapter: one connection, one collection, create/read.

use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Collection};

use crate::config::ShelterConfig;
use crate::error::{Result, ShelterError};

/// Adapter over one MongoDB collection of shelter records.
///
/// The adapter opens its connection at construction, verifies it with an
/// admin ping, and targets the configured collection for its whole lifetime.
/// `create` and `read` never fail: driver errors are absorbed into `false`
/// and an empty vector. Use [`try_create`](Self::try_create) and
/// [`try_read`](Self::try_read) when the cause matters.
///
/// Calls are sequential and awaited to completion; the adapter assumes one
/// logical caller at a time.
///
/// # Example
///
/// ```ignore
/// use shelter_store::{bson::doc, ShelterConfig, ShelterStore};
///
/// #[tokio::main]
/// async fn main() -> shelter_store::Result<()> {
///     let config = ShelterConfig::new("aacuser", "secret");
///     let store = ShelterStore::connect(config).await?;
///
///     let ok = store.create(&doc! { "animal_id": "A123", "name": "Buddy" }).await;
///     assert!(ok);
///
///     let rows = store.read(doc! { "animal_id": "A123" }).await;
///     assert_eq!(rows.len(), 1);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ShelterStore {
    client: Client,
    collection: Collection<Document>,
    config: ShelterConfig,
}

impl ShelterStore {
    /// Open a connection and bind the configured collection.
    ///
    /// Fails fast: the client is opened and an admin `ping` is run before
    /// the adapter is handed out, so a bad host or rejected credentials
    /// surface here rather than on the first operation.
    pub async fn connect(config: ShelterConfig) -> Result<Self> {
        let uri = config.connection_uri();
        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|e| ShelterError::connection("failed to open client", e))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ShelterError::connection("liveness check failed", e))?;

        tracing::info!(
            uri = %config.redacted_uri(),
            database = %config.database,
            collection = %config.collection,
            "connected to shelter store"
        );

        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Ok(Self {
            client,
            collection,
            config,
        })
    }

    /// Insert a single document.
    ///
    /// Returns `true` only when the write is acknowledged with an assigned
    /// id. An empty document, an unacknowledged write, and any driver error
    /// all yield `false`; nothing is raised past this boundary.
    pub async fn create(&self, document: &Document) -> bool {
        match self.try_create(document).await {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, collection = %self.config.collection, "create failed");
                false
            }
        }
    }

    /// Insert a single document, reporting what went wrong.
    ///
    /// Returns the id the database assigned to the new record.
    pub async fn try_create(&self, document: &Document) -> Result<Bson> {
        if document.is_empty() {
            return Err(ShelterError::invalid_document(
                "document must contain at least one field",
            ));
        }

        let result = self.collection.insert_one(document).await?;
        match result.inserted_id {
            Bson::Null => Err(ShelterError::Unacknowledged),
            id => Ok(id),
        }
    }

    /// Find documents matching a filter.
    ///
    /// `None` or an empty filter matches every document. No sort is applied;
    /// results come back in the database's natural order. Both "no matches"
    /// and any driver error yield an empty vector.
    pub async fn read(&self, filter: impl Into<Option<Document>>) -> Vec<Document> {
        match self.try_read(filter).await {
            Ok(documents) => documents,
            Err(err) => {
                tracing::warn!(error = %err, collection = %self.config.collection, "read failed");
                Vec::new()
            }
        }
    }

    /// Find documents matching a filter, reporting what went wrong.
    pub async fn try_read(&self, filter: impl Into<Option<Document>>) -> Result<Vec<Document>> {
        let filter = filter.into().unwrap_or_default();
        let cursor = self.collection.find(filter).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    /// Re-run the liveness check against the admin database.
    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ShelterError::connection("ping failed", e))?;
        Ok(())
    }

    /// The database this adapter targets.
    pub fn database_name(&self) -> &str {
        &self.config.database
    }

    /// The collection this adapter targets.
    pub fn collection_name(&self) -> &str {
        &self.config.collection
    }

    /// The full namespace (db.collection).
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.config.database, self.config.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectOptions;

    fn unreachable_config() -> ShelterConfig {
        // Port 1 refuses connections; the short selection timeout keeps the
        // failure fast.
        ShelterConfig::builder()
            .username("aacuser")
            .password("secret")
            .host("127.0.0.1")
            .port(1)
            .options(
                ConnectOptions::builder()
                    .server_selection_timeout_ms(500)
                    .connect_timeout_ms(500)
                    .build(),
            )
            .build()
    }

    #[tokio::test]
    async fn test_connect_unreachable_host_fails() {
        let err = ShelterStore::connect(unreachable_config()).await.unwrap_err();
        assert!(err.is_connection_error());
    }

    #[tokio::test]
    async fn test_connect_failure_reports_cause() {
        use std::error::Error as _;

        let err = ShelterStore::connect(unreachable_config()).await.unwrap_err();
        assert!(err.source().is_some());
    }
}
