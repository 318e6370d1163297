//! Index maintenance queries

use neo4rs::Query;

use super::{quote_label, Neo4jClient};
use crate::graph::neo4j::Neo4jError;
use crate::graph::store::StoreError;

impl Neo4jClient {
    /// Create an `id` index for every label, if missing
    ///
    /// # Errors
    /// Returns the first failure; earlier labels stay indexed.
    pub async fn create_id_indexes(&self, labels: &[String]) -> Result<(), StoreError> {
        for label in labels {
            let quoted = quote_label(label)?;
            let query = Query::new(format!(
                "CREATE INDEX IF NOT EXISTS FOR (n:{quoted}) ON (n.id)"
            ));
            self.graph()
                .run(query)
                .await
                .map_err(Neo4jError::from)?;
            tracing::debug!("Ensured id index on label {}", label);
        }
        Ok(())
    }
}
