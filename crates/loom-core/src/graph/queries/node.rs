//! Node upsert queries

use neo4rs::Query;

use super::{properties_to_bolt, quote_label, Neo4jClient};
use crate::graph::model::GraphNode;
use crate::graph::neo4j::Neo4jError;
use crate::graph::store::StoreError;

impl Neo4jClient {
    /// Merge a node by label and id, adding its properties
    ///
    /// # Errors
    /// Returns an error if the label is invalid or the query fails.
    pub async fn merge_node(&self, node: &GraphNode) -> Result<(), StoreError> {
        let label = quote_label(&node.label)?;
        let query = Query::new(format!(
            r#"
            MERGE (n:{label} {{id: $id}})
            SET n += $props
            "#
        ))
        .param("id", node.id.clone())
        .param("props", properties_to_bolt(&node.properties));

        self.graph()
            .run(query)
            .await
            .map_err(Neo4jError::from)?;
        Ok(())
    }
}
