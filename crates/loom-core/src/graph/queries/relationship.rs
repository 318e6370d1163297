//! Relationship upsert queries

use neo4rs::Query;

use super::{properties_to_bolt, quote_label, Neo4jClient};
use crate::graph::model::GraphEdge;
use crate::graph::neo4j::Neo4jError;
use crate::graph::store::StoreError;

impl Neo4jClient {
    /// Merge a typed relationship between two nodes matched by label and id
    ///
    /// The edge is only written when both endpoints exist.
    ///
    /// # Errors
    /// Returns an error if a label is invalid, an endpoint node is missing,
    /// or the query fails.
    pub async fn merge_relationship(&self, edge: &GraphEdge) -> Result<(), StoreError> {
        let source_label = quote_label(&edge.source_label)?;
        let target_label = quote_label(&edge.target_label)?;
        let rel_type = quote_label(&edge.label)?;

        let query = Query::new(format!(
            r#"
            OPTIONAL MATCH (a:{source_label} {{id: $source_id}})
            OPTIONAL MATCH (b:{target_label} {{id: $target_id}})
            FOREACH (_ IN CASE WHEN a IS NOT NULL AND b IS NOT NULL THEN [1] ELSE [] END |
                MERGE (a)-[r:{rel_type}]->(b)
                SET r += $props
            )
            RETURN a IS NOT NULL AS source_found, b IS NOT NULL AS target_found
            "#
        ))
        .param("source_id", edge.source_id.clone())
        .param("target_id", edge.target_id.clone())
        .param("props", properties_to_bolt(&edge.properties));

        let mut result = self
            .graph()
            .execute(query)
            .await
            .map_err(Neo4jError::from)?;
        let row = result.next().await.map_err(Neo4jError::from)?;
        let (source_found, target_found) = match row {
            Some(row) => (
                row.get("source_found").unwrap_or(false),
                row.get("target_found").unwrap_or(false),
            ),
            None => (false, false),
        };
        check_endpoints(edge, source_found, target_found)
    }
}

/// Map endpoint lookups to the same error [`MemoryStore`] reports
///
/// [`MemoryStore`]: crate::graph::MemoryStore
pub(super) fn check_endpoints(
    edge: &GraphEdge,
    source_found: bool,
    target_found: bool,
) -> Result<(), StoreError> {
    let missing = if !source_found {
        Some((&edge.source_label, &edge.source_id))
    } else if !target_found {
        Some((&edge.target_label, &edge.target_id))
    } else {
        None
    };
    match missing {
        Some((label, id)) => Err(StoreError::MissingEndpoint {
            label: label.clone(),
            id: id.clone(),
        }),
        None => Ok(()),
    }
}
