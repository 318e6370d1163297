//! Neo4j client for graph storage

use std::sync::Arc;

use neo4rs::{ConfigBuilder, Graph, Query};
use thiserror::Error;

use super::model::{GraphEdge, GraphNode};
use super::store::{GraphStore, StoreError};

/// Errors that can occur during Neo4j operations
#[derive(Debug, Error)]
pub enum Neo4jError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),
}

/// Configuration for Neo4j connection
#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

impl Neo4jConfig {
    /// Create a new Neo4j configuration
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: None,
        }
    }

    /// Set the database name
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}

/// Client for interacting with Neo4j
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Connect to Neo4j and ensure the build-run index exists
    ///
    /// # Errors
    /// Returns an error if the connection fails.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, Neo4jError> {
        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password);

        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }

        let neo_config = builder
            .build()
            .map_err(|e| Neo4jError::Connection(e.to_string()))?;
        let graph = Graph::connect(neo_config).await?;

        let client = Self {
            graph: Arc::new(graph),
        };

        client
            .graph
            .run(Query::new(
                "CREATE INDEX build_run_id IF NOT EXISTS FOR (b:BuildRun) ON (b.id)".to_string(),
            ))
            .await?;

        Ok(client)
    }

    /// Get access to the graph for query modules
    pub(super) fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl GraphStore for Neo4jClient {
    async fn upsert_node(&self, node: &GraphNode) -> Result<(), StoreError> {
        self.merge_node(node).await
    }

    async fn upsert_relationship(&self, edge: &GraphEdge) -> Result<(), StoreError> {
        self.merge_relationship(edge).await
    }

    async fn ensure_indexes(&self, labels: &[String]) -> Result<(), StoreError> {
        self.create_id_indexes(labels).await
    }
}
