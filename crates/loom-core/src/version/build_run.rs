//! Build run builder and git integration

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::graph::model::{BuildRun, GraphNode};
use crate::graph::{GraphBuild, Properties};

impl BuildRun {
    /// Create a new build run for a snapshot path
    #[must_use]
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source_path: source_path.into(),
            source_hash: None,
            commit_sha: None,
            branch: None,
            started_at: Utc::now(),
            node_count: 0,
            relationship_count: 0,
        }
    }

    /// Set the snapshot content hash
    #[must_use]
    pub fn with_source_hash(mut self, hash: impl Into<String>) -> Self {
        self.source_hash = Some(hash.into());
        self
    }

    /// Set the commit SHA
    #[must_use]
    pub fn with_commit(mut self, sha: impl Into<String>) -> Self {
        self.commit_sha = Some(sha.into());
        self
    }

    /// Set the branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Record the size of the finished graph
    #[must_use]
    pub fn with_counts(mut self, graph: &GraphBuild) -> Self {
        self.node_count = graph.node_count();
        self.relationship_count = graph.relationship_count();
        self
    }

    /// Try to populate git info from the repository holding the snapshot
    #[must_use]
    pub fn with_git_info(mut self) -> Self {
        let path = Path::new(&self.source_path);
        let start = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };
        if let Ok(repo) = git2::Repository::discover(start) {
            if let Ok(head) = repo.head() {
                if let Some(oid) = head.target() {
                    self.commit_sha = Some(oid.to_string());
                }
                if let Some(name) = head.shorthand() {
                    self.branch = Some(name.to_string());
                }
            }
        }
        self
    }

    /// Store form of this run
    #[must_use]
    pub fn to_node(&self) -> GraphNode {
        let mut properties = Properties::new()
            .with("sourcePath", self.source_path.as_str())
            .with("startedAt", self.started_at.to_rfc3339())
            .with("nodeCount", self.node_count as i64)
            .with("relationshipCount", self.relationship_count as i64);
        if let Some(hash) = &self.source_hash {
            properties.insert("sourceHash", hash.as_str());
        }
        if let Some(sha) = &self.commit_sha {
            properties.insert("commitSha", sha.as_str());
        }
        if let Some(branch) = &self.branch {
            properties.insert("branch", branch.as_str());
        }

        GraphNode {
            label: "BuildRun".to_string(),
            id: self.id.clone(),
            properties,
        }
    }
}
