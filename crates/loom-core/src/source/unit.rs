//! Source units: arenas of syntax nodes with parent links

use serde::{Deserialize, Serialize};

use super::SourceError;

/// Position of a unit in its snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

/// Arena index of a syntax node within its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

/// Reference identity of one syntax node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SyntaxRef {
    pub unit: UnitId,
    pub node: NodeIndex,
}

impl SyntaxRef {
    #[must_use]
    pub const fn new(unit: u32, node: u32) -> Self {
        Self {
            unit: UnitId(unit),
            node: NodeIndex(node),
        }
    }
}

impl std::fmt::Display for SyntaxRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.unit.0, self.node.0)
    }
}

/// Begin position of a node (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One node of a parsed source tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Concrete syntax category, e.g. `MethodDeclaration`
    pub kind: String,
    #[serde(default)]
    pub begin: Option<Position>,
    /// Literal source text covered by the node
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub parent: Option<NodeIndex>,
    /// Whether the resolver can map this node to a declaration
    #[serde(default)]
    pub resolvable: bool,
}

impl SyntaxNode {
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            begin: None,
            text: text.into(),
            parent: None,
            resolvable: false,
        }
    }

    #[must_use]
    pub const fn with_parent(mut self, parent: NodeIndex) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub const fn at(mut self, line: u32, column: u32) -> Self {
        self.begin = Some(Position { line, column });
        self
    }

    #[must_use]
    pub const fn resolvable(mut self) -> Self {
        self.resolvable = true;
        self
    }
}

/// A parsed source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Originating file name
    #[serde(default)]
    pub file_name: Option<String>,
    /// Declared namespace or package
    #[serde(default)]
    pub package: Option<String>,
    /// sha-256 of the content this unit was read from
    #[serde(default)]
    pub content_hash: Option<String>,
    /// Errors reported by the parser; any entry makes the unit malformed
    #[serde(default)]
    pub parse_errors: Vec<String>,
    #[serde(default)]
    nodes: Vec<SyntaxNode>,
}

impl SourceUnit {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Append a node, returning its index
    pub fn add_node(&mut self, node: SyntaxNode) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        index
    }

    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&SyntaxNode> {
        self.nodes.get(index.0 as usize)
    }

    /// All nodes with their indices, in arena order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &SyntaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIndex(i as u32), n))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name used in diagnostics
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<unnamed>")
    }

    /// Check the unit forms a single well-formed tree
    ///
    /// # Errors
    /// Returns [`SourceError::Malformed`] on parse errors, an empty arena, a
    /// dangling parent index, a parent cycle, or a root count other than one.
    pub fn validate(&self) -> Result<(), SourceError> {
        let malformed = |reason: String| SourceError::Malformed {
            unit: self.display_name().to_string(),
            reason,
        };

        if let Some(first) = self.parse_errors.first() {
            return Err(malformed(format!(
                "{} parse error(s), first: {first}",
                self.parse_errors.len()
            )));
        }
        if self.nodes.is_empty() {
            return Err(malformed("no syntax nodes".to_string()));
        }

        let len = self.nodes.len();
        let mut roots = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            match node.parent {
                None => roots += 1,
                Some(p) if p.0 as usize >= len => {
                    return Err(malformed(format!(
                        "node {i} has parent {} outside the unit",
                        p.0
                    )));
                }
                Some(_) => {}
            }
        }
        if roots != 1 {
            return Err(malformed(format!("expected one root node, found {roots}")));
        }

        // Each node is walked once; chains stop at the first node already
        // known to reach the root
        let mut state = vec![Walk::Unseen; len];
        let mut path = Vec::new();
        for start in 0..len {
            let mut current = Some(start);
            while let Some(i) = current {
                match state[i] {
                    Walk::Reaches => break,
                    Walk::OnPath => {
                        return Err(malformed(format!("parent chain of node {start} is cyclic")));
                    }
                    Walk::Unseen => {
                        state[i] = Walk::OnPath;
                        path.push(i);
                        current = self.nodes[i].parent.map(|p| p.0 as usize);
                    }
                }
            }
            for i in path.drain(..) {
                state[i] = Walk::Reaches;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Unseen,
    OnPath,
    Reaches,
}
