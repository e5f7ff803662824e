use std::fmt;

/// Unique identifier for a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Structural kind tag of a node, carried verbatim from the manifest.
///
/// The generation step is contracted to produce only `Entry` children
/// under a folder; the controller re-checks this on every open/close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A regular list entry, the only kind a folder may contain
    Entry,
    /// Any other tag found in the manifest
    Other(String),
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "entry" {
            NodeKind::Entry
        } else {
            NodeKind::Other(tag.to_string())
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, NodeKind::Entry)
    }

    /// The manifest tag this kind was built from
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Entry => "entry",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Open/closed state of a node's direct children in the rendered view.
///
/// Meaningful only for folders; bulk operations write it uniformly, so a
/// leaf carries the attribute too, inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Open,
    Closed,
}

/// Represents a node in the directory tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Unique identifier
    pub id: NodeId,
    /// Display text (the directory name)
    pub label: String,
    /// Structural kind from the manifest
    pub kind: NodeKind,
    /// Fixed at construction; leaves never toggle
    pub leaf: bool,
    /// Current open/closed state
    pub state: NodeState,
    /// The node's own display flag. A node is rendered iff this and every
    /// ancestor's flag are set.
    pub visible: bool,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs, in manifest order
    pub children: Vec<NodeId>,
}

impl TreeNode {
    /// Create a new tree node, closed and visible
    pub fn new(
        id: NodeId,
        label: String,
        kind: NodeKind,
        leaf: bool,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id,
            label,
            kind,
            leaf,
            state: NodeState::Closed,
            visible: true,
            parent,
            children: Vec::new(),
        }
    }

    /// Check if this node is a leaf (a directory with no subdirectories)
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Check if this node is open
    pub fn is_open(&self) -> bool {
        self.state == NodeState::Open
    }

    /// Check if this node is closed
    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }
}
