use serde::{Deserialize, Serialize};

/// One node of a generated tree manifest.
///
/// The tree-generation step (the built-in directory scan, or an external
/// tool) emits this nested shape; the viewer instantiates a `DirTree` from
/// it once, before the controller attaches. The `kind` tag is preserved
/// verbatim: validation happens in the controller when a folder is opened
/// or closed, not at load time, so a malformed manifest is representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestNode {
    pub name: String,

    #[serde(default = "default_kind")]
    pub kind: String,

    /// Fixed at generation time. When absent, a node without children is
    /// a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ManifestNode>,
}

fn default_kind() -> String {
    "entry".to_string()
}

impl ManifestNode {
    /// Create an entry node with no children
    pub fn entry(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_kind(),
            leaf: None,
            children: Vec::new(),
        }
    }

    /// Create an entry node with the given children
    pub fn folder(name: impl Into<String>, children: Vec<ManifestNode>) -> Self {
        Self {
            name: name.into(),
            kind: default_kind(),
            leaf: None,
            children,
        }
    }

    /// Whether this node is a leaf: explicit flag if present, otherwise
    /// inferred from an empty child list
    pub fn is_leaf(&self) -> bool {
        self.leaf.unwrap_or_else(|| self.children.is_empty())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
