use super::manifest::ManifestNode;
use super::node::{NodeId, NodeKind, TreeNode};
use std::collections::HashMap;

/// Directory tree, fully built before the controller attaches.
///
/// All nodes live in an arena indexed by `NodeId`. The tree is constructed
/// once from a manifest; after that only `state` and `visible` are ever
/// mutated, and nodes are never created or destroyed.
#[derive(Debug)]
pub struct DirTree {
    /// All nodes indexed by ID
    nodes: HashMap<NodeId, TreeNode>,
    /// Root node ID
    root_id: NodeId,
    /// Next node ID to assign during construction
    next_id: usize,
}

impl DirTree {
    /// Build a tree from a generated manifest.
    ///
    /// The root always receives `NodeId(0)`, the one stable well-known id.
    pub fn from_manifest(manifest: &ManifestNode) -> Self {
        let mut tree = Self {
            nodes: HashMap::new(),
            root_id: NodeId(0),
            next_id: 0,
        };
        tree.root_id = tree.add_subtree(manifest, None);
        tree
    }

    fn add_subtree(&mut self, manifest: &ManifestNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;

        let node = TreeNode::new(
            id,
            manifest.name.clone(),
            NodeKind::from_tag(&manifest.kind),
            manifest.is_leaf(),
            parent,
        );
        self.nodes.insert(id, node);

        let child_ids: Vec<NodeId> = manifest
            .children
            .iter()
            .map(|child| self.add_subtree(child, Some(id)))
            .collect();

        if let Some(node) = self.nodes.get_mut(&id) {
            node.children = child_ids;
        }

        id
    }

    /// Get the root node ID
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Get a node by ID
    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node by ID
    pub(crate) fn get_node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(&id)
    }

    /// All node IDs, in no particular order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the depth of a node (root is 0)
    pub fn get_depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get_node(id).and_then(|n| n.parent);
        while let Some(parent_id) = current {
            depth += 1;
            current = self.get_node(parent_id).and_then(|n| n.parent);
        }
        depth
    }

    /// Flatten the tree into rendered rows.
    ///
    /// A node is rendered iff its own `visible` flag and every ancestor's
    /// flag are set; a hidden node hides its whole subtree, whatever the
    /// descendants' own flags say. The renderer never consults `state`.
    ///
    /// Returns (NodeId, depth) pairs in pre-order.
    pub fn rendered_rows(&self) -> Vec<(NodeId, usize)> {
        let mut rows = Vec::new();
        self.collect_rendered(self.root_id, 0, &mut rows);
        rows
    }

    fn collect_rendered(&self, id: NodeId, depth: usize, rows: &mut Vec<(NodeId, usize)>) {
        let Some(node) = self.get_node(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        rows.push((id, depth));
        for &child_id in &node.children {
            self.collect_rendered(child_id, depth + 1, rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> ManifestNode {
        // root
        // ├── a/
        // │   ├── b   (leaf)
        // │   └── c/
        // │       └── d   (leaf)
        // └── e   (leaf)
        ManifestNode::folder(
            "root",
            vec![
                ManifestNode::folder(
                    "a",
                    vec![
                        ManifestNode::entry("b"),
                        ManifestNode::folder("c", vec![ManifestNode::entry("d")]),
                    ],
                ),
                ManifestNode::entry("e"),
            ],
        )
    }

    #[test]
    fn test_from_manifest() {
        let tree = DirTree::from_manifest(&sample_manifest());

        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.root_id(), NodeId(0));

        let root = tree.get_node(tree.root_id()).unwrap();
        assert_eq!(root.label, "root");
        assert_eq!(root.parent, None);
        assert_eq!(root.children.len(), 2);
        assert!(!root.is_leaf());

        let a = tree.get_node(root.children[0]).unwrap();
        assert_eq!(a.label, "a");
        assert_eq!(a.parent, Some(tree.root_id()));
        assert_eq!(a.children.len(), 2);

        let e = tree.get_node(root.children[1]).unwrap();
        assert_eq!(e.label, "e");
        assert!(e.is_leaf());
    }

    #[test]
    fn test_get_depth() {
        let tree = DirTree::from_manifest(&sample_manifest());

        let root = tree.get_node(tree.root_id()).unwrap();
        let a_id = root.children[0];
        let c_id = tree.get_node(a_id).unwrap().children[1];
        let d_id = tree.get_node(c_id).unwrap().children[0];

        assert_eq!(tree.get_depth(tree.root_id()), 0);
        assert_eq!(tree.get_depth(a_id), 1);
        assert_eq!(tree.get_depth(c_id), 2);
        assert_eq!(tree.get_depth(d_id), 3);
    }

    #[test]
    fn test_rendered_rows_initially_all_visible() {
        // Nodes are constructed visible; the controller's attach is what
        // establishes the fully-closed initial view.
        let tree = DirTree::from_manifest(&sample_manifest());

        let rows = tree.rendered_rows();
        assert_eq!(rows.len(), 6);
        // Pre-order with depths
        let labels: Vec<(String, usize)> = rows
            .iter()
            .map(|&(id, depth)| (tree.get_node(id).unwrap().label.clone(), depth))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("root".to_string(), 0),
                ("a".to_string(), 1),
                ("b".to_string(), 2),
                ("c".to_string(), 2),
                ("d".to_string(), 3),
                ("e".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_hidden_node_hides_subtree() {
        let mut tree = DirTree::from_manifest(&sample_manifest());

        let a_id = tree.get_node(tree.root_id()).unwrap().children[0];
        tree.get_node_mut(a_id).unwrap().visible = false;

        let rows = tree.rendered_rows();
        let labels: Vec<&str> = rows
            .iter()
            .map(|&(id, _)| tree.get_node(id).unwrap().label.as_str())
            .collect();
        // b, c and d disappear with a, even though their own flags are set
        assert_eq!(labels, vec!["root", "e"]);
    }
}
