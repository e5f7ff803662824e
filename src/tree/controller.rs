use super::node::{NodeId, NodeState};
use super::tree::DirTree;
use thiserror::Error;

/// Raised when a folder's direct child is not the entry kind the
/// generation step is contracted to produce.
///
/// Not locally recoverable: the operation that raised it stops where it
/// stood, so siblings processed before the violation keep their new
/// visibility and state, and the violating child and later siblings are
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: child should be an entry, not {found}")]
pub struct StructuralIntegrityError {
    /// Which operation detected the violation
    pub operation: &'static str,
    /// The unexpected child's kind tag
    pub found: String,
}

/// Owns the tree and applies the open/close state machine to it.
///
/// The controller never creates or destroys nodes; it only mutates
/// `state` and `visible` in place. Opening and closing are strictly
/// one-level operations: direct children only, never deeper descendants.
#[derive(Debug)]
pub struct TreeViewController {
    tree: DirTree,
}

impl TreeViewController {
    /// Take ownership of a fully constructed tree and initialize the view:
    /// everything closed, only the root visible.
    pub fn attach(tree: DirTree) -> Self {
        let mut controller = Self { tree };
        controller.close_all();
        controller
    }

    pub fn tree(&self) -> &DirTree {
        &self.tree
    }

    /// Flip a folder between open and closed.
    ///
    /// Leaves carry no click affordance, so dispatch only passes folder
    /// ids; a leaf or unknown id is ignored.
    pub fn toggle(&mut self, id: NodeId) -> Result<(), StructuralIntegrityError> {
        let state = match self.tree.get_node(id) {
            Some(node) if !node.is_leaf() => node.state,
            _ => return Ok(()),
        };

        match state {
            NodeState::Closed => self.open_folder(id),
            NodeState::Open => self.close_folder(id),
        }
    }

    /// Open a folder: reveal its direct children, each forced into
    /// collapsed appearance.
    ///
    /// Grandchildren are never touched. A child that was left open (and
    /// its subtree left visible) by an earlier expansion keeps those
    /// latent flags; only the child's own state is reset here.
    pub fn open_folder(&mut self, id: NodeId) -> Result<(), StructuralIntegrityError> {
        let children = match self.tree.get_node_mut(id) {
            Some(node) => {
                node.state = NodeState::Open;
                node.children.clone()
            }
            None => return Ok(()),
        };

        for child_id in children {
            let Some(child) = self.tree.get_node_mut(child_id) else {
                continue;
            };
            if !child.kind.is_entry() {
                return Err(StructuralIntegrityError {
                    operation: "open_folder",
                    found: child.kind.tag().to_string(),
                });
            }
            child.visible = true;
            child.state = NodeState::Closed;
        }
        Ok(())
    }

    /// Close a folder: hide its direct children and force them closed.
    ///
    /// Deeper descendants keep their own flags; a hidden child hides its
    /// subtree in the rendered view regardless.
    pub fn close_folder(&mut self, id: NodeId) -> Result<(), StructuralIntegrityError> {
        let children = match self.tree.get_node_mut(id) {
            Some(node) => {
                node.state = NodeState::Closed;
                node.children.clone()
            }
            None => return Ok(()),
        };

        for child_id in children {
            let Some(child) = self.tree.get_node_mut(child_id) else {
                continue;
            };
            if !child.kind.is_entry() {
                return Err(StructuralIntegrityError {
                    operation: "close_folder",
                    found: child.kind.tag().to_string(),
                });
            }
            child.visible = false;
            child.state = NodeState::Closed;
        }
        Ok(())
    }

    /// Open every node in the tree and make it visible.
    ///
    /// Applies uniformly, root and leaves included; the state written to a
    /// leaf is inert.
    pub fn open_all(&mut self) {
        for id in self.tree.node_ids() {
            if let Some(node) = self.tree.get_node_mut(id) {
                node.state = NodeState::Open;
                node.visible = true;
            }
        }
    }

    /// Close every node and hide everything but the root, which remains
    /// visible so the user always sees the top-level entry.
    pub fn close_all(&mut self) {
        let root_id = self.tree.root_id();
        for id in self.tree.node_ids() {
            if let Some(node) = self.tree.get_node_mut(id) {
                node.state = NodeState::Closed;
                if id != root_id {
                    node.visible = false;
                }
            }
        }
    }
}
