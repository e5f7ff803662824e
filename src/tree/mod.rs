// Directory tree module
//
// This module provides the tree structure mirroring a directory hierarchy,
// the manifest format the tree is built from, the scanner that generates a
// manifest from a real directory, and the controller applying the
// open/close state machine to the tree in place.

pub mod controller;
pub mod manifest;
pub mod node;
pub mod scan;
pub mod tree;

pub use controller::{StructuralIntegrityError, TreeViewController};
pub use manifest::ManifestNode;
pub use node::{NodeId, NodeKind, NodeState, TreeNode};
pub use scan::scan_directory;
pub use tree::DirTree;
