use super::manifest::ManifestNode;
use std::fs;
use std::io;
use std::path::Path;

/// Build a tree manifest from a real directory.
///
/// Only directories become nodes: a directory containing just files is a
/// leaf. Children are sorted case-insensitively by name. Entries that
/// cannot be read (permission errors, broken symlinks) are skipped, and a
/// subdirectory that fails to scan is logged and dropped rather than
/// failing the whole walk.
pub fn scan_directory(path: &Path) -> io::Result<ManifestNode> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(entry.path());
        }
    }

    subdirs.sort_by_key(|p| {
        p.file_name()
            .map(|name| name.to_ascii_lowercase())
            .unwrap_or_default()
    });

    let mut children = Vec::new();
    for subdir in subdirs {
        match scan_directory(&subdir) {
            Ok(child) => children.push(child),
            Err(e) => {
                tracing::warn!("skipping unreadable directory {:?}: {}", subdir, e);
            }
        }
    }

    Ok(ManifestNode {
        name,
        kind: "entry".to_string(),
        leaf: Some(children.is_empty()),
        children,
    })
}
