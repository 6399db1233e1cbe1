//! Materialized path formula.
//!
//! A folder's path encodes its ancestors, not itself: root-level folders
//! sit at `/`, a child of `Work` (at `/`) sits at `/Work`, a child of
//! `Projects` (at `/Work`) sits at `/Work/Projects`.

use super::model::Folder;

/// Path of every root-level folder.
pub const ROOT_PATH: &str = "/";

/// Path for a folder whose parent is `parent`.
pub fn materialized_path(parent: Option<&Folder>) -> String {
    match parent {
        None => ROOT_PATH.to_string(),
        Some(p) => child_path(&p.path, &p.name),
    }
}

/// Path for a child of a folder named `parent_name` located at `parent_path`.
pub fn child_path(parent_path: &str, parent_name: &str) -> String {
    if parent_path == ROOT_PATH {
        format!("/{parent_name}")
    } else {
        format!("{parent_path}/{parent_name}")
    }
}
