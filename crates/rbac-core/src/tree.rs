// ============================================================================
// RBAC Core - Menu Tree Builder
// File: crates/rbac-core/src/tree.rs
// ============================================================================
//! Turns a flat menu list into a forest of nested menus.
//!
//! Children are looked up through a parent id index built once per call, so
//! a build is linear in the list size. Sibling order always follows the order
//! of the input list. Records whose parent is neither `root_parent_id` nor the
//! id of a reachable record are left out of the result.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::SysMenu;

/// Positions of each parent's children in the flat list, in list order.
struct ChildIndex {
    by_parent: HashMap<i64, Vec<usize>>,
}

impl ChildIndex {
    fn new(flat: &[SysMenu]) -> Self {
        let mut by_parent: HashMap<i64, Vec<usize>> = HashMap::new();
        for (pos, menu) in flat.iter().enumerate() {
            by_parent.entry(menu.parent_id).or_default().push(pos);
        }
        Self { by_parent }
    }

    fn children_of(&self, parent_id: i64) -> &[usize] {
        self.by_parent
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Builds the forest rooted at `root_parent_id` (normally `ROOT_MENU_ID`).
///
/// The input is left untouched; every returned node is a copy whose
/// `children` hold its direct children, recursively.
///
/// A record already present on the path from its root is not attached a
/// second time, so a self-parented record such as `{menu_id: 0, parent_id: 0}`
/// comes out as a leaf instead of recursing without end.
pub fn build_forest(flat: &[SysMenu], root_parent_id: i64) -> Vec<SysMenu> {
    let index = ChildIndex::new(flat);
    let mut path = Vec::new();

    let forest: Vec<SysMenu> = index
        .children_of(root_parent_id)
        .iter()
        .map(|&pos| attach(flat, &index, pos, &mut path))
        .collect();

    debug!(
        "Built menu forest: {} roots from {} records (parent {})",
        forest.len(),
        flat.len(),
        root_parent_id
    );
    forest
}

fn attach(flat: &[SysMenu], index: &ChildIndex, pos: usize, path: &mut Vec<i64>) -> SysMenu {
    let mut node = flat[pos].clone();
    path.push(node.menu_id);

    let mut children = Vec::new();
    for &child_pos in index.children_of(node.menu_id) {
        let child_id = flat[child_pos].menu_id;
        if path.contains(&child_id) {
            warn!(
                "Menu {} is its own ancestor via parent {}; not attaching again",
                child_id, node.menu_id
            );
            continue;
        }
        children.push(attach(flat, index, child_pos, path));
    }

    path.pop();
    node.children = children;
    node
}
