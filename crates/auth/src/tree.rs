//! Flat parent-linked menu records → ordered menu forest.
//!
//! The builder indexes the records by parent once and then assembles the
//! forest in a single top-down pass. Sibling order is the order of the input
//! records; nothing is re-sorted.

use std::collections::HashMap;

use menugate_core::{DomainError, DomainResult, MenuId};

use crate::MenuNode;

/// Adjacency index over a borrowed set of menu records.
///
/// The records are expected to be already scoped (the store applies the
/// allowed-id filter); the builder never re-checks membership.
#[derive(Debug)]
pub struct MenuTreeBuilder<'a> {
    nodes: &'a [MenuNode],
    top_level: Vec<usize>,
    by_parent: HashMap<&'a MenuId, Vec<usize>>,
}

impl<'a> MenuTreeBuilder<'a> {
    pub fn new(nodes: &'a [MenuNode]) -> Self {
        let mut top_level = Vec::new();
        let mut by_parent: HashMap<&'a MenuId, Vec<usize>> = HashMap::new();

        for (pos, node) in nodes.iter().enumerate() {
            match &node.parent_id {
                None => top_level.push(pos),
                Some(parent) => by_parent.entry(parent).or_default().push(pos),
            }
        }

        Self {
            nodes,
            top_level,
            by_parent,
        }
    }

    /// Assemble the subtree hanging under `parent` (`None` = top level).
    ///
    /// A parent with no matching records yields an empty forest. A node that
    /// reappears on its own ancestor path fails with
    /// [`DomainError::MalformedHierarchy`].
    pub fn build(&self, parent: Option<&MenuId>) -> DomainResult<Vec<MenuNode>> {
        let mut path: Vec<&MenuId> = Vec::new();
        if let Some(parent) = parent {
            path.push(parent);
        }
        self.assemble(self.children_of(parent), &mut path)
    }

    fn children_of(&self, parent: Option<&MenuId>) -> &[usize] {
        match parent {
            None => self.top_level.as_slice(),
            Some(id) => self.by_parent.get(id).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    fn assemble<'p>(&'p self, positions: &[usize], path: &mut Vec<&'p MenuId>) -> DomainResult<Vec<MenuNode>> {
        let mut level = Vec::with_capacity(positions.len());

        for &pos in positions {
            let node = &self.nodes[pos];
            if path.contains(&&node.id) {
                return Err(DomainError::malformed_hierarchy(node.id.clone()));
            }

            path.push(&node.id);
            let children = self.assemble(self.children_of(Some(&node.id)), path)?;
            path.pop();

            level.push(node.assembled(children));
        }

        Ok(level)
    }
}

/// Build the menu forest under `parent` from flat records.
pub fn build_tree(nodes: &[MenuNode], parent: Option<&MenuId>) -> DomainResult<Vec<MenuNode>> {
    MenuTreeBuilder::new(nodes).build(parent)
}
