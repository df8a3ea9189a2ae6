//! Forest assembly for self-referencing records.
//!
//! # Responsibility
//! - Turn a flat `(id, parent_id)` list into ordered trees.
//!
//! # Invariants
//! - Every input record appears exactly once in the output forest.
//! - Unresolved parents, self-parents and parent cycles yield roots.
//! - Duplicate ids resolve to their first occurrence; later duplicates are
//!   roots.
//! - Sibling order follows input order.
//! - Build, walk and drop never recurse per tree level.

use crate::model::Principle;
use std::collections::HashMap;

/// A record that names its own parent.
pub trait ParentLinked {
    fn node_id(&self) -> &str;
    fn parent_node_id(&self) -> Option<&str>;
}

impl ParentLinked for Principle {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn parent_node_id(&self) -> Option<&str> {
        self.parent()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<'a, T> {
    pub record: &'a T,
    pub depth: usize,
    pub children: Vec<TreeNode<'a, T>>,
}

impl<T> TreeNode<'_, T> {
    /// Nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        walk(std::slice::from_ref(self)).len()
    }
}

// Deep chains would otherwise drop one stack frame per level.
impl<T> Drop for TreeNode<'_, T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

pub type PrincipleNode<'a> = TreeNode<'a, Principle>;

/// Builds the forest for `records`.
pub fn build_hierarchy<T: ParentLinked>(records: &[T]) -> Vec<TreeNode<'_, T>> {
    let mut first_index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        first_index.entry(record.node_id()).or_insert(index);
    }

    let parents: Vec<Option<usize>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if first_index.get(record.node_id()) != Some(&index) {
                return None;
            }
            record
                .parent_node_id()
                .and_then(|parent| first_index.get(parent).copied())
        })
        .collect();
    let on_cycle = cycle_members(&parents);

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(_) if on_cycle[index] => {
                log::warn!(
                    "event=hierarchy_cycle module=hierarchy status=detached id={}",
                    records[index].node_id()
                );
                roots.push(index);
            }
            Some(parent) => children[*parent].push(index),
            None => roots.push(index),
        }
    }

    assemble(records, &roots, &children)
}

/// Marks every index that lies on a parent cycle. Each index is visited once.
fn cycle_members(parents: &[Option<usize>]) -> Vec<bool> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let mut marks = vec![Mark::Unseen; parents.len()];
    let mut on_cycle = vec![false; parents.len()];
    let mut path = Vec::new();
    for start in 0..parents.len() {
        let mut cursor = Some(start);
        while let Some(current) = cursor {
            match marks[current] {
                Mark::Done => break,
                Mark::OnPath => {
                    if let Some(position) = path.iter().position(|&index| index == current) {
                        for &member in &path[position..] {
                            on_cycle[member] = true;
                        }
                    }
                    break;
                }
                Mark::Unseen => {
                    marks[current] = Mark::OnPath;
                    path.push(current);
                    cursor = parents[current];
                }
            }
        }
        for index in path.drain(..) {
            marks[index] = Mark::Done;
        }
    }
    on_cycle
}

/// Builds nested nodes bottom-up so depth never costs stack.
fn assemble<'a, T>(
    records: &'a [T],
    roots: &[usize],
    children: &[Vec<usize>],
) -> Vec<TreeNode<'a, T>> {
    let mut preorder: Vec<(usize, usize)> = Vec::with_capacity(records.len());
    let mut stack: Vec<(usize, usize)> = roots.iter().rev().map(|&root| (root, 0)).collect();
    while let Some((index, depth)) = stack.pop() {
        preorder.push((index, depth));
        stack.extend(children[index].iter().rev().map(|&child| (child, depth + 1)));
    }

    let mut built: Vec<Option<TreeNode<'a, T>>> = (0..records.len()).map(|_| None).collect();
    for &(index, depth) in preorder.iter().rev() {
        let node = TreeNode {
            record: &records[index],
            depth,
            children: children[index]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect(),
        };
        built[index] = Some(node);
    }
    roots
        .iter()
        .filter_map(|&root| built[root].take())
        .collect()
}

/// Flattens a forest depth-first, parents before children.
pub fn walk<'t, 'a, T>(forest: &'t [TreeNode<'a, T>]) -> Vec<&'t TreeNode<'a, T>> {
    let mut ordered = Vec::new();
    let mut stack: Vec<&TreeNode<'a, T>> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        ordered.push(node);
        stack.extend(node.children.iter().rev());
    }
    ordered
}
