use std::cell::RefCell;
use std::collections::HashSet;

use log::trace;

use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Identity of a graph node: the address of its shared `RefCell<TensorData>`.
///
/// Only used as a hash key. The handles returned by `topological_sort` keep
/// every node alive, so the address stays unique for the traversal.
pub(crate) type NodeId<T> = *const RefCell<TensorData<T>>;

/// Builds a topological ordering of every node reachable from `root` by
/// following parent edges.
///
/// The result is in post-order: each node appears after all of its parents,
/// and `root` comes last. Walking it in reverse therefore visits every node
/// after all nodes that consume it.
///
/// Traversal is an iterative depth-first search with a visited set, so nodes
/// reachable through several paths (`x * x`) are listed once and deep chains
/// do not grow the call stack.
///
/// # Errors
/// `CyclicReference` if a node is reached again while it is still on the
/// current DFS path.
pub(crate) fn topological_sort<T: NumericElement>(
    root: &Tensor<T>,
) -> Result<Vec<Tensor<T>>, MinigradError> {
    let mut visited: HashSet<NodeId<T>> = HashSet::new();
    // Nodes expanded but not yet emitted: exactly the current DFS path.
    let mut on_path: HashSet<NodeId<T>> = HashSet::new();
    let mut sorted: Vec<Tensor<T>> = Vec::new();
    // (node, parents_pushed)
    let mut stack: Vec<(Tensor<T>, bool)> = vec![(root.clone(), false)];

    while let Some((node, parents_pushed)) = stack.pop() {
        let node_id = node.node_id();

        if parents_pushed {
            on_path.remove(&node_id);
            sorted.push(node);
            continue;
        }
        if !visited.insert(node_id) {
            continue;
        }
        on_path.insert(node_id);

        let parents = node.parents();
        stack.push((node, true));
        for parent in parents.into_iter().rev() {
            let parent_id = parent.node_id();
            if on_path.contains(&parent_id) {
                return Err(MinigradError::CyclicReference);
            }
            if !visited.contains(&parent_id) {
                stack.push((parent, false));
            }
        }
    }

    trace!("topological_sort: {} node(s) reachable", sorted.len());
    Ok(sorted)
}
