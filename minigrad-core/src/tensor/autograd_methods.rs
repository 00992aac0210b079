use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::autograd::graph::{topological_sort, NodeId};
use crate::error::MinigradError;
use crate::ops::traits::NumericElement;
use crate::tensor::Tensor;

impl<T: NumericElement> Tensor<T> {
    /// Performs the backward pass starting from this tensor.
    ///
    /// Computes the gradient of this tensor with respect to every ancestor that
    /// requires gradients and **adds** it into their `grad` buffers.
    ///
    /// # Arguments
    /// * `seed`: Gradient of the final objective with respect to this tensor.
    ///   If `None`, it defaults to `1` for single-element tensors.
    ///
    /// # Errors
    /// * `BackwardWithoutSeed` if `seed` is `None` and the tensor has more than one element.
    /// * `ShapeMismatch` if `seed` does not have one value per element.
    /// * `CyclicReference` if the recorded graph is not acyclic.
    ///
    /// Calling `backward` on a tensor that does not require gradients is a no-op.
    /// Gradients accumulate across calls; use `zero_grad` to reset them.
    pub fn backward(&self, seed: Option<Vec<T>>) -> Result<(), MinigradError> {
        if !self.requires_grad() {
            debug!("backward() called on a tensor that does not require grad. Nothing to do.");
            return Ok(());
        }

        let numel = self.numel();
        let grad_init = match seed {
            Some(seed) => {
                if seed.len() != numel {
                    return Err(MinigradError::ShapeMismatch {
                        expected: self.shape(),
                        actual: vec![seed.len()],
                        operation: "backward seed".to_string(),
                    });
                }
                seed
            }
            None if numel == 1 => vec![T::one()],
            None => {
                return Err(MinigradError::BackwardWithoutSeed {
                    shape: self.shape(),
                })
            }
        };

        let sorted_nodes = topological_sort(self)?;
        debug!("backward(): propagating through {} node(s)", sorted_nodes.len());

        // Gradient flowing into each node during this call only.
        let mut grad_map: HashMap<NodeId<T>, Vec<T>> = HashMap::new();
        grad_map.insert(self.node_id(), grad_init);

        // Reverse topological order: every consumer of a node is handled before it,
        // so its entry is complete when we reach it.
        for node in sorted_nodes.iter().rev() {
            let Some(grad_output) = grad_map.remove(&node.node_id()) else {
                continue;
            };

            if node.requires_grad() {
                node.write_data().accumulate_grad(&grad_output)?;
            }

            let Some(grad_fn) = node.grad_fn() else {
                continue;
            };

            let input_grads = grad_fn.backward(&grad_output)?;
            let inputs = grad_fn.inputs();
            if input_grads.len() != inputs.len() {
                return Err(MinigradError::InternalError(format!(
                    "{:?} returned {} gradients for {} inputs",
                    grad_fn,
                    input_grads.len(),
                    inputs.len()
                )));
            }

            for (input, grad_to_add) in inputs.into_iter().zip(input_grads) {
                let Some(grad_to_add) = grad_to_add else {
                    continue;
                };
                if !input.requires_grad() {
                    continue;
                }
                if grad_to_add.len() != input.numel() {
                    return Err(MinigradError::ShapeMismatch {
                        expected: input.shape(),
                        actual: vec![grad_to_add.len()],
                        operation: format!("{} backward", grad_fn.kind()),
                    });
                }
                match grad_map.entry(input.node_id()) {
                    Entry::Occupied(mut existing) => {
                        for (acc, g) in existing.get_mut().iter_mut().zip(&grad_to_add) {
                            *acc += *g;
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(grad_to_add);
                    }
                }
            }
        }

        Ok(())
    }

    /// Resets the gradient buffer to zeros.
    pub fn zero_grad(&self) {
        let mut guard = self.write_data();
        guard.grad.iter_mut().for_each(|g| *g = T::zero());
    }

    /// Returns a new leaf holding a copy of this tensor's data.
    ///
    /// The result has no graph history and does not require gradients.
    pub fn detach(&self) -> Tensor<T> {
        let guard = self.read_data();
        // Shape and data come from an existing tensor, so they always agree.
        Tensor::from_parts(guard.data.clone(), guard.shape.clone())
    }
}
