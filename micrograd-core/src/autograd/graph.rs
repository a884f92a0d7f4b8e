use crate::error::MicrogradError;
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

/// Stable identity of a graph node, derived from the address of its shared state.
///
/// All clones of a [`Value`] handle map to the same `NodeId`. Ids are only meaningful while
/// the node is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn of(value: &Value) -> Self {
        NodeId(Rc::as_ptr(&value.0) as usize)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node{:x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

struct Frame {
    node: Value,
    next_operand: usize,
}

/// Topological order of every node reachable from `root`: each node appears after all of its
/// operands, and `root` is last.
///
/// Depth-first post-order over operands in operand order, visiting each node once no matter
/// how many paths lead to it. The traversal keeps its own work-stack, so graph depth is not
/// limited by the native stack.
///
/// # Errors
/// * `CycleDetected` if an operand is reached while it is still being expanded.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, MicrogradError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut sorted_list = Vec::new();
    let mut stack = vec![Frame {
        node: root.clone(),
        next_operand: 0,
    }];
    marks.insert(root.id(), Mark::InProgress);

    while let Some(frame) = stack.last_mut() {
        let operand = frame.node.read_data().operands.get(frame.next_operand).cloned();
        match operand {
            Some(operand) => {
                frame.next_operand += 1;
                match marks.get(&operand.id()) {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => {
                        return Err(MicrogradError::CycleDetected {
                            node: operand.display_name(),
                        });
                    }
                    None => {
                        marks.insert(operand.id(), Mark::InProgress);
                        stack.push(Frame {
                            node: operand,
                            next_operand: 0,
                        });
                    }
                }
            }
            None => {
                if let Some(done) = stack.pop() {
                    marks.insert(done.node.id(), Mark::Done);
                    sorted_list.push(done.node);
                }
            }
        }
    }

    Ok(sorted_list)
}

/// Every node reachable from `root`, excluding `root` itself, in topological order.
pub fn descendants(root: &Value) -> Result<Vec<Value>, MicrogradError> {
    let mut nodes = topological_sort(root)?;
    nodes.pop();
    Ok(nodes)
}

/// Maps each descendant of `root` to its current gradient.
///
/// The key is the node's label, or its position in [`descendants`] order when unlabelled.
/// Nodes sharing a label collapse into one entry (the last one visited).
pub fn grad_dict(root: &Value) -> Result<BTreeMap<String, f64>, MicrogradError> {
    Ok(descendants(root)?
        .iter()
        .enumerate()
        .map(|(i, d)| (d.label().unwrap_or_else(|| i.to_string()), d.grad()))
        .collect())
}

impl Value {
    /// See [`grad_dict`].
    pub fn grad_dict(&self) -> Result<BTreeMap<String, f64>, MicrogradError> {
        grad_dict(self)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
