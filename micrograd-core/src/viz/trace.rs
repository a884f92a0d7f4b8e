use crate::autograd::graph::{topological_sort, NodeId};
use crate::error::MicrogradError;
use crate::ops::Op;
use crate::value::Value;
use std::collections::HashSet;

/// Snapshot of one node for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub label: Option<String>,
    pub value: f64,
    pub grad: f64,
    pub op: Op,
}

/// Nodes reachable from a root and the edges between them.
///
/// Edges point from operand (child) to the node it feeds (parent). A node that uses the same
/// operand twice (`a * a`) yields one edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphTrace {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl GraphTrace {
    pub fn node(&self, id: NodeId) -> Option<&NodeView> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Collects every node reachable from `root` (in topological order) and every
/// child → parent edge among them.
pub fn trace(root: &Value) -> Result<GraphTrace, MicrogradError> {
    let sorted_nodes = topological_sort(root)?;
    let mut graph = GraphTrace::default();
    let mut seen_edges = HashSet::new();

    for node in &sorted_nodes {
        let data = node.read_data();
        let id = node.id();
        graph.nodes.push(NodeView {
            id,
            label: data.label.clone(),
            value: data.value,
            grad: data.grad,
            op: data.op,
        });
        for operand in &data.operands {
            let edge = (operand.id(), id);
            if seen_edges.insert(edge) {
                graph.edges.push(edge);
            }
        }
    }
    Ok(graph)
}
