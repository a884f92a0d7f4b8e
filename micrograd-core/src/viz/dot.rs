use crate::error::MicrogradError;
use crate::viz::trace::GraphTrace;
use std::fmt::Write;
use std::str::FromStr;

/// Graphviz `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    LeftRight,
    TopBottom,
}

impl RankDir {
    fn as_str(&self) -> &'static str {
        match self {
            RankDir::LeftRight => "LR",
            RankDir::TopBottom => "TB",
        }
    }
}

impl FromStr for RankDir {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LR" => Ok(RankDir::LeftRight),
            "TB" => Ok(RankDir::TopBottom),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported rankdir: {}",
                s
            ))),
        }
    }
}

/// Renders a traced graph as Graphviz DOT.
///
/// Each value becomes a `record` node `{ label | data x | grad y }`. A value produced by an
/// operation also gets a small node named after the operation, wired op → value, and its
/// operands point at that op node instead of at the value directly.
pub fn to_dot(graph: &GraphTrace, rankdir: RankDir) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph {{");
    let _ = writeln!(out, "  rankdir={};", rankdir.as_str());

    for node in &graph.nodes {
        let label = node
            .label
            .as_deref()
            .map(|l| format!(" {} |", escape(l)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  \"{}\" [shape=record, label=\"{{{} data {:.4} | grad {:.4} }}\"];",
            node.id, label, node.value, node.grad
        );
        if !node.op.is_leaf() {
            let _ = writeln!(out, "  \"{}{}\" [label=\"{}\"];", node.id, node.op.name(), node.op.name());
            let _ = writeln!(out, "  \"{}{}\" -> \"{}\";", node.id, node.op.name(), node.id);
        }
    }

    for (child, parent) in &graph.edges {
        let op_suffix = graph
            .node(*parent)
            .filter(|p| !p.op.is_leaf())
            .map(|p| p.op.name())
            .unwrap_or("");
        let _ = writeln!(out, "  \"{}\" -> \"{}{}\";", child, parent, op_suffix);
    }

    out.push_str("}\n");
    out
}

/// Escapes characters that are special inside a DOT record label.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
