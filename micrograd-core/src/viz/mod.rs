//! Read-only graph export for rendering.
//!
//! [`trace`] snapshots the graph reachable from a root; [`to_dot`] turns that snapshot into
//! Graphviz DOT text. Neither touches values or gradients.

pub mod dot;
pub mod trace;

pub use dot::{to_dot, RankDir};
pub use trace::{trace, GraphTrace, NodeView};
