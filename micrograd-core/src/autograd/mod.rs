//! # Reverse-mode autodiff over [`Value`](crate::Value) graphs.
//!
//! - [`graph`]: node identity, topological ordering and descendant queries.
//! - [`backward`]: the chain-rule backward pass.
//! - [`naive`]: a finite-difference recompute path, kept as a non-authoritative contrast to
//!   [`backward`].
//! - [`grad_check`]: analytic-vs-numeric gradient checking used by the tests.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod naive;

pub use backward::backward;
pub use graph::{descendants, grad_dict, topological_sort, NodeId};
pub use naive::{naive_backward, recompute};
