//! # Exporting a computation graph as Graphviz DOT
//!
//! Builds the classic single-neuron expression `o = tanh(x1·w1 + x2·w2 + b)`, backpropagates
//! through it and prints the annotated graph.
//!
//! ## Execution
//! `cargo run --example draw_graph > graph.dot && dot -Tsvg graph.dot -o graph.svg`
//!
//! Pass `TB` as the first argument for a top-to-bottom layout.

use micrograd_core::viz::{to_dot, trace, RankDir};
use micrograd_core::{MicrogradError, Value};

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let rankdir: RankDir = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => RankDir::default(),
    };

    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543, "b");

    let x1w1 = (&x1 * &w1).labeled("x1*w1");
    let x2w2 = (&x2 * &w2).labeled("x2*w2");
    let n = (&x1w1 + &x2w2 + &b).labeled("n");
    let o = n.tanh().labeled("o");
    o.backward()?;

    print!("{}", to_dot(&trace(&o)?, rankdir));
    Ok(())
}
