use super::*;
use crate::ops::Op;
use std::collections::HashMap;

fn position_map(order: &[Value]) -> HashMap<NodeId, usize> {
    order.iter().enumerate().map(|(i, v)| (v.id(), i)).collect()
}

#[test]
fn test_topological_sort_leaf_only() {
    let x = Value::new(1.0);
    let order = topological_sort(&x).unwrap();
    assert_eq!(order.len(), 1);
    assert!(order[0].ptr_eq(&x));
}

#[test]
fn test_topological_order_operands_before_parents() {
    let x = Value::with_label(2.0, "x");
    let y1 = Value::with_label(3.0, "y1");
    let y2 = Value::with_label(5.0, "y2");
    let a = &x * &y1;
    let b = &x * &y2;
    let out = (&a + &b).tanh();

    let order = topological_sort(&out).unwrap();
    // x, y1, y2, a, b, add, tanh
    assert_eq!(order.len(), 7);
    assert!(order.last().unwrap().ptr_eq(&out));

    let pos = position_map(&order);
    for node in &order {
        for operand in node.operands() {
            assert!(
                pos[&operand.id()] < pos[&node.id()],
                "operand {:?} must precede {:?}",
                operand,
                node
            );
        }
    }
}

#[test]
fn test_shared_node_visited_once() {
    let x = Value::new(1.0);
    let mut acc = x.clone();
    for _ in 0..10 {
        acc = &acc + &x;
    }
    let order = topological_sort(&acc).unwrap();
    // x plus ten add nodes
    assert_eq!(order.len(), 11);
    assert_eq!(order.iter().filter(|v| v.ptr_eq(&x)).count(), 1);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let x = Value::new(0.0);
    let mut acc = x.clone();
    for _ in 0..200_000 {
        acc = &acc + 1.0;
    }
    let order = topological_sort(&acc).unwrap();
    assert_eq!(order.len(), 1 + 2 * 200_000);

    acc.backward().unwrap();
    assert_eq!(x.grad(), 1.0);

    // The root handle is the last owner of the chain once `order` is gone.
    drop(order);
    drop(acc);
    assert_eq!(x.value(), 0.0);
}

#[test]
fn test_cycle_detected() {
    let a = Value::with_label(1.0, "a");
    let b = (&a + 1.0).labeled("b");
    a.push_operand_unchecked(&b);

    match topological_sort(&b) {
        Err(MicrogradError::CycleDetected { node }) => assert_eq!(node, "b"),
        other => panic!("Expected CycleDetected, got {:?}", other.map(|o| o.len())),
    }
    a.clear_operands_unchecked();
}

#[test]
fn test_self_loop_detected() {
    let a = Value::new(1.0);
    a.push_operand_unchecked(&a);
    assert!(matches!(
        topological_sort(&a),
        Err(MicrogradError::CycleDetected { .. })
    ));
    a.clear_operands_unchecked();
}

#[test]
fn test_descendants_exclude_root() {
    let x = Value::new(1.0);
    let y = x.exp();
    let d = descendants(&y).unwrap();
    assert_eq!(d.len(), 1);
    assert!(d[0].ptr_eq(&x));
    assert_eq!(y.op(), Op::Exp);
}

#[test]
fn test_grad_dict_labels_and_positional_fallback() {
    let x = Value::with_label(3.0, "x");
    let y = Value::new(4.0);
    let z = (&x * &y).labeled("z");
    let out = z.tanh();
    out.backward().unwrap();

    let grads = grad_dict(&out).unwrap();
    assert_eq!(grads.len(), 3);
    assert_eq!(grads["x"], x.grad());
    // y is unlabelled and second in traversal order
    assert_eq!(grads["1"], y.grad());
    assert_eq!(grads["z"], z.grad());
    assert!(!grads.contains_key("out"));
    assert_eq!(out.grad_dict().unwrap(), grads);
}
