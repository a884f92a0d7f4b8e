use crate::autograd::graph::NodeId;
use crate::ops::Op;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Internal state of a graph node.
///
/// `operands` and `op` are fixed once the node is built; only `value` (optimizer steps) and
/// `grad` (backward passes, resets) change afterwards.
pub(crate) struct ValueData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) label: Option<String>,
    pub(crate) operands: Vec<Value>,
    pub(crate) op: Op,
}

impl Drop for ValueData {
    /// Releases the operand chain with a work-stack instead of recursing once per node, so
    /// dropping a deep graph cannot exhaust the native stack.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.operands);
        while let Some(operand) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.0) {
                stack.append(&mut cell.into_inner().operands);
            }
        }
    }
}

/// Handle to a scalar node in the computation graph.
///
/// Cloning a `Value` is shallow: both handles point at the same node, which is how a node
/// is shared as an operand by several downstream nodes (fan-out). The node is dropped once
/// no handle and no downstream node refers to it.
#[derive(Clone)]
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a leaf node with the given value and zero gradient.
    pub fn new(value: f64) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            value,
            grad: 0.0,
            label: None,
            operands: Vec::new(),
            op: Op::Leaf,
        })))
    }

    /// Creates a labelled leaf node.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        Value::new(value).labeled(label)
    }

    /// Creates one leaf per entry of `values`.
    pub fn make(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::new).collect()
    }

    /// Node produced by an operation. Only the builders in [`crate::ops`] call this.
    pub(crate) fn from_op(value: f64, op: Op, operands: Vec<Value>) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            value,
            grad: 0.0,
            label: None,
            operands,
            op,
        })))
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.0.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.0.borrow_mut()
    }

    /// Forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value. Meant for leaves (parameter updates); downstream nodes are not
    /// recomputed.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Current gradient accumulator.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the gradient accumulator.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets the gradient accumulator to zero.
    ///
    /// Backward passes accumulate, so this must be called between independent steps.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    pub fn clear_label(&self) {
        self.write_data().label = None;
    }

    /// Sets the label and returns the same handle, for chaining:
    /// `let x = Value::new(2.0).labeled("x");`
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Handles to this node's operands, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op.is_leaf()
    }

    /// Identity of the underlying node; equal for all clones of a handle.
    pub fn id(&self) -> NodeId {
        NodeId::of(self)
    }

    /// True if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Label if present, otherwise the node id. Used in errors and logs.
    pub(crate) fn display_name(&self) -> String {
        self.label().unwrap_or_else(|| self.id().to_string())
    }

    /// Appends an operand after construction, bypassing every invariant.
    ///
    /// Only exists so tests can build the cyclic graphs the public API cannot express.
    #[cfg(test)]
    pub(crate) fn push_operand_unchecked(&self, operand: &Value) {
        self.write_data().operands.push(operand.clone());
    }

    /// Drops all operands; tests use it to break the cycles they create.
    #[cfg(test)]
    pub(crate) fn clear_operands_unchecked(&self) {
        self.write_data().operands.clear();
    }
}

impl From<f64> for Value {
    /// Promotes a scalar to a constant leaf.
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Value(data={}", data.value)?;
        if let Some(label) = &data.label {
            write!(f, ", label=\"{}\"", label)?;
        }
        if !data.op.is_leaf() {
            write!(f, ", op={}", data.op)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
