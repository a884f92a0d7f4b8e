use crate::error::MicrogradError;
use crate::value::Value;
use std::str::FromStr;

/// How per-sample squared errors are combined:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

impl FromStr for Reduction {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean Squared Error between predictions and targets: the reduction of `(y − pred)²` over
/// aligned pairs.
///
/// With [`Reduction::Sum`] this is the classic micrograd training loss.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Parses the reduction from its name (`"sum"` or `"mean"`).
    pub fn from_reduction_str(reduction: &str) -> Result<Self, MicrogradError> {
        Ok(MSELoss::new(reduction.parse()?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node over `preds` and constant `targets`.
    ///
    /// An empty batch yields a constant zero for both reductions.
    pub fn calculate(&self, preds: &[Value], targets: &[f64]) -> Result<Value, MicrogradError> {
        if preds.len() != targets.len() {
            return Err(MicrogradError::ShapeMismatch {
                expected: targets.len(),
                actual: preds.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        if preds.is_empty() {
            return Ok(Value::new(0.0));
        }

        let total: Value = preds
            .iter()
            .zip(targets)
            .map(|(pred, &y)| (y - pred).pow(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / preds.len() as f64,
        })
    }
}
