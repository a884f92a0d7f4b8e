use crate::error::MicrogradError;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Distribution used to draw initial parameter values.
///
/// The random source is always passed in, so a seeded `StdRng` gives reproducible networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform { low: -1.0, high: 1.0 }
    }
}

impl Init {
    pub fn validate(&self) -> Result<(), MicrogradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low >= high {
                    return Err(MicrogradError::InvalidConfiguration {
                        field: "init".to_string(),
                        reason: format!("uniform bounds must be finite with low < high, got [{}, {})", low, high),
                    });
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(MicrogradError::InvalidConfiguration {
                        field: "init".to_string(),
                        reason: format!("normal needs a finite mean and a finite std >= 0, got mean {} std {}", mean, std),
                    });
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, MicrogradError> {
        self.validate()?;
        match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(&mut *rng)).collect())
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std).map_err(|e| MicrogradError::InvalidConfiguration {
                    field: "init".to_string(),
                    reason: e.to_string(),
                })?;
                Ok((0..n).map(|_| dist.sample(&mut *rng)).collect())
            }
        }
    }

    /// Draws a single value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, MicrogradError> {
        Ok(self.sample_n(1, rng)?[0])
    }
}
