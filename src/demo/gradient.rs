use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Scripted one-dimensional gradient descent on `loss(x) = x² + 1`.
///
/// Only drives an animation; it is not a general optimizer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientDescent {
    pub x0: f64,
    pub learning_rate: f64,
    pub max_steps: usize,
    /// Stop after the first update whose result satisfies `|x| < tolerance`.
    pub tolerance: f64,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            x0: 2.0,
            learning_rate: 0.3,
            max_steps: 8,
            tolerance: 0.1,
        }
    }
}

impl GradientDescent {
    pub fn validate(&self) -> ExplainerResult<()> {
        for (name, v) in [
            ("x0", self.x0),
            ("learning_rate", self.learning_rate),
            ("tolerance", self.tolerance),
        ] {
            if !v.is_finite() {
                return Err(ExplainerError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    pub fn loss(x: f64) -> f64 {
        x * x + 1.0
    }

    pub fn gradient(x: f64) -> f64 {
        2.0 * x
    }

    pub fn update(&self, x: f64) -> f64 {
        x - self.learning_rate * Self::gradient(x)
    }

    /// Values of `x` after each update (the starting point is not included).
    pub fn trajectory(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.max_steps);
        let mut x = self.x0;
        for _ in 0..self.max_steps {
            x = self.update(x);
            out.push(x);
            if x.abs() < self.tolerance {
                break;
            }
        }
        out
    }

    /// `x` after `n` updates without early stopping: `x0 · (1 − 2·lr)ⁿ`.
    pub fn closed_form(&self, n: u32) -> f64 {
        self.x0 * (1.0 - 2.0 * self.learning_rate).powi(n as i32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/gradient.rs"]
mod tests;
