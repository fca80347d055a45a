use crate::foundation::{
    core::Point,
    error::{ExplainerError, ExplainerResult},
};

/// Column-per-layer placement of a feed-forward network diagram.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkLayout {
    pub layer_sizes: Vec<usize>,
    /// Horizontal distance between adjacent layers.
    pub layer_spacing: f64,
    /// Vertical distance between neurons in a layer.
    pub row_spacing: f64,
}

impl NetworkLayout {
    pub const DEFAULT_LAYER_SPACING: f64 = 2.5;
    pub const DEFAULT_ROW_SPACING: f64 = 0.8;

    pub fn new(layer_sizes: impl Into<Vec<usize>>) -> ExplainerResult<Self> {
        let layout = Self {
            layer_sizes: layer_sizes.into(),
            layer_spacing: Self::DEFAULT_LAYER_SPACING,
            row_spacing: Self::DEFAULT_ROW_SPACING,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> ExplainerResult<()> {
        if self.layer_sizes.is_empty() {
            return Err(ExplainerError::invalid_layout(
                "network needs at least one layer",
            ));
        }
        if let Some(idx) = self.layer_sizes.iter().position(|&s| s == 0) {
            return Err(ExplainerError::invalid_layout(format!(
                "layer {idx} has no neurons"
            )));
        }
        for (name, v) in [
            ("layer_spacing", self.layer_spacing),
            ("row_spacing", self.row_spacing),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ExplainerError::invalid_layout(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Vertical positions of a column of `size` neurons, top to bottom, centered on y = 0.
    pub fn column(&self, size: usize) -> Vec<f64> {
        let top = size.saturating_sub(1) as f64 * self.row_spacing / 2.0;
        (0..size)
            .map(|i| top - i as f64 * self.row_spacing)
            .collect()
    }

    /// x coordinate of layer `idx`; the whole network is centered on x = 0.
    pub fn layer_x(&self, idx: usize) -> f64 {
        let total_width = self.layer_sizes.len().saturating_sub(1) as f64 * self.layer_spacing;
        -total_width / 2.0 + idx as f64 * self.layer_spacing
    }

    /// Neuron centers per layer.
    pub fn positions(&self) -> Vec<Vec<Point>> {
        self.layer_sizes
            .iter()
            .enumerate()
            .map(|(idx, &size)| {
                let x = self.layer_x(idx);
                self.column(size)
                    .into_iter()
                    .map(|y| Point::new(x, y))
                    .collect()
            })
            .collect()
    }

    /// Fully-connected pairs `((layer, row), (layer + 1, row))`, row-major per layer.
    pub fn connection_pairs(&self) -> Vec<((usize, usize), (usize, usize))> {
        let mut pairs = Vec::with_capacity(self.connection_count());
        for (layer, window) in self.layer_sizes.windows(2).enumerate() {
            for i in 0..window[0] {
                for j in 0..window[1] {
                    pairs.push(((layer, i), (layer + 1, j)));
                }
            }
        }
        pairs
    }

    /// `Σ sizes[k] · sizes[k + 1]`.
    pub fn connection_count(&self) -> usize {
        self.layer_sizes.windows(2).map(|w| w[0] * w[1]).sum()
    }

    pub fn neuron_count(&self) -> usize {
        self.layer_sizes.iter().sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/network.rs"]
mod tests;
