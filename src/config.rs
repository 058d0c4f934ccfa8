//! Training configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// Default epoch cap. Training on well-formed binary data normally settles in
/// a handful of epochs.
pub const DEFAULT_MAX_EPOCHS: usize = 1000;

/// Parameters for one training run.
///
/// Values are NOT validated on construction; [`crate::Trainer`] calls
/// [`TrainConfig::validate`] before training.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Vigilance ρ in (0, 1]. Higher values demand closer matches and
    /// produce more, tighter clusters.
    pub vigilance: f64,

    /// Stop after this many epochs even if the weights are still moving.
    /// `None` iterates until convergence with no bound.
    pub max_epochs: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            vigilance: 0.9,
            max_epochs: Some(DEFAULT_MAX_EPOCHS),
        }
    }
}

impl TrainConfig {
    pub fn new(vigilance: f64) -> Self {
        Self {
            vigilance,
            ..Self::default()
        }
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = Some(max_epochs);
        self
    }

    /// Remove the epoch cap.
    pub fn unbounded(mut self) -> Self {
        self.max_epochs = None;
        self
    }

    pub fn validate(&self) -> Result<()> {
        // Written as a negated range check so NaN is rejected too
        if !(self.vigilance > 0.0 && self.vigilance <= 1.0) {
            return Err(ArtError::InvalidVigilance(self.vigilance));
        }
        if self.max_epochs == Some(0) {
            return Err(ArtError::InvalidConfig("max_epochs must be at least 1".into()));
        }
        Ok(())
    }
}
