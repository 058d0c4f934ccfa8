//! # Resonance: ART1 clustering for binary patterns
//!
//! Resonance implements Adaptive Resonance Theory 1 (ART1), an unsupervised
//! clustering algorithm that learns prototype clusters from binary feature
//! vectors and assigns new vectors to the best-matching learned cluster.
//!
//! ## Quick Start
//!
//! ```rust
//! use resonance::BinaryPattern;
//!
//! let training: Vec<BinaryPattern> = ["1 0", "1 0", "0 1"]
//!     .iter()
//!     .map(|row| BinaryPattern::parse_row(row))
//!     .collect::<resonance::Result<_>>()?;
//!
//! // Learn clusters with vigilance 0.9
//! let model = resonance::train(&training, 0.9)?;
//! assert_eq!(model.num_clusters(), 2);
//!
//! // Assign unseen patterns
//! let probes = vec![BinaryPattern::parse_row("1 0")?, BinaryPattern::parse_row("0 1")?];
//! assert_eq!(resonance::predict(&probes, &model), vec![0, 1]);
//! # Ok::<(), resonance::ArtError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Bottom-up weights (B)**: rank clusters by activation for an input
//! - **Top-down weights (T)**: binary templates checked by the vigilance test
//! - **Vigilance (ρ)**: how close an input must be to a template to join it
//! - **Epoch**: one pass over the training set; training repeats epochs
//!   until neither matrix changes

pub mod cluster;
pub mod config;
pub mod error;
pub mod model;
pub mod numeric;
pub mod pattern;
pub mod trainer;

// Re-exports for convenience
pub use cluster::Cluster;
pub use config::TrainConfig;
pub use error::{ArtError, Result};
pub use model::{Model, ModelSnapshot};
pub use pattern::BinaryPattern;
pub use trainer::{EpochStats, Trainer, Training};

/// Train a model with the given vigilance and the default epoch cap.
///
/// Returns [`ArtError::NotConverged`] if the cap is reached. Use [`Trainer`]
/// directly to keep the partially trained model or to lift the cap.
pub fn train(inputs: &[BinaryPattern], vigilance: f64) -> Result<Model> {
    let training = Trainer::new(TrainConfig::new(vigilance)).fit(inputs)?;
    if !training.converged {
        return Err(ArtError::NotConverged {
            epochs: training.epochs,
        });
    }
    Ok(training.model)
}

/// Assign each input to its most strongly activated cluster.
pub fn predict(inputs: &[BinaryPattern], model: &Model) -> Vec<usize> {
    model.predict(inputs)
}
