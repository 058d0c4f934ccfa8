//! ART1 training: repeated epochs until the weights reach a fixed point.
//!
//! # Algorithm
//!
//! Each epoch presents every input, in order, to the *current* model:
//!
//! 1. Rank clusters by activation `x · B[k]`, highest first.
//! 2. Walk the ranking and take the first cluster whose template passes the
//!    vigilance test `(x · T[k]) / |x| ≥ ρ`, where `|x|` is the number of set
//!    attributes.
//! 3. The winner resonates with `x` (see [`Cluster::resonate`]). If nothing
//!    passes, a new cluster committed to `x` is appended.
//!
//! Training stops after the first epoch that leaves both `B` and `T` exactly
//! as they were when it started, or when the configured epoch cap is hit.
//!
//! # Usage
//!
//! ```rust
//! use resonance::{BinaryPattern, TrainConfig, Trainer};
//!
//! let inputs = vec![
//!     BinaryPattern::from_bits(vec![1, 0]).unwrap(),
//!     BinaryPattern::from_bits(vec![1, 0]).unwrap(),
//!     BinaryPattern::from_bits(vec![0, 1]).unwrap(),
//! ];
//!
//! let training = Trainer::new(TrainConfig::new(0.9)).fit(&inputs).unwrap();
//! assert!(training.converged);
//! assert_eq!(training.model.num_clusters(), 2);
//! ```

use tracing::{debug, info, warn};

use crate::cluster::Cluster;
use crate::config::TrainConfig;
use crate::error::{ArtError, Result};
use crate::model::Model;
use crate::numeric::{matrices_equal, vector_sum};
use crate::pattern::BinaryPattern;

/// Outcome of [`Trainer::fit`].
#[derive(Clone, Debug)]
pub struct Training {
    /// Model after the last epoch that ran.
    pub model: Model,
    /// Number of epochs run, including the final unchanged one.
    pub epochs: usize,
    /// False when the epoch cap stopped training first.
    pub converged: bool,
}

/// What happened during one epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpochStats {
    /// Inputs absorbed by an existing cluster.
    pub resonances: usize,
    /// Clusters created because no existing one passed vigilance.
    pub new_clusters: usize,
}

/// Drives ART1 training for a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Trainer {
    config: TrainConfig,
}

impl Trainer {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Learn clusters from `inputs`.
    ///
    /// Rejects an invalid configuration, an empty input set, zero-width or
    /// mismatched patterns, and all-zero patterns before doing any work.
    pub fn fit(&self, inputs: &[BinaryPattern]) -> Result<Training> {
        self.config.validate()?;
        let attributes = validate_inputs(inputs)?;

        let mut model = Model::initial(attributes);
        let mut epochs = 0;

        loop {
            if let Some(cap) = self.config.max_epochs {
                if epochs >= cap {
                    warn!(
                        epochs,
                        clusters = model.num_clusters(),
                        "ART1 training stopped at epoch cap without converging"
                    );
                    return Ok(Training {
                        model,
                        epochs,
                        converged: false,
                    });
                }
            }

            let before = model.clone();
            let stats = self.epoch(&mut model, inputs)?;
            epochs += 1;

            debug!(
                epoch = epochs,
                resonances = stats.resonances,
                new_clusters = stats.new_clusters,
                clusters = model.num_clusters(),
                "ART1 epoch finished"
            );

            if is_fixed_point(&before, &model) {
                info!(
                    epochs,
                    clusters = model.num_clusters(),
                    "ART1 training converged"
                );
                return Ok(Training {
                    model,
                    epochs,
                    converged: true,
                });
            }
        }
    }

    /// Present every input once, in order, updating `model` in place.
    ///
    /// Every input must match `model.attributes()`; the model is left
    /// untouched when one does not. An all-zero input never passes vigilance
    /// and is given its own cluster.
    pub fn epoch(&self, model: &mut Model, inputs: &[BinaryPattern]) -> Result<EpochStats> {
        if let Some(x) = inputs.iter().find(|x| x.len() != model.attributes()) {
            return Err(ArtError::DimensionMismatch {
                expected: model.attributes(),
                got: x.len(),
            });
        }

        let mut stats = EpochStats::default();

        for x in inputs {
            let magnitude = vector_sum(x.bits());
            let winner = model
                .rank(x)
                .into_iter()
                .find(|&k| self.passes_vigilance(&model.clusters()[k], x, magnitude));

            match winner {
                Some(k) => {
                    model.cluster_mut(k).resonate(x);
                    stats.resonances += 1;
                }
                None => {
                    model.push(Cluster::committed_to(x));
                    stats.new_clusters += 1;
                }
            }
        }

        Ok(stats)
    }

    /// `(x · T[k]) / |x| ≥ ρ`.
    #[inline]
    fn passes_vigilance(&self, cluster: &Cluster, x: &BinaryPattern, magnitude: f64) -> bool {
        if magnitude == 0.0 {
            return false;
        }
        cluster.overlap(x) / magnitude >= self.config.vigilance
    }
}

/// Both matrices unchanged in shape and value.
fn is_fixed_point(before: &Model, after: &Model) -> bool {
    fn rows<'a>(m: &'a Model, row: fn(&Cluster) -> &[f64]) -> Vec<&'a [f64]> {
        m.clusters().iter().map(row).collect()
    }
    matrices_equal(&rows(before, Cluster::bottom_up), &rows(after, Cluster::bottom_up))
        && matrices_equal(&rows(before, Cluster::top_down), &rows(after, Cluster::top_down))
}

/// Check the training set and return its attribute count.
fn validate_inputs(inputs: &[BinaryPattern]) -> Result<usize> {
    let first = inputs
        .first()
        .ok_or_else(|| ArtError::EmptyInput("training set has no patterns".into()))?;
    let attributes = first.len();
    if attributes == 0 {
        return Err(ArtError::EmptyInput("training patterns have no attributes".into()));
    }

    for (index, x) in inputs.iter().enumerate() {
        if x.len() != attributes {
            return Err(ArtError::DimensionMismatch {
                expected: attributes,
                got: x.len(),
            });
        }
        if x.ones() == 0 {
            return Err(ArtError::ZeroPattern { index });
        }
    }

    Ok(attributes)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(rows: &[&[u8]]) -> Vec<BinaryPattern> {
        rows.iter()
            .map(|r| BinaryPattern::from_bits(r.to_vec()).unwrap())
            .collect()
    }

    fn fit(rows: &[&[u8]], vigilance: f64) -> Training {
        Trainer::new(TrainConfig::new(vigilance))
            .fit(&patterns(rows))
            .unwrap()
    }

    #[test]
    fn test_two_cluster_example() {
        let inputs = patterns(&[&[1, 0], &[1, 0], &[0, 1]]);
        let training = Trainer::new(TrainConfig::new(0.9)).fit(&inputs).unwrap();

        assert!(training.converged);
        assert_eq!(training.epochs, 2);
        assert_eq!(training.model.num_clusters(), 2);
        assert_eq!(training.model.top_down(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);

        let probes = patterns(&[&[1, 0], &[0, 1]]);
        assert_eq!(training.model.predict(&probes), vec![0, 1]);
    }

    #[test]
    fn test_identical_inputs_collapse_to_one_cluster() {
        let training = fit(&[&[1, 1, 0, 1], &[1, 1, 0, 1], &[1, 1, 0, 1]], 1.0);
        assert!(training.converged);
        assert_eq!(training.model.num_clusters(), 1);
        assert_eq!(training.model.top_down(), vec![vec![1.0, 1.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_disjoint_inputs_split_at_full_vigilance() {
        let training = fit(&[&[1, 0, 0], &[0, 1, 1]], 1.0);
        assert!(training.model.num_clusters() >= 2);
    }

    #[test]
    fn test_low_vigilance_merges_overlapping_inputs() {
        let training = fit(&[&[1, 1, 0, 0], &[1, 0, 1, 0], &[1, 0, 0, 1]], 1e-6);
        assert!(training.converged);
        assert_eq!(training.model.num_clusters(), 1);
        assert_eq!(training.model.top_down(), vec![vec![1.0, 0.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_high_vigilance_gives_more_clusters() {
        let rows: &[&[u8]] = &[
            &[1, 1, 1, 0, 0, 0],
            &[1, 1, 0, 0, 0, 0],
            &[0, 0, 0, 1, 1, 1],
            &[0, 0, 0, 1, 1, 0],
            &[1, 0, 0, 1, 0, 0],
        ];
        let loose = fit(rows, 0.3);
        let tight = fit(rows, 1.0);
        assert!(loose.model.num_clusters() <= tight.model.num_clusters());
    }

    #[test]
    fn test_converged_model_is_a_fixed_point() {
        let inputs = patterns(&[
            &[1, 0, 1, 0, 1],
            &[0, 1, 0, 1, 0],
            &[1, 1, 1, 0, 0],
            &[0, 0, 1, 1, 1],
            &[1, 0, 0, 0, 1],
        ]);
        let trainer = Trainer::new(TrainConfig::new(0.6));
        let training = trainer.fit(&inputs).unwrap();
        assert!(training.converged);

        let mut again = training.model.clone();
        let stats = trainer.epoch(&mut again, &inputs).unwrap();
        assert_eq!(stats.new_clusters, 0);
        assert_eq!(again, training.model);
    }

    #[test]
    fn test_training_inputs_predict_into_valid_clusters() {
        let inputs = patterns(&[
            &[1, 1, 0, 0, 0, 0],
            &[0, 1, 1, 0, 0, 0],
            &[0, 0, 0, 1, 1, 0],
            &[0, 0, 0, 0, 1, 1],
            &[1, 0, 0, 0, 0, 1],
        ]);
        let training = Trainer::new(TrainConfig::new(0.7)).fit(&inputs).unwrap();
        let n = training.model.num_clusters();
        for k in training.model.predict(&inputs) {
            assert!(k < n, "cluster {} out of range 0..{}", k, n);
        }
    }

    #[test]
    fn test_deterministic() {
        let rows: &[&[u8]] = &[&[1, 0, 1, 1], &[0, 1, 1, 0], &[1, 1, 0, 0], &[0, 0, 1, 1]];
        let a = fit(rows, 0.5);
        let b = fit(rows, 0.5);
        assert_eq!(a.model, b.model);
        assert_eq!(a.epochs, b.epochs);
    }

    #[test]
    fn test_epoch_cap_reports_non_convergence() {
        let inputs = patterns(&[&[1, 0], &[1, 0], &[0, 1]]);
        let training = Trainer::new(TrainConfig::new(0.9).with_max_epochs(1))
            .fit(&inputs)
            .unwrap();
        assert!(!training.converged);
        assert_eq!(training.epochs, 1);
        assert_eq!(training.model.num_clusters(), 2);
    }

    #[test]
    fn test_waits_for_bottom_up_to_settle() {
        // First epoch narrows nothing in T but moves B from 1/3 to 1/2.5
        let training = fit(&[&[1, 1]], 0.9);
        assert!(training.converged);
        assert_eq!(training.epochs, 2);
        assert_eq!(training.model.top_down(), vec![vec![1.0, 1.0]]);
        assert_eq!(training.model.bottom_up(), vec![vec![0.4, 0.4]]);
    }

    #[test]
    fn test_is_fixed_point_needs_both_matrices() {
        let x = BinaryPattern::from_bits(vec![1, 1]).unwrap();
        let before = Model::initial(2);
        let mut after = before.clone();
        after.cluster_mut(0).resonate(&x);

        assert_eq!(before.top_down(), after.top_down());
        assert_ne!(before.bottom_up(), after.bottom_up());
        assert!(!is_fixed_point(&before, &after));
        assert!(is_fixed_point(&after, &after.clone()));
    }

    #[test]
    fn test_epoch_rejects_wrong_width() {
        let trainer = Trainer::new(TrainConfig::new(0.5));
        let mut model = Model::initial(2);
        let inputs = patterns(&[&[1, 0], &[1, 0, 1]]);

        assert!(matches!(
            trainer.epoch(&mut model, &inputs),
            Err(ArtError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
        assert_eq!(model, Model::initial(2));
    }

    #[test]
    fn test_epoch_stats() {
        let trainer = Trainer::new(TrainConfig::new(0.9));
        let inputs = patterns(&[&[1, 0], &[1, 0], &[0, 1]]);
        let mut model = Model::initial(2);
        let stats = trainer.epoch(&mut model, &inputs).unwrap();
        assert_eq!(
            stats,
            EpochStats {
                resonances: 2,
                new_clusters: 1
            }
        );
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let trainer = Trainer::new(TrainConfig::new(0.5));

        assert!(matches!(trainer.fit(&[]), Err(ArtError::EmptyInput(_))));
        assert!(matches!(
            trainer.fit(&patterns(&[&[]])),
            Err(ArtError::EmptyInput(_))
        ));
        assert!(matches!(
            trainer.fit(&patterns(&[&[1, 0], &[1, 0, 1]])),
            Err(ArtError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));
        assert!(matches!(
            trainer.fit(&patterns(&[&[1, 0], &[0, 0]])),
            Err(ArtError::ZeroPattern { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_invalid_vigilance() {
        let inputs = patterns(&[&[1, 0]]);
        let err = Trainer::new(TrainConfig::new(1.5)).fit(&inputs).unwrap_err();
        assert!(matches!(err, ArtError::InvalidVigilance(v) if v == 1.5));
    }
}
