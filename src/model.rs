//! Trained ART1 model: an ordered set of clusters.
//!
//! The model is the `(B, T)` pair produced by training. Cluster `k` of the
//! model is row `k` of both matrices, and the cluster index returned by
//! [`Model::predict`] is that row number.
//!
//! # Example
//!
//! ```rust
//! use resonance::{BinaryPattern, Model};
//!
//! let inputs: Vec<BinaryPattern> = ["1 0", "1 0", "0 1"]
//!     .iter()
//!     .map(|row| BinaryPattern::parse_row(row).unwrap())
//!     .collect();
//! let model = resonance::train(&inputs, 0.9).unwrap();
//!
//! // Persist only the two weight matrices
//! let json = model.to_json().unwrap();
//! let restored = Model::from_json(&json).unwrap();
//! assert_eq!(restored.predict(&inputs), vec![0, 0, 1]);
//! ```

use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::error::{ArtError, Result};
use crate::numeric::rank_descending;
use crate::pattern::BinaryPattern;

/// Serializable form of a model: the bottom-up and top-down matrices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// One row per cluster, one column per attribute.
    pub bottom_up: Vec<Vec<f64>>,
    /// Same shape as `bottom_up`.
    pub top_down: Vec<Vec<f64>>,
}

/// Learned clusters. Never empty; every row has the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    attributes: usize,
    clusters: Vec<Cluster>,
}

impl Model {
    /// A model holding only the uniform starting cluster.
    pub fn initial(attributes: usize) -> Self {
        Self {
            attributes,
            clusters: vec![Cluster::uncommitted(attributes)],
        }
    }

    // --- Accessors ---

    pub fn attributes(&self) -> usize {
        self.attributes
    }

    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// The bottom-up matrix `B`.
    pub fn bottom_up(&self) -> Vec<Vec<f64>> {
        self.clusters.iter().map(|c| c.bottom_up().to_vec()).collect()
    }

    /// The top-down matrix `T`.
    pub fn top_down(&self) -> Vec<Vec<f64>> {
        self.clusters.iter().map(|c| c.top_down().to_vec()).collect()
    }

    /// Learned prototypes, in cluster order.
    pub fn prototypes(&self) -> Vec<BinaryPattern> {
        self.clusters.iter().map(Cluster::prototype).collect()
    }

    // --- Prediction ---

    /// Activation of every cluster for `x`.
    pub fn activations(&self, x: &BinaryPattern) -> Vec<f64> {
        self.clusters.iter().map(|c| c.activation(x)).collect()
    }

    /// Cluster indices ordered by descending activation, ties by index.
    pub fn rank(&self, x: &BinaryPattern) -> Vec<usize> {
        rank_descending(&self.activations(x))
    }

    /// Index of the most strongly activated cluster.
    ///
    /// No vigilance test is applied, so a weak best match is still returned.
    /// A pattern of the wrong width activates nothing and lands in cluster 0.
    pub fn predict_one(&self, x: &BinaryPattern) -> usize {
        self.rank(x).first().copied().unwrap_or(0)
    }

    /// Cluster index for each input, in input order.
    pub fn predict(&self, inputs: &[BinaryPattern]) -> Vec<usize> {
        inputs.iter().map(|x| self.predict_one(x)).collect()
    }

    // --- Training support ---

    pub(crate) fn cluster_mut(&mut self, k: usize) -> &mut Cluster {
        &mut self.clusters[k]
    }

    pub(crate) fn push(&mut self, cluster: Cluster) {
        debug_assert_eq!(cluster.attributes(), self.attributes);
        self.clusters.push(cluster);
    }

    // --- Persistence ---

    /// Export both weight matrices.
    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            bottom_up: self.bottom_up(),
            top_down: self.top_down(),
        }
    }

    /// Rebuild a model from its matrices, checking their shape.
    pub fn from_snapshot(snap: ModelSnapshot) -> Result<Self> {
        if snap.bottom_up.is_empty() {
            return Err(ArtError::MalformedModel("no clusters".into()));
        }
        if snap.bottom_up.len() != snap.top_down.len() {
            return Err(ArtError::MalformedModel(format!(
                "{} bottom-up rows but {} top-down rows",
                snap.bottom_up.len(),
                snap.top_down.len()
            )));
        }

        let attributes = snap.bottom_up[0].len();
        if attributes == 0 {
            return Err(ArtError::MalformedModel("rows have no attributes".into()));
        }

        let mut clusters = Vec::with_capacity(snap.bottom_up.len());
        for (k, (b, t)) in snap.bottom_up.into_iter().zip(snap.top_down).enumerate() {
            if b.len() != attributes || t.len() != attributes {
                return Err(ArtError::MalformedModel(format!(
                    "cluster {} has rows of width {}/{}, expected {}",
                    k,
                    b.len(),
                    t.len(),
                    attributes
                )));
            }
            if let Some(i) = t.iter().position(|&v| v != 0.0 && v != 1.0) {
                return Err(ArtError::MalformedModel(format!(
                    "cluster {} has top-down weight {} at attribute {}, expected 0 or 1",
                    k, t[i], i
                )));
            }
            clusters.push(Cluster::from_rows(b, t));
        }

        Ok(Self {
            attributes,
            clusters,
        })
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Restore from JSON produced by [`Model::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snap: ModelSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snap)
    }
}
