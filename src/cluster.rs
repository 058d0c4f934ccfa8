//! A single ART1 category: one bottom-up row and one top-down row.
//!
//! Keeping both rows in one record means a cluster's B and T weights can only
//! be created, updated, or appended together.

use crate::numeric::dot;
use crate::pattern::BinaryPattern;

/// Denominator offset in the bottom-up learning rule `T·x / (0.5 + S)`.
const LEARNING_OFFSET: f64 = 0.5;

/// Weights of one cluster neuron.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// Bottom-up weights, used to rank clusters by activation.
    bottom_up: Vec<f64>,
    /// Top-down template, always 0.0 or 1.0 per attribute.
    top_down: Vec<f64>,
}

impl Cluster {
    /// The initial, uniformly weighted cluster: `B = 1/(A+1)`, `T = 1`.
    pub fn uncommitted(attributes: usize) -> Self {
        Self {
            bottom_up: vec![1.0 / (attributes as f64 + 1.0); attributes],
            top_down: vec![1.0; attributes],
        }
    }

    /// A fresh cluster whose template is exactly `x`.
    pub fn committed_to(x: &BinaryPattern) -> Self {
        let top_down: Vec<f64> = x.bits().iter().map(|&b| b as f64).collect();
        let s = dot(x.bits(), &top_down);
        let bottom_up = learned_bottom_up(x, &top_down, s);
        Self {
            bottom_up,
            top_down,
        }
    }

    pub(crate) fn from_rows(bottom_up: Vec<f64>, top_down: Vec<f64>) -> Self {
        Self {
            bottom_up,
            top_down,
        }
    }

    pub fn attributes(&self) -> usize {
        self.top_down.len()
    }

    pub fn bottom_up(&self) -> &[f64] {
        &self.bottom_up
    }

    pub fn top_down(&self) -> &[f64] {
        &self.top_down
    }

    /// Activation `x · B`.
    #[inline]
    pub fn activation(&self, x: &BinaryPattern) -> f64 {
        dot(x.bits(), &self.bottom_up)
    }

    /// Template overlap `S = x · T`.
    #[inline]
    pub fn overlap(&self, x: &BinaryPattern) -> f64 {
        dot(x.bits(), &self.top_down)
    }

    /// Absorb `x` into this cluster.
    ///
    /// `S` is taken from the template before it is narrowed:
    /// `B ← T·x / (0.5 + S)` then `T ← T·x`.
    pub fn resonate(&mut self, x: &BinaryPattern) {
        let s = self.overlap(x);
        let narrowed: Vec<f64> = self
            .top_down
            .iter()
            .zip(x.bits())
            .map(|(&t, &b)| t * b as f64)
            .collect();
        self.bottom_up = narrowed
            .iter()
            .map(|&t| t / (LEARNING_OFFSET + s))
            .collect();
        self.top_down = narrowed;
    }

    /// The learned prototype (top-down template) as a binary pattern.
    pub fn prototype(&self) -> BinaryPattern {
        let bits: Vec<bool> = self.top_down.iter().map(|&t| t > 0.0).collect();
        BinaryPattern::from_bools(&bits)
    }
}

/// `T[i]·x[i] / (0.5 + S)` for every attribute.
fn learned_bottom_up(x: &BinaryPattern, top_down: &[f64], s: f64) -> Vec<f64> {
    top_down
        .iter()
        .zip(x.bits())
        .map(|(&t, &b)| t * b as f64 / (LEARNING_OFFSET + s))
        .collect()
}
