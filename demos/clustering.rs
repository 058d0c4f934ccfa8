//! Clustering binary feature vectors with ART1.
//!
//! Trains on noisy variants of three hidden prototypes at several vigilance
//! levels, then assigns fresh variants to the learned clusters:
//!
//! 1. Low vigilance merges variants aggressively (few clusters)
//! 2. High vigilance keeps variants apart (many clusters)
//! 3. The model is exported as its two weight matrices and restored
//!
//! Run: RUST_LOG=debug cargo run --example clustering

use rand::prelude::*;
use resonance::{BinaryPattern, Model, TrainConfig, Trainer};
use tracing_subscriber::EnvFilter;

const ATTRIBUTES: usize = 24;

fn variant(rng: &mut StdRng, prototype: &[bool]) -> BinaryPattern {
    let mut bits: Vec<bool> = prototype
        .iter()
        .map(|&b| if rng.gen_bool(0.1) { !b } else { b })
        .collect();
    if !bits.iter().any(|&b| b) {
        bits[0] = true;
    }
    BinaryPattern::from_bools(&bits)
}

fn main() -> resonance::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let prototypes: Vec<Vec<bool>> = (0..3)
        .map(|p| (0..ATTRIBUTES).map(|i| i % 3 == p || rng.gen_bool(0.1)).collect())
        .collect();

    let training: Vec<BinaryPattern> = prototypes
        .iter()
        .flat_map(|proto| (0..20).map(|_| variant(&mut rng, proto)).collect::<Vec<_>>())
        .collect();
    let testing: Vec<BinaryPattern> = prototypes
        .iter()
        .map(|proto| variant(&mut rng, proto))
        .collect();

    println!("Training set: {} patterns x {} attributes", training.len(), ATTRIBUTES);
    println!();

    let mut chosen: Option<Model> = None;
    for vigilance in [0.2, 0.5, 0.7, 0.9] {
        let training_run = Trainer::new(TrainConfig::new(vigilance)).fit(&training)?;
        println!(
            "vigilance {:.1}: {:>2} clusters after {} epochs (converged: {})",
            vigilance,
            training_run.model.num_clusters(),
            training_run.epochs,
            training_run.converged
        );
        if vigilance == 0.5 {
            chosen = Some(training_run.model);
        }
    }

    let Some(model) = chosen else {
        return Ok(());
    };

    println!();
    println!("Assignments at vigilance 0.5:");
    for (x, k) in testing.iter().zip(model.predict(&testing)) {
        println!("{} - {}", x, k);
    }

    let json = model.to_json()?;
    let restored = Model::from_json(&json)?;
    println!();
    println!(
        "Snapshot: {} bytes, restored model agrees: {}",
        json.len(),
        restored.predict(&testing) == model.predict(&testing)
    );

    Ok(())
}
