//! Walks one sample set through every binning rule and normalization
//!
//! Run with `RUST_LOG=binstat_histogram=debug` to see the layouts the engine
//! resolves.

use binstat_histogram::{BinningAlgorithm, HistogramEngine, NormalizationType};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal};
use tracing_subscriber::EnvFilter;

fn print_bars(engine: &HistogramEngine) {
    let peak = engine
        .normalized_values()
        .iter()
        .copied()
        .fold(0.0_f64, f64::max);
    for (center, value) in engine.bin_centers().iter().zip(engine.normalized_values()) {
        let bar = if peak > 0.0 { (value / peak * 40.0).round() as usize } else { 0 };
        println!("  {center:>8.2} | {:<40} {value:.4}", "#".repeat(bar));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(50.0, 8.0)?;
    let skewed = LogNormal::new(2.0, 0.6)?;

    // Bimodal-ish sample: a normal bulk plus a heavy right tail
    let mut data: Vec<f64> = (0..800).map(|_| normal.sample(&mut rng)).collect();
    data.extend((0..200).map(|_| 60.0 + skewed.sample(&mut rng)));

    let mut engine = HistogramEngine::new();
    engine.append_batch(&data)?;

    for algorithm in BinningAlgorithm::RULES {
        engine.set_binning_algorithm(algorithm)?;
        println!(
            "{algorithm}: {} bins of width {:.3}",
            engine.number_of_bins(),
            engine.bin_width().unwrap_or(f64::NAN)
        );
    }

    engine.set_binning_algorithm(BinningAlgorithm::FreedmanDiaconisRule)?;
    for normalization in NormalizationType::ALL {
        engine.set_normalization_type(normalization);
        println!("\n{normalization} ({})", engine.histogram());
        print_bars(&engine);
    }

    // Pin the width and watch new samples fall outside the frozen limits
    engine.set_bin_width(5.0)?;
    engine.append(500.0)?;
    let snapshot = engine.snapshot();
    println!(
        "\nwidth 5.0: {} bins over [{:.2}, {:.2}], {} of {} samples binned",
        snapshot.number_of_bins(),
        snapshot.lower_limit().unwrap_or(f64::NAN),
        snapshot.upper_limit().unwrap_or(f64::NAN),
        snapshot.binned_count(),
        snapshot.total_count()
    );

    Ok(())
}
