use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use train_classifier::{strategy_config_path, write_model, write_strategy, Config};

use stratlab::dataset::build_dataset;
use stratlab::io::read::load_close_series;
use stratlab::models::logistic::{accuracy, fit};

fn main() -> Result<()> {
    println!("TRAIN_CLASSIFIER - Logistic Up/Down Classifier\n");

    let config = Config::parse();
    config.validate()?;

    println!("Loading market data...");
    let series = load_close_series(&config.data)
        .with_context(|| format!("failed to load {}", config.data))?;
    println!("Bars: {}", series.len());

    let returns = series.returns();
    let dataset = build_dataset(&returns, config.lookback)?;
    println!("Training cases: {}", dataset.len());
    let up_count = dataset.labels.iter().filter(|&&l| l == 1).count();
    println!(
        "Up labels: {} ({:.1}%)",
        up_count,
        100.0 * up_count as f64 / dataset.len() as f64
    );

    println!("\nFitting model...");
    let model = fit(&dataset.features, &dataset.labels, &config.fit_options())?;

    println!("\n{}", "=".repeat(60));
    println!("Training Results");
    println!("{}", "=".repeat(60));
    println!("Bias: {:.6}", model.bias);
    println!("Weights: {}", model.weights.len());
    println!(
        "In-sample accuracy: {:.2}%",
        100.0 * accuracy(&model, &dataset.features, &dataset.labels)
    );

    write_model(&config.output, &model)?;
    let strategy_path = strategy_config_path(Path::new(&config.output));
    write_strategy(
        &strategy_path,
        &config.symbol,
        &config.output,
        config.lookback,
    )?;
    println!(
        "\nModel saved to {}, strategy config to {}",
        config.output,
        strategy_path.display()
    );

    Ok(())
}
