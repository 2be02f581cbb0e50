use anyhow::{Context, Result};
use clap::Parser;
use opt_sma::{Config, contributions, evaluate, write_strategy};
use stratlab::io::read::load_close_series;
use stratlab::search::maximize;

fn main() -> Result<()> {
    println!("OPT_SMA - Moving Average Crossover Grid Search\n");

    let config = Config::parse();
    config.validate()?;

    println!("Loading market data...");
    let series = load_close_series(&config.data)
        .with_context(|| format!("failed to load {}", config.data))?;
    println!("Bars: {}", series.len());

    let returns = series.returns();
    let points = config.grid().points();
    println!("Grid points: {}", points.len());

    let report = maximize(points, |point| evaluate(series.closes(), &returns, point))?;

    println!("\n{}", "=".repeat(60));
    println!("Search Results");
    println!("{}", "=".repeat(60));
    println!(
        "Best: fast={}, slow={}, score={:.4}",
        report.best.fast, report.best.slow, report.score
    );
    println!("Points evaluated: {}", report.evaluated);

    let contribs = contributions(series.closes(), &returns, &report.best);
    let metrics = backtesting::metrics::summarize(&contribs);
    println!(
        "Total return: {:.4}",
        metrics.get("Total Return").unwrap_or(&0.0)
    );
    println!(
        "Max drawdown: {:.4}",
        metrics.get("Max Drawdown").unwrap_or(&0.0)
    );
    println!(
        "Bar volatility: {:.6}",
        metrics.get("Bar Volatility").unwrap_or(&0.0)
    );

    write_strategy(&config.output, &config.symbol, &report.best)?;
    println!("\nSaved optimal params to {}", config.output);

    Ok(())
}
