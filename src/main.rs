use std::error::Error;

use log::{info, LevelFilter};
use trainspotter::{
    prob::Pmf,
    train::{self, Estimate, TrainProblemConfig},
};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging(LevelFilter::Debug)?;

    let config = TrainProblemConfig::default();
    let mut suite = train::build_suite(&config)?;
    info!(
        "{} hypotheses, prior mean {:.2}",
        suite.pmf().len(),
        suite.pmf().mean()
    );

    suite.update(config.first_observation)?;
    plot(
        suite.pmf(),
        &format!("Posterior after train {}", config.first_observation),
    )?;

    suite.update_set(config.observations.iter().copied())?;
    plot(
        suite.pmf(),
        &format!("Posterior after {} trains", config.observations.len() + 1),
    )?;

    let estimate = Estimate::from_pmf(suite.pmf(), config.credible_percentage)?;
    println!("{estimate}");

    Ok(())
}

#[cfg(feature = "viz")]
fn init_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    trainspotter::viz::init_logger(level)
}

#[cfg(all(not(feature = "viz"), feature = "headless"))]
fn init_logging(_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    pretty_env_logger::try_init()
}

/// No sink compiled in, log records are dropped
#[cfg(not(any(feature = "viz", feature = "headless")))]
fn init_logging(_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Ok(())
}

#[cfg(feature = "viz")]
fn plot(pmf: &Pmf<u32>, title: &str) -> trainspotter::error::Result<()> {
    use trainspotter::viz::{Figure, PlotConfig};

    let mut figure = Figure::pre_plot(1);
    figure.pmf("trains", pmf.snapshot());
    figure.show(PlotConfig {
        title: String::from(title),
        x_title: String::from("Number of trains"),
        y_title: String::from("Probability"),
        legend: false,
    })
}

#[cfg(not(feature = "viz"))]
fn plot(pmf: &Pmf<u32>, title: &str) -> trainspotter::error::Result<()> {
    info!(
        "{title}: built without `viz`, skipping plot of {} hypotheses",
        pmf.len()
    );
    Ok(())
}
