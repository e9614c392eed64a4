//! Terminal plotting of distributions
//!
//! Plots take explicit `(x, y)` snapshots, e.g. [`Pmf::snapshot`](crate::prob::Pmf::snapshot),
//! so nothing here depends on the distribution types.

use log::LevelFilter;

use crate::error::Result;

pub use self::{app::App, components::Plot};

mod app;
mod components;
mod tui;

/// Tabs of the plot window
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Plot = 0,
    Logs = 1,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Plot, Tab::Logs];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Plot => "Plot",
            Tab::Logs => "Logs",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }
}

/// Display configuration for [`Figure::show`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Show the series labels
    pub legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: String::from("Posterior"),
            x_title: String::from("Hypothesis"),
            y_title: String::from("Probability"),
            legend: true,
        }
    }
}

/// A collection of series waiting to be shown
#[derive(Debug, Default)]
pub struct Figure {
    num: usize,
    series: Vec<(String, Vec<(f64, f64)>)>,
}

impl Figure {
    /// Start a figure that will hold about `num` series, which sizes its color cycle
    pub fn pre_plot(num: usize) -> Self {
        Self {
            num,
            series: Vec::with_capacity(num),
        }
    }

    /// Add a distribution snapshot as a line
    pub fn pmf(&mut self, label: impl Into<String>, snapshot: Vec<(f64, f64)>) -> &mut Self {
        self.series.push((label.into(), snapshot));
        self
    }

    /// Lay the series out as a [`Plot`] widget
    pub fn into_plot(self, config: PlotConfig) -> Plot {
        let mut plot = Plot::new(config, self.num.max(self.series.len()));
        for (label, data) in self.series {
            plot.push(label, data);
        }
        plot
    }

    /// Draw the figure in the terminal and block until the user closes it
    pub fn show(self, config: PlotConfig) -> Result<()> {
        App::new(self.into_plot(config)).run()?;
        Ok(())
    }
}

/// Route `log` records into the log tab
pub fn init_logger(level: LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    tui_logger::init_logger(level)?;
    tui_logger::set_default_level(level);
    Ok(())
}
