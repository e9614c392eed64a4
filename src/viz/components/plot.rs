use ratatui::{prelude::*, style::Stylize, widgets::*};

use crate::viz::PlotConfig;

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::LightGreen,
    Color::LightMagenta,
    Color::Yellow,
    Color::LightRed,
    Color::LightBlue,
];

/// A labelled series of points
pub struct Series {
    pub label: String,
    pub color: Color,
    pub data: Vec<(f64, f64)>,
}

/// A line chart of one or more distributions
pub struct Plot {
    config: PlotConfig,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    series: Vec<Series>,
    colors: Vec<Color>,
}

impl Plot {
    /// Initialize an empty plot, cycling through `num` colors for its series
    pub fn new(config: PlotConfig, num: usize) -> Self {
        Self {
            config,
            x_bounds: [f64::MAX, f64::MIN],
            y_bounds: [0.0, f64::MIN],
            series: Vec::new(),
            colors: PALETTE.iter().copied().cycle().take(num.max(1)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// Add a series, widening the bounds to fit it
    pub fn push(&mut self, label: impl Into<String>, data: Vec<(f64, f64)>) {
        for &(x, y) in &data {
            self.x_bounds[0] = self.x_bounds[0].min(x);
            self.x_bounds[1] = self.x_bounds[1].max(x);
            self.y_bounds[1] = self.y_bounds[1].max(y);
        }

        let color = self.colors[self.series.len() % self.colors.len()];
        self.series.push(Series {
            label: label.into(),
            color,
            data,
        });
    }

    fn labels(bounds: [f64; 2], precision: usize) -> Vec<Span<'static>> {
        let mid = (bounds[0] + bounds[1]) / 2.0;
        [bounds[0], mid, bounds[1]]
            .iter()
            .map(|v| format!("{v:.precision$}").bold())
            .collect()
    }
}

impl Widget for &Plot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let datasets = self
            .series
            .iter()
            .map(|s| {
                Dataset::default()
                    .name(s.label.as_str())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(s.color))
                    .data(&s.data)
            })
            .collect::<Vec<_>>();

        let x_axis = Axis::default()
            .title(self.config.x_title.as_str())
            .dark_gray()
            .labels(Plot::labels(self.x_bounds, 0))
            .bounds(self.x_bounds);

        let y_axis = Axis::default()
            .title(self.config.y_title.as_str())
            .dark_gray()
            .labels(Plot::labels(self.y_bounds, 4))
            .bounds(self.y_bounds);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.config.title.as_str())
            .padding(Padding::uniform(1));

        let legend = self.config.legend.then_some(LegendPosition::TopRight);

        Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(legend)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlotConfig {
        PlotConfig {
            title: String::from("Posterior"),
            ..Default::default()
        }
    }

    #[test]
    fn plot_functional() {
        let mut plot = Plot::new(config(), 2);
        assert!(plot.is_empty());

        plot.push("first", vec![(100.0, 0.01), (200.0, 0.02)]);
        plot.push("second", vec![(50.0, 0.005), (150.0, 0.03)]);
        assert_eq!(plot.len(), 2);
        assert_eq!(plot.x_bounds(), [50.0, 200.0], "x bounds cover every series");
        assert_eq!(plot.y_bounds(), [0.0, 0.03], "y bounds start at zero");
        assert_ne!(
            plot.series[0].color, plot.series[1].color,
            "series get distinct colors"
        );

        plot.push("third", vec![]);
        assert_eq!(plot.series[2].color, plot.series[0].color, "colors cycle");
    }

    #[test]
    fn plot_renders_title() {
        let mut plot = Plot::new(config(), 1);
        plot.push("posterior", vec![(100.0, 0.5), (200.0, 0.5)]);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        plot.render(area, &mut buf);

        let top = (0..area.width)
            .map(|x| buf.get(x, 0).symbol())
            .collect::<String>();
        assert!(top.contains("Posterior"), "block title is drawn");
    }
}
