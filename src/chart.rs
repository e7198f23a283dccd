use crate::app::Message;
use crate::weather::ForecastPoint;
use iced::{
    alignment,
    widget::canvas::{self, Frame, Path, Stroke, Text},
    Color, Point, Rectangle, Size, Theme,
};

const LEFT_MARGIN: f32 = 60.0;
const RIGHT_MARGIN: f32 = 30.0;
const TOP_MARGIN: f32 = 40.0;
const BOTTOM_MARGIN: f32 = 50.0;
const GRID_LINES: usize = 5;

pub const CHART_TITLE: &str = "5-Day Temperature Forecast";

/// Line chart of the sampled forecast temperatures. Everything is redrawn
/// from `points` on each frame.
#[derive(Debug, Clone)]
pub struct ForecastChart {
    points: Vec<ForecastPoint>,
    temperature_symbol: &'static str,
    background: Color,
}

impl ForecastChart {
    pub fn new(
        points: Vec<ForecastPoint>,
        temperature_symbol: &'static str,
        background: Color,
    ) -> Self {
        Self {
            points,
            temperature_symbol,
            background,
        }
    }

    /// Temperature range of the y axis, padded by 10% (or 1° when flat).
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_temp = f64::MAX;
        let mut max_temp = f64::MIN;
        for point in &self.points {
            min_temp = min_temp.min(point.temperature);
            max_temp = max_temp.max(point.temperature);
        }

        let range = max_temp - min_temp;
        if range > 0.0 {
            Some((min_temp - range * 0.1, max_temp + range * 0.1))
        } else {
            Some((min_temp - 1.0, max_temp + 1.0))
        }
    }

    /// Marker positions, one per forecast point, for a canvas of `size`.
    pub fn plot_points(&self, size: Size) -> Vec<Point> {
        let Some((min_temp, max_temp)) = self.temperature_range() else {
            return Vec::new();
        };
        let graph_width = (size.width - LEFT_MARGIN - RIGHT_MARGIN).max(0.0);
        let graph_height = (size.height - TOP_MARGIN - BOTTOM_MARGIN).max(0.0);
        let steps = self.points.len().saturating_sub(1).max(1) as f32;

        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = if self.points.len() == 1 {
                    LEFT_MARGIN + graph_width / 2.0
                } else {
                    LEFT_MARGIN + (i as f32 / steps) * graph_width
                };
                let y = TOP_MARGIN
                    + (1.0 - ((point.temperature - min_temp) / (max_temp - min_temp)) as f32)
                        * graph_height;
                Point::new(x, y)
            })
            .collect()
    }
}

fn label(content: String, position: Point, size: f32, color: Color) -> Text {
    Text {
        content,
        position,
        size: size.into(),
        color,
        font: iced::Font::default(),
        horizontal_alignment: alignment::Horizontal::Center,
        vertical_alignment: alignment::Vertical::Top,
        line_height: iced::widget::text::LineHeight::default(),
        shaping: iced::widget::text::Shaping::default(),
    }
}

impl canvas::Program<Message> for ForecastChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let text_color = theme.palette().text;
        let grid_color = Color {
            a: 0.2,
            ..text_color
        };

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.background);

        frame.fill_text(label(
            CHART_TITLE.to_string(),
            Point::new(bounds.width / 2.0, 8.0),
            16.0,
            text_color,
        ));

        let Some((min_temp, max_temp)) = self.temperature_range() else {
            return vec![frame.into_geometry()];
        };

        let graph_left = LEFT_MARGIN;
        let graph_right = bounds.width - RIGHT_MARGIN;
        let graph_top = TOP_MARGIN;
        let graph_bottom = bounds.height - BOTTOM_MARGIN;

        // Horizontal grid with temperature labels
        for i in 0..=GRID_LINES {
            let ratio = i as f32 / GRID_LINES as f32;
            let y = graph_top + ratio * (graph_bottom - graph_top);
            let temp = max_temp - f64::from(ratio) * (max_temp - min_temp);

            frame.stroke(
                &Path::line(Point::new(graph_left, y), Point::new(graph_right, y)),
                Stroke::default().with_width(1.0).with_color(grid_color),
            );
            frame.fill_text(Text {
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Center,
                ..label(
                    format!("{temp:.1}"),
                    Point::new(graph_left - 6.0, y),
                    12.0,
                    text_color,
                )
            });
        }

        let plotted = self.plot_points(bounds.size());

        // Vertical grid and date labels
        for (point, forecast) in plotted.iter().zip(&self.points) {
            frame.stroke(
                &Path::line(
                    Point::new(point.x, graph_top),
                    Point::new(point.x, graph_bottom),
                ),
                Stroke::default().with_width(1.0).with_color(grid_color),
            );
            frame.fill_text(label(
                forecast.date.clone(),
                Point::new(point.x, graph_bottom + 6.0),
                12.0,
                text_color,
            ));
        }

        // Translucent area under the line
        if plotted.len() > 1 {
            let area = Path::new(|builder| {
                builder.move_to(Point::new(plotted[0].x, graph_bottom));
                for point in &plotted {
                    builder.line_to(*point);
                }
                builder.line_to(Point::new(plotted[plotted.len() - 1].x, graph_bottom));
                builder.close();
            });
            frame.fill(&area, Color::from_rgba(0.0, 0.0, 1.0, 0.1));
        }

        for pair in plotted.windows(2) {
            frame.stroke(
                &Path::line(pair[0], pair[1]),
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.0, 0.0, 1.0)),
            );
        }

        for point in &plotted {
            frame.fill(&Path::circle(*point, 4.0), Color::from_rgb(0.0, 0.0, 1.0));
        }

        frame.fill_text(label(
            "Date".to_string(),
            Point::new((graph_left + graph_right) / 2.0, bounds.height - 22.0),
            13.0,
            text_color,
        ));
        frame.fill_text(Text {
            horizontal_alignment: alignment::Horizontal::Left,
            ..label(
                format!("Temperature ({})", self.temperature_symbol),
                Point::new(6.0, 8.0),
                13.0,
                text_color,
            )
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(temps: &[f64]) -> Vec<ForecastPoint> {
        temps
            .iter()
            .enumerate()
            .map(|(i, t)| ForecastPoint {
                date: format!("2023-11-{:02}", 14 + i),
                temperature: *t,
                description: "clear sky".to_string(),
            })
            .collect()
    }

    #[test]
    fn one_marker_per_forecast_point() {
        let temps = [10.0, 12.0, 9.5, 14.0, 11.0];
        let chart = ForecastChart::new(points(&temps), "°C", Color::WHITE);
        let plotted = chart.plot_points(Size::new(640.0, 320.0));

        assert_eq!(plotted.len(), 5);
        assert_eq!(plotted[0].x, LEFT_MARGIN);
        assert_eq!(plotted[4].x, 640.0 - RIGHT_MARGIN);
        assert!(plotted.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn warmer_points_sit_higher() {
        let chart = ForecastChart::new(points(&[10.0, 20.0]), "°C", Color::WHITE);
        let plotted = chart.plot_points(Size::new(640.0, 320.0));

        assert!(plotted[1].y < plotted[0].y);
        let bottom = 320.0 - BOTTOM_MARGIN;
        assert!(plotted.iter().all(|p| p.y >= TOP_MARGIN && p.y <= bottom));
    }

    #[test]
    fn flat_series_gets_padded_range() {
        let chart = ForecastChart::new(points(&[7.0, 7.0, 7.0]), "°C", Color::WHITE);
        assert_eq!(chart.temperature_range(), Some((6.0, 8.0)));
    }

    #[test]
    fn empty_chart_plots_nothing() {
        let chart = ForecastChart::new(Vec::new(), "°F", Color::WHITE);
        assert!(chart.temperature_range().is_none());
        assert!(chart.plot_points(Size::new(640.0, 320.0)).is_empty());
    }
}
