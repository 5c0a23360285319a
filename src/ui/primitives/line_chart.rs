//! Line chart primitive
//!
//! Draws one labelled series on a Canvas: dashed horizontal grid, axis
//! labels, a thick line with point markers, a legend and a hover tooltip for
//! the point nearest to the cursor.
//!
//! The cursor position is passed in by the caller, so the chart itself keeps
//! no state and redraws whenever the caller's cursor message arrives.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{Frame, Geometry, LineDash, Path, Program, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Space reserved around the plot area for labels and the legend
const LEFT_MARGIN: f32 = 64.0;
const RIGHT_MARGIN: f32 = 20.0;
const TOP_MARGIN: f32 = 16.0;
const BOTTOM_MARGIN: f32 = 64.0;

/// Number of grid intervals on the value axis
const Y_INTERVALS: u32 = 4;

/// Minimum horizontal room per x axis label
const MIN_LABEL_SPACING: f32 = 72.0;

/// Longest x axis label before truncation
const MAX_LABEL_CHARS: usize = 12;

const LINE_WIDTH: f32 = 3.0;
const DOT_RADIUS: f32 = 3.5;
const ACTIVE_DOT_RADIUS: f32 = 8.0;

/// Geometry of the plot area for a given canvas size and series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub plot: Rectangle,
    pub count: usize,
    /// Top of the value axis, a whole number of `step`s
    pub y_max: u64,
    pub step: u64,
}

impl ChartLayout {
    pub fn new(size: Size, values: &[u64]) -> Self {
        let plot = Rectangle {
            x: LEFT_MARGIN,
            y: TOP_MARGIN,
            width: (size.width - LEFT_MARGIN - RIGHT_MARGIN).max(1.0),
            height: (size.height - TOP_MARGIN - BOTTOM_MARGIN).max(1.0),
        };
        let max = values.iter().copied().max().unwrap_or(0);
        let step = tick_step(max, Y_INTERVALS);

        Self {
            plot,
            count: values.len(),
            y_max: step.saturating_mul(u64::from(Y_INTERVALS)),
            step,
        }
    }

    /// Horizontal distance between neighbouring points
    fn spacing(&self) -> f32 {
        if self.count > 1 {
            self.plot.width / (self.count - 1) as f32
        } else {
            0.0
        }
    }

    pub fn x_for(&self, index: usize) -> f32 {
        if self.count <= 1 {
            self.plot.x + self.plot.width / 2.0
        } else {
            self.plot.x + index as f32 * self.spacing()
        }
    }

    pub fn y_for(&self, value: u64) -> f32 {
        let ratio = if self.y_max == 0 {
            0.0
        } else {
            (value as f64 / self.y_max as f64) as f32
        };
        self.plot.y + self.plot.height * (1.0 - ratio.clamp(0.0, 1.0))
    }

    /// Index of the point closest to `x`, clamped to the series
    pub fn nearest_index(&self, x: f32) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let raw = ((x - self.plot.x) / self.spacing()).round();
                Some(raw.clamp(0.0, (n - 1) as f32) as usize)
            }
        }
    }

    /// Values at each grid line, bottom to top
    pub fn ticks(&self) -> impl Iterator<Item = u64> + '_ {
        (0..=Y_INTERVALS).map(move |i| self.step.saturating_mul(u64::from(i)))
    }

    /// Draw every n-th x label so they do not overlap
    pub fn label_stride(&self) -> usize {
        if self.count == 0 {
            return 1;
        }
        let fits = (self.plot.width / MIN_LABEL_SPACING).floor().max(1.0) as usize;
        self.count.div_ceil(fits).max(1)
    }
}

/// Smallest "nice" step (1, 2, 2.5 or 5 times a power of ten) that covers
/// `max` in `intervals` steps
pub fn tick_step(max: u64, intervals: u32) -> u64 {
    let raw = (max as f64 / f64::from(intervals.max(1))).max(1.0);
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    ((nice * magnitude).ceil() as u64).max(1)
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    }
}

/// Single-series line chart
pub struct LineChart<'a> {
    labels: Vec<&'a str>,
    values: Vec<u64>,
    cursor: Option<Point>,
    series_name: &'a str,
    format_tick: fn(u64) -> String,
    line_color: Color,
}

impl<'a> LineChart<'a> {
    pub fn new(points: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        let (labels, values) = points.into_iter().unzip();
        Self {
            labels,
            values,
            cursor: None,
            series_name: "",
            format_tick: |v| v.to_string(),
            line_color: theme::CHART_LINE,
        }
    }

    /// Cursor position relative to the chart bounds
    pub fn cursor(mut self, cursor: Option<Point>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Name shown in the legend and tooltip
    pub fn series_name(mut self, name: &'a str) -> Self {
        self.series_name = name;
        self
    }

    pub fn tick_formatter(mut self, format: fn(u64) -> String) -> Self {
        self.format_tick = format;
        self
    }

    fn draw_grid(&self, frame: &mut Frame, layout: &ChartLayout, axis_color: Color) {
        let plot = layout.plot;
        let dashed = Stroke {
            line_dash: LineDash {
                segments: &[3.0, 3.0],
                offset: 0,
            },
            ..Stroke::default()
                .with_color(theme::CHART_GRID)
                .with_width(1.0)
        };

        for tick in layout.ticks() {
            let y = layout.y_for(tick);
            frame.stroke(
                &Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y)),
                dashed.clone(),
            );
            frame.fill_text(Text {
                content: (self.format_tick)(tick),
                position: Point::new(plot.x - 8.0, y),
                color: axis_color,
                size: Pixels(11.0),
                align_x: Horizontal::Right.into(),
                align_y: Vertical::Center,
                ..Text::default()
            });
        }

        let axis = Stroke::default().with_color(axis_color).with_width(1.0);
        let bottom = plot.y + plot.height;
        frame.stroke(
            &Path::line(Point::new(plot.x, plot.y), Point::new(plot.x, bottom)),
            axis.clone(),
        );
        frame.stroke(
            &Path::line(
                Point::new(plot.x, bottom),
                Point::new(plot.x + plot.width, bottom),
            ),
            axis,
        );

        let stride = layout.label_stride();
        for (index, label) in self.labels.iter().enumerate().step_by(stride) {
            frame.fill_text(Text {
                content: truncate_label(label),
                position: Point::new(layout.x_for(index), bottom + 8.0),
                color: axis_color,
                size: Pixels(11.0),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Top,
                ..Text::default()
            });
        }
    }

    fn draw_series(&self, frame: &mut Frame, layout: &ChartLayout) {
        let points: Vec<Point> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| Point::new(layout.x_for(i), layout.y_for(*v)))
            .collect();

        if points.len() > 1 {
            let line = Path::new(|builder| {
                builder.move_to(points[0]);
                for point in &points[1..] {
                    builder.line_to(*point);
                }
            });
            frame.stroke(
                &line,
                Stroke::default()
                    .with_color(self.line_color)
                    .with_width(LINE_WIDTH),
            );
        }

        for point in &points {
            let dot = Path::circle(*point, DOT_RADIUS);
            frame.fill(&dot, self.line_color);
            frame.stroke(
                &dot,
                Stroke::default().with_color(self.line_color).with_width(2.0),
            );
        }
    }

    fn draw_legend(&self, frame: &mut Frame, size: Size) {
        let y = size.height - 14.0;
        let center_x = LEFT_MARGIN + (size.width - LEFT_MARGIN - RIGHT_MARGIN) / 2.0;
        let swatch_start = Point::new(center_x - 30.0, y);
        let swatch_end = Point::new(center_x - 14.0, y);

        frame.stroke(
            &Path::line(swatch_start, swatch_end),
            Stroke::default()
                .with_color(self.line_color)
                .with_width(LINE_WIDTH),
        );
        frame.fill(
            &Path::circle(Point::new(center_x - 22.0, y), DOT_RADIUS),
            self.line_color,
        );
        frame.fill_text(Text {
            content: self.series_name.to_string(),
            position: Point::new(center_x - 8.0, y),
            color: self.line_color,
            size: Pixels(12.0),
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Center,
            ..Text::default()
        });
    }

    fn draw_tooltip(&self, frame: &mut Frame, layout: &ChartLayout, size: Size, index: usize) {
        let (Some(label), Some(value)) = (self.labels.get(index), self.values.get(index)) else {
            return;
        };
        let anchor = Point::new(layout.x_for(index), layout.y_for(*value));

        // Vertical cursor line
        frame.stroke(
            &Path::line(
                Point::new(anchor.x, layout.plot.y),
                Point::new(anchor.x, layout.plot.y + layout.plot.height),
            ),
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.25))
                .with_width(1.0),
        );

        // Active dot
        let active = Path::circle(anchor, ACTIVE_DOT_RADIUS);
        frame.fill(&active, Color::WHITE);
        frame.stroke(
            &active,
            Stroke::default().with_color(self.line_color).with_width(2.0),
        );

        let title = (*label).to_string();
        let detail = format!("{} : {}", self.series_name, value);
        let chars = title.chars().count().max(detail.chars().count()) as f32;
        let box_size = Size::new(chars * 7.0 + 24.0, 52.0);

        // Prefer the right side of the point, flip when it would overflow
        let mut origin = Point::new(anchor.x + 14.0, anchor.y - box_size.height - 8.0);
        if origin.x + box_size.width > size.width {
            origin.x = anchor.x - 14.0 - box_size.width;
        }
        origin.x = origin.x.max(0.0);
        origin.y = origin.y.max(0.0);

        frame.fill(
            &Path::rounded_rectangle(origin, box_size, 6.0.into()),
            theme::CHART_TOOLTIP,
        );
        frame.fill_text(Text {
            content: title,
            position: Point::new(origin.x + 12.0, origin.y + 10.0),
            color: Color::WHITE,
            size: Pixels(12.0),
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Top,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: detail,
            position: Point::new(origin.x + 12.0, origin.y + 29.0),
            color: self.line_color,
            size: Pixels(12.0),
            align_x: Horizontal::Left.into(),
            align_y: Vertical::Top,
            ..Text::default()
        });
    }
}

impl<Message> Program<Message> for LineChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        let layout = ChartLayout::new(size, &self.values);
        let axis_color = theme::text_secondary(theme);

        self.draw_grid(&mut frame, &layout, axis_color);
        self.draw_series(&mut frame, &layout);
        self.draw_legend(&mut frame, size);

        if let Some(index) = self.cursor.and_then(|p| layout.nearest_index(p.x)) {
            self.draw_tooltip(&mut frame, &layout, size, index);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(values: &[u64]) -> ChartLayout {
        ChartLayout::new(Size::new(484.0, 400.0), values)
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0, 4), 1);
        assert_eq!(tick_step(4, 4), 1);
        assert_eq!(tick_step(1_000, 4), 250);
        assert_eq!(tick_step(1_500, 4), 500);
        assert_eq!(tick_step(2_500_000, 4), 1_000_000);
    }

    #[test]
    fn test_axis_covers_max_value() {
        let chart = layout(&[120, 7_300, 45]);
        assert!(chart.y_max >= 7_300);
        assert_eq!(chart.ticks().count(), 5);
        assert_eq!(chart.ticks().last(), Some(chart.y_max));
        assert_eq!(chart.y_for(0), chart.plot.y + chart.plot.height);
        assert_eq!(chart.y_for(chart.y_max), chart.plot.y);
    }

    #[test]
    fn test_huge_values_do_not_overflow_axis() {
        let chart = layout(&[u64::MAX]);
        assert_eq!(chart.y_max, u64::MAX);
        let ticks: Vec<u64> = chart.ticks().collect();
        assert_eq!(ticks.len(), 5);
        assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(chart.y_for(u64::MAX), chart.plot.y);
    }

    #[test]
    fn test_points_span_plot_width() {
        let chart = layout(&[1, 2, 3, 4, 5]);
        assert_eq!(chart.x_for(0), chart.plot.x);
        assert!((chart.x_for(4) - (chart.plot.x + chart.plot.width)).abs() < 1e-3);
    }

    #[test]
    fn test_single_point_is_centered() {
        let chart = layout(&[10]);
        assert_eq!(chart.x_for(0), chart.plot.x + chart.plot.width / 2.0);
        assert_eq!(chart.nearest_index(0.0), Some(0));
    }

    #[test]
    fn test_nearest_index() {
        let chart = layout(&[1, 2, 3, 4, 5]);
        assert_eq!(layout(&[]).nearest_index(100.0), None);
        assert_eq!(chart.nearest_index(-50.0), Some(0));
        assert_eq!(chart.nearest_index(chart.x_for(2) + 10.0), Some(2));
        assert_eq!(chart.nearest_index(chart.x_for(3) - 10.0), Some(3));
        assert_eq!(chart.nearest_index(10_000.0), Some(4));
    }

    #[test]
    fn test_label_stride_thins_crowded_axis() {
        assert_eq!(layout(&[1, 2, 3]).label_stride(), 1);
        let crowded = layout(&vec![1; 50]);
        let stride = crowded.label_stride();
        assert!(stride > 1);
        let shown = (0..50).step_by(stride).count() as f32;
        assert!(shown * MIN_LABEL_SPACING <= crowded.plot.width + MIN_LABEL_SPACING);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Episode 1"), "Episode 1");
        let long = truncate_label("A very long video title indeed");
        assert_eq!(long.chars().count(), MAX_LABEL_CHARS);
        assert!(long.ends_with('…'));
    }
}
