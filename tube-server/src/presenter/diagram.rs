//! Route diagram layout.
//!
//! Lays a route out as a vertical line: one marker per step, a coloured
//! stroke between consecutive markers, text labels, and a ring wherever the
//! line changes. Coordinates are SVG user units.

use serde::Serialize;

use crate::domain::{DEFAULT_LINE_COLOR, LineColor, RouteStep, color_of};

/// Horizontal position of markers and strokes.
const LINE_X: u32 = 10;
/// Horizontal position of station labels.
const LABEL_X: u32 = 30;
/// Vertical distance between consecutive markers.
const STEP_SPACING: u32 = 120;
/// Vertical offset of the first marker.
const MARKER_OFFSET: u32 = 60;
const MARKER_RADIUS: u32 = 6;
const STROKE_WIDTH: u32 = 4;
const INDICATOR_RADIUS: u32 = 8;
/// Canvas height per step.
const HEIGHT_PER_STEP: u32 = 200;

/// A station marker, one per route step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub step: usize,
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
    pub fill: LineColor,
}

/// A stroke joining the markers of two consecutive steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stroke {
    pub from_step: usize,
    pub to_step: usize,
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    pub color: LineColor,
    pub width: u32,
}

/// A text label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub step: usize,
    pub x: u32,
    pub y: u32,
    pub text: String,
    pub fill: LineColor,
    pub bold: bool,
}

/// A ring marking a line change between two consecutive steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeIndicator {
    /// The pair of steps the change falls between.
    pub between: (usize, usize),
    pub cx: u32,
    pub cy: u32,
    pub r: u32,
    pub stroke: LineColor,
    pub stroke_width: u32,
}

/// Drawing primitives for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDiagram {
    pub height: u32,
    pub markers: Vec<Marker>,
    pub strokes: Vec<Stroke>,
    pub labels: Vec<Label>,
    pub change_indicators: Vec<ChangeIndicator>,
}

fn marker_y(step: usize) -> u32 {
    (step as u32 + 1) * STEP_SPACING + MARKER_OFFSET
}

impl RouteDiagram {
    /// Lay out a route.
    pub fn layout(route: &[RouteStep]) -> Self {
        let mut markers = Vec::with_capacity(route.len());
        let mut strokes = Vec::with_capacity(route.len().saturating_sub(1));
        let mut labels = Vec::with_capacity(route.len() * 3);
        let mut change_indicators = Vec::new();

        for (i, step) in route.iter().enumerate() {
            let color = color_of(&step.line_name);
            let y = marker_y(i);

            markers.push(Marker {
                step: i,
                cx: LINE_X,
                cy: y,
                r: MARKER_RADIUS,
                fill: color,
            });

            // Line name sits above the marker; station names beside it and
            // half a step below.
            let base = (i as u32 + 1) * STEP_SPACING;
            labels.push(Label {
                step: i,
                x: LINE_X,
                y: base + 15,
                text: step.line_name.clone(),
                fill: color,
                bold: true,
            });
            labels.push(Label {
                step: i,
                x: LABEL_X,
                y: base + 65,
                text: format!("{} ({})", step.from_station, step.line_name),
                fill: DEFAULT_LINE_COLOR,
                bold: false,
            });
            labels.push(Label {
                step: i,
                x: LABEL_X,
                y: base + STEP_SPACING / 2 + 65,
                text: format!("{} ({})", step.to_station, step.line_name),
                fill: DEFAULT_LINE_COLOR,
                bold: false,
            });

            let Some(next) = route.get(i + 1) else {
                continue;
            };

            strokes.push(Stroke {
                from_step: i,
                to_step: i + 1,
                x1: LINE_X,
                y1: y,
                x2: LINE_X,
                y2: marker_y(i + 1),
                color,
                width: STROKE_WIDTH,
            });

            if step.line_name != next.line_name {
                change_indicators.push(ChangeIndicator {
                    between: (i, i + 1),
                    cx: LINE_X,
                    cy: marker_y(i + 1),
                    r: INDICATOR_RADIUS,
                    stroke: DEFAULT_LINE_COLOR,
                    stroke_width: STROKE_WIDTH,
                });
            }
        }

        Self {
            height: HEIGHT_PER_STEP * (route.len() as u32 + 1),
            markers,
            strokes,
            labels,
            change_indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, to: &str, line: &str) -> RouteStep {
        RouteStep {
            from_station: from.into(),
            to_station: to.into(),
            line_name: line.into(),
        }
    }

    #[test]
    fn one_change_between_bakerloo_and_central() {
        let route = vec![
            step("Paddington", "Oxford Circus", "Bakerloo"),
            step("Oxford Circus", "Bank", "Central"),
        ];

        let diagram = RouteDiagram::layout(&route);

        assert_eq!(diagram.change_indicators.len(), 1);
        assert_eq!(diagram.change_indicators[0].between, (0, 1));
        assert_eq!(diagram.change_indicators[0].cy, diagram.markers[1].cy);
    }

    #[test]
    fn markers_at_fixed_spacing() {
        let route = vec![
            step("A", "B", "Jubilee"),
            step("B", "C", "Jubilee"),
            step("C", "D", "Jubilee"),
        ];

        let diagram = RouteDiagram::layout(&route);

        let ys: Vec<u32> = diagram.markers.iter().map(|m| m.cy).collect();
        assert_eq!(ys, vec![180, 300, 420]);
        assert!(diagram.markers.iter().all(|m| m.cx == 10 && m.r == 6));
        assert_eq!(diagram.height, 800);
    }

    #[test]
    fn strokes_join_consecutive_markers_in_step_color() {
        let route = vec![
            step("Paddington", "Oxford Circus", "Bakerloo"),
            step("Oxford Circus", "Bank", "Central"),
        ];

        let diagram = RouteDiagram::layout(&route);

        assert_eq!(diagram.strokes.len(), 1);
        let stroke = &diagram.strokes[0];
        assert_eq!((stroke.y1, stroke.y2), (180, 300));
        assert_eq!(stroke.color, color_of("Bakerloo"));
        assert_eq!(stroke.width, 4);
        assert_eq!(diagram.markers[1].fill, color_of("Central"));
    }

    #[test]
    fn same_line_has_no_indicator() {
        let route = vec![step("A", "B", "Victoria"), step("B", "C", "Victoria")];
        assert!(RouteDiagram::layout(&route).change_indicators.is_empty());
    }

    #[test]
    fn labels_name_stations_and_lines() {
        let route = vec![step("Paddington", "Oxford Circus", "Bakerloo")];
        let diagram = RouteDiagram::layout(&route);

        let texts: Vec<&str> = diagram.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Bakerloo",
                "Paddington (Bakerloo)",
                "Oxford Circus (Bakerloo)"
            ]
        );

        let ys: Vec<u32> = diagram.labels.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![135, 185, 245]);
        assert!(diagram.labels[0].bold);
    }

    #[test]
    fn empty_route_draws_nothing() {
        let diagram = RouteDiagram::layout(&[]);
        assert!(diagram.markers.is_empty());
        assert!(diagram.strokes.is_empty());
        assert!(diagram.change_indicators.is_empty());
        assert_eq!(diagram.height, 200);
    }
}
