use serde::{Deserialize, Serialize};

/// Per-event-type summary of normal behaviour, as served by `GET /baseline`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    pub event: String,
    pub mean: f64,
    pub stddev: f64,
}

impl BaselineRow {
    pub fn new(event: impl Into<String>, mean: f64, stddev: f64) -> Self {
        Self {
            event: event.into(),
            mean,
            stddev,
        }
    }
}

/// Liveness of the backend as last seen by the status probe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatCardData {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub delta: i32,
}

impl StatCardData {
    pub fn new(title: impl Into<String>, value: impl Into<String>, delta: i32) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            delta,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.delta >= 0
    }

    pub fn delta_label(&self) -> String {
        if self.is_positive() {
            format!("+{}%", self.delta)
        } else {
            format!("{}%", self.delta)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// Scales a series into a `width` x `height` box with the origin at the top left,
/// formatted as an SVG `points` attribute.
pub fn polyline_points(series: &[SeriesPoint], width: f64, height: f64) -> String {
    if series.is_empty() {
        return String::new();
    }

    let (min_x, max_x) = bounds(series.iter().map(|point| point.x));
    let (min_y, max_y) = bounds(series.iter().map(|point| point.y));
    let span_x = max_x - min_x;
    let span_y = max_y - min_y;

    series
        .iter()
        .map(|point| {
            let x = if span_x > 0.0 {
                (point.x - min_x) / span_x * width
            } else {
                0.0
            };
            // flat series sit on the vertical midline
            let y = if span_y > 0.0 {
                height - (point.y - min_y) / span_y * height
            } else {
                height / 2.0
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonutSlice {
    pub name: String,
    pub value: f64,
}

impl DonutSlice {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Fraction of the total held by each slice, in input order.
pub fn donut_shares(slices: &[DonutSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|slice| slice.value.max(0.0)).sum();
    slices
        .iter()
        .map(|slice| {
            if total > 0.0 {
                slice.value.max(0.0) / total
            } else {
                0.0
            }
        })
        .collect()
}
