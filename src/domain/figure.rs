// Figure domain models - plotly-compatible chart specifications
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which pair of sample columns a figure plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureShape {
    /// Longitude vs latitude, timestamps as point labels.
    Spatial,
    /// Timestamp vs altitude.
    Altitude,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Integers(Vec<i32>),
    Timestamps(Vec<DateTime<Utc>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub x: AxisValues,
    pub y: AxisValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<DateTime<Utc>>>,
    pub name: String,
    pub mode: TraceMode,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub xaxis: &'static str,
    pub yaxis: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub anchor: &'static str,
    pub domain: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
    pub legend: Legend,
}

impl FigureLayout {
    /// Single subplot with a tight margin and the legend pinned top-left.
    pub fn single_subplot() -> Self {
        Self {
            xaxis: Axis {
                anchor: "y",
                domain: [0.0, 1.0],
            },
            yaxis: Axis {
                anchor: "x",
                domain: [0.0, 1.0],
            },
            margin: Margin {
                l: 30,
                r: 10,
                b: 30,
                t: 10,
            },
            legend: Legend {
                x: 0.0,
                y: 1.0,
                xanchor: "left",
            },
        }
    }
}

/// A complete chart: one subplot holding exactly one trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: [Trace; 1],
    pub layout: FigureLayout,
}

impl Figure {
    pub fn new(trace: Trace) -> Self {
        Self {
            data: [trace],
            layout: FigureLayout::single_subplot(),
        }
    }

    #[cfg(test)]
    pub fn trace(&self) -> &Trace {
        &self.data[0]
    }
}
