// Figure builder - turns a sampled series into a chart specification
use crate::domain::figure::{AxisValues, Figure, FigureShape, Trace, TraceKind, TraceMode};
use crate::domain::sample::Series;

pub const SPATIAL_TRACE_NAME: &str = "Longitude vs Latitude";
pub const ALTITUDE_TRACE_NAME: &str = "Altitude";

/// Build the figure for `shape`, consuming the series.
///
/// Points keep the series' generation order (most recent first).
pub fn build_figure(series: Series, shape: FigureShape) -> Figure {
    let trace = match shape {
        FigureShape::Spatial => Trace {
            x: AxisValues::Integers(series.longitudes()),
            y: AxisValues::Integers(series.latitudes()),
            text: Some(series.timestamps()),
            name: SPATIAL_TRACE_NAME.to_string(),
            mode: TraceMode::LinesMarkers,
            kind: TraceKind::Scatter,
            xaxis: "x",
            yaxis: "y",
        },
        FigureShape::Altitude => Trace {
            x: AxisValues::Timestamps(series.timestamps()),
            y: AxisValues::Integers(series.altitudes()),
            text: None,
            name: ALTITUDE_TRACE_NAME.to_string(),
            mode: TraceMode::LinesMarkers,
            kind: TraceKind::Scatter,
            xaxis: "x",
            yaxis: "y",
        },
    };

    Figure::new(trace)
}
