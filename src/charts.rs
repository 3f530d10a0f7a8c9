//! Chart specifications derived from the sample table.
//!
//! Both derivations are pure: the same table always yields the same spec.

use crate::math::stats::{self, FiveNumberSummary};
use crate::samples::SampleTable;
use crate::style::Theme;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxTrace {
    pub name: String,
    pub summary: FiveNumberSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSpec {
    pub traces: Vec<BoxTrace>,
    pub fill_color: String,
    pub show_legend: bool,
    pub show_points: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarPlotSpec {
    pub axes: Vec<String>,
    pub values: Vec<f64>,
    pub radial_max: f64,
    pub line_color: String,
}

/// Radial headroom above the largest vertex so the polygon never touches
/// the outer ring.
pub const RADAR_HEADROOM: f64 = 1.2;

/// One box-and-whisker trace per column, all sharing the theme's primary
/// color. Individual sample points are suppressed.
pub fn box_plot(table: &SampleTable, theme: &Theme) -> BoxPlotSpec {
    let traces = table
        .columns
        .iter()
        .map(|col| {
            let mut values = col.values.clone();
            BoxTrace {
                name: col.name.clone(),
                summary: stats::five_number_summary(&mut values),
            }
        })
        .collect();
    BoxPlotSpec {
        traces,
        fill_color: theme.primary_color.clone(),
        show_legend: false,
        show_points: false,
    }
}

/// One polygon vertex per column at the column's arithmetic mean. The
/// radial axis runs to RADAR_HEADROOM times the largest mean.
pub fn radar_plot(table: &SampleTable, theme: &Theme) -> RadarPlotSpec {
    let axes = table.column_names();
    let values: Vec<f64> = table
        .columns
        .iter()
        .map(|col| stats::mean(&col.values))
        .collect();
    let max_mean = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let radial_max = if values.is_empty() {
        0.0
    } else {
        max_mean * RADAR_HEADROOM
    };
    RadarPlotSpec {
        axes,
        values,
        radial_max,
        line_color: theme.primary_color.clone(),
    }
}
