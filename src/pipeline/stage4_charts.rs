use anyhow::{Context, Result};
use tracing::info;

use crate::charts;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage4Charts;

impl Stage4Charts {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Charts {
    fn name(&self) -> &'static str {
        "stage4_charts"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let theme = ctx.theme.as_ref().context("theme missing")?;
        let table = ctx.samples.as_ref().context("sample table missing")?;

        let box_plot = charts::box_plot(table, theme);
        let radar_plot = charts::radar_plot(table, theme);
        info!(
            box_traces = box_plot.traces.len(),
            radar_axes = radar_plot.axes.len(),
            radial_max = radar_plot.radial_max,
            "chart_specs_ready"
        );

        ctx.box_plot = Some(box_plot);
        ctx.radar_plot = Some(radar_plot);
        Ok(())
    }
}
