use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{html_writer, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage6Output;

impl Stage6Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Output {
    fn name(&self) -> &'static str {
        "stage6_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        html_writer::write_html(&ctx.output.html_path, ctx)?;
        info!(path = %ctx.output.html_path.display(), "html_report_ready");

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
            info!(path = %ctx.output.json_path.display(), "json_report_ready");
        }
        if ctx.write_tsv {
            let table = ctx.samples.as_ref().context("sample table missing")?;
            tsv_writer::write_tsv(&ctx.output.tsv_path, table)?;
            info!(path = %ctx.output.tsv_path.display(), "sample_tsv_ready");
        }

        Ok(())
    }
}
