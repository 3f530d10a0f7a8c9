use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::{ClinicalHistoryRecord, PathologyPanel, PatientProfile, PredictionSummary};

pub struct Stage5Report;

impl Stage5Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Report {
    fn name(&self) -> &'static str {
        "stage5_report"
    }

    /// The patient-detail panels are fixed literals; only the render
    /// metadata comes from earlier stages.
    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx.samples.as_ref().context("sample table missing")?;

        ctx.report.render.columns = table.column_names();
        ctx.report.render.rows = table.n_rows() as u64;
        ctx.report.render.seed = ctx.seed;

        ctx.report.patient = PatientProfile::demo();
        ctx.report.history = ClinicalHistoryRecord::demo();
        ctx.report.pathology = PathologyPanel::demo();
        ctx.report.prediction = PredictionSummary::demo();

        info!(
            predicted_oocytes = ctx.report.prediction.predicted_oocytes,
            "report_model_ready"
        );
        Ok(())
    }
}
