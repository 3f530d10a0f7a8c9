use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::samples::{self, SampleGenerator};

pub struct Stage3Samples;

impl Stage3Samples {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Samples {
    fn name(&self) -> &'static str {
        "stage3_samples"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let generator = SampleGenerator::new(ctx.seed, ctx.rows, &samples::clinical_columns())?;
        let table = generator.generate();
        info!(
            rows = table.n_rows(),
            columns = table.n_columns(),
            seed = ctx.seed,
            "sample_table_ready"
        );
        ctx.samples = Some(table);
        Ok(())
    }
}
