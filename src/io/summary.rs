use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let table = ctx.samples.as_ref().context("sample table missing")?;
    let prediction = &ctx.report.prediction;

    let mut out = String::new();
    out.push_str(&format!("klara-report v{}\n", version));
    out.push_str(&format!(
        "Samples: {} rows x {} columns, seed={}\n",
        table.n_rows(),
        table.n_columns(),
        ctx.seed
    ));
    out.push_str(&format!(
        "Predicted oocytes: {} (influence: {}, error {}..{:+})\n",
        prediction.predicted_oocytes,
        prediction.influential_factor,
        prediction.error_low,
        prediction.error_high
    ));

    let mut outputs = vec![ctx.output.html_path.display().to_string()];
    if ctx.write_json {
        outputs.push(ctx.output.json_path.display().to_string());
    }
    if ctx.write_tsv {
        outputs.push(ctx.output.tsv_path.display().to_string());
    }
    out.push_str(&format!("Outputs: {}\n", outputs.join(", ")));

    Ok(out)
}
