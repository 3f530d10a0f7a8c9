use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::samples::SampleTable;

pub fn write_tsv(path: &Path, table: &SampleTable) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let n = table.n_rows();
    for col in &table.columns {
        ensure_len(col.values.len(), n, &col.name)?;
    }

    let header: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    writeln!(w, "{}", header.join("\t"))?;

    for row in 0..n {
        let mut line = String::new();
        for (i, col) in table.columns.iter().enumerate() {
            if i > 0 {
                line.push('\t');
            }
            line.push_str(&format!("{:.6}", col.values[row]));
        }
        writeln!(w, "{}", line)?;
    }

    Ok(())
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("column {} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
