//! Synthetic clinical sample table used to populate the demonstration
//! charts. This is display data only, not a predictive model.

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::Normal;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: usize = 20;

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub mean: f64,
    pub sd: f64,
}

/// The eight cycle parameters charted by the report, in display order.
pub fn clinical_columns() -> [ColumnSpec; 8] {
    [
        ColumnSpec { name: "height", mean: 1.65, sd: 0.10 },
        ColumnSpec { name: "weight", mean: 60.0, sd: 5.0 },
        ColumnSpec { name: "age", mean: 35.0, sd: 4.0 },
        ColumnSpec { name: "ER/SAD/Cycle", mean: 15.0, sd: 2.0 },
        ColumnSpec { name: "AMH", mean: 15.0, sd: 3.0 },
        ColumnSpec { name: "FSH", mean: 9.0, sd: 2.0 },
        ColumnSpec { name: "E2", mean: 200.0, sd: 50.0 },
        ColumnSpec { name: "LH", mean: 10.0, sd: 2.5 },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleColumn {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    pub columns: Vec<SampleColumn>,
}

impl SampleTable {
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&SampleColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

#[derive(Debug)]
pub struct SampleGenerator {
    seed: u64,
    rows: usize,
    dists: Vec<(String, Normal)>,
}

impl SampleGenerator {
    /// Invalid distribution parameters are rejected here, before any
    /// drawing happens.
    pub fn new(seed: u64, rows: usize, specs: &[ColumnSpec]) -> Result<Self> {
        if rows == 0 {
            bail!("sample table requires at least one row");
        }
        if specs.is_empty() {
            bail!("sample table requires at least one column");
        }
        let mut dists = Vec::with_capacity(specs.len());
        for spec in specs {
            if !spec.mean.is_finite() || !spec.sd.is_finite() {
                bail!("column {}: mean and sd must be finite", spec.name);
            }
            let dist = Normal::new(spec.mean, spec.sd).map_err(|e| {
                anyhow::anyhow!("column {}: invalid normal parameters: {}", spec.name, e)
            })?;
            dists.push((spec.name.to_string(), dist));
        }
        Ok(Self { seed, rows, dists })
    }

    /// Same seed and row count give a bit-identical table. Columns are
    /// drawn as contiguous blocks in declaration order.
    pub fn generate(&self) -> SampleTable {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let columns = self
            .dists
            .iter()
            .map(|(name, dist)| SampleColumn {
                name: name.clone(),
                values: (0..self.rows).map(|_| dist.sample(&mut rng)).collect(),
            })
            .collect();
        SampleTable { columns }
    }
}
