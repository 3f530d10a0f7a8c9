use std::path::PathBuf;

use crate::assets::Logo;
use crate::charts::{BoxPlotSpec, RadarPlotSpec};
use crate::samples::SampleTable;
use crate::schema::v1::KlaraReportV1;
use crate::style::Theme;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub html_path: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

/// Mutable render context threaded through the pipeline stages. Each stage
/// fills in the products later stages consume.
#[derive(Debug)]
pub struct Ctx {
    pub seed: u64,
    pub rows: usize,
    pub write_json: bool,
    pub write_tsv: bool,
    pub warnings: Vec<String>,
    pub theme: Option<Theme>,
    pub logo: Option<Logo>,
    pub samples: Option<SampleTable>,
    pub box_plot: Option<BoxPlotSpec>,
    pub radar_plot: Option<RadarPlotSpec>,
    pub output: OutputPaths,
    pub report: KlaraReportV1,
}

impl Ctx {
    pub fn new(
        out_dir: PathBuf,
        seed: u64,
        rows: usize,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let html_path = out_dir.join("report.html");
        let json_path = out_dir.join("report.json");
        let tsv_path = out_dir.join("samples.tsv");
        let report = KlaraReportV1::empty(tool_version, seed, rows);
        Self {
            seed,
            rows,
            write_json,
            write_tsv,
            warnings: Vec::new(),
            theme: None,
            logo: None,
            samples: None,
            box_plot: None,
            radar_plot: None,
            output: OutputPaths {
                out_dir,
                html_path,
                json_path,
                tsv_path,
            },
            report,
        }
    }
}
