use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderMeta {
    pub seed: u64,
    pub rows: u64,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: String,
    pub postcode: String,
    pub height: String,
    pub weight: String,
}

impl PatientProfile {
    pub fn demo() -> Self {
        Self {
            name: "X Y".to_string(),
            age: "35 years".to_string(),
            postcode: "3155".to_string(),
            height: "1.64 m".to_string(),
            weight: "57.9 kg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalHistoryRecord {
    pub previous_cycles: u32,
    pub pcos: bool,
    pub fertility_preservation: bool,
    pub unexplained_infertility: bool,
    pub endometriosis: bool,
    pub tubal_factors: bool,
    pub other_factors: bool,
}

impl ClinicalHistoryRecord {
    pub fn demo() -> Self {
        Self {
            previous_cycles: 0,
            pcos: false,
            fertility_preservation: true,
            unexplained_infertility: false,
            endometriosis: false,
            tubal_factors: false,
            other_factors: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HormoneMeasurement {
    pub label: String,
    pub value: f64,
    pub unit: String,
}

impl HormoneMeasurement {
    pub fn new(label: &str, value: f64, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathologyPanel {
    pub amh: HormoneMeasurement,
    pub fsh: HormoneMeasurement,
    pub e2: HormoneMeasurement,
    pub lh: HormoneMeasurement,
}

impl PathologyPanel {
    pub fn demo() -> Self {
        Self {
            amh: HormoneMeasurement::new("Anti-Mullerian Hormone (AMH)", 16.0, "ng/mL"),
            fsh: HormoneMeasurement::new("Follicle-Stimulating Hormone (FSH)", 9.6, "mIU/mL"),
            e2: HormoneMeasurement::new("Estradiol (E2)", 206.0, "pg/mL"),
            lh: HormoneMeasurement::new("Luteinizing Hormone (LH)", 10.2, "mIU/mL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub predicted_oocytes: u32,
    pub influential_factor: String,
    pub error_low: i32,
    pub error_high: i32,
    pub disclaimer: String,
}

impl PredictionSummary {
    pub fn demo() -> Self {
        Self {
            predicted_oocytes: 9,
            influential_factor: "tubal factors".to_string(),
            error_low: -5,
            error_high: 5,
            disclaimer: "Disclaimer: The predictions provided by this tool are for \
                         educational and counselling purposes only. The accuracy of the \
                         predictions is subject to variability, and the tool should not \
                         be used as a sole basis for medical decision-making."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlaraReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub title: String,
    pub render: RenderMeta,
    pub patient: PatientProfile,
    pub history: ClinicalHistoryRecord,
    pub pathology: PathologyPanel,
    pub prediction: PredictionSummary,
}

impl KlaraReportV1 {
    pub fn empty(tool_version: &str, seed: u64, rows: usize) -> Self {
        Self {
            tool: "klara-report".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            title: "IVF Cycle Oocyte Prediction Report".to_string(),
            render: RenderMeta {
                seed,
                rows: rows as u64,
                columns: Vec::new(),
            },
            patient: PatientProfile::demo(),
            history: ClinicalHistoryRecord::demo(),
            pathology: PathologyPanel::demo(),
            prediction: PredictionSummary::demo(),
        }
    }
}
