use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    #[default]
    Construction,
    Repair,
    Resurfacing,
    Cleaning,
    Other,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Construction => "Construction",
            JobType::Repair => "Repair",
            JobType::Resurfacing => "Resurfacing",
            JobType::Cleaning => "Cleaning",
            JobType::Other => "Other",
        }
    }
}

/// Pool outline as selected in the wizard.
///
/// Display only: geometry always uses the rectangular wall formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolShape {
    #[default]
    Rectangular,
    Oval,
    Circular,
    Irregular,
    Other,
}

impl PoolShape {
    pub fn label(&self) -> &'static str {
        match self {
            PoolShape::Rectangular => "Rectangular",
            PoolShape::Oval => "Oval",
            PoolShape::Circular => "Circular",
            PoolShape::Irregular => "Irregular",
            PoolShape::Other => "Other",
        }
    }
}
