use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Dimensions, JobType, LaborParameters, MaterialLineItem, MaterialQuality, PoolShape};

/// Snapshot of everything a quote is computed from.
///
/// This is the shape drafts are persisted in. Unset rates fall back to the
/// configured defaults (waste 10%, margin 20%, tax 21%) when the quote is
/// computed; an explicit zero is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub job_type: JobType,

    #[serde(default)]
    pub pool_shape: PoolShape,

    pub dimensions: Dimensions,

    #[serde(default)]
    pub materials: Vec<MaterialLineItem>,

    pub labor: LaborParameters,

    /// Fractional overage on the material surface (0.10 = 10%).
    pub waste_factor: Option<Decimal>,

    pub margin_rate: Option<Decimal>,

    pub tax_rate: Option<Decimal>,
}

impl Default for QuoteRequest {
    /// The empty draft a new quote starts from.
    fn default() -> Self {
        Self {
            job_type: JobType::Construction,
            pool_shape: PoolShape::Rectangular,
            dimensions: Dimensions::default(),
            materials: Vec::new(),
            labor: LaborParameters::default(),
            waste_factor: Some(Decimal::new(10, 2)),
            margin_rate: Some(Decimal::new(20, 2)),
            tax_rate: Some(Decimal::new(21, 2)),
        }
    }
}

impl QuoteRequest {
    /// Iterates over the materials that contribute to the quote.
    pub fn active_materials(&self) -> impl Iterator<Item = &MaterialLineItem> {
        self.materials.iter().filter(|m| m.active)
    }

    /// Flips the `active` flag of the material with the given id.
    ///
    /// Returns `false` if no material has that id.
    pub fn toggle_material(
        &mut self,
        id: &str,
    ) -> bool {
        match self.materials.iter_mut().find(|m| m.id == id) {
            Some(material) => {
                material.active = !material.active;
                true
            }
            None => false,
        }
    }

    /// Sets the quality of a material. Ceramic tile is re-priced from the
    /// quality table; every other price is left alone.
    ///
    /// Returns `false` if no material has that id.
    pub fn set_material_quality(
        &mut self,
        id: &str,
        quality: MaterialQuality,
    ) -> bool {
        let Some(material) = self.materials.iter_mut().find(|m| m.id == id) else {
            return false;
        };

        material.quality = Some(quality);
        if material.is_ceramic() {
            material.price_per_area = Some(quality.ceramic_price_per_area());
        }
        true
    }
}
