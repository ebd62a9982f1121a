use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a material line item is priced.
///
/// Unknown modes coming from a stored draft are kept as
/// [`PricingMode::Unrecognized`] instead of failing deserialization; such
/// items price at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    /// Priced per square meter of billable area.
    PerArea,
    /// Priced per unit, times the item quantity.
    PerUnit,
    Unrecognized,
}

impl PricingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerArea => "per_area",
            Self::PerUnit => "per_unit",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "per_area" => Self::PerArea,
            "per_unit" => Self::PerUnit,
            _ => Self::Unrecognized,
        }
    }
}

impl Serialize for PricingMode {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PricingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Quality tier of a material. Display metadata, except for ceramics where
/// it selects the per-area price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialQuality {
    Economy,
    Standard,
    Premium,
    Luxury,
}

impl MaterialQuality {
    pub fn all() -> &'static [MaterialQuality] {
        &[
            MaterialQuality::Economy,
            MaterialQuality::Standard,
            MaterialQuality::Premium,
            MaterialQuality::Luxury,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialQuality::Economy => "Economy",
            MaterialQuality::Standard => "Standard",
            MaterialQuality::Premium => "Premium",
            MaterialQuality::Luxury => "Luxury",
        }
    }

    /// Price per square meter of ceramic tile at this quality tier.
    ///
    /// | Quality  | Price/m² |
    /// |----------|----------|
    /// | Economy  | 35       |
    /// | Standard | 50       |
    /// | Premium  | 75       |
    /// | Luxury   | 120      |
    pub fn ceramic_price_per_area(&self) -> Decimal {
        match self {
            MaterialQuality::Economy => Decimal::from(35),
            MaterialQuality::Standard => Decimal::from(50),
            MaterialQuality::Premium => Decimal::from(75),
            MaterialQuality::Luxury => Decimal::from(120),
        }
    }
}

/// Unit a material line is measured in on the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialUnit {
    SquareMeter,
    Unit,
}

impl MaterialUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MaterialUnit::SquareMeter => "m²",
            MaterialUnit::Unit => "unit",
        }
    }
}

/// A selectable, priced material.
///
/// `price_per_area` drives per-area items against the shared billable
/// surface; `price_per_unit * quantity` drives per-unit items. Missing
/// prices count as zero and a missing or zero quantity counts as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub id: String,
    pub name: String,
    pub pricing_mode: PricingMode,
    pub price_per_area: Option<Decimal>,
    pub price_per_unit: Option<Decimal>,
    pub quality: Option<MaterialQuality>,
    pub active: bool,
    pub quantity: Option<Decimal>,
}

impl MaterialLineItem {
    /// Creates an inactive per-area item.
    pub fn per_area(
        id: impl Into<String>,
        name: impl Into<String>,
        price_per_area: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pricing_mode: PricingMode::PerArea,
            price_per_area: Some(price_per_area),
            price_per_unit: None,
            quality: None,
            active: false,
            quantity: None,
        }
    }

    /// Creates an inactive per-unit item with a quantity of one.
    pub fn per_unit(
        id: impl Into<String>,
        name: impl Into<String>,
        price_per_unit: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pricing_mode: PricingMode::PerUnit,
            price_per_area: None,
            price_per_unit: Some(price_per_unit),
            quality: None,
            active: false,
            quantity: Some(Decimal::ONE),
        }
    }

    pub fn with_quality(
        mut self,
        quality: MaterialQuality,
    ) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_quantity(
        mut self,
        quantity: Decimal,
    ) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    /// True for ceramic tile, the one material priced by quality: id
    /// `ceramic` or `ceramic_<tier>`, priced per area.
    pub fn is_ceramic(&self) -> bool {
        self.pricing_mode == PricingMode::PerArea
            && (self.id == "ceramic" || self.id.starts_with("ceramic_"))
    }

    /// Quantity used for per-unit pricing: the stated quantity, or one when
    /// it is unset or zero.
    pub fn resolved_quantity(&self) -> Decimal {
        self.quantity
            .filter(|q| !q.is_zero())
            .unwrap_or(Decimal::ONE)
    }
}
