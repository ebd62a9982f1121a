use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Site access difficulty, used to scale labor cost.
///
/// Unset or unrecognized values resolve to [`AccessDifficulty::Normal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessDifficulty {
    #[default]
    Normal,
    Medium,
    High,
}

impl AccessDifficulty {
    pub fn all() -> &'static [AccessDifficulty] {
        &[
            AccessDifficulty::Normal,
            AccessDifficulty::Medium,
            AccessDifficulty::High,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Normal,
        }
    }
}

impl Serialize for AccessDifficulty {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessDifficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        Ok(s.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Labor inputs for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborParameters {
    /// Hours entered by hand; only read when `auto_compute` is false.
    pub manual_hours: Option<Decimal>,

    /// Derive hours from the pool surface and `area_per_hour`.
    pub auto_compute: bool,

    pub hourly_rate: Decimal,

    #[serde(default)]
    pub access_difficulty: AccessDifficulty,

    /// Adds the permit surcharge to the quote.
    #[serde(default)]
    pub requires_permits: bool,

    /// Crew productivity in m² per hour. Unset or zero falls back to the
    /// configured default (2.5).
    pub area_per_hour: Option<Decimal>,
}

impl Default for LaborParameters {
    /// Labor settings of a fresh draft: automatic hours at 2.5 m²/h and an
    /// hourly rate of 2000.
    fn default() -> Self {
        Self {
            manual_hours: None,
            auto_compute: true,
            hourly_rate: Decimal::from(2000),
            access_difficulty: AccessDifficulty::Normal,
            requires_permits: false,
            area_per_hour: Some(Decimal::new(25, 1)),
        }
    }
}
