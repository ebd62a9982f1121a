use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw pool measurements in meters.
///
/// The form layer keeps these in range; the calculations accept anything
/// and propagate zero or negative values arithmetically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub avg_depth: Decimal,
}

impl Dimensions {
    pub fn new(
        length: Decimal,
        width: Decimal,
        avg_depth: Decimal,
    ) -> Self {
        Self {
            length,
            width,
            avg_depth,
        }
    }

    /// True when any measurement is below zero.
    pub fn has_negative(&self) -> bool {
        self.length < Decimal::ZERO || self.width < Decimal::ZERO || self.avg_depth < Decimal::ZERO
    }
}
