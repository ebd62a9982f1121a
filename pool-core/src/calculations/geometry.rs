//! Pool volume and surface areas.
//!
//! Every pool is treated as a rectangular prism of uniform depth equal to
//! the average depth, whatever shape was selected. The walls are its four
//! lateral faces.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pool_core::Dimensions;
//! use pool_core::calculations::PoolGeometry;
//!
//! let geometry = PoolGeometry::from_dimensions(&Dimensions::new(dec!(10), dec!(5), dec!(1.5))).unwrap();
//!
//! assert_eq!(geometry.volume, dec!(75));
//! assert_eq!(geometry.wall_area, dec!(45));
//! assert_eq!(geometry.total_area, dec!(95));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Dimensions;
use crate::calculations::common::{checked_add, checked_mul};
use crate::calculations::quote::QuoteError;

/// Volume in m³ and surface areas in m² derived from [`Dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolGeometry {
    pub volume: Decimal,
    pub floor_area: Decimal,
    pub wall_area: Decimal,
    /// Floor plus walls.
    pub total_area: Decimal,
}

impl PoolGeometry {
    /// Computes all geometry values at once.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Overflow`] if a product exceeds the decimal range.
    pub fn from_dimensions(dimensions: &Dimensions) -> Result<Self, QuoteError> {
        if dimensions.has_negative() {
            warn!(
                length = %dimensions.length,
                width = %dimensions.width,
                avg_depth = %dimensions.avg_depth,
                "Negative pool dimension; areas will be computed as given"
            );
        }

        let floor_area = floor_area(dimensions)?;
        let wall_area = wall_area(dimensions)?;

        Ok(Self {
            volume: volume(dimensions)?,
            floor_area,
            wall_area,
            total_area: checked_add("total area", floor_area, wall_area)?,
        })
    }
}

/// `length * width * avg_depth`
pub fn volume(dimensions: &Dimensions) -> Result<Decimal, QuoteError> {
    let floor = floor_area(dimensions)?;
    checked_mul("volume", floor, dimensions.avg_depth)
}

/// `length * width`
pub fn floor_area(dimensions: &Dimensions) -> Result<Decimal, QuoteError> {
    checked_mul("floor area", dimensions.length, dimensions.width)
}

/// `2 * (length * avg_depth) + 2 * (width * avg_depth)`
pub fn wall_area(dimensions: &Dimensions) -> Result<Decimal, QuoteError> {
    let two = Decimal::TWO;
    let long_wall = checked_mul("wall area", dimensions.length, dimensions.avg_depth)?;
    let short_wall = checked_mul("wall area", dimensions.width, dimensions.avg_depth)?;

    checked_add(
        "wall area",
        checked_mul("wall area", two, long_wall)?,
        checked_mul("wall area", two, short_wall)?,
    )
}

/// `floor_area + wall_area`
pub fn total_area(dimensions: &Dimensions) -> Result<Decimal, QuoteError> {
    checked_add(
        "total area",
        floor_area(dimensions)?,
        wall_area(dimensions)?,
    )
}
