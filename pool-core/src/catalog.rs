//! Predefined materials offered when building a quote.
//!
//! | Id           | Mode     | Price |
//! |--------------|----------|-------|
//! | ceramic      | per m²   | 50    |
//! | pump         | per unit | 15000 |
//! | filter       | per unit | 12000 |
//! | led_lighting | per unit | 8000  |
//! | heating      | per unit | 25000 |
//! | ladder       | per unit | 5000  |
//! | safety_cover | per unit | 30000 |
//!
//! Ceramic tile starts at standard quality; its tier sets its price, see
//! [`QuoteRequest::set_material_quality`](crate::QuoteRequest::set_material_quality).

use rust_decimal::Decimal;

use crate::{MaterialLineItem, MaterialQuality};

/// The predefined catalog. Every item starts inactive.
pub fn default_catalog() -> Vec<MaterialLineItem> {
    let standard = MaterialQuality::Standard;

    vec![
        MaterialLineItem::per_area("ceramic", "Ceramic tile", standard.ceramic_price_per_area())
            .with_quality(standard),
        MaterialLineItem::per_unit("pump", "Water pump", Decimal::new(15000, 0)),
        MaterialLineItem::per_unit("filter", "Filtration system", Decimal::new(12000, 0)),
        MaterialLineItem::per_unit("led_lighting", "LED lighting", Decimal::new(8000, 0)),
        MaterialLineItem::per_unit("heating", "Heating system", Decimal::new(25000, 0)),
        MaterialLineItem::per_unit("ladder", "Stainless ladder", Decimal::new(5000, 0)),
        MaterialLineItem::per_unit("safety_cover", "Safety cover", Decimal::new(30000, 0)),
    ]
}
