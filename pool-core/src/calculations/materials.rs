//! Material pricing against the billable surface.
//!
//! Only active items are priced. Per-area items are charged on the
//! billable area, per-unit items on their quantity. Items whose price for
//! their mode is missing, or whose mode is unrecognized, contribute zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{checked_add, checked_mul};
use crate::calculations::quote::QuoteError;
use crate::{MaterialLineItem, MaterialUnit, PricingMode};

/// One row of the itemized materials table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLineCost {
    pub id: String,
    pub name: String,
    /// Billable area for per-area items, resolved quantity otherwise.
    pub quantity: Decimal,
    pub unit: MaterialUnit,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Cost of a single item, ignoring its `active` flag.
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if the product exceeds the decimal range.
pub fn price_line_item(
    item: &MaterialLineItem,
    billable_area: Decimal,
) -> Result<Decimal, QuoteError> {
    match item.pricing_mode {
        PricingMode::PerArea => {
            let price = item.price_per_area.unwrap_or(Decimal::ZERO);
            checked_mul("materials", price, billable_area)
        }
        PricingMode::PerUnit => {
            let price = item.price_per_unit.unwrap_or(Decimal::ZERO);
            checked_mul("materials", price, item.resolved_quantity())
        }
        PricingMode::Unrecognized => Ok(Decimal::ZERO),
    }
}

/// Sum of the cost of every active item.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pool_core::MaterialLineItem;
/// use pool_core::calculations::materials_subtotal;
///
/// let materials = vec![
///     MaterialLineItem::per_area("ceramic", "Ceramic tile", dec!(50)).activated(),
///     MaterialLineItem::per_unit("pump", "Water pump", dec!(15000)),
/// ];
///
/// assert_eq!(materials_subtotal(&materials, dec!(104.5)).unwrap(), dec!(5225));
/// ```
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if a cost or the running sum exceeds
/// the decimal range.
pub fn materials_subtotal(
    materials: &[MaterialLineItem],
    billable_area: Decimal,
) -> Result<Decimal, QuoteError> {
    materials
        .iter()
        .filter(|m| m.active)
        .try_fold(Decimal::ZERO, |total, item| {
            let cost = price_line_item(item, billable_area)?;
            checked_add("materials", total, cost)
        })
}

/// Itemizes the active materials for the quote document, in list order.
///
/// The line totals add up to [`materials_subtotal`].
///
/// # Errors
///
/// Returns [`QuoteError::Overflow`] if a line total exceeds the decimal range.
pub fn itemize_materials(
    materials: &[MaterialLineItem],
    billable_area: Decimal,
) -> Result<Vec<MaterialLineCost>, QuoteError> {
    materials
        .iter()
        .filter(|m| m.active)
        .map(|item| {
            let (quantity, unit, unit_price) = match item.pricing_mode {
                PricingMode::PerArea => (
                    billable_area,
                    MaterialUnit::SquareMeter,
                    item.price_per_area.unwrap_or(Decimal::ZERO),
                ),
                PricingMode::PerUnit => (
                    item.resolved_quantity(),
                    MaterialUnit::Unit,
                    item.price_per_unit.unwrap_or(Decimal::ZERO),
                ),
                PricingMode::Unrecognized => {
                    (item.resolved_quantity(), MaterialUnit::Unit, Decimal::ZERO)
                }
            };

            Ok(MaterialLineCost {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity,
                unit,
                unit_price,
                total: price_line_item(item, billable_area)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn ceramic() -> MaterialLineItem {
        MaterialLineItem::per_area("ceramic", "Ceramic tile", dec!(50)).activated()
    }

    fn pumps() -> MaterialLineItem {
        MaterialLineItem::per_unit("pump", "Water pump", dec!(15000))
            .with_quantity(dec!(2))
            .activated()
    }

    // =========================================================================
    // price_line_item tests
    // =========================================================================

    #[test]
    fn per_area_item_uses_billable_area() {
        assert_eq!(price_line_item(&ceramic(), dec!(100)).unwrap(), dec!(5000));
    }

    #[test]
    fn per_unit_item_uses_quantity() {
        assert_eq!(price_line_item(&pumps(), dec!(100)).unwrap(), dec!(30000));
    }

    #[test]
    fn per_unit_item_without_quantity_counts_one() {
        let mut item = pumps();
        item.quantity = None;

        assert_eq!(price_line_item(&item, dec!(100)).unwrap(), dec!(15000));
    }

    #[test]
    fn per_unit_item_with_zero_quantity_counts_one() {
        let mut item = pumps();
        item.quantity = Some(dec!(0));

        assert_eq!(price_line_item(&item, dec!(100)).unwrap(), dec!(15000));
    }

    #[test]
    fn missing_price_for_mode_contributes_zero() {
        let mut per_area = ceramic();
        per_area.price_per_area = None;
        per_area.price_per_unit = Some(dec!(999));

        let mut per_unit = pumps();
        per_unit.price_per_unit = None;
        per_unit.price_per_area = Some(dec!(999));

        assert_eq!(price_line_item(&per_area, dec!(100)).unwrap(), dec!(0));
        assert_eq!(price_line_item(&per_unit, dec!(100)).unwrap(), dec!(0));
    }

    #[test]
    fn unrecognized_mode_contributes_zero() {
        let mut item = pumps();
        item.pricing_mode = PricingMode::Unrecognized;

        assert_eq!(price_line_item(&item, dec!(100)).unwrap(), dec!(0));
    }

    // =========================================================================
    // materials_subtotal tests
    // =========================================================================

    #[test]
    fn subtotal_sums_active_items() {
        let materials = vec![ceramic(), pumps()];

        assert_eq!(materials_subtotal(&materials, dec!(100)).unwrap(), dec!(35000));
    }

    #[test]
    fn subtotal_ignores_inactive_items() {
        let inactive = MaterialLineItem::per_unit("pump", "Water pump", dec!(15000));
        let materials = vec![ceramic(), inactive];

        assert_eq!(materials_subtotal(&materials, dec!(100)).unwrap(), dec!(5000));
    }

    #[test]
    fn subtotal_of_empty_list_is_zero() {
        assert_eq!(materials_subtotal(&[], dec!(100)).unwrap(), dec!(0));
    }

    #[test]
    fn deactivating_an_item_never_increases_subtotal() {
        let free = MaterialLineItem::per_unit("sample", "Free sample", dec!(0)).activated();
        let materials = vec![ceramic(), pumps(), free];
        let full = materials_subtotal(&materials, dec!(104.5)).unwrap();

        for index in 0..materials.len() {
            let mut toggled = materials.clone();
            toggled[index].active = false;
            let reduced = materials_subtotal(&toggled, dec!(104.5)).unwrap();
            let item_cost = price_line_item(&materials[index], dec!(104.5)).unwrap();

            assert_eq!(reduced, full - item_cost);
            assert!(reduced <= full);
        }
    }

    #[test]
    fn subtotal_is_order_independent() {
        let forward = vec![ceramic(), pumps()];
        let reversed = vec![pumps(), ceramic()];

        assert_eq!(
            materials_subtotal(&forward, dec!(104.5)).unwrap(),
            materials_subtotal(&reversed, dec!(104.5)).unwrap()
        );
    }

    #[test]
    fn subtotal_reports_overflow() {
        let expensive = MaterialLineItem::per_area("gold", "Gold leaf", Decimal::MAX).activated();

        let result = materials_subtotal(&[expensive], dec!(2));

        assert_eq!(result, Err(QuoteError::Overflow { step: "materials" }));
    }

    // =========================================================================
    // itemize_materials tests
    // =========================================================================

    #[test]
    fn itemize_lists_active_items_in_order() {
        let inactive = MaterialLineItem::per_unit("ladder", "Ladder", dec!(5000));
        let materials = vec![ceramic(), inactive, pumps()];

        let lines = itemize_materials(&materials, dec!(104.5)).unwrap();

        assert_eq!(
            lines,
            vec![
                MaterialLineCost {
                    id: "ceramic".to_string(),
                    name: "Ceramic tile".to_string(),
                    quantity: dec!(104.5),
                    unit: MaterialUnit::SquareMeter,
                    unit_price: dec!(50),
                    total: dec!(5225),
                },
                MaterialLineCost {
                    id: "pump".to_string(),
                    name: "Water pump".to_string(),
                    quantity: dec!(2),
                    unit: MaterialUnit::Unit,
                    unit_price: dec!(15000),
                    total: dec!(30000),
                },
            ]
        );
    }

    #[test]
    fn itemized_totals_add_up_to_subtotal() {
        let mut odd = pumps();
        odd.pricing_mode = PricingMode::Unrecognized;
        let materials = vec![ceramic(), pumps(), odd];

        let lines = itemize_materials(&materials, dec!(104.5)).unwrap();
        let line_sum: Decimal = lines.iter().map(|l| l.total).sum();

        assert_eq!(line_sum, materials_subtotal(&materials, dec!(104.5)).unwrap());
    }
}
