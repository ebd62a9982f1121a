//! CSV loader for material catalogs.
//!
//! ## CSV Format
//!
//! Headers are matched by name and surrounding whitespace is trimmed.
//!
//! | Column           | Required | Notes                                         |
//! |------------------|----------|-----------------------------------------------|
//! | `id`             | yes      | Unique within the file                        |
//! | `name`           | yes      |                                               |
//! | `pricing_mode`   | yes      | `per_area` or `per_unit`; anything else prices at zero |
//! | `price_per_area` | no       | Leave cell empty for `None`                   |
//! | `price_per_unit` | no       | Leave cell empty for `None`                   |
//! | `quality`        | no       | `economy`, `standard`, `premium` or `luxury`  |
//! | `active`         | no       | `true` / `false`, empty means `false`         |
//! | `quantity`       | no       | Leave cell empty for `None`                   |
//!
//! ### Example
//!
//! ```csv
//! id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
//! ceramic,Ceramic tile,per_area,50,,standard,true,
//! pump,Water pump,per_unit,,15000,,false,2
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use pool_core::{MaterialLineItem, MaterialQuality, PricingMode};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a material catalog.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, the header being row 0.
    #[error("material id '{id}' on row {row} is already defined")]
    DuplicateId { id: String, row: usize },

    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    pricing_mode: String,
    price_per_area: Option<Decimal>,
    price_per_unit: Option<Decimal>,
    quality: Option<MaterialQuality>,
    active: Option<bool>,
    quantity: Option<Decimal>,
}

impl From<CatalogRow> for MaterialLineItem {
    fn from(row: CatalogRow) -> Self {
        MaterialLineItem {
            id: row.id,
            name: row.name,
            pricing_mode: PricingMode::parse(&row.pricing_mode),
            price_per_area: row.price_per_area,
            price_per_unit: row.price_per_unit,
            quality: row.quality,
            active: row.active.unwrap_or(false),
            quantity: row.quantity,
        }
    }
}

/// Loader for material catalogs stored as CSV.
pub struct MaterialCatalogLoader;

impl MaterialCatalogLoader {
    /// Parse catalog items from a CSV reader, in file order.
    ///
    /// # Errors
    ///
    /// * [`CatalogLoaderError::CsvParse`] if the CSV is malformed or a cell
    ///   has the wrong type.
    /// * [`CatalogLoaderError::DuplicateId`] if an id appears twice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<MaterialLineItem>, CatalogLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for (idx, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = result?;
            if !seen.insert(row.id.clone()) {
                return Err(CatalogLoaderError::DuplicateId {
                    id: row.id,
                    row: idx + 1,
                });
            }
            items.push(MaterialLineItem::from(row));
        }

        debug!(count = items.len(), "Parsed material catalog");
        Ok(items)
    }

    /// Reads a catalog file from disk and delegates to [`Self::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<MaterialLineItem>, CatalogLoaderError> {
        let file = std::fs::File::open(path)?;
        Self::parse(file)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const CATALOG_CSV: &str = "\
id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
ceramic,Ceramic tile,per_area,50,,standard,true,
pump,Water pump,per_unit,,15000,,false,2
";

    #[test]
    fn parses_items_in_file_order() {
        let items = MaterialCatalogLoader::parse(CATALOG_CSV.as_bytes()).expect("should parse");

        assert_eq!(
            items,
            vec![
                MaterialLineItem::per_area("ceramic", "Ceramic tile", dec!(50))
                    .with_quality(MaterialQuality::Standard)
                    .activated(),
                MaterialLineItem::per_unit("pump", "Water pump", dec!(15000)).with_quantity(dec!(2)),
            ]
        );
    }

    #[test]
    fn empty_cells_become_none() {
        let csv = "\
id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
cover,Safety cover,per_unit,,30000,,,
";

        let items = MaterialCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(items[0].price_per_area, None);
        assert_eq!(items[0].quality, None);
        assert_eq!(items[0].quantity, None);
        assert!(!items[0].active);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "\
id , name , pricing_mode , price_per_area , price_per_unit , quality , active , quantity
 ladder , Ladder , per_unit , , 5000 , , true , 1
";

        let items = MaterialCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(items[0].id, "ladder");
        assert_eq!(items[0].price_per_unit, Some(dec!(5000)));
        assert!(items[0].active);
    }

    #[test]
    fn unknown_pricing_mode_is_kept_as_unrecognized() {
        let csv = "\
id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
odd,Odd item,per_metre,10,10,,true,
";

        let items = MaterialCatalogLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(items[0].pricing_mode, PricingMode::Unrecognized);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let csv = "\
id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
pump,Water pump,per_unit,,15000,,false,
filter,Filter,per_unit,,12000,,false,
pump,Another pump,per_unit,,16000,,false,
";

        let err = MaterialCatalogLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            CatalogLoaderError::DuplicateId { ref id, row: 3 } if id == "pump"
        ));
    }

    #[test]
    fn bad_price_is_a_parse_error() {
        let csv = "\
id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity
pump,Water pump,per_unit,,cheap,,false,
";

        let err = MaterialCatalogLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, CatalogLoaderError::CsvParse(_)));
    }

    #[test]
    fn header_only_gives_empty_catalog() {
        let csv = "id,name,pricing_mode,price_per_area,price_per_unit,quality,active,quantity\n";

        assert_eq!(MaterialCatalogLoader::parse(csv.as_bytes()).unwrap(), vec![]);
    }
}
