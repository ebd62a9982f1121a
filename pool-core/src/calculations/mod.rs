//! Quote calculation modules for pool construction jobs.
//!
//! This module provides the pricing pipeline, organized by the stages a
//! quote goes through: geometry, waste, materials, labor and the final
//! aggregation with surcharge, margin and tax.

pub mod common;
pub mod geometry;
pub mod labor;
pub mod materials;
pub mod quote;
pub mod waste;

pub use geometry::PoolGeometry;
pub use labor::{LaborEstimate, auto_hours, labor_estimate};
pub use materials::{MaterialLineCost, itemize_materials, materials_subtotal, price_line_item};
pub use quote::{
    QuoteConfig, QuoteError, QuoteResult, QuoteWorksheet, compute_quote, try_compute_quote,
};
pub use waste::billable_area;
