pub mod calculations;
pub mod catalog;
pub mod models;
pub mod validation;

pub use calculations::{
    QuoteConfig, QuoteError, QuoteResult, QuoteWorksheet, compute_quote, try_compute_quote,
};
pub use catalog::default_catalog;
pub use models::*;
pub use validation::{ValidationError, validate_request};
