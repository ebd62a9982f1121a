pub mod catalog_loader;
pub mod logging;
pub mod request_loader;
pub mod summary;

pub use catalog_loader::{CatalogLoaderError, MaterialCatalogLoader};
pub use request_loader::{QuoteFile, RequestLoadError};
pub use summary::{QuoteSummary, SummaryError};
