mod dimensions;
mod job;
mod labor;
mod material;
mod quote_request;

pub use dimensions::Dimensions;
pub use job::{JobType, PoolShape};
pub use labor::{AccessDifficulty, LaborParameters};
pub use material::{MaterialLineItem, MaterialQuality, MaterialUnit, PricingMode};
pub use quote_request::QuoteRequest;
