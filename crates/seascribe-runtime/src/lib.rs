//! Seascribe Runtime — chains the extraction, composition, generation, and
//! segmentation stages into one request-scoped pipeline.

pub mod input;
pub mod pipeline;

pub use input::{fetch_document, load_document};
pub use pipeline::run;
