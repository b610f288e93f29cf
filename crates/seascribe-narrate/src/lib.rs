//! Seascribe Narrate — turning a maritime dataset into a generation prompt,
//! and a generation reply back into per-location narratives.

pub mod prompt;
pub mod respond;
pub mod segment;

pub use prompt::compose;
pub use respond::{ResponseEnvelope, ResponseStatus};
pub use segment::{segment, NarrativeRecord};
