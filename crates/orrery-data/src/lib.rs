//! Catalog data access for the orrery.
//!
//! Defines the record shapes exchanged with external body catalogs and a
//! worker pipeline that fetches them without blocking the frame loop.

mod fetch;
mod records;

pub use fetch::{
    BodyFetcher, FetchError, FetchOutcome, FetchPipeline, FetchRequest, JsonDirFetcher,
    StaticFetcher,
};
pub use records::{BodyKind, BodyRecord};
