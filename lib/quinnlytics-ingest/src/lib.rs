pub mod build;
pub mod catalog;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod raw;
pub mod source;
pub mod version;

pub use error::{Anomaly, Error};
pub use ingest::{IngestOutcome, IngestSummary, Ingestor};
pub use source::{MatchSource, ReferenceSource};
pub use version::{prepare_reference_data, ReferenceData};

/// Draft, Ranked Solo, Ranked Flex
pub const QUEUE_IDS: [u16; 3] = [400, 420, 440];
