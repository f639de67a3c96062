pub mod convention;

mod pair;
mod record;
mod region;

pub use pair::ArtifactPair;
pub use record::DatasetRecord;
pub use region::InlinedRegion;
