mod base;
pub mod html;
pub mod normalize;
pub mod query;

pub use base::{Extractor, RetrievedDocument};
pub use html::{CompanyExtractor, LabelMatching, LabelRule};
pub use normalize::{network_location, normalize_text};
pub use query::DocumentQuery;
