pub mod company_parser;

pub use company_parser::{CompanyExtractor, LabelMatching, LabelRule, TagClassRule};
