pub mod base;
pub mod csv_storage;
pub mod input;

pub use base::RecordSink;
pub use csv_storage::CsvStorage;
pub use input::{read_url_file, read_urls};
