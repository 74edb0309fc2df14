pub(crate) mod response;

pub use response::FetchedPage;
