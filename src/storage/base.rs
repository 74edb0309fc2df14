use crate::core::{PageOutcome, ScraperResult};

/// Destination for finished outcomes, fed one URL at a time in input order.
pub trait RecordSink {
    fn store(&mut self, outcome: &PageOutcome) -> ScraperResult<()>;

    fn finish(&mut self) -> ScraperResult<()> {
        Ok(())
    }
}
