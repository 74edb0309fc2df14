use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::base::RecordSink;
use crate::core::{CompanyRecord, PageOutcome, ScraperError, ScraperResult};

/// Writes outcomes as rows of the fixed eleven-column table. The header is
/// written up front so even an empty batch produces a valid file.
pub struct CsvStorage<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl CsvStorage<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> ScraperResult<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> CsvStorage<W> {
    pub fn new(inner: W) -> ScraperResult<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(CompanyRecord::HEADERS)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> ScraperResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| {
                ScraperError::from(std::io::Error::new(e.error().kind(), e.error().to_string()))
            })
    }
}

impl<W: Write> RecordSink for CsvStorage<W> {
    fn store(&mut self, outcome: &PageOutcome) -> ScraperResult<()> {
        self.writer.serialize(outcome.record())?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> ScraperResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FetchErrorKind, FetchFailure};

    fn output(storage: CsvStorage<Vec<u8>>) -> String {
        String::from_utf8(storage.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_written_for_empty_batch() {
        let storage = CsvStorage::new(Vec::new()).unwrap();
        assert_eq!(
            output(storage),
            "ForbesURL,MarketCap,Industry,Founded,Country,CEO,Employees,Sales,Headquarters,Website,EmailDomain\n"
        );
    }

    #[test]
    fn test_rows_are_rectangular() {
        let mut storage = CsvStorage::new(Vec::new()).unwrap();

        let mut record = CompanyRecord::new("https://a.example/");
        record.industry = "Technology".to_string();
        record.ceo = "Jane Doe".to_string();
        record.market_cap = "$1,234 B".to_string();
        storage.store(&PageOutcome::Extracted(record)).unwrap();
        storage
            .store(&PageOutcome::fetch_failed(FetchFailure::new(
                "https://b.example/",
                FetchErrorKind::Timeout,
            )))
            .unwrap();
        storage.finish().unwrap();
        assert_eq!(storage.rows(), 2);

        let text = output(storage);
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CompanyRecord::HEADERS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.len(), 11);
        }
        assert_eq!(&rows[0][0], "https://a.example/");
        assert_eq!(&rows[0][1], "$1,234 B");
        assert_eq!(&rows[0][2], "Technology");
        assert_eq!(&rows[0][5], "Jane Doe");
        assert_eq!(&rows[1][0], "https://b.example/");
        assert!(rows[1].iter().skip(1).all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_create_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");

        let mut storage = CsvStorage::create(&path).unwrap();
        storage
            .store(&PageOutcome::Extracted(CompanyRecord::new("https://a.example/")))
            .unwrap();
        drop(storage);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert_eq!(written.lines().nth(1), Some("https://a.example/,,,,,,,,,,"));
    }
}
