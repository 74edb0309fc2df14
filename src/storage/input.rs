use csv::ReaderBuilder;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::ScraperResult;

/// Reads the URL list: one URL in the first column of each row, no header.
/// Rows whose first cell is blank or not valid UTF-8 are skipped; URLs are
/// kept verbatim.
pub fn read_urls<R: Read>(reader: R) -> ScraperResult<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut urls = Vec::new();
    for (line, row) in reader.byte_records().enumerate() {
        let row = row?;
        let Some(cell) = row.get(0) else {
            debug!("Skipping empty input row {}", line + 1);
            continue;
        };
        match std::str::from_utf8(cell) {
            Ok(url) if !url.trim().is_empty() => urls.push(url.to_string()),
            Ok(_) => debug!("Skipping blank input row {}", line + 1),
            Err(e) => debug!("Skipping undecodable input row {}: {}", line + 1, e),
        }
    }

    Ok(urls)
}

pub fn read_url_file<P: AsRef<Path>>(path: P) -> ScraperResult<Vec<String>> {
    let file = File::open(path)?;
    read_urls(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_first_column_in_order() {
        let input = "https://www.forbes.com/companies/apple/\n\
                     https://www.forbes.com/companies/microsoft/,extra\n\
                     https://www.forbes.com/companies/alphabet/\n";

        let urls = read_urls(input.as_bytes()).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://www.forbes.com/companies/apple/",
                "https://www.forbes.com/companies/microsoft/",
                "https://www.forbes.com/companies/alphabet/",
            ]
        );
    }

    #[test]
    fn test_skips_blank_rows() {
        let input = "https://a.example/\n\n,\n   \nhttps://b.example/\n";
        let urls = read_urls(input.as_bytes()).unwrap();
        assert_eq!(urls, vec!["https://a.example/", "https://b.example/"]);
    }

    #[test]
    fn test_skips_rows_that_are_not_utf8() {
        let input: &[u8] = b"https://a.example/\nhttps://b.example/\xff\xfe\nhttps://c.example/\n";
        let urls = read_urls(input).unwrap();
        assert_eq!(urls, vec!["https://a.example/", "https://c.example/"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_urls("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_url_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://a.example/").unwrap();
        writeln!(file, "not a url").unwrap();

        let urls = read_url_file(file.path()).unwrap();
        assert_eq!(urls, vec!["https://a.example/", "not a url"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_url_file("/nonexistent/input_urls.csv").is_err());
    }
}
