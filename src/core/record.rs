use serde::Serialize;

use super::errors::FetchFailure;

/// One output row. Every column is a plain string so the table stays
/// rectangular; anything not extracted is left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyRecord {
    #[serde(rename = "ForbesURL")]
    pub source_url: String,
    #[serde(rename = "MarketCap")]
    pub market_cap: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Founded")]
    pub founded: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "CEO")]
    pub ceo: String,
    #[serde(rename = "Employees")]
    pub employees: String,
    #[serde(rename = "Sales")]
    pub sales: String,
    #[serde(rename = "Headquarters")]
    pub headquarters: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "EmailDomain")]
    pub email_domain: String,
}

/// The extractable columns of a [`CompanyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    MarketCap,
    Industry,
    Founded,
    Country,
    Ceo,
    Employees,
    Sales,
    Headquarters,
    Website,
    EmailDomain,
}

impl CompanyField {
    pub const ALL: [CompanyField; 10] = [
        CompanyField::MarketCap,
        CompanyField::Industry,
        CompanyField::Founded,
        CompanyField::Country,
        CompanyField::Ceo,
        CompanyField::Employees,
        CompanyField::Sales,
        CompanyField::Headquarters,
        CompanyField::Website,
        CompanyField::EmailDomain,
    ];
}

impl CompanyRecord {
    /// Column names of the output table, in order.
    pub const HEADERS: [&'static str; 11] = [
        "ForbesURL",
        "MarketCap",
        "Industry",
        "Founded",
        "Country",
        "CEO",
        "Employees",
        "Sales",
        "Headquarters",
        "Website",
        "EmailDomain",
    ];

    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    pub fn field(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::MarketCap => &self.market_cap,
            CompanyField::Industry => &self.industry,
            CompanyField::Founded => &self.founded,
            CompanyField::Country => &self.country,
            CompanyField::Ceo => &self.ceo,
            CompanyField::Employees => &self.employees,
            CompanyField::Sales => &self.sales,
            CompanyField::Headquarters => &self.headquarters,
            CompanyField::Website => &self.website,
            CompanyField::EmailDomain => &self.email_domain,
        }
    }

    pub fn set(&mut self, field: CompanyField, value: String) {
        let slot = match field {
            CompanyField::MarketCap => &mut self.market_cap,
            CompanyField::Industry => &mut self.industry,
            CompanyField::Founded => &mut self.founded,
            CompanyField::Country => &mut self.country,
            CompanyField::Ceo => &mut self.ceo,
            CompanyField::Employees => &mut self.employees,
            CompanyField::Sales => &mut self.sales,
            CompanyField::Headquarters => &mut self.headquarters,
            CompanyField::Website => &mut self.website,
            CompanyField::EmailDomain => &mut self.email_domain,
        };
        *slot = value;
    }

    /// Number of columns besides the URL that carry a value.
    pub fn populated_fields(&self) -> usize {
        CompanyField::ALL
            .iter()
            .filter(|field| !self.field(**field).is_empty())
            .count()
    }
}

/// Result of processing one URL. The status is kept here and dropped only
/// when the record is flattened into the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Extracted(CompanyRecord),
    FetchFailed {
        record: CompanyRecord,
        failure: FetchFailure,
    },
}

impl PageOutcome {
    pub fn fetch_failed(failure: FetchFailure) -> Self {
        PageOutcome::FetchFailed {
            record: CompanyRecord::new(failure.url.clone()),
            failure,
        }
    }

    pub fn record(&self) -> &CompanyRecord {
        match self {
            PageOutcome::Extracted(record) => record,
            PageOutcome::FetchFailed { record, .. } => record,
        }
    }

    pub fn into_record(self) -> CompanyRecord {
        match self {
            PageOutcome::Extracted(record) => record,
            PageOutcome::FetchFailed { record, .. } => record,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PageOutcome::FetchFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FetchErrorKind;

    #[test]
    fn test_new_record_only_sets_url() {
        let record = CompanyRecord::new("https://www.forbes.com/companies/acme/");
        assert_eq!(record.source_url, "https://www.forbes.com/companies/acme/");
        assert_eq!(record.populated_fields(), 0);
    }

    #[test]
    fn test_set_and_read_field() {
        let mut record = CompanyRecord::new("https://example.com");
        record.set(CompanyField::Ceo, "Jane Doe".to_string());
        assert_eq!(record.ceo, "Jane Doe");
        assert_eq!(record.field(CompanyField::Ceo), "Jane Doe");
        assert_eq!(record.populated_fields(), 1);
    }

    #[test]
    fn test_serialized_header_matches_column_names() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .serialize(CompanyRecord::new("https://example.com"))
            .unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = output.lines().next().unwrap();
        assert_eq!(header, CompanyRecord::HEADERS.join(","));
    }

    #[test]
    fn test_failed_outcome_flattens_to_url_only_record() {
        let failure = FetchFailure::new("https://b.example", FetchErrorKind::Status(503));
        let outcome = PageOutcome::fetch_failed(failure.clone());

        assert!(outcome.is_failure());
        assert_eq!(outcome.record().source_url, "https://b.example");
        assert_eq!(outcome.clone().into_record(), CompanyRecord::new("https://b.example"));
        match outcome {
            PageOutcome::FetchFailed { failure: f, .. } => assert_eq!(f, failure),
            PageOutcome::Extracted(_) => panic!("expected a failed outcome"),
        }
    }
}
