use log::{debug, trace};

use crate::core::{CompanyField, CompanyRecord};
use crate::parser::normalize::{network_location, normalize_text};
use crate::parser::query::DocumentQuery;
use crate::parser::{Extractor, RetrievedDocument};

/// How label text is compared against the expected label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMatching {
    /// Byte-for-byte equality; `industry` or ` Industry ` never match.
    #[default]
    Exact,
    /// Both sides normalized, trimmed and case-folded before comparing.
    Normalized,
}

impl LabelMatching {
    pub fn matches(&self, text: &str, label: &str) -> bool {
        match self {
            LabelMatching::Exact => text == label,
            LabelMatching::Normalized => {
                normalize_text(text).to_lowercase() == normalize_text(label).to_lowercase()
            }
        }
    }
}

/// `<label_tag>label</label_tag> ... <value_tag>value</value_tag>`
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub label: String,
    pub field: CompanyField,
}

impl LabelRule {
    pub fn new(label: impl Into<String>, field: CompanyField) -> Self {
        Self {
            label: label.into(),
            field,
        }
    }
}

/// `<tag class="... class ...">value</tag>`
#[derive(Debug, Clone)]
pub struct TagClassRule {
    pub tag: String,
    pub class: String,
    pub field: CompanyField,
}

const LABEL_TAG: &str = "dt";
const VALUE_TAG: &str = "dd";

pub struct CompanyExtractor {
    matching: LabelMatching,
    label_rules: Vec<LabelRule>,
    class_rules: Vec<TagClassRule>,
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new(LabelMatching::Exact)
    }
}

impl CompanyExtractor {
    pub fn new(matching: LabelMatching) -> Self {
        Self {
            matching,
            label_rules: vec![
                LabelRule::new("Industry", CompanyField::Industry),
                LabelRule::new("Chief Executive Officer", CompanyField::Ceo),
            ],
            class_rules: vec![TagClassRule {
                tag: "li".to_string(),
                class: "amount".to_string(),
                field: CompanyField::MarketCap,
            }],
        }
    }

    pub fn with_label_rule(mut self, rule: LabelRule) -> Self {
        self.label_rules.push(rule);
        self
    }

    fn apply_class_rules(&self, document: &RetrievedDocument, record: &mut CompanyRecord) {
        for rule in &self.class_rules {
            if let Some(text) = document.html.first_text_by_class(&rule.tag, &rule.class) {
                record.set(rule.field, normalize_text(&text));
            }
        }
    }

    fn apply_label_rules(&self, document: &RetrievedDocument, record: &mut CompanyRecord) {
        for rule in &self.label_rules {
            let matches = |text: &str| self.matching.matches(text, &rule.label);
            match document.html.text_after_label(LABEL_TAG, &matches, VALUE_TAG) {
                Some(text) => record.set(rule.field, normalize_text(&text)),
                None => trace!("Label {:?} not found on {}", rule.label, document.url),
            }
        }
    }

    // The first link with visible text wins, wherever it sits on the page.
    fn apply_website_rule(&self, document: &RetrievedDocument, record: &mut CompanyRecord) {
        if let Some(href) = document.html.first_link_with_text() {
            let website = normalize_text(&href);
            record.set(CompanyField::EmailDomain, network_location(&website));
            record.set(CompanyField::Website, website);
        }
    }
}

impl Extractor for CompanyExtractor {
    fn extract(&self, document: &RetrievedDocument, record: &mut CompanyRecord) {
        self.apply_class_rules(document, record);
        self.apply_label_rules(document, record);
        self.apply_website_rule(document, record);

        debug!(
            "Extracted {} field(s) from {}",
            record.populated_fields(),
            document.url
        );
    }
}
