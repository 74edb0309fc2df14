use std::time::Duration;

use crate::parser::LabelMatching;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Pause between two consecutive URLs.
    pub delay: Duration,
    /// Upper bound for a single fetch, transport included.
    pub request_timeout: Duration,
    pub user_agent: String,
    pub label_matching: LabelMatching,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            label_matching: LabelMatching::Exact,
        }
    }
}

impl BatchConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_label_matching(mut self, matching: LabelMatching) -> Self {
        self.label_matching = matching;
        self
    }
}
