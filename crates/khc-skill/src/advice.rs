use std::sync::Arc;

use async_trait::async_trait;
use khc_core::Locale;
use khc_llm::{ChatCompletion, DEFAULT_MAX_TOKENS};

/// Answers whether shorts can be worn today at a postal code
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn short_answer(&self, postal_code: &str) -> String;
}

/// Asks the completion model, which also infers the place from the code
pub struct ShortsAdvisor {
    completion: Arc<dyn ChatCompletion>,
    locale: Locale,
    max_tokens: u32,
}

impl ShortsAdvisor {
    pub fn new(completion: Arc<dyn ChatCompletion>, locale: Locale) -> Self {
        Self {
            completion,
            locale,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl Advisor for ShortsAdvisor {
    async fn short_answer(&self, postal_code: &str) -> String {
        let prompt = self.locale.shorts_prompt(postal_code);
        self.completion.chat_completion(&prompt, self.max_tokens).await
    }
}
