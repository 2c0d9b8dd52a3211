use std::sync::Arc;

use async_trait::async_trait;
use khc_alexa::{AddressLookup, HandlerInput, LAUNCH_REQUEST, RequestHandler, ResponseEnvelope, is_request_type};
use khc_core::Locale;

use crate::advice::Advisor;

/// Answers the skill launch with today's shorts advice
///
/// Looks up the device's postal code first. Without it the user is asked
/// to grant address access and the session ends; the advisor is not
/// consulted.
pub struct LaunchRequestHandler {
    address: Arc<dyn AddressLookup>,
    advisor: Arc<dyn Advisor>,
    locale: Locale,
}

impl LaunchRequestHandler {
    pub fn new(address: Arc<dyn AddressLookup>, advisor: Arc<dyn Advisor>, locale: Locale) -> Self {
        Self {
            address,
            advisor,
            locale,
        }
    }
}

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_request_type(input, LAUNCH_REQUEST)
    }

    async fn handle(&self, input: &HandlerInput) -> ResponseEnvelope {
        let postal_code = match self.address.postal_code(input.system()).await {
            Ok(postal_code) => postal_code,
            Err(e) => {
                tracing::info!(reason = %e, "asking user for address permission");
                return input
                    .response_builder()
                    .speak(self.locale.permission_request())
                    .should_end_session(true)
                    .build();
            }
        };

        let answer = self.advisor.short_answer(&postal_code).await;
        input.response_builder().speak(answer).build()
    }
}
