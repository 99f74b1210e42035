//! Headless greeting form: the same state machine the GUI drives, callable
//! from tests or any other front end.

use log::warn;
use crate::client::error::ValidationError;
use crate::client::models::form_state::{GreetingFormState, SubmitAttempt};
use crate::client::services::greeting_service::{GreetingService, Settlement};

#[derive(Debug)]
pub struct GreetingForm {
    state: GreetingFormState,
    service: GreetingService,
}

impl GreetingForm {
    pub fn new(service: GreetingService) -> Self {
        Self { state: GreetingFormState::default(), service }
    }

    pub fn state(&self) -> &GreetingFormState {
        &self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.set_name(name.into());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.state.input.validate()
    }

    /// Runs one full Idle -> Submitting -> Idle cycle. Only validation
    /// failures surface as errors; backend trouble ends up in the response
    /// text.
    pub async fn submit(&mut self) -> Result<Settlement, ValidationError> {
        let payload = match self.state.begin_submit() {
            SubmitAttempt::Dispatched(payload) => payload,
            SubmitAttempt::Invalid(e) => return Err(e),
            SubmitAttempt::InFlight => {
                // cannot happen while submit holds &mut self
                warn!("[FORM] submit ignored, request already in flight");
                return Ok(Settlement { response: self.state.response.clone(), failure: None });
            }
        };
        let settled = self.service.submit(payload).await;
        self.state.settle(settled.response.clone());
        Ok(settled)
    }
}
