use serde::Serialize;
use crate::client::error::ValidationError;

pub const BACKEND_ERROR_TEXT: &str = "Error connecting to backend";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
}

impl FormInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }
}

/// Body of the POST. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub name: String,
}

impl From<&FormInput> for RequestPayload {
    fn from(input: &FormInput) -> Self {
        // sent as typed; trimming only decides validity
        Self { name: input.name.clone() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    Dispatched(RequestPayload),
    Invalid(ValidationError),
    /// A request is already in flight; nothing changed.
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct GreetingFormState {
    pub input: FormInput,
    pub validation_error: Option<ValidationError>,
    pub phase: FormPhase,
    pub response: String,
    /// Set after the first submit attempt; from then on edits re-validate.
    attempted: bool,
}

impl GreetingFormState {
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn name(&self) -> &str {
        &self.input.name
    }

    pub fn set_name(&mut self, name: String) {
        self.input.name = name;
        if self.attempted {
            self.validation_error = self.input.validate().err();
        }
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_loading() {
            return SubmitAttempt::InFlight;
        }
        self.attempted = true;
        if let Err(e) = self.input.validate() {
            self.validation_error = Some(e.clone());
            return SubmitAttempt::Invalid(e);
        }
        self.validation_error = None;
        self.phase = FormPhase::Submitting;
        SubmitAttempt::Dispatched(RequestPayload::from(&self.input))
    }

    /// Close the in-flight cycle with whatever text the request produced.
    pub fn settle(&mut self, response: String) {
        self.response = response;
        self.phase = FormPhase::Idle;
    }
}
