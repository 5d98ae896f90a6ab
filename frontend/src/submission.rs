use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use yew::prelude::*;

use crate::config;
use crate::validation::{self, FieldErrors, FieldKind, FormField};

/// Body a quote request would carry to a real backend.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl QuoteRequest {
    pub fn from_fields(fields: &[FormField]) -> Self {
        let value = |id: &str| {
            fields
                .iter()
                .find(|f| f.id == id)
                .map(|f| f.value.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            name: value("name"),
            email: value("email"),
            phone: value("phone"),
            service: value("service"),
            message: value("message"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteReceipt {
    pub ticket: u32,
}

/// Stands in for the network round trip: waits a fixed delay and always succeeds.
pub async fn simulate_submission(ticket: u32, request: QuoteRequest) -> QuoteReceipt {
    match serde_json::to_string(&request) {
        Ok(body) => debug!("Simulating quote submission #{}: {}", ticket, body),
        Err(e) => debug!("Simulating quote submission #{} (unserializable: {})", ticket, e),
    }
    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    info!("Quote submission #{} accepted", ticket);
    QuoteReceipt { ticket }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitButton {
    original_label: String,
    label: String,
    disabled: bool,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            original_label: label.to_string(),
            label: label.to_string(),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn begin(&mut self) {
        self.label = config::SUBMITTING_LABEL.to_string();
        self.disabled = true;
    }

    pub fn finish(&mut self) {
        self.label = self.original_label.clone();
        self.disabled = false;
    }
}

pub fn quote_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Full Name", FieldKind::Text).required(),
        FormField::new("email", "Email Address", FieldKind::Email).required(),
        FormField::new("phone", "Phone Number", FieldKind::Phone).required(),
        FormField::new("service", "Service Needed", FieldKind::Select).required(),
        FormField::new("message", "Project Details", FieldKind::TextArea),
    ]
}

/// Everything the quote form shows: values, inline errors, the submit
/// control and any success overlays still on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteFormState {
    pub fields: Vec<FormField>,
    pub errors: FieldErrors,
    pub button: SubmitButton,
    pub overlays: Vec<u32>,
}

impl Default for QuoteFormState {
    fn default() -> Self {
        Self {
            fields: quote_fields(),
            errors: FieldErrors::default(),
            button: SubmitButton::new(config::SUBMIT_LABEL),
            overlays: Vec::new(),
        }
    }
}

pub enum QuoteFormAction {
    Input { field: &'static str, value: String },
    Validate,
    Begin,
    Complete(QuoteReceipt),
    DismissOverlay(u32),
}

impl Reducible for QuoteFormState {
    type Action = QuoteFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuoteFormAction::Input { field, value } => {
                let had_error = next.errors.get(field).is_some();
                if let Some(target) = next.fields.iter_mut().find(|f| f.id == field) {
                    target.value = value;
                    if had_error {
                        next.errors.refresh(target);
                    }
                }
            }
            QuoteFormAction::Validate => {
                next.errors = validation::validate(&next.fields);
            }
            QuoteFormAction::Begin => next.button.begin(),
            QuoteFormAction::Complete(receipt) => {
                next.button.finish();
                for field in next.fields.iter_mut() {
                    field.value.clear();
                }
                next.errors = FieldErrors::default();
                next.overlays.push(receipt.ticket);
            }
            QuoteFormAction::DismissOverlay(ticket) => {
                next.overlays.retain(|t| *t != ticket);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Rc<QuoteFormState> {
        let state = Rc::new(QuoteFormState::default());
        [
            ("name", "Dana Reyes"),
            ("email", "dana@example.com"),
            ("phone", "+1 (555) 123-4567"),
            ("service", "deck"),
        ]
        .into_iter()
        .fold(state, |state, (field, value)| {
            state.reduce(QuoteFormAction::Input { field, value: value.to_string() })
        })
    }

    #[test]
    fn button_begin_and_finish() {
        let mut button = SubmitButton::new("Get Free Quote");
        button.begin();
        assert!(button.disabled());
        assert_eq!(button.label(), "Submitting...");
        button.finish();
        assert!(!button.disabled());
        assert_eq!(button.label(), "Get Free Quote");
    }

    #[test]
    fn overlapping_begins_still_restore_original_label() {
        let mut button = SubmitButton::new("Send");
        button.begin();
        button.begin();
        button.finish();
        assert_eq!(button.label(), "Send");
        assert!(!button.disabled());
    }

    #[test]
    fn empty_form_fails_validation_with_required_errors() {
        let state = Rc::new(QuoteFormState::default());
        let state = state.reduce(QuoteFormAction::Validate);
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.errors.get("message"), None);
    }

    #[test]
    fn typing_clears_an_existing_error_once_valid() {
        let state = Rc::new(QuoteFormState::default()).reduce(QuoteFormAction::Validate);
        assert!(state.errors.get("email").is_some());

        let state = state.reduce(QuoteFormAction::Input { field: "email", value: "x".into() });
        assert_eq!(state.errors.get("email"), Some(validation::EMAIL_MESSAGE));

        let state = state.reduce(QuoteFormAction::Input { field: "email", value: "x@y.io".into() });
        assert_eq!(state.errors.get("email"), None);
    }

    #[test]
    fn typing_does_not_raise_new_errors() {
        let state = Rc::new(QuoteFormState::default())
            .reduce(QuoteFormAction::Input { field: "email", value: "half".into() });
        assert!(state.errors.is_empty());
    }

    #[test]
    fn full_submission_cycle() {
        let state = filled().reduce(QuoteFormAction::Validate);
        assert!(state.errors.is_empty());

        let ticket = 1;
        let state = state.reduce(QuoteFormAction::Begin);
        assert!(state.button.disabled());
        assert_eq!(state.button.label(), config::SUBMITTING_LABEL);

        let state = state.reduce(QuoteFormAction::Complete(QuoteReceipt { ticket }));
        assert!(!state.button.disabled());
        assert_eq!(state.button.label(), config::SUBMIT_LABEL);
        assert!(state.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(state.overlays, vec![ticket]);

        let state = state.reduce(QuoteFormAction::DismissOverlay(ticket));
        assert!(state.overlays.is_empty());
    }

    #[test]
    fn overlapping_submissions_stack_overlays() {
        let state = filled();
        let (first, second) = (1, 2);
        let state = state
            .reduce(QuoteFormAction::Begin)
            .reduce(QuoteFormAction::Begin);
        assert!(state.button.disabled());

        let state = state
            .reduce(QuoteFormAction::Complete(QuoteReceipt { ticket: first }))
            .reduce(QuoteFormAction::Complete(QuoteReceipt { ticket: second }));
        assert_eq!(state.overlays, vec![first, second]);
        assert!(!state.button.disabled());

        let state = state.reduce(QuoteFormAction::DismissOverlay(first));
        assert_eq!(state.overlays, vec![second]);
    }

    #[test]
    fn request_is_built_from_trimmed_values() {
        let state = filled().reduce(QuoteFormAction::Input {
            field: "name",
            value: "  Dana Reyes ".into(),
        });
        let request = QuoteRequest::from_fields(&state.fields);
        assert_eq!(request.name, "Dana Reyes");
        assert_eq!(request.service, "deck");
        assert_eq!(request.message, "");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["email"], "dana@example.com");
    }
}
