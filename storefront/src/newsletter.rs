//! Newsletter email draft.
//!
//! The footer input is a controlled field: its value lives in a reactive
//! signal and every `input` event replaces it with the field's current text.
//! Nothing is validated, truncated or submitted.

use leptos::prelude::*;

/// Reactive holder for the newsletter input value.
#[derive(Clone, Copy, Debug)]
pub struct NewsletterDraft {
    value: RwSignal<String>,
}

impl Default for NewsletterDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterDraft {
    /// Empty draft.
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
        }
    }

    /// Store the field's current text verbatim. Called from the `input` handler.
    pub fn record_input(&self, value: String) {
        self.value.set(value);
    }

    /// Empty the field.
    pub fn clear(&self) {
        self.value.set(String::new());
    }

    /// Current value without subscribing.
    pub fn value(&self) -> String {
        self.value.get_untracked()
    }

    /// Current value, tracked by the reactive graph.
    pub fn tracked_value(&self) -> String {
        self.value.get()
    }
}
