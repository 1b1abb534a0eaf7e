//! Contact form state machine: per-field records, inline error display,
//! and the Idle/Submitting submission cycle.

use shared::{
    domain::{ElementId, FieldBinding, FieldId},
    render::{CssClass, RenderOp},
};

use crate::transport::FormSubmission;
use crate::validate::{validate, Verdict};

const PENDING_LABEL: &str = "Sending...";
const COMPLETION_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Current value and displayed error for one form field.
#[derive(Debug, Clone)]
pub struct FieldRecord {
    pub field: FieldId,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// Orchestrates validation across the whole form. Owns the field records
/// outright; nothing here reaches back into ambient page state.
pub struct FormCoordinator {
    bindings: Vec<FieldBinding>,
    submit_control: ElementId,
    submit_label: String,
    records: Vec<FieldRecord>,
    state: SubmissionState,
}

impl FormCoordinator {
    pub fn new(
        bindings: Vec<FieldBinding>,
        submit_control: ElementId,
        submit_label: String,
    ) -> Self {
        let records = bindings
            .iter()
            .map(|binding| FieldRecord {
                field: binding.field,
                value: String::new(),
                error: None,
            })
            .collect();
        Self {
            bindings,
            submit_control,
            submit_label,
            records,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.record(field).value
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.record(field).error
    }

    /// Text changed in a field. Only fields currently showing an error are
    /// re-validated, so errors clear as the user types but untouched fields
    /// are never eagerly invalidated.
    pub fn on_field_input(&mut self, field: FieldId, value: String) -> Vec<RenderOp> {
        self.record_mut(field).value = value;
        if self.record(field).error.is_some() {
            self.run_validation(field)
        } else {
            Vec::new()
        }
    }

    /// Focus left a field: validate it and update its displayed state.
    pub fn on_field_blur(&mut self, field: FieldId) -> Vec<RenderOp> {
        self.run_validation(field)
    }

    /// Submit pressed. Every field is validated, not just the first
    /// failure; submission begins only when all pass.
    pub fn on_submit(&mut self) -> (Vec<RenderOp>, Option<FormSubmission>) {
        if self.state == SubmissionState::Submitting {
            return (Vec::new(), None);
        }

        let mut ops = Vec::new();
        let mut all_valid = true;
        for field in self.field_ids() {
            ops.extend(self.run_validation(field));
            if self.record(field).error.is_some() {
                all_valid = false;
            }
        }
        if !all_valid {
            return (ops, None);
        }

        self.state = SubmissionState::Submitting;
        ops.push(RenderOp::SetDisabled {
            target: self.submit_control.clone(),
            disabled: true,
        });
        ops.push(RenderOp::SetText {
            target: self.submit_control.clone(),
            text: PENDING_LABEL.to_string(),
        });
        let submission = FormSubmission {
            values: self
                .records
                .iter()
                .map(|record| (record.field, record.value.clone()))
                .collect(),
        };
        tracing::info!("form valid; submission started");
        (ops, Some(submission))
    }

    /// The simulated send finished: acknowledge, clear everything, restore
    /// the submit control, return to Idle.
    pub fn on_submission_complete(&mut self) -> Vec<RenderOp> {
        if self.state != SubmissionState::Submitting {
            return Vec::new();
        }
        self.state = SubmissionState::Idle;

        let mut ops = vec![RenderOp::Announce {
            message: COMPLETION_MESSAGE.to_string(),
        }];
        for index in 0..self.records.len() {
            self.records[index].value.clear();
            self.records[index].error = None;
            let binding = &self.bindings[index];
            ops.push(RenderOp::SetValue {
                target: binding.input.clone(),
                value: String::new(),
            });
            ops.push(RenderOp::SetText {
                target: binding.error_holder.clone(),
                text: String::new(),
            });
            ops.push(RenderOp::RemoveClass {
                target: binding.group.clone(),
                class: CssClass::Error,
            });
        }
        ops.push(RenderOp::SetText {
            target: self.submit_control.clone(),
            text: self.submit_label.clone(),
        });
        ops.push(RenderOp::SetDisabled {
            target: self.submit_control.clone(),
            disabled: false,
        });
        ops
    }

    fn run_validation(&mut self, field: FieldId) -> Vec<RenderOp> {
        let verdict = validate(field, &self.record(field).value);
        self.record_mut(field).error = verdict.message();
        self.display_ops(field, verdict)
    }

    fn display_ops(&self, field: FieldId, verdict: Verdict) -> Vec<RenderOp> {
        let binding = self.binding(field);
        match verdict.message() {
            Some(message) => vec![
                RenderOp::SetText {
                    target: binding.error_holder.clone(),
                    text: message.to_string(),
                },
                RenderOp::AddClass {
                    target: binding.group.clone(),
                    class: CssClass::Error,
                },
            ],
            None => vec![
                RenderOp::SetText {
                    target: binding.error_holder.clone(),
                    text: String::new(),
                },
                RenderOp::RemoveClass {
                    target: binding.group.clone(),
                    class: CssClass::Error,
                },
            ],
        }
    }

    fn field_ids(&self) -> Vec<FieldId> {
        self.records.iter().map(|record| record.field).collect()
    }

    fn record(&self, field: FieldId) -> &FieldRecord {
        self.records
            .iter()
            .find(|record| record.field == field)
            .unwrap_or_else(|| panic!("no record for field {}", field.as_str()))
    }

    fn record_mut(&mut self, field: FieldId) -> &mut FieldRecord {
        self.records
            .iter_mut()
            .find(|record| record.field == field)
            .unwrap_or_else(|| panic!("no record for field {}", field.as_str()))
    }

    fn binding(&self, field: FieldId) -> &FieldBinding {
        self.bindings
            .iter()
            .find(|binding| binding.field == field)
            .unwrap_or_else(|| panic!("no binding for field {}", field.as_str()))
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
