use super::*;
use shared::domain::ElementId;

fn field_bindings() -> Vec<FieldBinding> {
    FieldId::ALL
        .iter()
        .map(|&field| FieldBinding {
            field,
            input: ElementId::new(field.as_str()),
            error_holder: ElementId::new(format!("{}Error", field.as_str())),
            group: ElementId::new(format!("{}Group", field.as_str())),
        })
        .collect()
}

fn coordinator() -> FormCoordinator {
    FormCoordinator::new(
        field_bindings(),
        ElementId::new("submitBtn"),
        "Send Message".to_string(),
    )
}

fn fill_valid(form: &mut FormCoordinator) {
    form.on_field_input(FieldId::Name, "Ada Lovelace".to_string());
    form.on_field_input(FieldId::Email, "ada@example.com".to_string());
    form.on_field_input(FieldId::Phone, "+1 (555) 123-4567".to_string());
    form.on_field_input(FieldId::Subject, "Courses".to_string());
    form.on_field_input(FieldId::Message, "I would like to enroll.".to_string());
}

fn has_set_text(ops: &[RenderOp], holder: &str, expected: &str) -> bool {
    ops.iter().any(|op| {
        matches!(op, RenderOp::SetText { target, text }
            if target.as_str() == holder && text == expected)
    })
}

#[test]
fn blur_validates_and_displays_the_error() {
    let mut form = coordinator();
    let ops = form.on_field_blur(FieldId::Name);

    assert_eq!(form.error(FieldId::Name), Some("Full name is required"));
    assert!(has_set_text(&ops, "nameError", "Full name is required"));
    assert!(ops.iter().any(|op| matches!(op, RenderOp::AddClass { target, class }
        if target.as_str() == "nameGroup" && *class == CssClass::Error)));
}

#[test]
fn input_on_untouched_field_stays_silent() {
    let mut form = coordinator();
    let ops = form.on_field_input(FieldId::Name, "J".to_string());

    assert!(ops.is_empty());
    assert_eq!(form.error(FieldId::Name), None);
}

#[test]
fn typing_clears_a_displayed_error_once_valid() {
    let mut form = coordinator();
    form.on_field_blur(FieldId::Name);
    assert!(form.error(FieldId::Name).is_some());

    let ops = form.on_field_input(FieldId::Name, "Jo".to_string());
    assert_eq!(form.error(FieldId::Name), None);
    assert!(has_set_text(&ops, "nameError", ""));
    assert!(ops.iter().any(|op| matches!(op, RenderOp::RemoveClass { target, class }
        if target.as_str() == "nameGroup" && *class == CssClass::Error)));
}

#[test]
fn typing_keeps_revalidating_while_still_invalid() {
    let mut form = coordinator();
    form.on_field_blur(FieldId::Name);

    form.on_field_input(FieldId::Name, "J".to_string());
    assert_eq!(
        form.error(FieldId::Name),
        Some("Name must be at least 2 characters long")
    );
}

#[test]
fn submit_with_failures_surfaces_every_invalid_field() {
    let mut form = coordinator();
    form.on_field_input(FieldId::Name, "Ada Lovelace".to_string());
    form.on_field_input(FieldId::Email, "not-an-email".to_string());

    let (ops, submission) = form.on_submit();

    assert!(submission.is_none());
    assert_eq!(form.state(), SubmissionState::Idle);
    assert_eq!(form.error(FieldId::Name), None);
    assert_eq!(
        form.error(FieldId::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(form.error(FieldId::Phone), None);
    assert_eq!(form.error(FieldId::Subject), Some("Please select a subject"));
    assert_eq!(form.error(FieldId::Message), Some("Message is required"));
    assert!(has_set_text(&ops, "emailError", "Please enter a valid email address"));
    assert!(has_set_text(&ops, "subjectError", "Please select a subject"));
    assert!(has_set_text(&ops, "messageError", "Message is required"));
}

#[test]
fn submit_with_all_fields_valid_enters_submitting() {
    let mut form = coordinator();
    fill_valid(&mut form);

    let (ops, submission) = form.on_submit();

    assert_eq!(form.state(), SubmissionState::Submitting);
    let submission = submission.expect("validated form should produce a submission");
    assert!(submission
        .values
        .iter()
        .any(|(field, value)| *field == FieldId::Email && value == "ada@example.com"));
    assert!(ops.iter().any(|op| matches!(op, RenderOp::SetDisabled { target, disabled }
        if target.as_str() == "submitBtn" && *disabled)));
    assert!(has_set_text(&ops, "submitBtn", "Sending..."));
}

#[test]
fn submit_while_submitting_is_ignored() {
    let mut form = coordinator();
    fill_valid(&mut form);
    form.on_submit();

    let (ops, submission) = form.on_submit();
    assert!(ops.is_empty());
    assert!(submission.is_none());
    assert_eq!(form.state(), SubmissionState::Submitting);
}

#[test]
fn completion_clears_fields_and_restores_the_submit_control() {
    let mut form = coordinator();
    fill_valid(&mut form);
    form.on_submit();

    let ops = form.on_submission_complete();

    assert_eq!(form.state(), SubmissionState::Idle);
    for field in FieldId::ALL {
        assert_eq!(form.value(field), "");
        assert_eq!(form.error(field), None);
    }
    assert!(ops
        .iter()
        .any(|op| matches!(op, RenderOp::Announce { message }
            if message.starts_with("Thank you"))));
    assert!(has_set_text(&ops, "submitBtn", "Send Message"));
    assert!(ops.iter().any(|op| matches!(op, RenderOp::SetDisabled { target, disabled }
        if target.as_str() == "submitBtn" && !*disabled)));
    assert!(ops.iter().any(|op| matches!(op, RenderOp::SetValue { target, value }
        if target.as_str() == "message" && value.is_empty())));
}

#[test]
fn completion_while_idle_is_a_noop() {
    let mut form = coordinator();
    assert!(form.on_submission_complete().is_empty());
    assert_eq!(form.state(), SubmissionState::Idle);
}
