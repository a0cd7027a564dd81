use super::*;

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(ContactField::Name, "A");
    form.update_field(ContactField::Email, "a@a.com");
    form
}

#[test]
fn begin_submit_sets_both_flags_and_snapshots_fields() {
    let mut form = filled_form();
    form.update_field(ContactField::Service, "weddings");
    form.update_field(ContactField::Message, "hello");

    let message = form.begin_submit().expect("valid form");
    assert!(form.submitting());
    assert!(form.shutter_visible());
    assert_eq!(message.name, "A");
    assert_eq!(message.email, "a@a.com");
    assert_eq!(message.service, "weddings");
    assert_eq!(message.message, "hello");
}

#[test]
fn success_resets_all_fields_and_clears_flags() {
    let mut form = filled_form();
    form.update_field(ContactField::Message, "project details");
    form.begin_submit().expect("valid form");

    form.submit_succeeded();
    assert!(!form.submitting());
    assert!(!form.shutter_visible());
    for field in [
        ContactField::Name,
        ContactField::Email,
        ContactField::Service,
        ContactField::Message,
    ] {
        assert_eq!(form.field(field), "", "{} should be empty", field.label());
    }
}

#[test]
fn second_submit_while_in_flight_is_a_no_op() {
    let mut form = filled_form();
    form.begin_submit().expect("first submit");

    let err = form.begin_submit().unwrap_err();
    assert_eq!(err, FormError::SubmissionInFlight);
    assert!(form.submitting());
    assert_eq!(form.field(ContactField::Name), "A");
    assert_eq!(form.field(ContactField::Email), "a@a.com");
}

#[test]
fn failure_keeps_fields_and_clears_flags_for_retry() {
    let mut form = filled_form();
    form.update_field(ContactField::Message, "keep me");
    form.begin_submit().expect("valid form");

    form.submit_failed();
    assert!(!form.submitting());
    assert!(!form.shutter_visible());
    assert_eq!(form.field(ContactField::Name), "A");
    assert_eq!(form.field(ContactField::Message), "keep me");

    // Retry is just another submit.
    form.begin_submit().expect("retry allowed after failure");
}

#[test]
fn empty_required_fields_are_rejected_without_state_change() {
    let mut form = ContactForm::new();
    form.update_field(ContactField::Email, "a@a.com");
    let err = form.begin_submit().unwrap_err();
    assert_eq!(
        err,
        FormError::MissingRequiredField {
            field: ContactField::Name
        }
    );
    assert!(!form.submitting());
    assert!(!form.shutter_visible());

    form.update_field(ContactField::Name, "   ");
    let err = form.begin_submit().unwrap_err();
    assert_eq!(
        err,
        FormError::MissingRequiredField {
            field: ContactField::Name
        }
    );

    form.update_field(ContactField::Name, "A");
    form.update_field(ContactField::Email, "");
    let err = form.begin_submit().unwrap_err();
    assert_eq!(
        err,
        FormError::MissingRequiredField {
            field: ContactField::Email
        }
    );
}

#[test]
fn optional_fields_may_be_empty() {
    let mut form = filled_form();
    let message = form.begin_submit().expect("service and message optional");
    assert_eq!(message.service, "");
    assert_eq!(message.message, "");
}

#[test]
fn edits_are_permitted_while_submitting() {
    let mut form = filled_form();
    form.begin_submit().expect("valid form");
    form.update_field(ContactField::Name, "B");
    assert_eq!(form.field(ContactField::Name), "B");
    assert!(form.submitting());
}
