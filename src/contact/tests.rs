use super::*;
use crate::form::{FormPhase, SubmitOutcome, ValidationError};

fn values(first: &str, last: &str, email: &str, message: &str) -> ContactFormValues {
    ContactFormValues {
        first_name: first.to_string().into(),
        last_name: last.to_string().into(),
        email: email.to_string().into(),
        message: message.to_string().into(),
    }
}

fn error_texts(form: &ContactForm) -> Vec<String> {
    form.view()
        .expect("view")
        .errors
        .iter()
        .map(|error| error.text.to_string())
        .collect()
}

#[test]
fn short_first_name_reports_min_length() {
    for first in ["J", "Jo", "Joe", "Jose"] {
        let error = validate_field(ContactField::FirstName, &values(first, "", "", ""))
            .expect("short first name must fail");
        assert_eq!(
            error.display_text(),
            "Error: firstName must have at least 5 characters."
        );
    }
    assert_eq!(
        validate_field(ContactField::FirstName, &values("Joseph", "", "", "")),
        None
    );
}

#[test]
fn blank_fields_report_required() {
    let blank = values("  ", "", "\t", "");
    assert_eq!(
        validate(&blank),
        vec![
            ContactError::Required(ContactField::FirstName.key()),
            ContactError::Required(ContactField::LastName.key()),
            ContactError::Required(ContactField::Email.key()),
        ]
    );
    assert_eq!(
        ContactError::Required(ContactField::LastName.key()).message(),
        "lastName is a required field."
    );
}

#[test]
fn malformed_email_has_exact_text() {
    let error = validate_field(ContactField::Email, &values("", "", "hello", ""))
        .expect("malformed email must fail");
    assert_eq!(error, ContactError::InvalidEmail(ContactField::Email.key()));
    assert_eq!(
        error.display_text(),
        "Error: email must be a valid email address."
    );
}

#[test]
fn message_never_errors() {
    for message in ["", "  ", "x", "hello there!"] {
        assert_eq!(
            validate_field(ContactField::Message, &values("", "", "", message)),
            None
        );
    }
}

#[test]
fn field_and_form_validation_agree() {
    let samples = [
        values("", "", "", ""),
        values("Joe", "Fantuzzi", "hello", "hi"),
        values("Joseph", "", "hello@gmail.com", ""),
        values("Joseph", "Fantuzzi", "hello@gmail.com", "hello there!"),
    ];
    for sample in samples {
        let per_field = ContactField::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, &sample))
            .collect::<Vec<_>>();
        assert_eq!(validate(&sample), per_field);
        assert_eq!(validate(&sample), validate(&sample));
    }
}

#[test]
fn editing_first_name_alone_shows_one_error() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joe")
        .expect("change first name");

    assert_eq!(
        error_texts(&form),
        vec!["Error: firstName must have at least 5 characters."]
    );
}

#[test]
fn fixing_a_field_clears_its_error() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joe")
        .expect("short name");
    form.on_field_change(ContactField::FirstName, "Joseph")
        .expect("long name");
    assert!(form.errors().expect("errors").is_empty());
}

#[test]
fn blank_submit_reports_three_errors() {
    let form = ContactForm::new().expect("form");
    let outcome = form.on_submit().expect("submit");

    assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 3 });
    assert_eq!(
        error_texts(&form),
        vec![
            "Error: firstName is a required field.",
            "Error: lastName is a required field.",
            "Error: email is a required field.",
        ]
    );
    assert_eq!(form.phase().expect("phase"), FormPhase::Editing);
    assert!(form.view().expect("view").outputs.is_empty());
    assert_eq!(
        form.first_invalid_field().expect("first invalid"),
        Some(ContactField::FirstName)
    );
}

#[test]
fn missing_last_name_blocks_submit() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joseph")
        .expect("first");
    form.on_field_change(ContactField::Email, "hello@gmail.com")
        .expect("email");
    assert!(!form.on_submit().expect("submit").is_accepted());

    assert_eq!(error_texts(&form), vec!["Error: lastName is a required field."]);
    assert_eq!(form.submitted().expect("submitted"), None);
}

#[test]
fn valid_submit_snapshots_values_and_clears_errors() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joseph")
        .expect("first");
    form.on_field_change(ContactField::LastName, "Fantuzzi")
        .expect("last");
    form.on_field_change(ContactField::Email, "hello@gmail.com")
        .expect("email");

    let outcome = form.on_submit().expect("submit");
    let expected = values("Joseph", "Fantuzzi", "hello@gmail.com", "");
    assert_eq!(outcome, SubmitOutcome::Accepted(expected.clone()));
    assert_eq!(form.submitted().expect("submitted"), Some(expected));
    assert_eq!(form.phase().expect("phase"), FormPhase::Submitted);
    assert!(form.errors().expect("errors").is_empty());
}

#[test]
fn editing_after_submit_returns_to_editing() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joseph")
        .expect("first");
    form.on_field_change(ContactField::LastName, "Fantuzzi")
        .expect("last");
    form.on_field_change(ContactField::Email, "hello@gmail.com")
        .expect("email");
    assert!(form.on_submit().expect("submit").is_accepted());

    form.on_field_change(ContactField::Message, "one more thing")
        .expect("message");
    assert_eq!(form.phase().expect("phase"), FormPhase::Editing);
    assert!(form.view().expect("view").outputs.is_empty());
    assert_eq!(form.values().expect("values").message, "one more thing");
}

#[test]
fn failed_submit_after_success_drops_snapshot() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joseph")
        .expect("first");
    form.on_field_change(ContactField::LastName, "Fantuzzi")
        .expect("last");
    form.on_field_change(ContactField::Email, "hello@gmail.com")
        .expect("email");
    assert!(form.on_submit().expect("submit").is_accepted());

    form.on_field_change(ContactField::Email, "broken")
        .expect("break email");
    assert!(!form.on_submit().expect("resubmit").is_accepted());
    assert_eq!(form.submitted().expect("submitted"), None);
    assert_eq!(
        error_texts(&form),
        vec!["Error: email must be a valid email address."]
    );
}

#[test]
fn blur_flags_an_invalid_field_only_once_visited() {
    let form = ContactForm::new().expect("form");
    form.on_submit().expect("submit");
    let flagged = |form: &ContactForm, field: ContactField| {
        form.view()
            .expect("view")
            .input(field)
            .is_some_and(|input| input.flagged)
    };
    assert!(!flagged(&form, ContactField::LastName));

    form.on_blur(ContactField::LastName).expect("blur");
    assert!(form.is_touched(ContactField::LastName).expect("touched"));
    assert!(flagged(&form, ContactField::LastName));
    assert!(!flagged(&form, ContactField::FirstName));

    form.on_field_change(ContactField::LastName, "Fantuzzi")
        .expect("fix last name");
    assert!(!flagged(&form, ContactField::LastName));
}

#[test]
fn blur_alone_reports_nothing() {
    let form = ContactForm::new().expect("form");
    form.on_blur(ContactField::Email).expect("blur");
    assert!(form.errors().expect("errors").is_empty());
}

#[test]
fn reset_returns_to_blank_editing_state() {
    let form = ContactForm::new().expect("form");
    form.on_field_change(ContactField::FirstName, "Joe")
        .expect("first");
    form.reset().expect("reset");

    assert_eq!(form.values().expect("values"), ContactFormValues::default());
    assert!(form.errors().expect("errors").is_empty());
    assert!(!form.is_touched(ContactField::FirstName).expect("touched"));
    assert_eq!(form.phase().expect("phase"), FormPhase::Editing);
}

#[test]
fn output_regions_use_exact_literals() {
    let outputs = output_regions(&values("Joseph", "Fantuzzi", "hello@gmail.com", ""));
    let rendered = outputs
        .iter()
        .map(|output| (output.test_id, output.text.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(
        rendered,
        vec![
            ("firstnameDisplay", "First Name: Joseph".to_string()),
            ("lastnameDisplay", " Last Name: Fantuzzi".to_string()),
            ("emailDisplay", "Email: hello@gmail.com".to_string()),
        ]
    );

    let with_message = output_regions(&values("Joseph", "Fantuzzi", "a@b.co", "hello there!"));
    assert_eq!(
        with_message.last().map(|output| output.text.to_string()),
        Some("Message: hello there!".to_string())
    );
}

#[test]
fn blank_message_gets_no_output_region() {
    for message in ["", "   ", "\t\n"] {
        let outputs = output_regions(&values("Joseph", "Fantuzzi", "a@b.co", message));
        assert_eq!(outputs.len(), 3, "{message:?} must not render a message");
        assert!(
            outputs
                .iter()
                .all(|output| output.field != ContactField::Message)
        );
    }
}

#[test]
fn view_marks_required_inputs() {
    let form = ContactForm::new().expect("form");
    let view = form.view().expect("view");
    let required = view
        .inputs
        .iter()
        .map(|input| (input.field, input.required))
        .collect::<Vec<_>>();
    assert_eq!(
        required,
        vec![
            (ContactField::FirstName, true),
            (ContactField::LastName, true),
            (ContactField::Email, true),
            (ContactField::Message, false),
        ]
    );
}

#[test]
fn view_queries_follow_rendering_contract() {
    let view = ContactFormView::from_parts(
        &values("Joseph", "Fantuzzi", "hello@gmail.com", ""),
        &[],
        Some(&values("Joseph", "Fantuzzi", "hello@gmail.com", "")),
        |_| InputState::default(),
    );

    assert_eq!(view.query_by_text("contact form"), Some("Contact Form"));
    assert!(view.control_by_text("Submit"));
    assert_eq!(
        view.input_by_placeholder("Burke").map(|input| input.field),
        Some(ContactField::LastName)
    );
    assert_eq!(
        view.input_by_test_id("message").map(|input| input.field),
        Some(ContactField::Message)
    );
    assert_eq!(
        view.find_by_test_id("emailDisplay").map(|element| element.text().to_string()),
        Some("Email: hello@gmail.com".to_string())
    );
    assert_eq!(view.query_by_text("message:"), None);
    assert!(view.find_all_by_test_id("error").is_empty());
    assert_eq!(view.phase, FormPhase::Submitted);
}
