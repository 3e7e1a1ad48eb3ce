//! Pure projection of contact form state into what the window shows.
//!
//! The projection is rebuilt from scratch after every event, so a rendered
//! frame never mixes old and new state.

use gpui::SharedString;

use super::form::ContactForm;
use super::model::{ContactField, ContactFormValues};
use super::validation::ContactError;
use crate::form::rules::is_blank;
use crate::form::{FormPhase, FormResult};

pub const HEADER: &str = "Contact Form";
pub const SUBMIT_LABEL: &str = "Submit";
pub const ERROR_TEST_ID: &str = "error";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputView {
    pub field: ContactField,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub test_id: Option<&'static str>,
    pub required: bool,
    /// Visited and left while holding an error.
    pub flagged: bool,
    pub value: SharedString,
}

/// Per-input state the projection cannot derive from values and errors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputState {
    pub required: bool,
    pub touched: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorView {
    pub field: Option<ContactField>,
    pub test_id: &'static str,
    pub text: SharedString,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputView {
    pub field: ContactField,
    pub test_id: &'static str,
    pub text: SharedString,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactFormView {
    pub header: &'static str,
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    pub errors: Vec<ErrorView>,
    pub outputs: Vec<OutputView>,
    pub phase: FormPhase,
}

/// Any element of the view that carries a test id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Element<'a> {
    Input(&'a InputView),
    Error(&'a ErrorView),
    Output(&'a OutputView),
}

impl Element<'_> {
    pub fn text(&self) -> &str {
        match self {
            Element::Input(input) => &input.value,
            Element::Error(error) => &error.text,
            Element::Output(output) => &output.text,
        }
    }
}

impl ContactFormView {
    pub fn project(form: &ContactForm) -> FormResult<Self> {
        let values = form.values()?;
        let errors = form.errors()?;
        let submitted = form.submitted()?;
        let mut states = [InputState::default(); ContactField::ALL.len()];
        for field in ContactField::ALL {
            states[field.index()] = InputState {
                required: form.is_required(field)?,
                touched: form.is_touched(field)?,
            };
        }
        Ok(Self::from_parts(
            &values,
            &errors,
            submitted.as_ref(),
            |field| states[field.index()],
        ))
    }

    pub fn from_parts(
        values: &ContactFormValues,
        errors: &[ContactError],
        submitted: Option<&ContactFormValues>,
        input_state: impl Fn(ContactField) -> InputState,
    ) -> Self {
        let inputs = ContactField::ALL
            .into_iter()
            .map(|field| {
                let state = input_state(field);
                InputView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    test_id: field.input_test_id(),
                    required: state.required,
                    flagged: state.touched
                        && errors.iter().any(|error| error.field() == Some(field)),
                    value: values.get(field).clone(),
                }
            })
            .collect();
        let errors = errors
            .iter()
            .map(|error| ErrorView {
                field: error.field(),
                test_id: ERROR_TEST_ID,
                text: error.display_text(),
            })
            .collect();

        Self {
            header: HEADER,
            inputs,
            submit_label: SUBMIT_LABEL,
            errors,
            outputs: submitted.map(output_regions).unwrap_or_default(),
            phase: FormPhase::of(submitted),
        }
    }

    pub fn input(&self, field: ContactField) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.field == field)
    }

    pub fn input_by_placeholder(&self, placeholder: &str) -> Option<&InputView> {
        self.inputs
            .iter()
            .find(|input| input.placeholder == Some(placeholder))
    }

    pub fn input_by_test_id(&self, test_id: &str) -> Option<&InputView> {
        self.inputs
            .iter()
            .find(|input| input.test_id == Some(test_id))
    }

    /// `true` when `text` is the label of the submit control.
    pub fn control_by_text(&self, text: &str) -> bool {
        self.submit_label == text
    }

    pub fn find_all_by_test_id(&self, test_id: &str) -> Vec<Element<'_>> {
        let inputs = self
            .inputs
            .iter()
            .filter(|input| input.test_id == Some(test_id))
            .map(Element::Input);
        let errors = self
            .errors
            .iter()
            .filter(|error| error.test_id == test_id)
            .map(Element::Error);
        let outputs = self
            .outputs
            .iter()
            .filter(|output| output.test_id == test_id)
            .map(Element::Output);
        inputs.chain(errors).chain(outputs).collect()
    }

    /// The single element with `test_id`; `None` when absent or ambiguous.
    pub fn find_by_test_id(&self, test_id: &str) -> Option<Element<'_>> {
        match self.find_all_by_test_id(test_id).as_slice() {
            [element] => Some(*element),
            _ => None,
        }
    }

    /// Case-insensitive substring search over all rendered text. Input
    /// values are not text nodes and are skipped.
    pub fn query_by_text(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.texts()
            .find(|text| text.to_lowercase().contains(&needle))
    }

    fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header)
            .chain(self.inputs.iter().map(|input| input.label))
            .chain(std::iter::once(self.submit_label))
            .chain(self.errors.iter().map(|error| &*error.text))
            .chain(self.outputs.iter().map(|output| &*output.text))
    }
}

/// Output regions for an accepted submit. The message region only exists
/// when a non-blank message was entered.
pub fn output_regions(submitted: &ContactFormValues) -> Vec<OutputView> {
    let mut outputs = vec![
        output(
            ContactField::FirstName,
            format!("First Name: {}", submitted.first_name),
        ),
        output(
            ContactField::LastName,
            format!(" Last Name: {}", submitted.last_name),
        ),
        output(ContactField::Email, format!("Email: {}", submitted.email)),
    ];
    if !is_blank(&submitted.message) {
        outputs.push(output(
            ContactField::Message,
            format!("Message: {}", submitted.message),
        ));
    }
    outputs
}

fn output(field: ContactField, text: String) -> OutputView {
    OutputView {
        field,
        test_id: field.output_test_id(),
        text: text.into(),
    }
}
