use gpui::SharedString;

use super::model::{ContactField, ContactFormValues};
use crate::form::rules::{has_min_chars, is_blank, is_email_shape};
use crate::form::{FieldKey, FormController, FormModel, FormResult, ValidationError};

pub const FIRST_NAME_MIN_CHARS: usize = 5;
pub const ERROR_PREFIX: &str = "Error: ";

/// A field-level violation. Each field reports at most one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactError {
    Required(FieldKey),
    TooShort { field: FieldKey, min: usize },
    InvalidEmail(FieldKey),
}

impl ContactError {
    pub fn field_key(&self) -> FieldKey {
        match self {
            ContactError::Required(field) | ContactError::InvalidEmail(field) => *field,
            ContactError::TooShort { field, .. } => *field,
        }
    }

    pub fn field(&self) -> Option<ContactField> {
        ContactField::from_key(self.field_key())
    }

    /// Rendered form, e.g. `Error: lastName is a required field.`
    pub fn display_text(&self) -> SharedString {
        format!("{ERROR_PREFIX}{}", self.message()).into()
    }
}

impl ValidationError for ContactError {
    fn message(&self) -> SharedString {
        match self {
            ContactError::Required(field) => format!("{field} is a required field.").into(),
            ContactError::TooShort { field, min } => {
                format!("{field} must have at least {min} characters.").into()
            }
            ContactError::InvalidEmail(field) => {
                format!("{field} must be a valid email address.").into()
            }
        }
    }
}

pub fn validate_field(field: ContactField, values: &ContactFormValues) -> Option<ContactError> {
    let key = field.key();
    let value: &str = values.get(field);
    match field {
        ContactField::FirstName => {
            if is_blank(value) {
                Some(ContactError::Required(key))
            } else if !has_min_chars(value.trim(), FIRST_NAME_MIN_CHARS) {
                Some(ContactError::TooShort {
                    field: key,
                    min: FIRST_NAME_MIN_CHARS,
                })
            } else {
                None
            }
        }
        ContactField::LastName => is_blank(value).then_some(ContactError::Required(key)),
        ContactField::Email => {
            if is_blank(value) {
                Some(ContactError::Required(key))
            } else if !is_email_shape(value) {
                Some(ContactError::InvalidEmail(key))
            } else {
                None
            }
        }
        ContactField::Message => None,
    }
}

pub fn validate(values: &ContactFormValues) -> Vec<ContactError> {
    ContactField::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values))
        .collect()
}

/// Installs the contact rules on `controller`, one validator per field, so
/// change-time and submit-time evaluation share [`validate_field`].
pub fn register_rules(
    controller: &FormController<ContactFormValues, ContactError>,
) -> FormResult<()> {
    let fields = ContactFormValues::fields();
    controller.register_field_validator(fields.first_name(), field_rule(ContactField::FirstName))?;
    controller.register_field_validator(fields.last_name(), field_rule(ContactField::LastName))?;
    controller.register_field_validator(fields.email(), field_rule(ContactField::Email))?;
    controller.register_field_validator(fields.message(), field_rule(ContactField::Message))?;

    controller.register_required_field(fields.first_name())?;
    controller.register_required_field(fields.last_name())?;
    controller.register_required_field(fields.email())?;
    Ok(())
}

fn field_rule(
    field: ContactField,
) -> impl Fn(&ContactFormValues, &SharedString) -> Result<(), ContactError> + Send + Sync + 'static
{
    move |values: &ContactFormValues, _value: &SharedString| {
        validate_field(field, values).map_or(Ok(()), Err)
    }
}
