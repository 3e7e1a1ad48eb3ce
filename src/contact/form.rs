use gpui::SharedString;
use tracing::debug;

use super::display::ContactFormView;
use super::model::{ContactField, ContactFormValues};
use super::validation::{ContactError, register_rules};
use crate::form::{
    FormController, FormModel, FormOptions, FormPhase, FormResult, SubmitOutcome, ValidationMode,
};

/// The contact form's controller: values, per-field errors and the snapshot
/// of the last accepted submit. Clones share state.
#[derive(Clone)]
pub struct ContactForm {
    controller: FormController<ContactFormValues, ContactError>,
}

impl ContactForm {
    pub fn default_options() -> FormOptions {
        FormOptions {
            validate_mode: ValidationMode::OnChange,
            validate_first_error_only: true,
            focus_first_error_on_submit: true,
        }
    }

    pub fn new() -> FormResult<Self> {
        Self::with_options(Self::default_options())
    }

    pub fn with_options(options: FormOptions) -> FormResult<Self> {
        let controller = FormController::new(ContactFormValues::default(), options);
        register_rules(&controller)?;
        Ok(Self { controller })
    }

    pub fn controller(&self) -> &FormController<ContactFormValues, ContactError> {
        &self.controller
    }

    pub fn on_field_change(
        &self,
        field: ContactField,
        value: impl Into<SharedString>,
    ) -> FormResult<()> {
        let fields = ContactFormValues::fields();
        let value = value.into();
        match field {
            ContactField::FirstName => self.controller.set(fields.first_name(), value),
            ContactField::LastName => self.controller.set(fields.last_name(), value),
            ContactField::Email => self.controller.set(fields.email(), value),
            ContactField::Message => self.controller.set(fields.message(), value),
        }
    }

    /// Marks `field` as visited so the view can flag it once it is invalid.
    pub fn on_blur(&self, field: ContactField) -> FormResult<()> {
        self.controller.touch(field.key())
    }

    pub fn on_submit(&self) -> FormResult<SubmitOutcome<ContactFormValues>> {
        self.controller.submit(|values| {
            debug!(
                has_message = !values.message.is_empty(),
                "contact form values accepted"
            );
            Ok(())
        })
    }

    pub fn phase(&self) -> FormResult<FormPhase> {
        self.controller.phase()
    }

    pub fn values(&self) -> FormResult<ContactFormValues> {
        self.controller.model()
    }

    pub fn errors(&self) -> FormResult<Vec<ContactError>> {
        Ok(self
            .controller
            .errors()?
            .into_iter()
            .map(|(_, error)| error)
            .collect())
    }

    pub fn submitted(&self) -> FormResult<Option<ContactFormValues>> {
        self.controller.submitted()
    }

    pub fn first_invalid_field(&self) -> FormResult<Option<ContactField>> {
        Ok(self
            .controller
            .first_invalid_field()?
            .and_then(ContactField::from_key))
    }

    pub fn is_required(&self, field: ContactField) -> FormResult<bool> {
        self.controller.is_required(field.key())
    }

    pub fn is_touched(&self, field: ContactField) -> FormResult<bool> {
        Ok(self
            .controller
            .field_meta(field.key())?
            .is_some_and(|meta| meta.touched))
    }

    pub fn reset(&self) -> FormResult<()> {
        self.controller.reset_to_initial()
    }

    pub fn view(&self) -> FormResult<ContactFormView> {
        ContactFormView::project(self)
    }
}
