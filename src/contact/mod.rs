pub mod display;
mod editor;
mod form;
mod model;
mod validation;

#[cfg(test)]
mod tests;

pub use display::{
    ContactFormView, Element, ErrorView, InputState, InputView, OutputView, output_regions,
};
pub use editor::EditBuffer;
pub use form::ContactForm;
pub use model::{ContactField, ContactFormValues, ContactFormValuesFields};
pub use validation::{
    ContactError, ERROR_PREFIX, FIRST_NAME_MIN_CHARS, register_rules, validate, validate_field,
};
