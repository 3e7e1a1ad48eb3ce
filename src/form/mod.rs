mod controller;
pub mod rules;
mod validation;


pub use contact_form_derive::FormModel;
pub use controller::{
    FieldKey, FieldMeta, FormController, FormError, FormOptions, FormPhase, FormResult,
    SubmitOutcome, SubmitState, ValidationMode,
};
pub use validation::{FieldLens, FieldValidator, FormModel, ValidationError};
