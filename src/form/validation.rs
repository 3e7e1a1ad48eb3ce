use std::collections::BTreeMap;
use std::sync::Arc;

use gpui::SharedString;
use tracing::debug;

use super::controller::{
    FieldKey, FieldRule, FormController, FormResult, ValidationMode, read_lock, write_lock,
};

pub trait ValidationError: Clone + Send + Sync + 'static {
    fn message(&self) -> SharedString;
}

/// Typed access to one field of a model `T`.
pub trait FieldLens<T>: Copy + Send + Sync + 'static {
    type Value: Clone + PartialEq + Send + Sync + 'static;

    fn key(self) -> FieldKey;
    fn get<'a>(self, model: &'a T) -> &'a Self::Value;
    fn set(self, model: &mut T, value: Self::Value);
}

pub trait FormModel: Clone + Send + Sync + 'static {
    type Fields;

    fn fields() -> Self::Fields;

    /// Field keys in declaration order.
    fn field_keys() -> &'static [FieldKey] {
        &[]
    }
}

/// A rule over one field. It sees the whole model so it can compare fields.
pub trait FieldValidator<T, L, E>: Send + Sync
where
    L: FieldLens<T>,
    E: ValidationError,
{
    fn validate(&self, model: &T, value: &L::Value) -> Result<(), E>;
}

impl<T, L, E, F> FieldValidator<T, L, E> for F
where
    L: FieldLens<T>,
    E: ValidationError,
    F: for<'a> Fn(&'a T, &'a L::Value) -> Result<(), E> + Send + Sync,
{
    fn validate(&self, model: &T, value: &L::Value) -> Result<(), E> {
        (self)(model, value)
    }
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    /// Rules on one field run in registration order.
    pub fn register_field_validator<L, V>(&self, lens: L, validator: V) -> FormResult<()>
    where
        L: FieldLens<T>,
        V: FieldValidator<T, L, E> + 'static,
    {
        let validator = Arc::new(validator);
        let rule: FieldRule<T, E> =
            Arc::new(move |model: &T| validator.validate(model, lens.get(model)));
        write_lock(&self.rules, "registering field validator")?
            .entry(lens.key())
            .or_default()
            .push(rule);
        Ok(())
    }

    /// Writes one field. Under [`ValidationMode::OnChange`] only that field
    /// is re-checked; the others keep whatever errors they had.
    pub fn set<L>(&self, lens: L, value: L::Value) -> FormResult<()>
    where
        L: FieldLens<T>,
    {
        let key = lens.key();
        {
            let mut state = write_lock(&self.state, "writing field value")?;
            lens.set(&mut state.model, value);
            let dirty = lens.get(&state.model) != lens.get(&state.initial_model);
            state.meta_mut(key).dirty = dirty;
            state.leave_submitted();
            debug!(form = state.id, field = %key, dirty, "field value changed");
        }

        if self.options.validate_mode == ValidationMode::OnChange {
            self.validate_key(key)?;
        }
        Ok(())
    }

    /// Marks a field as visited. Under [`ValidationMode::OnBlur`] this is
    /// when the field is checked.
    pub fn touch(&self, key: FieldKey) -> FormResult<()> {
        write_lock(&self.state, "touching field")?.meta_mut(key).touched = true;

        if self.options.validate_mode == ValidationMode::OnBlur {
            self.validate_key(key)?;
        }
        Ok(())
    }

    /// Runs every registered rule against the current model and replaces
    /// all stored errors with the result.
    pub fn validate_form(&self) -> FormResult<bool> {
        let model = read_lock(&self.state, "reading model for form validation")?
            .model
            .clone();
        let rules = read_lock(&self.rules, "reading rules for form validation")?.clone();

        let mut found = rules
            .iter()
            .map(|(key, rules)| (*key, self.run_rules(&model, rules)))
            .collect::<BTreeMap<_, _>>();

        let mut state = write_lock(&self.state, "storing form validation result")?;
        for (key, meta) in state.field_meta.iter_mut() {
            meta.errors = found.remove(key).unwrap_or_default();
        }
        for (key, errors) in found {
            state.meta_mut(key).errors = errors;
        }
        Ok(state.field_meta.values().all(|meta| meta.errors.is_empty()))
    }

    fn validate_key(&self, key: FieldKey) -> FormResult<bool> {
        let model = read_lock(&self.state, "reading model for field validation")?
            .model
            .clone();
        let rules = read_lock(&self.rules, "reading rules for field validation")?
            .get(&key)
            .cloned()
            .unwrap_or_default();

        let errors = self.run_rules(&model, &rules);
        let valid = errors.is_empty();
        write_lock(&self.state, "storing field validation result")?
            .meta_mut(key)
            .errors = errors;
        Ok(valid)
    }

    fn run_rules(&self, model: &T, rules: &[FieldRule<T, E>]) -> Vec<E> {
        let mut errors = Vec::new();
        for rule in rules {
            if let Err(error) = rule(model) {
                errors.push(error);
                if self.options.validate_first_error_only {
                    break;
                }
            }
        }
        errors
    }
}
