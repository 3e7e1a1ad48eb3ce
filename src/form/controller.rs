use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use super::validation::{FieldLens, FormModel, ValidationError};

static NEXT_FORM_ID: AtomicU64 = AtomicU64::new(1);

fn next_form_id() -> u64 {
    NEXT_FORM_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stable name of a model field, as reported in messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Display-level state: `Submitted` holds exactly while an accepted snapshot
/// exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

impl FormPhase {
    pub fn of<T>(submitted: Option<&T>) -> Self {
        match submitted {
            Some(_) => FormPhase::Submitted,
            None => FormPhase::Editing,
        }
    }
}

/// When a single field is checked outside of submit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationMode {
    OnChange,
    OnBlur,
    OnSubmit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormOptions {
    pub validate_mode: ValidationMode,
    pub validate_first_error_only: bool,
    pub focus_first_error_on_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_mode: ValidationMode::OnSubmit,
            validate_first_error_only: false,
            focus_first_error_on_submit: true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldMeta<E> {
    pub dirty: bool,
    pub touched: bool,
    pub errors: Vec<E>,
}

impl<E> Default for FieldMeta<E> {
    fn default() -> Self {
        Self {
            dirty: false,
            touched: false,
            errors: Vec::new(),
        }
    }
}

/// Result of a submit attempt that ran to completion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome<T> {
    Accepted(T),
    Rejected { error_count: usize },
}

impl<T> SubmitOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("invalid submit state transition: {from:?} -> {to:?}")]
    InvalidStateTransition { from: SubmitState, to: SubmitState },
    #[error("form submit is already in progress")]
    AlreadySubmitting,
    #[error("submit handler rejected the form: {0}")]
    SubmitRejected(String),
}

pub type FormResult<T> = Result<T, FormError>;

pub(super) type FieldRule<T, E> = Arc<dyn Fn(&T) -> Result<(), E> + Send + Sync>;

pub(super) struct FormState<T, E> {
    pub(super) id: u64,
    pub(super) initial_model: T,
    pub(super) model: T,
    pub(super) submitted: Option<T>,
    pub(super) submit_state: SubmitState,
    pub(super) field_meta: BTreeMap<FieldKey, FieldMeta<E>>,
}

impl<T, E> FormState<T, E> {
    pub(super) fn meta_mut(&mut self, key: FieldKey) -> &mut FieldMeta<E> {
        self.field_meta.entry(key).or_default()
    }

    /// Any edit invalidates a previously accepted snapshot.
    pub(super) fn leave_submitted(&mut self) {
        if self.submitted.take().is_some() {
            self.submit_state = SubmitState::Idle;
        }
    }

    fn error_count(&self) -> usize {
        self.field_meta.values().map(|meta| meta.errors.len()).sum()
    }
}

/// Shared handle over one form's values, per-field metadata and rules.
/// Clones observe the same state.
#[derive(Clone)]
pub struct FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub(super) options: FormOptions,
    pub(super) state: Arc<RwLock<FormState<T, E>>>,
    pub(super) rules: Arc<RwLock<BTreeMap<FieldKey, Vec<FieldRule<T, E>>>>>,
    required: Arc<RwLock<BTreeSet<FieldKey>>>,
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn new(initial: T, options: FormOptions) -> Self {
        Self {
            options,
            state: Arc::new(RwLock::new(FormState {
                id: next_form_id(),
                initial_model: initial.clone(),
                model: initial,
                submitted: None,
                submit_state: SubmitState::Idle,
                field_meta: BTreeMap::new(),
            })),
            rules: Arc::new(RwLock::new(BTreeMap::new())),
            required: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn register_required_field<L>(&self, lens: L) -> FormResult<()>
    where
        L: FieldLens<T>,
    {
        write_lock(&self.required, "registering required field")?.insert(lens.key());
        Ok(())
    }

    pub fn is_required(&self, key: FieldKey) -> FormResult<bool> {
        Ok(read_lock(&self.required, "reading required fields")?.contains(&key))
    }

    /// Validates every field and, when nothing fails, hands the values to
    /// `f`. The snapshot is only taken once `f` accepts them.
    ///
    /// A failed validation is not an error: it returns
    /// [`SubmitOutcome::Rejected`] and leaves the form editable.
    pub fn submit(
        &self,
        f: impl FnOnce(&T) -> FormResult<()>,
    ) -> FormResult<SubmitOutcome<T>> {
        let form = {
            let mut state = write_lock(&self.state, "starting submit")?;
            if state.submit_state == SubmitState::Submitting {
                return Err(FormError::AlreadySubmitting);
            }
            transition_submit_state(&mut state, SubmitState::Validating)?;
            state.submitted = None;
            state.id
        };

        if !self.validate_form()? {
            let mut state = write_lock(&self.state, "rejecting submit")?;
            transition_submit_state(&mut state, SubmitState::Failed)?;
            let error_count = state.error_count();
            info!(form, error_count, "submit rejected by validation");
            return Ok(SubmitOutcome::Rejected { error_count });
        }

        let model = {
            let mut state = write_lock(&self.state, "handing values to submit handler")?;
            transition_submit_state(&mut state, SubmitState::Submitting)?;
            state.model.clone()
        };
        let handled = f(&model);

        let mut state = write_lock(&self.state, "finishing submit")?;
        match handled {
            Ok(()) => {
                transition_submit_state(&mut state, SubmitState::Succeeded)?;
                state.submitted = Some(model.clone());
                info!(form, "submit accepted");
                Ok(SubmitOutcome::Accepted(model))
            }
            Err(error) => {
                transition_submit_state(&mut state, SubmitState::Failed)?;
                info!(form, %error, "submit handler failed");
                Err(error)
            }
        }
    }

    /// Current values.
    pub fn model(&self) -> FormResult<T> {
        Ok(read_lock(&self.state, "reading model")?.model.clone())
    }

    /// Values captured by the last accepted submit, if still current.
    pub fn submitted(&self) -> FormResult<Option<T>> {
        Ok(read_lock(&self.state, "reading submitted values")?
            .submitted
            .clone())
    }

    pub fn phase(&self) -> FormResult<FormPhase> {
        let state = read_lock(&self.state, "reading form phase")?;
        Ok(FormPhase::of(state.submitted.as_ref()))
    }

    pub fn submit_state(&self) -> FormResult<SubmitState> {
        Ok(read_lock(&self.state, "reading submit state")?.submit_state)
    }

    /// Restores the initial values and forgets metadata and any snapshot.
    pub fn reset_to_initial(&self) -> FormResult<()> {
        let mut state = write_lock(&self.state, "resetting form")?;
        state.model = state.initial_model.clone();
        state.submitted = None;
        state.submit_state = SubmitState::Idle;
        state.field_meta.clear();
        Ok(())
    }

    pub fn field_meta(&self, key: FieldKey) -> FormResult<Option<FieldMeta<E>>> {
        Ok(read_lock(&self.state, "reading field meta")?
            .field_meta
            .get(&key)
            .cloned())
    }
}

impl<T, E> FormController<T, E>
where
    T: FormModel,
    E: ValidationError,
{
    /// Every stored error, ordered by the model's field declaration order.
    /// Keys the model does not declare follow in key order.
    pub fn errors(&self) -> FormResult<Vec<(FieldKey, E)>> {
        let state = read_lock(&self.state, "collecting form errors")?;
        let declared = T::field_keys();
        let undeclared = state
            .field_meta
            .keys()
            .filter(|key| !declared.contains(key));
        Ok(declared
            .iter()
            .chain(undeclared)
            .filter_map(|key| state.field_meta.get(key).map(|meta| (*key, meta)))
            .flat_map(|(key, meta)| meta.errors.iter().cloned().map(move |error| (key, error)))
            .collect())
    }

    /// First field, in declaration order, that currently has an error.
    pub fn first_invalid_field(&self) -> FormResult<Option<FieldKey>> {
        Ok(self.errors()?.first().map(|(key, _)| *key))
    }
}

fn transition_submit_state<T, E>(
    state: &mut FormState<T, E>,
    next: SubmitState,
) -> FormResult<()> {
    let current = state.submit_state;
    if current == next {
        return Ok(());
    }

    let allowed = matches!(
        (current, next),
        (
            SubmitState::Idle | SubmitState::Succeeded | SubmitState::Failed,
            SubmitState::Validating
        ) | (
            SubmitState::Validating,
            SubmitState::Submitting | SubmitState::Failed
        ) | (
            SubmitState::Submitting,
            SubmitState::Succeeded | SubmitState::Failed
        ) | (_, SubmitState::Idle)
    );
    if !allowed {
        return Err(FormError::InvalidStateTransition {
            from: current,
            to: next,
        });
    }
    state.submit_state = next;
    Ok(())
}

pub(super) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

pub(super) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
