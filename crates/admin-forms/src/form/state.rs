use super::{FieldErrors, FormSchema};

/// Values, per-field errors and submission flags of one mounted form
#[derive(Debug, Clone)]
pub struct FormState<S: FormSchema> {
    pub(super) defaults: S::Values,
    pub(super) values: S::Values,
    pub(super) errors: FieldErrors<S::Field>,
    pub(super) dirty: bool,
    pub(super) submitting: bool,
    pub(super) submit_count: u32,
}

impl<S: FormSchema> FormState<S> {
    /// Mount a form; `defaults` are also what [`super::FormEvent::Reset`] restores
    pub fn new(defaults: S::Values) -> Self {
        Self {
            values: defaults.clone(),
            defaults,
            errors: FieldErrors::default(),
            dirty: false,
            submitting: false,
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &S::Values {
        &self.values
    }

    pub fn defaults(&self) -> &S::Values {
        &self.defaults
    }

    pub fn errors(&self) -> &FieldErrors<S::Field> {
        &self.errors
    }

    pub fn error(&self, field: S::Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Number of submit attempts, valid or not
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }
}

impl<S: FormSchema> Default for FormState<S> {
    fn default() -> Self {
        Self::new(S::Values::default())
    }
}
