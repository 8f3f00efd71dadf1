use super::{FieldValue, FormSchema};

/// Input to the form reducer
pub enum FormEvent<S: FormSchema> {
    /// User changed one field
    Edit { field: S::Field, value: FieldValue },
    /// Schema-specific structural edit (e.g. adding a row)
    Action(S::Action),
    /// Restore the values the form was mounted with
    Reset,
    /// Submit attempt that starts a request when valid
    Submit,
    /// Start a request for data validated earlier
    Begin,
    /// The in-flight request finished
    Settled,
}

/// What the reducer produced for an accepted event
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<T> {
    Updated,
    Submitted(T),
}
