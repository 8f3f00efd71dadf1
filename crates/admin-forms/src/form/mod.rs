//! Form State
//!
//! A form is a schema (field set, raw values, validation) plus a typed state
//! object updated through a single reducer, [`FormState::apply`].

mod actions;
mod errors;
mod reducers;
mod state;
mod value;

use std::fmt;

pub use actions::{FormEvent, FormOutcome};
pub use errors::FieldErrors;
pub use state::FormState;
pub use value::FieldValue;

use crate::error::FieldCoercionError;

/// Declarative description of one form
pub trait FormSchema {
    /// Addressable input of the form; `Display` yields the error key
    type Field: Copy + Ord + fmt::Debug + fmt::Display;
    /// Raw values as edited by the user
    type Values: Clone + Default + fmt::Debug;
    /// Validated payload
    type Output;
    /// Structural edits that do not target a single field
    type Action;

    /// Store a raw input into `field`
    fn set_field(
        values: &mut Self::Values,
        field: Self::Field,
        value: FieldValue,
    ) -> Result<(), FieldCoercionError>;

    fn apply_action(values: &mut Self::Values, action: Self::Action);

    /// Check every field; on failure report one message per offending field
    fn validate(values: &Self::Values) -> Result<Self::Output, FieldErrors<Self::Field>>;
}
