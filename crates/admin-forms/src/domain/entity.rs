//! Domain Layer - Core Entity Trait
//!
//! Every record the panel edits may or may not carry a server-assigned id.
//! Presence of the id is what separates editing from creating.

/// Server-assigned record identifier
pub type Identifier = u32;

/// Core trait for all records edited by a form
pub trait Entity: Sized + Clone {
    /// Returns the record's identifier, if the server assigned one
    fn id(&self) -> Option<Identifier>;

    /// Whether a form seeded with this record edits it or creates a new one
    fn form_mode(&self) -> FormMode {
        match self.id() {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }
}

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Identifier),
}

impl FormMode {
    /// Mode for a form optionally seeded with an existing record
    pub fn for_record<T: Entity>(record: Option<&T>) -> Self {
        record.map(Entity::form_mode).unwrap_or(FormMode::Create)
    }

    pub fn id(&self) -> Option<Identifier> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}
