use std::fmt::Display;

use crate::domain::Identifier;
use crate::error::FieldCoercionError;

/// A raw input coming from a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text inputs, textareas and `<select>` values
    Text(String),
    /// Checkboxes
    Flag(bool),
    /// Reference pickers that already resolved an id
    Id(Option<Identifier>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn into_text(self, field: impl Display) -> Result<String, FieldCoercionError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Flag(_) => Err(FieldCoercionError::new(
                field.to_string(),
                "expected text, got a flag",
            )),
            FieldValue::Id(id) => Ok(id.map(|id| id.to_string()).unwrap_or_default()),
        }
    }

    /// Flags accept the select strings `"true"` / `"false"` as well
    pub fn into_flag(self, field: impl Display) -> Result<bool, FieldCoercionError> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            FieldValue::Text(text) => match text.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(FieldCoercionError::new(
                    field.to_string(),
                    format!("expected \"true\" or \"false\", got {:?}", other),
                )),
            },
            FieldValue::Id(_) => Err(FieldCoercionError::new(
                field.to_string(),
                "expected a flag, got an id",
            )),
        }
    }

    /// Ids accept numeric text; blank text clears the field
    pub fn into_id(self, field: impl Display) -> Result<Option<Identifier>, FieldCoercionError> {
        match self {
            FieldValue::Id(id) => Ok(id),
            FieldValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<Identifier>().map(Some).map_err(|_| {
                    FieldCoercionError::new(field.to_string(), format!("{:?} is not a valid id", trimmed))
                })
            }
            FieldValue::Flag(_) => Err(FieldCoercionError::new(
                field.to_string(),
                "expected an id, got a flag",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_select_text() {
        assert_eq!(FieldValue::text("true").into_flag("status"), Ok(true));
        assert_eq!(FieldValue::text("false").into_flag("status"), Ok(false));
        let err = FieldValue::text("maybe").into_flag("status").unwrap_err();
        assert_eq!(err.field, "status");
    }

    #[test]
    fn test_id_from_text() {
        assert_eq!(FieldValue::text(" 12 ").into_id("system_id"), Ok(Some(12)));
        assert_eq!(FieldValue::text("").into_id("system_id"), Ok(None));
        assert!(FieldValue::text("abc").into_id("system_id").is_err());
        assert!(FieldValue::Flag(true).into_id("system_id").is_err());
    }
}
