//! System Entity

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Identifier};

/// A monitored system; tasks reference one by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
}

fn default_true() -> bool {
    true
}

impl Entity for System {
    fn id(&self) -> Option<Identifier> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_active() {
        let system: System = serde_json::from_str(r#"{"id":3,"name":"Cooling"}"#).unwrap();
        assert!(system.status);
        assert_eq!(system.description, None);
    }
}
