//! Panel Configuration
//!
//! Routes the forms navigate to after saving or cancelling.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::domain::Identifier;
use crate::error::ConfigError;

const ID_PLACEHOLDER: &str = "{id}";
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Where the task form goes after a save or cancel
    pub task_listing_route: String,
    /// Where the system form goes after confirming
    pub system_listing_route: String,
    /// Checklist cards of one task list; `{id}` is replaced by the list id
    pub checklist_cards_route: String,
    /// chrono format of the date shown in the task form title
    pub date_format: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            task_listing_route: "/admin/checklist".to_string(),
            system_listing_route: "/admin/alerts".to_string(),
            checklist_cards_route: "/checklist/{id}/cards".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON object; absent keys keep their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let routes = [
            ("task_listing_route", &self.task_listing_route),
            ("system_listing_route", &self.system_listing_route),
            ("checklist_cards_route", &self.checklist_cards_route),
        ];
        for (name, value) in routes {
            if !value.starts_with('/') {
                return Err(ConfigError::Route {
                    name,
                    value: value.clone(),
                });
            }
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::DateFormat(self.date_format.clone()));
        }
        Ok(())
    }

    pub fn checklist_cards_route(&self, task_list_id: Identifier) -> String {
        self.checklist_cards_route
            .replace(ID_PLACEHOLDER, &task_list_id.to_string())
    }
}
