use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A task as returned by the tracker, trimmed to what status sync reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub gid: Option<String>,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomField>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomField {
    pub gid: String,
    pub name: String,
    /// Null for non-enum fields (text, number, date).
    #[serde(default)]
    pub enum_options: Option<Vec<EnumOption>>,
}

impl CustomField {
    pub fn options(&self) -> &[EnumOption] {
        self.enum_options.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumOption {
    pub gid: String,
    pub name: String,
}

/// Partial update applied to every linked task in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub custom_fields: BTreeMap<String, String>,
}

impl TaskUpdate {
    pub fn set_option(field_id: &str, option_id: &str) -> Self {
        let mut custom_fields = BTreeMap::new();
        custom_fields.insert(field_id.to_string(), option_id.to_string());
        Self { custom_fields }
    }
}
