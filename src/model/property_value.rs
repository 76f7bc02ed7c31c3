use crate::types::*;
use serde::{Deserialize, Serialize};

/// Property value — wraps a typed value with its property ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub id: String,
    #[serde(flatten)]
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    pub fn new(id: impl Into<String>, value: PropertyTypeValue) -> Self {
        Self {
            id: id.into(),
            type_specific_value: value,
        }
    }

    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match &self.type_specific_value {
            PropertyTypeValue::Title { .. } => "title",
            PropertyTypeValue::RichText { .. } => "rich_text",
            PropertyTypeValue::Number { .. } => "number",
            PropertyTypeValue::Select { .. } => "select",
            PropertyTypeValue::MultiSelect { .. } => "multi_select",
            PropertyTypeValue::Status { .. } => "status",
            PropertyTypeValue::Date { .. } => "date",
            PropertyTypeValue::Formula { .. } => "formula",
            PropertyTypeValue::Relation { .. } => "relation",
            PropertyTypeValue::People { .. } => "people",
            PropertyTypeValue::Checkbox { .. } => "checkbox",
            PropertyTypeValue::Url { .. } => "url",
            PropertyTypeValue::Email { .. } => "email",
            PropertyTypeValue::PhoneNumber { .. } => "phone_number",
            PropertyTypeValue::Other { property_type } => property_type,
        }
    }
}

/// The specific value types for properties.
///
/// Property kinds a report never reads (rollups, files, timestamps and so on)
/// collapse into `Other`, keeping only their type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyTypeValue {
    Title { title: Vec<RichTextItem> },
    RichText { rich_text: Vec<RichTextItem> },
    Number { number: Option<f64> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Status { status: Option<SelectOption> },
    Date { date: Option<DateValue> },
    Formula { formula: Option<FormulaResult> },
    Relation { relation: Vec<PageId> },
    People { people: Vec<User> },
    Checkbox { checkbox: bool },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Other { property_type: String },
}
