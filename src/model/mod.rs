mod block;
pub mod blocks;
pub mod common;
mod property_value;

pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use property_value::{PropertyTypeValue, PropertyValue};

use crate::types::{concat_plain_text, PageId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Property names checked first, in order, when resolving a page title.
const CANONICAL_TITLE_PROPERTIES: [&str; 3] = ["Name", "Title", "Page"];

/// Title used when a page has no non-empty title property.
pub const UNTITLED: &str = "Untitled";

/// A Notion page record: identity, title and typed properties.
///
/// Content blocks are not part of the record; they are fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub url: String,
    /// Ordered by property name so lookups that scan are deterministic.
    pub properties: IndexMap<PropertyName, PropertyValue>,
}

impl Page {
    /// Builds a page, sorting properties by name and resolving its title.
    pub fn new(
        id: PageId,
        url: impl Into<String>,
        properties: impl IntoIterator<Item = (PropertyName, PropertyValue)>,
    ) -> Self {
        let mut properties: IndexMap<PropertyName, PropertyValue> =
            properties.into_iter().collect();
        properties.sort_keys();
        let title = PageTitle::resolve(&properties);
        Self {
            id,
            title,
            url: url.into(),
            properties,
        }
    }

    pub fn title(&self) -> &PageTitle {
        &self.title
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// IDs listed in a relation property, in stored order.
    ///
    /// Empty when the property is absent or is not a relation.
    pub fn relation_ids(&self, name: &str) -> Vec<PageId> {
        match self.property(name).map(|p| &p.type_specific_value) {
            Some(PropertyTypeValue::Relation { relation }) => relation.clone(),
            _ => Vec::new(),
        }
    }
}

/// Page title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Picks the first non-empty title property, trying the canonical names
    /// before any other title-typed property, and falls back to `Untitled`.
    pub fn resolve(properties: &IndexMap<PropertyName, PropertyValue>) -> Self {
        let title_text = |value: &PropertyValue| match &value.type_specific_value {
            PropertyTypeValue::Title { title } => {
                Some(concat_plain_text(title)).filter(|text| !text.is_empty())
            }
            _ => None,
        };

        CANONICAL_TITLE_PROPERTIES
            .iter()
            .filter_map(|name| properties.get(*name))
            .find_map(title_text)
            .or_else(|| properties.values().find_map(title_text))
            .map(Self)
            .unwrap_or_else(|| Self(UNTITLED.to_string()))
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
