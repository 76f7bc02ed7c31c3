// src/formatting/properties.rs
//! Extraction of task metadata from page properties.
//!
//! Each field is read from a configured property name and kept only when
//! the property has the expected type and a non-empty value. Nothing is
//! defaulted.

use crate::model::{Page, PropertyTypeValue};
use indexmap::IndexMap;
use std::fmt;

/// Which page properties hold each task field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPropertyNames {
    /// Checked in order; the first status-typed match wins.
    pub status: Vec<String>,
    pub priority: String,
    pub due_date: String,
    pub date_done: String,
    pub info: String,
    pub tags: String,
    pub assignee: String,
}

impl Default for TaskPropertyNames {
    fn default() -> Self {
        Self {
            status: vec!["Status".to_string(), "Kanban".to_string()],
            priority: "Priority".to_string(),
            due_date: "Do date".to_string(),
            date_done: "Date done".to_string(),
            info: "Info".to_string(),
            tags: "Tags".to_string(),
            assignee: "Assignee".to_string(),
        }
    }
}

/// A recognized task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Status,
    Priority,
    DueDate,
    DateDone,
    Info,
    Tags,
    Assignee,
}

impl TaskField {
    /// Order in which fields appear in a task summary line.
    pub const SUMMARY_ORDER: [TaskField; 7] = [
        TaskField::Status,
        TaskField::Priority,
        TaskField::DueDate,
        TaskField::DateDone,
        TaskField::Assignee,
        TaskField::Tags,
        TaskField::Info,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TaskField::Status => "status",
            TaskField::Priority => "priority",
            TaskField::DueDate => "due_date",
            TaskField::DateDone => "date_done",
            TaskField::Info => "info",
            TaskField::Tags => "tags",
            TaskField::Assignee => "assignee",
        }
    }

    /// Label shown in front of the value in a summary line.
    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Status => "Status",
            TaskField::Priority => "Priority",
            TaskField::DueDate => "Due",
            TaskField::DateDone => "Done",
            TaskField::Info => "Info",
            TaskField::Tags => "Tags",
            TaskField::Assignee => "Assignee",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The task fields present on one page, in extraction order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskProperties {
    fields: IndexMap<TaskField, String>,
}

impl TaskProperties {
    /// Reads every recognized field from `page`.
    pub fn extract(page: &Page, names: &TaskPropertyNames) -> Self {
        let mut fields = IndexMap::new();
        let value_of = |name: &str| page.property(name).map(|p| &p.type_specific_value);

        let status = names.status.iter().find_map(|name| match value_of(name) {
            Some(PropertyTypeValue::Status {
                status: Some(option),
            }) if !option.name.is_empty() => Some(option.name.clone()),
            _ => None,
        });
        insert_present(&mut fields, TaskField::Status, status);

        let priority = match value_of(&names.priority) {
            Some(PropertyTypeValue::Select {
                select: Some(option),
            }) => Some(option.name.clone()),
            _ => None,
        };
        insert_present(&mut fields, TaskField::Priority, priority);

        insert_present(&mut fields, TaskField::DueDate, date_start(value_of(&names.due_date)));
        insert_present(&mut fields, TaskField::DateDone, date_start(value_of(&names.date_done)));

        let info = match value_of(&names.info) {
            Some(PropertyTypeValue::Formula {
                formula: Some(crate::types::FormulaResult::String(text)),
            }) => Some(text.clone()),
            _ => None,
        };
        insert_present(&mut fields, TaskField::Info, info);

        let tags = match value_of(&names.tags) {
            Some(PropertyTypeValue::MultiSelect { multi_select }) => Some(
                multi_select
                    .iter()
                    .map(|option| option.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        };
        insert_present(&mut fields, TaskField::Tags, tags);

        let assignee = match value_of(&names.assignee) {
            Some(PropertyTypeValue::People { people }) => Some(
                people
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        };
        insert_present(&mut fields, TaskField::Assignee, assignee);

        Self { fields }
    }

    pub fn get(&self, field: TaskField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: TaskField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

fn insert_present(fields: &mut IndexMap<TaskField, String>, field: TaskField, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        fields.insert(field, value);
    }
}

fn date_start(value: Option<&PropertyTypeValue>) -> Option<String> {
    match value {
        Some(PropertyTypeValue::Date { date: Some(date) }) => Some(date.to_string()),
        _ => None,
    }
}
