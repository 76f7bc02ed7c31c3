// src/formatting/report.rs
//! Assembly of the project report: the primary page, its linked notes and
//! tasks, and a table of contents over the result.

use super::block_renderer::RenderConfig;
use super::properties::{TaskField, TaskProperties, TaskPropertyNames};
use super::toc::generate_table_of_contents;
use super::tree_walker::TreeWalker;
use crate::api::NotionRepository;
use crate::constants::{DEFAULT_NOTES_RELATION, DEFAULT_TASKS_RELATION, REPORT_GENERATOR_NAME};
use crate::error::AppError;
use crate::types::PageId;
use chrono::NaiveDateTime;
use std::sync::Arc;

const NO_NOTES: &str = "*No notes found.*";
const NO_TASKS: &str = "*No tasks found.*";

/// Everything a report needs to know besides the page it is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Relation property on the project page listing its notes.
    pub notes_relation: String,
    /// Relation property on the project page listing its tasks.
    pub tasks_relation: String,
    pub task_properties: TaskPropertyNames,
    /// Whether notes and tasks are rendered with their nested content.
    pub include_nested_content: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            notes_relation: DEFAULT_NOTES_RELATION.to_string(),
            tasks_relation: DEFAULT_TASKS_RELATION.to_string(),
            task_properties: TaskPropertyNames::default(),
            include_nested_content: true,
        }
    }
}

/// A finished report and the figures reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledReport {
    pub page_id: PageId,
    pub title: String,
    pub text: String,
    /// Linked notes, counting ones that failed to load.
    pub notes_count: usize,
    /// Linked tasks, counting ones that failed to load.
    pub tasks_count: usize,
    pub generated_at: NaiveDateTime,
}

/// Builds project reports from a workspace.
pub struct ReportAssembler {
    repository: Arc<dyn NotionRepository>,
    walker: TreeWalker,
    settings: ReportSettings,
}

impl ReportAssembler {
    pub fn new(repository: Arc<dyn NotionRepository>, settings: ReportSettings) -> Self {
        Self {
            walker: TreeWalker::new(Arc::clone(&repository)),
            repository,
            settings,
        }
    }

    /// Assembles the report for `page_id`, stamped with the local time.
    pub async fn assemble(&self, page_id: &PageId) -> Result<AssembledReport, AppError> {
        self.assemble_at(page_id, chrono::Local::now().naive_local())
            .await
    }

    /// Assembles the report for `page_id`, stamped with `generated_at`.
    ///
    /// Only a failure to load the project page or its content is returned
    /// as an error. A note or task that fails to load becomes a placeholder
    /// section and the report carries on.
    pub async fn assemble_at(
        &self,
        page_id: &PageId,
        generated_at: NaiveDateTime,
    ) -> Result<AssembledReport, AppError> {
        let page = self.repository.retrieve_page(page_id.as_notion_id()).await?;
        let title = page.title().to_string();
        let note_ids = page.relation_ids(&self.settings.notes_relation);
        let task_ids = page.relation_ids(&self.settings.tasks_relation);

        log::info!(
            "Assembling report for '{}' ({} notes, {} tasks)",
            title,
            note_ids.len(),
            task_ids.len()
        );

        let primary = self
            .walker
            .render_document(page_id.as_notion_id(), &RenderConfig::primary())
            .await?;

        let embedded = RenderConfig::embedded(self.settings.include_nested_content);

        let mut note_sections = Vec::with_capacity(note_ids.len());
        for id in &note_ids {
            let section = match self.render_note(id, &embedded).await {
                Ok(section) => section,
                Err(e) => {
                    log::warn!("Failed to load note {}: {}", id, e);
                    format!("### [Error loading note: {}]\n\n", e)
                }
            };
            note_sections.push(section);
        }

        let mut task_sections = Vec::with_capacity(task_ids.len());
        for id in &task_ids {
            let section = match self.render_task(id, &embedded).await {
                Ok(section) => section,
                Err(e) => {
                    log::warn!("Failed to load task {}: {}", id, e);
                    format!("### [Error loading task: {}]\n\n", e)
                }
            };
            task_sections.push(section);
        }

        let header = compose_header(&title, &generated_at);
        let body = compose_body(&primary, &note_sections, &task_sections);
        let toc = generate_table_of_contents(&format!("{}{}", header, body));

        Ok(AssembledReport {
            page_id: page_id.clone(),
            title,
            text: [header, toc, body].concat(),
            notes_count: note_ids.len(),
            tasks_count: task_ids.len(),
            generated_at,
        })
    }

    async fn render_note(&self, id: &PageId, config: &RenderConfig) -> Result<String, AppError> {
        let page = self.repository.retrieve_page(id.as_notion_id()).await?;
        let content = self.walker.render_document(id.as_notion_id(), config).await?;
        Ok(format!("### {}\n\n{}\n", page.title(), content))
    }

    async fn render_task(&self, id: &PageId, config: &RenderConfig) -> Result<String, AppError> {
        let page = self.repository.retrieve_page(id.as_notion_id()).await?;
        let properties = TaskProperties::extract(&page, &self.settings.task_properties);
        let content = self.walker.render_document(id.as_notion_id(), config).await?;
        Ok(format!(
            "### {}{}\n\n{}\n",
            page.title(),
            compose_task_summary(&properties),
            content
        ))
    }
}

/// The ` - ...` suffix of a task heading, or an empty string.
///
/// Status comes first and in bold; the rest follow in summary order.
pub fn compose_task_summary(properties: &TaskProperties) -> String {
    let parts: Vec<String> = TaskField::SUMMARY_ORDER
        .iter()
        .filter_map(|field| {
            properties.get(*field).map(|value| match field {
                TaskField::Status => format!("**{}: {}**", field.label(), value),
                _ => format!("{}: {}", field.label(), value),
            })
        })
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" - {}", parts.join(", "))
    }
}

fn compose_header(title: &str, generated_at: &NaiveDateTime) -> String {
    format!(
        "# {}\n\n**Generated:** {}\n\n",
        title,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

fn compose_body(primary: &str, notes: &[String], tasks: &[String]) -> String {
    let section = |items: &[String], empty: &str| {
        if items.is_empty() {
            empty.to_string()
        } else {
            items.join("\n")
        }
    };

    format!(
        "---\n\n\
         ## Project Overview\n\n{}\n\n---\n\n\
         ## Notes\n\n{}\n\n---\n\n\
         ## Tasks\n\n{}\n\n---\n\n\
         *Report generated by {}*\n",
        primary,
        section(notes, NO_NOTES),
        section(tasks, NO_TASKS),
        REPORT_GENERATOR_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, PropertyTypeValue, PropertyValue};
    use crate::types::{PropertyName, SelectOption};
    use pretty_assertions::assert_eq;

    fn task(properties: Vec<(&str, PropertyTypeValue)>) -> TaskProperties {
        let page = Page::new(
            PageId::parse("44444444444444444444444444444444").unwrap(),
            "",
            properties
                .into_iter()
                .map(|(name, value)| (PropertyName::from(name), PropertyValue::new(name, value))),
        );
        TaskProperties::extract(&page, &TaskPropertyNames::default())
    }

    #[test]
    fn test_summary_status_first_and_bold() {
        let props = task(vec![
            (
                "Priority",
                PropertyTypeValue::Select {
                    select: Some(SelectOption::named("High")),
                },
            ),
            (
                "Status",
                PropertyTypeValue::Status {
                    status: Some(SelectOption::named("Done")),
                },
            ),
        ]);
        assert_eq!(
            compose_task_summary(&props),
            " - **Status: Done**, Priority: High"
        );
    }

    #[test]
    fn test_summary_empty_without_fields() {
        assert_eq!(compose_task_summary(&task(vec![])), "");
    }

    #[test]
    fn test_body_placeholders() {
        let body = compose_body("Hello\n", &[], &[]);
        assert!(body.contains("## Notes\n\n*No notes found.*\n\n---"));
        assert!(body.contains("## Tasks\n\n*No tasks found.*\n\n---"));
        assert!(body.ends_with("*Report generated by notion2report*\n"));
    }

    #[test]
    fn test_header_leaves_the_rule_to_the_body() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            compose_header("Apollo", &at),
            "# Apollo\n\n**Generated:** 2024-03-09 14:30:00\n\n"
        );
        assert!(compose_body("", &[], &[]).starts_with("---\n\n## Project Overview\n\n"));
    }
}
