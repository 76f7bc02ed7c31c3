use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of rich text content.
///
/// Mentions keep no payload of their own: Notion always supplies a
/// `plain_text` rendering for them, which is what a report shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RichTextType {
    Text { content: String, link: Option<Link> },
    Mention,
    Equation(EquationData),
}

/// One styled span of rich text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text_type: RichTextType,
    pub annotations: Annotations,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create an unstyled text span.
    pub fn plain_text(text: &str) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: None,
            },
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
        }
    }

    /// Create a styled text span, optionally linked.
    pub fn styled(text: &str, annotations: Annotations, link: Option<&str>) -> Self {
        Self {
            text_type: RichTextType::Text {
                content: text.to_string(),
                link: link.map(|url| Link {
                    url: url.to_string(),
                }),
            },
            annotations,
            plain_text: text.to_string(),
            href: link.map(str::to_string),
        }
    }

    /// The literal text this span contributes.
    pub fn text(&self) -> &str {
        match &self.text_type {
            RichTextType::Text { content, .. } => content,
            RichTextType::Mention => &self.plain_text,
            RichTextType::Equation(EquationData { expression }) => expression,
        }
    }

    /// The hyperlink target, preferring an explicit text link over `href`.
    pub fn link_target(&self) -> Option<&str> {
        match &self.text_type {
            RichTextType::Text {
                link: Some(link), ..
            } => Some(link.url.as_str()),
            _ => self.href.as_deref(),
        }
    }
}

/// Concatenates the unstyled text of a span sequence.
pub fn concat_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(RichTextItem::text).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationData {
    pub expression: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// Select, multi-select and status option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: String,
}

impl SelectOption {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

/// Date value with optional end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: chrono::NaiveDate,
    pub end: Option<chrono::NaiveDate>,
    pub time_zone: Option<String>,
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format("%Y-%m-%d"))
    }
}

/// Formula result types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormulaResult {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateValue),
}

/// User representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.email) {
            (Some(name), _) => write!(f, "{}", name),
            (None, Some(email)) => write!(f, "{}", email),
            (None, None) => write!(f, "User {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_target_prefers_text_link() {
        let mut item = RichTextItem::styled(
            "docs",
            Annotations::default(),
            Some("https://example.com/a"),
        );
        item.href = Some("https://example.com/b".to_string());
        assert_eq!(item.link_target(), Some("https://example.com/a"));
    }

    #[test]
    fn test_mention_uses_plain_text() {
        let item = RichTextItem {
            text_type: RichTextType::Mention,
            annotations: Annotations::default(),
            plain_text: "@Ada".to_string(),
            href: Some("https://www.notion.so/ada".to_string()),
        };
        assert_eq!(item.text(), "@Ada");
        assert_eq!(item.link_target(), Some("https://www.notion.so/ada"));
    }

    #[test]
    fn test_user_display_fallbacks() {
        let user = User {
            id: "u1".to_string(),
            name: None,
            email: Some("ada@example.com".to_string()),
        };
        assert_eq!(user.to_string(), "ada@example.com");
    }
}
