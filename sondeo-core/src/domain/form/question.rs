// sondeo-core/src/domain/form/question.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::domain::naming::slugify;

/// The eight survey pages, in export order. Custom questions declare the page
/// they are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Introduccion,
    Consentimiento,
    Demograficos,
    Percepcion,
    Riesgos,
    Delitos,
    Victimizacion,
    #[default]
    Acciones,
}

impl PageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Introduccion => "introduccion",
            Self::Consentimiento => "consentimiento",
            Self::Demograficos => "demograficos",
            Self::Percepcion => "percepcion",
            Self::Riesgos => "riesgos",
            Self::Delitos => "delitos",
            Self::Victimizacion => "victimizacion",
            Self::Acciones => "acciones",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Question kinds a user can add. Choice kinds materialize their own choice
/// list, named after the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Text,
    Paragraph,
    Integer,
    Date,
    Time,
    Geopoint,
    SingleChoice,
    MultiChoice,
}

impl QuestionKind {
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }

    /// Value of the XLSForm `type` column. Choice kinds reference the list
    /// named after the question.
    pub fn xlsform_type(&self, question_name: &str) -> String {
        match self {
            Self::Text | Self::Paragraph => "text".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Date => "date".to_string(),
            Self::Time => "time".to_string(),
            Self::Geopoint => "geopoint".to_string(),
            Self::SingleChoice => format!("select_one {question_name}"),
            Self::MultiChoice => format!("select_multiple {question_name}"),
        }
    }

    /// Appearance applied when the question does not set one.
    pub fn default_appearance(&self) -> Option<&'static str> {
        match self {
            Self::Paragraph => Some("multiline"),
            Self::SingleChoice => Some("minimal"),
            _ => None,
        }
    }
}

/// A user-defined question, stored in the project snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Unique identifier; derived from the label when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Label cannot be empty"))]
    pub label: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub required: bool,
    /// Option labels for choice kinds; ignored otherwise.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub appearance: Option<String>,
    /// Restricts selectable options based on another field's answer
    /// (cascading selects).
    #[serde(default)]
    pub choice_filter: Option<String>,
    /// Manually authored relevant expression, ANDed with derived ones.
    #[serde(default)]
    pub relevant: Option<String>,
    #[serde(default)]
    pub page: PageId,
}

impl Question {
    /// Identifier before uniqueness suffixing: the explicit name, or the
    /// slugified label.
    pub fn base_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => slugify(name),
            _ => slugify(&self.label),
        }
    }
}
