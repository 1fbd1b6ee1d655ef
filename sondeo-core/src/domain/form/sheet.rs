// sondeo-core/src/domain/form/sheet.rs
//
// In-memory shape of the three XLSForm sheets. The column vocabulary is
// dictated by the Survey123 XLSForm convention; this module only populates it.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{ChoiceRow, CASCADE_COLUMN};

/// `survey` sheet columns, in the order Survey123 Connect expects them.
pub const SURVEY_COLUMNS: [&str; 11] = [
    "type",
    "name",
    "label",
    "required",
    "appearance",
    "relevant",
    "choice_filter",
    "constraint",
    "constraint_message",
    "media::image",
    "bind::esri:fieldType",
];

/// Marker that keeps a note from creating a data column in Survey123.
pub const ESRI_FIELD_TYPE_NULL: &str = "null";

/// One row of the `survey` sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyRow {
    #[serde(rename = "type")]
    pub row_type: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub appearance: Option<String>,
    #[serde(default)]
    pub relevant: Option<String>,
    #[serde(default)]
    pub choice_filter: Option<String>,
    #[serde(default)]
    pub constraint: Option<String>,
    #[serde(default)]
    pub constraint_message: Option<String>,
    #[serde(default)]
    pub media_image: Option<String>,
    #[serde(default)]
    pub esri_field_type: Option<String>,
}

impl SurveyRow {
    /// A display-only note; `bind::esri:fieldType = null` keeps it out of the
    /// result table.
    pub fn note(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            row_type: "note".into(),
            name: name.into(),
            label: Some(label.into()),
            esri_field_type: Some(ESRI_FIELD_TYPE_NULL.into()),
            ..Self::default()
        }
    }

    pub fn begin_group(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            row_type: "begin_group".into(),
            name: name.into(),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn end_group(name: impl Into<String>) -> Self {
        Self {
            row_type: "end_group".into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Terminal screen shown when a finish condition fires.
    pub fn end_screen(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            row_type: "end".into(),
            name: name.into(),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_relevant(mut self, relevant: Option<String>) -> Self {
        self.relevant = relevant;
        self
    }

    pub fn with_appearance(mut self, appearance: &str) -> Self {
        self.appearance = Some(appearance.to_string());
        self
    }

    /// Whether the row collects data (counts for finish-rule positions).
    pub fn is_question(&self) -> bool {
        !matches!(
            self.row_type.as_str(),
            "note" | "begin_group" | "end_group" | "end"
        )
    }

    /// Cell values in `SURVEY_COLUMNS` order; absent cells are empty strings.
    pub fn cells(&self) -> [&str; SURVEY_COLUMNS.len()] {
        fn opt(o: &Option<String>) -> &str {
            o.as_deref().unwrap_or("")
        }
        [
            &self.row_type,
            &self.name,
            opt(&self.label),
            match self.required {
                Some(true) => "yes",
                Some(false) => "no",
                None => "",
            },
            opt(&self.appearance),
            opt(&self.relevant),
            opt(&self.choice_filter),
            opt(&self.constraint),
            opt(&self.constraint_message),
            opt(&self.media_image),
            opt(&self.esri_field_type),
        ]
    }
}

/// The single `settings` sheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub form_title: String,
    pub version: String,
    pub default_language: String,
    pub style: String,
}

impl Settings {
    pub const COLUMNS: [&'static str; 4] =
        ["form_title", "version", "default_language", "style"];

    pub fn cells(&self) -> [&str; Self::COLUMNS.len()] {
        [
            &self.form_title,
            &self.version,
            &self.default_language,
            &self.style,
        ]
    }
}

/// The assembled form: everything the writer needs for the three sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XlsForm {
    pub survey: Vec<SurveyRow>,
    pub choices: Vec<ChoiceRow>,
    pub settings: Settings,
}

impl XlsForm {
    /// Default artifact file name, derived from the form title.
    pub fn default_file_name(&self) -> String {
        format!(
            "{}_xlsform.xlsx",
            crate::domain::naming::slugify(&self.settings.form_title)
        )
    }

    /// `choices` sheet columns; the cascade key column appears only when a
    /// row carries one.
    pub fn choice_columns(&self) -> Vec<&'static str> {
        let mut cols = vec!["list_name", "name", "label"];
        if self.choices.iter().any(|r| r.canton_key.is_some()) {
            cols.push(CASCADE_COLUMN);
        }
        cols
    }

    pub fn choice_cells<'a>(&self, row: &'a ChoiceRow) -> Vec<&'a str> {
        let mut cells = vec![
            row.list_name.as_str(),
            row.name.as_str(),
            row.label.as_str(),
        ];
        if self.choices.iter().any(|r| r.canton_key.is_some()) {
            cells.push(row.canton_key.as_deref().unwrap_or(""));
        }
        cells
    }
}
