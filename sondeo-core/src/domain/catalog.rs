// sondeo-core/src/domain/catalog.rs
//
// Choice lists for the `choices` sheet, including the cascading
// canton → distrito catalog fed by user batches. `(list_name, name)` pairs
// are unique across the whole catalog; inserting an existing pair is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::DomainError;
use super::naming::{ensure_unique, slugify};

/// List name of the parent (canton) level.
pub const CANTON_LIST: &str = "list_canton";
/// List name of the child (distrito) level.
pub const DISTRICT_LIST: &str = "list_distrito";
/// Extra choices column carrying the cascade key on district rows.
pub const CASCADE_COLUMN: &str = "canton_key";

const PLACEHOLDER_NAME: &str = "sin_catalogo";
const PLACEHOLDER_LABEL: &str = "— catálogo pendiente —";

/// One row of the `choices` sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRow {
    pub list_name: String,
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canton_key: Option<String>,
}

impl ChoiceRow {
    pub fn new(list_name: impl Into<String>, label: &str) -> Self {
        Self {
            list_name: list_name.into(),
            name: slugify(label),
            label: label.to_string(),
            canton_key: None,
        }
    }
}

/// One canton with its districts, as authored in a catalog batch file or on
/// the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogBatch {
    pub canton: String,
    #[serde(default)]
    pub distritos: Vec<String>,
}

/// Outcome of one batch insertion, for user feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub canton: String,
    pub canton_slug: String,
    pub districts_added: usize,
}

/// The full choice catalog: static survey lists plus the user-maintained
/// cascading canton → distrito entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceCatalog {
    rows: Vec<ChoiceRow>,
}

impl ChoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ChoiceRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inserts a row unless its `(list_name, name)` pair already exists.
    /// Returns whether the row was actually added.
    pub fn insert(&mut self, row: ChoiceRow) -> bool {
        let exists = self
            .rows
            .iter()
            .any(|r| r.list_name == row.list_name && r.name == row.name);
        if exists {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Adds a whole named list of option labels, slugifying each label.
    pub fn add_list(&mut self, list_name: &str, labels: &[&str]) {
        for label in labels {
            self.insert(ChoiceRow::new(list_name, label));
        }
    }

    /// Adds one canton with its districts. District identifiers are
    /// de-duplicated within the batch with a counter suffix; rows already in
    /// the catalog are left untouched.
    pub fn add_batch(
        &mut self,
        canton: &str,
        districts: &[String],
    ) -> Result<BatchSummary, DomainError> {
        let canton = canton.trim();
        let districts: Vec<&str> = districts
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect();
        if canton.is_empty() || districts.is_empty() {
            return Err(DomainError::EmptyBatch(canton.to_string()));
        }

        let canton_slug = slugify(canton);
        self.insert(ChoiceRow {
            list_name: CANTON_LIST.into(),
            name: canton_slug.clone(),
            label: canton.to_string(),
            canton_key: None,
        });

        let mut used_in_batch: HashSet<String> = HashSet::new();
        let mut added = 0;
        for district in districts {
            let slug = ensure_unique(&slugify(district), &used_in_batch);
            used_in_batch.insert(slug.clone());
            if self.insert(ChoiceRow {
                list_name: DISTRICT_LIST.into(),
                name: slug,
                label: district.to_string(),
                canton_key: Some(canton_slug.clone()),
            }) {
                added += 1;
            }
        }

        Ok(BatchSummary {
            canton: canton.to_string(),
            canton_slug,
            districts_added: added,
        })
    }

    /// The cascade predicate Survey123 applies to the district list.
    pub fn choice_filter() -> &'static str {
        "canton_key=${canton}"
    }

    pub fn has_real_entries(&self, list_name: &str) -> bool {
        self.rows
            .iter()
            .any(|r| r.list_name == list_name && r.name != PLACEHOLDER_NAME)
    }

    /// Copies every row of `other` into this catalog (dedup applies).
    pub fn merge(&mut self, other: &ChoiceCatalog) {
        for row in &other.rows {
            self.insert(row.clone());
        }
    }

    /// Rows as exported: a placeholder entry is synthesized for each cascade
    /// list that has no real entries (so the workbook stays loadable), and
    /// stripped as soon as real entries exist for that list.
    pub fn export_rows(&self) -> Vec<ChoiceRow> {
        let mut out: Vec<ChoiceRow> = self
            .rows
            .iter()
            .filter(|r| {
                !(r.name == PLACEHOLDER_NAME && self.has_real_entries(&r.list_name))
            })
            .cloned()
            .collect();

        for list in [CANTON_LIST, DISTRICT_LIST] {
            if !self.has_real_entries(list) && !out.iter().any(|r| r.list_name == list) {
                out.push(ChoiceRow {
                    list_name: list.into(),
                    name: PLACEHOLDER_NAME.into(),
                    label: PLACEHOLDER_LABEL.into(),
                    canton_key: (list == DISTRICT_LIST).then(|| PLACEHOLDER_NAME.into()),
                });
            }
        }
        out
    }

    /// Labels of a given list, used for exclusivity-constraint detection.
    pub fn labels_of(&self, list_name: &str) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.list_name == list_name)
            .map(|r| r.label.as_str())
            .collect()
    }
}
