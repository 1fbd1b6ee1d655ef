// sondeo-core/src/application/validation.rs
//
// Project checks surfaced as findings rather than hard failures: `validate`
// prints them, `build` refuses to export while errors remain. Warnings never
// block a build.

use std::collections::HashSet;
use validator::Validate;

use crate::domain::catalog::{CatalogBatch, CANTON_LIST, DISTRICT_LIST};
use crate::domain::form::Question;
use crate::domain::project::ProjectConfig;

use super::assembler::all_reserved_names;
use super::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
}

impl Finding {
    fn error(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: &'static str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }
}

pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

/// Runs every project check. The returned findings are ordered: question
/// checks, rule checks, catalog checks.
pub fn validate_project(
    config: &ProjectConfig,
    snapshot: &Snapshot,
    batches: &[CatalogBatch],
) -> Vec<Finding> {
    let mut findings = Vec::new();

    if config.delegacion.trim().is_empty() {
        findings.push(Finding::warning(
            "config.delegacion",
            "No delegación set; the form title falls back to 'Encuesta comercio'".to_string(),
        ));
    }

    check_questions(&snapshot.questions, &mut findings);
    check_rules(snapshot, &mut findings);
    check_catalog(snapshot, batches, &mut findings);

    findings
}

fn check_questions(questions: &[Question], findings: &mut Vec<Finding>) {
    let reserved = all_reserved_names();
    let mut seen: HashSet<String> = HashSet::new();

    for question in questions {
        if let Err(errors) = question.validate() {
            findings.push(Finding::error(
                "question.label",
                format!("Invalid question '{}': {}", question.base_name(), errors),
            ));
        }

        if question.kind.is_choice() && question.options.is_empty() {
            findings.push(Finding::error(
                "question.options",
                format!(
                    "Choice question '{}' has no options",
                    question.base_name()
                ),
            ));
        }

        let name = question.base_name();
        if reserved.contains(&name) {
            findings.push(Finding::warning(
                "question.name",
                format!("'{name}' collides with a fixed question; a suffix will be appended"),
            ));
        }
        if !seen.insert(name.clone()) {
            findings.push(Finding::warning(
                "question.name",
                format!("Duplicate question name '{name}'; a suffix will be appended"),
            ));
        }
    }
}

fn check_rules(snapshot: &Snapshot, findings: &mut Vec<Finding>) {
    let mut known = all_reserved_names();
    known.extend(snapshot.questions.iter().map(|q| q.base_name()));

    for rule in &snapshot.visibility_rules {
        if rule.target == rule.source {
            findings.push(Finding::error(
                "rule.self_reference",
                format!("Rule on '{}' uses itself as source", rule.target),
            ));
        }
        for name in [&rule.target, &rule.source] {
            if !known.contains(name.as_str()) {
                findings.push(Finding::error(
                    "rule.unknown_question",
                    format!("Rule references unknown question '{name}'"),
                ));
            }
        }
        if rule.values.is_empty() {
            findings.push(Finding::error(
                "rule.values",
                format!("Rule on '{}' has no values to match", rule.target),
            ));
        }
    }

    for rule in &snapshot.finish_rules {
        if !known.contains(rule.source.as_str()) {
            findings.push(Finding::error(
                "finish.unknown_question",
                format!("Finish rule references unknown question '{}'", rule.source),
            ));
        }
        if rule.values.is_empty() {
            findings.push(Finding::error(
                "finish.values",
                format!("Finish rule on '{}' has no values to match", rule.source),
            ));
        }
    }
}

fn check_catalog(snapshot: &Snapshot, batches: &[CatalogBatch], findings: &mut Vec<Finding>) {
    for batch in batches {
        let no_districts = batch.distritos.iter().all(|d| d.trim().is_empty());
        if batch.canton.trim().is_empty() || no_districts {
            // An empty batch would abort the build inside the catalog.
            findings.push(Finding::error(
                "catalog.batch",
                format!(
                    "Empty catalog batch (canton '{}'); add a canton and at least one district",
                    batch.canton
                ),
            ));
        }
    }

    let has_canton = snapshot.catalog.has_real_entries(CANTON_LIST)
        || batches.iter().any(|b| !b.canton.trim().is_empty());
    let has_district = snapshot.catalog.has_real_entries(DISTRICT_LIST)
        || batches
            .iter()
            .any(|b| b.distritos.iter().any(|d| !d.trim().is_empty()));
    if !has_canton || !has_district {
        // Mirrors the catalog check of the interactive builder: the form
        // still builds, but the cascading selects will be empty.
        findings.push(Finding::warning(
            "catalog.empty",
            "Catalog canton→distrito is empty; the cascading selects will have no options"
                .to_string(),
        ));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::expr::RuleOperator;
    use crate::domain::form::{PageId, QuestionKind, VisibilityRule};

    fn config() -> ProjectConfig {
        serde_yaml::from_str("name: encuesta\ndelegacion: San Carlos Oeste").unwrap()
    }

    fn snapshot_with_catalog() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot
            .catalog
            .add_batch("San Carlos", &["Quesada".into()])
            .unwrap();
        snapshot
    }

    #[test]
    fn test_clean_project_has_no_findings() {
        let findings = validate_project(&config(), &snapshot_with_catalog(), &[]);
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn test_empty_catalog_warns_but_passes() {
        let findings = validate_project(&config(), &Snapshot::default(), &[]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(!has_errors(&findings));
    }

    #[test]
    fn test_batch_files_count_as_catalog() {
        let batches = vec![CatalogBatch {
            canton: "San Carlos".into(),
            distritos: vec!["Quesada".into()],
        }];
        let findings = validate_project(&config(), &Snapshot::default(), &batches);
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn test_empty_batch_file_is_error() {
        let batches = vec![CatalogBatch {
            canton: "San Carlos".into(),
            distritos: vec![],
        }];
        let findings = validate_project(&config(), &Snapshot::default(), &batches);
        assert!(has_errors(&findings));
        assert!(findings.iter().any(|f| f.code == "catalog.batch"));
    }

    #[test]
    fn test_self_referencing_rule_is_error() {
        let mut snapshot = snapshot_with_catalog();
        snapshot.visibility_rules.push(VisibilityRule {
            target: "tipo_local".into(),
            source: "tipo_local".into(),
            operator: RuleOperator::Equals,
            values: vec!["Bar".into()],
        });
        let findings = validate_project(&config(), &snapshot, &[]);
        assert!(has_errors(&findings));
        assert!(findings.iter().any(|f| f.code == "rule.self_reference"));
    }

    #[test]
    fn test_unknown_rule_target_is_error() {
        let mut snapshot = snapshot_with_catalog();
        snapshot.visibility_rules.push(VisibilityRule {
            target: "no_existe".into(),
            source: "tipo_local".into(),
            operator: RuleOperator::Equals,
            values: vec!["Bar".into()],
        });
        let findings = validate_project(&config(), &snapshot, &[]);
        assert!(findings.iter().any(|f| f.code == "rule.unknown_question"));
    }

    #[test]
    fn test_blank_label_is_error_and_duplicate_warns() {
        let mut snapshot = snapshot_with_catalog();
        let question = Question {
            name: None,
            label: "".into(),
            kind: QuestionKind::Text,
            required: false,
            options: vec![],
            appearance: None,
            choice_filter: None,
            relevant: None,
            page: PageId::Acciones,
        };
        snapshot.questions.push(question.clone());
        snapshot.questions.push(question);

        let findings = validate_project(&config(), &snapshot, &[]);
        assert!(has_errors(&findings));
        assert!(findings
            .iter()
            .any(|f| f.severity == Severity::Warning && f.code == "question.name"));
    }
}
