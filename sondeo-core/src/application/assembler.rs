// sondeo-core/src/application/assembler.rs
//
// The page-assembly pipeline: walks the fixed page sequence, merges in the
// session's custom questions and rules, and produces the three XLSForm
// sheets. Pure in-memory transformation; writing the workbook is the
// writer port's job.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use crate::domain::catalog::{CatalogBatch, ChoiceCatalog};
use crate::domain::constraint::{exclusivity_constraint, none_option, EXCLUSIVITY_MESSAGE};
use crate::domain::content::pages::{CONSENT_END_SCREEN, CONSENT_QUESTION};
use crate::domain::content::text;
use crate::domain::content::{choices, FixedKind, FixedQuestion, Item, PageDef, PAGES};
use crate::domain::error::DomainError;
use crate::domain::expr::{self, Condition, RuleOperator};
use crate::domain::form::{
    FinishRule, PageId, Question, QuestionKind, Settings, SurveyRow, VisibilityRule, XlsForm,
};
use crate::domain::naming::ensure_unique;
use crate::domain::project::ProjectConfig;

use super::snapshot::Snapshot;

/// Builds the complete form from the project configuration, the session
/// snapshot and the catalog batch files.
pub fn assemble(
    config: &ProjectConfig,
    snapshot: &Snapshot,
    batches: &[CatalogBatch],
) -> Result<XlsForm, DomainError> {
    info!(title = %config.form_title(), "Assembling XLSForm");

    // 1. Choices: base lists, then the user catalog (snapshot + batch files).
    let mut catalog = ChoiceCatalog::new();
    for (list, labels) in choices::BASE_LISTS {
        catalog.add_list(list, labels);
    }
    catalog.merge(&snapshot.catalog);
    for batch in batches {
        catalog.add_batch(&batch.canton, &batch.distritos)?;
    }

    // 2. Custom questions: unique names, then their materialized lists.
    let mut used: HashSet<String> = all_reserved_names();
    let mut customs: Vec<(String, &Question)> = Vec::new();
    for question in &snapshot.questions {
        let name = ensure_unique(&question.base_name(), &used);
        used.insert(name.clone());
        if question.kind.is_choice() {
            if question.options.is_empty() {
                return Err(DomainError::EmptyOptions(name));
            }
            let labels: Vec<&str> = question.options.iter().map(String::as_str).collect();
            catalog.add_list(&name, &labels);
        }
        customs.push((name, question));
    }

    let rules_by_target = index_rules(&snapshot.visibility_rules);

    // 3. Survey rows, one page at a time.
    let mut builder = PageBuilder {
        catalog: &catalog,
        rules_by_target,
        finish_rules: &snapshot.finish_rules,
        logo_media: &config.logo_media,
        form_title: config.form_title(),
        rows: Vec::new(),
        position: 0,
    };

    for page in PAGES {
        builder.emit_page(page, &customs);
    }
    debug!(rows = builder.rows.len(), "Survey sheet assembled");

    Ok(XlsForm {
        survey: builder.rows,
        choices: catalog.export_rows(),
        settings: Settings {
            form_title: config.form_title(),
            version: config.resolved_version(),
            default_language: config.language.as_str().to_string(),
            style: "pages".to_string(),
        },
    })
}

/// Every name the fixed survey occupies, so custom questions never collide:
/// questions, groups, notes and the derived glossary rows.
pub fn all_reserved_names() -> HashSet<String> {
    let mut names: HashSet<String> = HashSet::new();
    for page in PAGES {
        names.insert(page.group.to_string());
        names.insert(format!("{}_end", page.prefix()));
        if !page.glossary.is_empty() {
            let prefix = page.prefix();
            names.insert(format!("{prefix}_accede_glosario"));
            names.insert(format!("{prefix}_glosario"));
            names.insert(format!("{prefix}_glos_end"));
        }
        for item in page.items {
            match item {
                Item::Note { name, .. } | Item::LogoNote { name } => {
                    names.insert(name.to_string());
                }
                Item::NoteSeq { prefix, texts, .. } => {
                    for i in 1..=texts.len() {
                        names.insert(format!("{prefix}_{i}"));
                    }
                }
                Item::Question(q) => {
                    names.insert(q.name.to_string());
                    if let Some((detail, _)) = q.other_detail {
                        names.insert(detail.to_string());
                    }
                }
                Item::Matrix { note_name, group, rows, .. } => {
                    names.insert(note_name.to_string());
                    names.insert(group.to_string());
                    names.insert(format!("{group}_end"));
                    for (name, _) in *rows {
                        names.insert(name.to_string());
                    }
                }
            }
        }
    }
    names.insert(CONSENT_END_SCREEN.to_string());
    names
}

fn index_rules(rules: &[VisibilityRule]) -> HashMap<&str, Vec<&VisibilityRule>> {
    let mut map: HashMap<&str, Vec<&VisibilityRule>> = HashMap::new();
    for rule in rules {
        // Self-referencing rules are rejected by validation; skipped here so
        // an unvalidated assemble still terminates.
        if rule.target == rule.source {
            continue;
        }
        map.entry(rule.target.as_str()).or_default().push(rule);
    }
    map
}

fn consent_gate() -> String {
    Condition::new(CONSENT_QUESTION, RuleOperator::Equals, vec!["Sí".into()]).render()
}

struct PageBuilder<'a> {
    catalog: &'a ChoiceCatalog,
    rules_by_target: HashMap<&'a str, Vec<&'a VisibilityRule>>,
    finish_rules: &'a [FinishRule],
    logo_media: &'a str,
    form_title: String,
    rows: Vec<SurveyRow>,
    position: usize,
}

impl PageBuilder<'_> {
    fn emit_page(&mut self, page: &PageDef, customs: &[(String, &Question)]) {
        let base = page.gated.then(consent_gate);

        self.rows.push(
            SurveyRow::begin_group(page.group, page.label)
                .with_appearance("field-list")
                .with_relevant(base.clone()),
        );

        for item in page.items {
            self.emit_item(item, &base);
        }

        for (name, question) in customs.iter().filter(|(_, q)| q.page == page.id) {
            self.emit_custom(name, question, &base);
        }

        self.emit_glossary(page, &base);

        self.rows
            .push(SurveyRow::end_group(format!("{}_end", page.prefix())));

        // The early-termination screen sits right after the consent page.
        if page.id == PageId::Consentimiento {
            let declined =
                Condition::new(CONSENT_QUESTION, RuleOperator::Equals, vec!["No".into()])
                    .render();
            self.rows.push(
                SurveyRow::end_screen(CONSENT_END_SCREEN, text::FINISH_NO_CONSENT)
                    .with_relevant(Some(declined)),
            );
        }
    }

    fn emit_item(&mut self, item: &Item, base: &Option<String>) {
        match item {
            Item::Note { name, text } => {
                self.push_note(name, (*text).to_string(), base.clone());
            }
            Item::LogoNote { name } => {
                let mut row = SurveyRow::note(*name, self.form_title.clone());
                row.media_image = Some(self.logo_media.to_string());
                row.relevant = base.clone();
                self.rows.push(row);
            }
            Item::NoteSeq { prefix, texts, bullets } => {
                for (i, text) in texts.iter().enumerate() {
                    let label = if *bullets {
                        format!("• {text}")
                    } else {
                        (*text).to_string()
                    };
                    self.push_note(&format!("{prefix}_{}", i + 1), label, base.clone());
                }
            }
            Item::Question(question) => self.emit_fixed(question, base),
            Item::Matrix {
                note_name,
                instruction,
                group,
                group_label,
                list,
                rows,
            } => {
                self.push_note(note_name, (*instruction).to_string(), base.clone());
                self.rows.push(
                    SurveyRow::begin_group(*group, *group_label)
                        .with_appearance("table-list")
                        .with_relevant(base.clone()),
                );
                for (name, label) in *rows {
                    let relevant = self.relevant_for(base, None, name);
                    self.rows.push(SurveyRow {
                        row_type: format!("select_one {list}"),
                        name: (*name).to_string(),
                        label: Some((*label).to_string()),
                        required: Some(true),
                        relevant,
                        ..SurveyRow::default()
                    });
                    self.position += 1;
                }
                self.rows.push(SurveyRow::end_group(format!("{group}_end")));
            }
        }
    }

    fn emit_fixed(&mut self, question: &FixedQuestion, base: &Option<String>) {
        let (row_type, list) = match question.kind {
            FixedKind::SelectOne(list) => (format!("select_one {list}"), Some(list)),
            FixedKind::SelectMultiple(list) => (format!("select_multiple {list}"), Some(list)),
            FixedKind::Text => ("text".to_string(), None),
        };

        let relevant = self.relevant_for(base, question.show.render(), question.name);

        let mut row = SurveyRow {
            row_type,
            name: question.name.to_string(),
            label: Some(question.label.to_string()),
            required: Some(question.required),
            appearance: question.appearance.map(str::to_string),
            relevant: relevant.clone(),
            choice_filter: question.choice_filter.map(str::to_string),
            ..SurveyRow::default()
        };

        // "None of the above" exclusivity for multi-selects.
        if let (FixedKind::SelectMultiple(_), Some(list)) = (question.kind, list) {
            if let Some(none) = none_option(&self.catalog.labels_of(list)) {
                row.constraint = Some(exclusivity_constraint(&none));
                row.constraint_message = Some(EXCLUSIVITY_MESSAGE.to_string());
            }
        }

        self.rows.push(row);
        self.position += 1;

        if let Some((detail_name, detail_label)) = question.other_detail {
            let parent_position = self.position - 1;
            let condition = match question.kind {
                FixedKind::SelectMultiple(_) => Condition::new(
                    question.name,
                    RuleOperator::Selected,
                    vec!["Otro".into()],
                ),
                _ => Condition::new(question.name, RuleOperator::Equals, vec!["Otro".into()]),
            };
            let mut parts: Vec<String> = Vec::new();
            if let Some(parent) = relevant {
                parts.push(parent);
            }
            parts.push(condition.render());
            // The parent's relevant already carries the negations of earlier
            // finish rules; only a rule sourced at the parent itself is new.
            parts.extend(
                self.finish_rules
                    .iter()
                    .filter(|rule| rule.source_position == parent_position)
                    .map(|rule| expr::negate(&rule.condition().render())),
            );

            self.rows.push(SurveyRow {
                row_type: "text".to_string(),
                name: detail_name.to_string(),
                label: Some(detail_label.to_string()),
                required: Some(false),
                appearance: Some("multiline".to_string()),
                relevant: expr::all_of(&parts),
                ..SurveyRow::default()
            });
            self.position += 1;
        }
    }

    fn emit_custom(&mut self, name: &str, question: &Question, base: &Option<String>) {
        let mut parts: Vec<String> = Vec::new();
        if let Some(base) = base {
            parts.push(base.clone());
        }
        if let Some(manual) = question
            .relevant
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
        {
            parts.push(manual.to_string());
        }
        if let Some(rules) = self.rule_expression(name) {
            parts.push(rules);
        }
        parts.extend(self.finish_negations());

        let mut row = SurveyRow {
            row_type: question.kind.xlsform_type(name),
            name: name.to_string(),
            label: Some(question.label.clone()),
            required: Some(question.required),
            appearance: question
                .appearance
                .clone()
                .or_else(|| question.kind.default_appearance().map(str::to_string)),
            relevant: expr::all_of(&parts),
            choice_filter: question.choice_filter.clone(),
            ..SurveyRow::default()
        };

        if question.kind == QuestionKind::MultiChoice {
            let labels: Vec<&str> = question.options.iter().map(String::as_str).collect();
            if let Some(none) = none_option(&labels) {
                row.constraint = Some(exclusivity_constraint(&none));
                row.constraint_message = Some(EXCLUSIVITY_MESSAGE.to_string());
            }
        }

        self.rows.push(row);
        self.position += 1;
    }

    fn emit_glossary(&mut self, page: &PageDef, base: &Option<String>) {
        let terms: Vec<&str> = page
            .glossary
            .iter()
            .copied()
            .filter(|t| text::glossary_definition(t).is_some())
            .collect();
        if terms.is_empty() {
            return;
        }

        let prefix = page.prefix();
        let gate = format!("{prefix}_accede_glosario");

        let gate_relevant = self.relevant_for(base, None, &gate);
        self.rows.push(SurveyRow {
            row_type: "select_one yesno".to_string(),
            name: gate.clone(),
            label: Some(text::GLOSSARY_GATE_LABEL.to_string()),
            required: Some(false),
            appearance: Some("minimal".to_string()),
            relevant: gate_relevant,
            ..SurveyRow::default()
        });
        self.position += 1;

        let opened = Condition::new(gate, RuleOperator::Equals, vec!["Sí".into()]).render();
        let mut parts: Vec<String> = Vec::new();
        if let Some(base) = base {
            parts.push(base.clone());
        }
        parts.push(opened);
        let shown = expr::all_of(&parts);

        self.rows.push(
            SurveyRow::begin_group(format!("{prefix}_glosario"), "Glosario")
                .with_relevant(shown.clone()),
        );
        self.push_note(
            &format!("{prefix}_glos_intro"),
            text::GLOSSARY_INTRO.to_string(),
            shown.clone(),
        );
        for (idx, term) in terms.iter().enumerate() {
            if let Some(definition) = text::glossary_definition(term) {
                self.push_note(
                    &format!("{prefix}_glos_{}", idx + 1),
                    definition.to_string(),
                    shown.clone(),
                );
            }
        }
        self.push_note(
            &format!("{prefix}_glos_cierre"),
            text::GLOSSARY_CLOSING.to_string(),
            shown,
        );
        self.rows.push(SurveyRow::end_group(format!("{prefix}_glos_end")));
    }

    fn push_note(&mut self, name: &str, label: String, relevant: impl Into<Option<String>>) {
        self.rows
            .push(SurveyRow::note(name, label).with_relevant(relevant.into()));
    }

    /// relevant = page gate AND declarative visibility AND OR-of-rules AND
    /// finish-rule negations.
    fn relevant_for(
        &self,
        base: &Option<String>,
        show: Option<String>,
        name: &str,
    ) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some(base) = base {
            parts.push(base.clone());
        }
        if let Some(show) = show {
            parts.push(show);
        }
        if let Some(rules) = self.rule_expression(name) {
            parts.push(rules);
        }
        parts.extend(self.finish_negations());
        expr::all_of(&parts)
    }

    /// OR-combination of the visibility rules pointing at `name`.
    fn rule_expression(&self, name: &str) -> Option<String> {
        let rules = self.rules_by_target.get(name)?;
        let rendered: Vec<String> = rules.iter().map(|r| r.condition().render()).collect();
        expr::any_of(&rendered)
    }

    /// Negated conditions of every finish rule firing before this position.
    fn finish_negations(&self) -> Vec<String> {
        self.finish_rules
            .iter()
            .filter(|rule| rule.applies_after(self.position))
            .map(|rule| expr::negate(&rule.condition().render()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> ProjectConfig {
        serde_yaml::from_str(
            "name: encuesta_comercio\ndelegacion: San Carlos Oeste\nversion: '202601'",
        )
        .unwrap()
    }

    fn row<'a>(form: &'a XlsForm, name: &str) -> &'a SurveyRow {
        form.survey
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("row {name} not found"))
    }

    #[test]
    fn test_page_groups_in_fixed_order() {
        let form = assemble(&test_config(), &Snapshot::default(), &[]).unwrap();
        let groups: Vec<&str> = form
            .survey
            .iter()
            .filter(|r| r.row_type == "begin_group")
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            groups,
            vec![
                "p1_intro",
                "p2_consent",
                "p3_datos_demograficos",
                "p4_percepcion_comercio",
                "p9_matriz",
                "p4_glosario",
                "p5_riesgos_situacionales",
                "p5_glosario",
                "p6_delitos",
                "p6_glosario",
                "p7_victimizacion",
                "p7_glosario",
                "p8_acciones_confianza_contacto",
                "p8_glosario",
            ]
        );
    }

    #[test]
    fn test_consent_gate_threads_through_pages() {
        let form = assemble(&test_config(), &Snapshot::default(), &[]).unwrap();

        assert_eq!(row(&form, "p1_intro").relevant, None);
        assert_eq!(
            row(&form, "fin_por_no").relevant.as_deref(),
            Some("${acepta_participar}='no'")
        );
        assert_eq!(
            row(&form, "p3_datos_demograficos").relevant.as_deref(),
            Some("${acepta_participar}='si'")
        );
        assert_eq!(
            row(&form, "distrito").relevant.as_deref(),
            Some("(${acepta_participar}='si') and (string-length(${canton}) > 0)")
        );
        assert_eq!(
            row(&form, "distrito").choice_filter.as_deref(),
            Some("canton_key=${canton}")
        );
    }

    #[test]
    fn test_conditional_follow_up_expressions() {
        let form = assemble(&test_config(), &Snapshot::default(), &[]).unwrap();

        assert_eq!(
            row(&form, "p71_causas_inseguridad_comercio")
                .relevant
                .as_deref(),
            Some(
                "(${acepta_participar}='si') and \
                 (${p7_seguridad_entorno_comercial}='muy_inseguro' or \
                 ${p7_seguridad_entorno_comercial}='inseguro')"
            )
        );
        assert_eq!(
            row(&form, "p71_otro_detalle").relevant.as_deref(),
            Some(
                "((${acepta_participar}='si') and \
                 (${p7_seguridad_entorno_comercial}='muy_inseguro' or \
                 ${p7_seguridad_entorno_comercial}='inseguro')) and \
                 (selected(${p71_causas_inseguridad_comercio}, 'otro'))"
            )
        );
    }

    #[test]
    fn test_exclusivity_constraint_on_none_option() {
        let form = assemble(&test_config(), &Snapshot::default(), &[]).unwrap();

        let incidents = row(&form, "p231_incidentes_operacion");
        assert_eq!(
            incidents.constraint.as_deref(),
            Some("not(selected(., 'ninguno_de_los_anteriores') and count-selected(.) > 1)")
        );
        assert!(incidents.constraint_message.is_some());

        let drugs = row(&form, "p13_donde_drogas");
        assert_eq!(
            drugs.constraint.as_deref(),
            Some("not(selected(., 'no_se_observa_consumo') and count-selected(.) > 1)")
        );

        // Single-selects never get the constraint.
        assert_eq!(row(&form, "p22_afectado_delito").constraint, None);
    }

    #[test]
    fn test_custom_question_lands_on_its_page_with_rules() {
        let mut snapshot = Snapshot::default();
        snapshot.questions.push(Question {
            name: None,
            label: "¿Cuenta con cámaras de seguridad?".into(),
            kind: QuestionKind::SingleChoice,
            required: true,
            options: vec!["Sí".into(), "No".into()],
            appearance: None,
            choice_filter: None,
            relevant: None,
            page: PageId::Riesgos,
        });
        snapshot.visibility_rules.push(VisibilityRule {
            target: "cuenta_con_camaras_de_seguridad".into(),
            source: "tipo_local".into(),
            operator: RuleOperator::Equals,
            values: vec!["Supermercado".into(), "Bar".into()],
        });

        let form = assemble(&test_config(), &snapshot, &[]).unwrap();
        let custom = row(&form, "cuenta_con_camaras_de_seguridad");
        assert_eq!(
            custom.row_type,
            "select_one cuenta_con_camaras_de_seguridad"
        );
        assert_eq!(custom.appearance.as_deref(), Some("minimal"));
        assert_eq!(
            custom.relevant.as_deref(),
            Some(
                "(${acepta_participar}='si') and \
                 (${tipo_local}='supermercado' or ${tipo_local}='bar')"
            )
        );

        // The materialized list reaches the choices sheet.
        assert!(form
            .choices
            .iter()
            .any(|c| c.list_name == "cuenta_con_camaras_de_seguridad" && c.name == "si"));

        // It sits inside the P5 group, before its end marker.
        let idx = |name: &str| {
            form.survey
                .iter()
                .position(|r| r.name == name)
                .unwrap_or_else(|| panic!("row {name} missing"))
        };
        assert!(idx("p16_presencia_policial") < idx("cuenta_con_camaras_de_seguridad"));
        assert!(idx("cuenta_con_camaras_de_seguridad") < idx("p5_end"));
    }

    #[test]
    fn test_finish_rule_hides_everything_after_source() {
        let mut snapshot = Snapshot::default();
        snapshot.finish_rules.push(FinishRule {
            source: CONSENT_QUESTION.into(),
            operator: RuleOperator::Equals,
            values: vec!["No".into()],
            source_position: 0,
        });

        let form = assemble(&test_config(), &snapshot, &[]).unwrap();
        let negation = "not(${acepta_participar}='no')";

        // The consent question itself (position 0) is untouched.
        assert!(!row(&form, CONSENT_QUESTION)
            .relevant
            .as_deref()
            .unwrap_or("")
            .contains(negation));

        // Every data row after it carries the negation.
        let consent_idx = form
            .survey
            .iter()
            .position(|r| r.name == CONSENT_QUESTION)
            .unwrap();
        for later in form.survey[consent_idx + 1..]
            .iter()
            .filter(|r| r.is_question())
        {
            assert!(
                later.relevant.as_deref().unwrap_or("").contains(negation),
                "row {} misses the finish negation",
                later.name
            );
        }
    }

    #[test]
    fn test_duplicate_custom_names_get_suffixed() {
        let mut snapshot = Snapshot::default();
        for _ in 0..2 {
            snapshot.questions.push(Question {
                name: None,
                label: "Observaciones".into(),
                kind: QuestionKind::Paragraph,
                required: false,
                options: vec![],
                appearance: None,
                choice_filter: None,
                relevant: None,
                page: PageId::Acciones,
            });
        }
        let form = assemble(&test_config(), &snapshot, &[]).unwrap();
        assert!(form.survey.iter().any(|r| r.name == "observaciones"));
        assert!(form.survey.iter().any(|r| r.name == "observaciones_2"));
    }

    #[test]
    fn test_batches_reach_choices_and_strip_placeholders() {
        let batches = vec![CatalogBatch {
            canton: "San Carlos".into(),
            distritos: vec!["Quesada".into(), "Florencia".into()],
        }];
        let form = assemble(&test_config(), &Snapshot::default(), &batches).unwrap();

        assert!(form
            .choices
            .iter()
            .any(|c| c.list_name == "list_canton" && c.name == "san_carlos"));
        assert!(form
            .choices
            .iter()
            .any(|c| c.list_name == "list_distrito"
                && c.name == "quesada"
                && c.canton_key.as_deref() == Some("san_carlos")));
        assert!(form.choices.iter().all(|c| c.name != "sin_catalogo"));
        assert_eq!(
            form.choice_columns(),
            vec!["list_name", "name", "label", "canton_key"]
        );
    }

    #[test]
    fn test_settings_sheet() {
        let form = assemble(&test_config(), &Snapshot::default(), &[]).unwrap();
        assert_eq!(
            form.settings.form_title,
            "Encuesta comercio – San Carlos Oeste"
        );
        assert_eq!(form.settings.version, "202601");
        assert_eq!(form.settings.default_language, "es");
        assert_eq!(form.settings.style, "pages");
    }

    #[test]
    fn test_choice_question_without_options_fails() {
        let mut snapshot = Snapshot::default();
        snapshot.questions.push(Question {
            name: None,
            label: "Frecuencia de visitas".into(),
            kind: QuestionKind::MultiChoice,
            required: true,
            options: vec![],
            appearance: None,
            choice_filter: None,
            relevant: None,
            page: PageId::Acciones,
        });
        assert!(matches!(
            assemble(&test_config(), &snapshot, &[]),
            Err(DomainError::EmptyOptions(_))
        ));
    }
}
