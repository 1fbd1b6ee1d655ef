// sondeo-core/src/domain/content/pages.rs
//
// Declarative definition of the eight survey pages. Earlier generations of
// this survey duplicated the whole emission logic once per page; here a page
// is data and a single pipeline in the application layer walks it.

use crate::domain::expr::{self, Condition, RuleOperator};
use crate::domain::form::PageId;

use super::text;

/// Declarative visibility for a fixed row. Rendered against the question
/// names of this survey; the page-level consent gate is ANDed in by the
/// assembler, not here.
#[derive(Debug, Clone, Copy)]
pub enum Show {
    Always,
    /// Source question has any answer.
    Answered(&'static str),
    /// Source answer equals one of the labels.
    Equals(&'static str, &'static [&'static str]),
    /// Multi-select source contains the label.
    Selected(&'static str, &'static str),
    AllOf(&'static [Show]),
    AnyOf(&'static [Show]),
}

impl Show {
    pub fn render(&self) -> Option<String> {
        match self {
            Show::Always => None,
            Show::Answered(source) => Some(expr::answered(source)),
            Show::Equals(source, labels) => Some(
                Condition::new(
                    *source,
                    RuleOperator::Equals,
                    labels.iter().map(|l| l.to_string()).collect(),
                )
                .render(),
            ),
            Show::Selected(source, label) => Some(
                Condition::new(*source, RuleOperator::Selected, vec![label.to_string()])
                    .render(),
            ),
            Show::AllOf(parts) => expr::all_of(&render_parts(parts)),
            Show::AnyOf(parts) => expr::any_of(&render_parts(parts)),
        }
    }
}

fn render_parts(parts: &[Show]) -> Vec<String> {
    parts.iter().filter_map(Show::render).collect()
}

#[derive(Debug, Clone, Copy)]
pub enum FixedKind {
    SelectOne(&'static str),
    SelectMultiple(&'static str),
    Text,
}

/// A question fixed by the survey design.
#[derive(Debug, Clone, Copy)]
pub struct FixedQuestion {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FixedKind,
    pub required: bool,
    pub appearance: Option<&'static str>,
    pub show: Show,
    /// Cascade predicate (district question only).
    pub choice_filter: Option<&'static str>,
    /// Companion free-text row shown when "Otro" is answered: `(name, label)`.
    pub other_detail: Option<(&'static str, &'static str)>,
}

/// One entry in a page's content sequence.
#[derive(Debug, Clone, Copy)]
pub enum Item {
    /// Plain note; never creates a data column.
    Note {
        name: &'static str,
        text: &'static str,
    },
    /// Title note carrying the form logo (`media::image`).
    LogoNote { name: &'static str },
    /// Numbered run of notes sharing a prefix (`p2_p_1`, `p2_p_2`, …).
    NoteSeq {
        prefix: &'static str,
        texts: &'static [&'static str],
        bullets: bool,
    },
    Question(FixedQuestion),
    /// Consecutive same-list rows re-grouped so the platform renders a table.
    Matrix {
        note_name: &'static str,
        instruction: &'static str,
        group: &'static str,
        group_label: &'static str,
        list: &'static str,
        rows: &'static [(&'static str, &'static str)],
    },
}

/// A page: one `begin_group`/`end_group` pair with `field-list` appearance.
#[derive(Debug, Clone, Copy)]
pub struct PageDef {
    pub id: PageId,
    pub group: &'static str,
    pub label: &'static str,
    /// Pages after the consent gate carry the gate expression everywhere.
    pub gated: bool,
    pub items: &'static [Item],
    /// Glossary terms offered on this page (empty = no glossary block).
    pub glossary: &'static [&'static str],
}

impl PageDef {
    /// Short page prefix ("p1" .. "p8") used for derived row names
    /// (`p4_end`, `p4_accede_glosario`, `p4_glos_1`, …).
    pub fn prefix(&self) -> &'static str {
        self.group.split('_').next().unwrap_or(self.group)
    }
}

/// Name of the consent question; the gate expression and the finish screen
/// both reference it.
pub const CONSENT_QUESTION: &str = "acepta_participar";
/// Name of the early-termination screen.
pub const CONSENT_END_SCREEN: &str = "fin_por_no";

const SI: &str = "Sí";
const NO: &str = "No";

// The p30 condition: does not know the program, or knows it but is not
// enrolled. p31 contact fields open only when p30 additionally answers yes.
const SHOW_P30: Show = Show::AnyOf(&[
    Show::Equals("p28_conoce_programa", &[NO]),
    Show::AllOf(&[
        Show::Equals("p28_conoce_programa", &[SI]),
        Show::Equals("p29_inscrito_programa", &[NO]),
    ]),
]);
const SHOW_P31: Show = Show::AllOf(&[
    SHOW_P30,
    Show::Equals("p30_desea_contacto_programa", &[SI]),
]);
const SHOW_P22_AFFECTED: Show =
    Show::Equals("p22_afectado_delito", &["Sí, y denuncié", "Sí, pero no denuncié"]);

pub const PAGES: &[PageDef] = &[
    // ---------------- P1 — Introducción ----------------
    PageDef {
        id: PageId::Introduccion,
        group: "p1_intro",
        label: "Introducción",
        gated: false,
        items: &[
            Item::LogoNote { name: "p1_logo" },
            Item::Note {
                name: "p1_texto",
                text: text::INTRO_COMERCIO,
            },
        ],
        glossary: &[],
    },
    // ---------------- P2 — Consentimiento ----------------
    PageDef {
        id: PageId::Consentimiento,
        group: "p2_consent",
        label: "Consentimiento Informado",
        gated: false,
        items: &[
            Item::Note {
                name: "p2_titulo",
                text: text::CONSENT_TITLE,
            },
            Item::NoteSeq {
                prefix: "p2_p",
                texts: text::CONSENT_PARAGRAPHS,
                bullets: false,
            },
            Item::NoteSeq {
                prefix: "p2_b",
                texts: text::CONSENT_BULLETS,
                bullets: true,
            },
            Item::NoteSeq {
                prefix: "p2_c",
                texts: text::CONSENT_CLOSING,
                bullets: false,
            },
            Item::Question(FixedQuestion {
                name: CONSENT_QUESTION,
                label: text::CONSENT_QUESTION_LABEL,
                kind: FixedKind::SelectOne("yesno"),
                required: true,
                appearance: Some("minimal"),
                show: Show::Always,
                choice_filter: None,
                other_detail: None,
            }),
        ],
        glossary: &[],
    },
    // ---------------- P3 — Datos demográficos ----------------
    PageDef {
        id: PageId::Demograficos,
        group: "p3_datos_demograficos",
        label: "Datos demográficos",
        gated: true,
        items: &[
            Item::Question(select_one(
                "canton",
                "list_canton",
                "1. Cantón:",
            )),
            Item::Question(FixedQuestion {
                name: "distrito",
                label: "2. Distrito:",
                kind: FixedKind::SelectOne("list_distrito"),
                required: true,
                appearance: Some("minimal"),
                // Only once a canton is chosen; entering the page with an
                // unfiltered district list is a platform error.
                show: Show::Answered("canton"),
                choice_filter: Some("canton_key=${canton}"),
                other_detail: None,
            }),
            Item::Question(select_one("edad_rango", "edad_rangos", "3. Edad:")),
            Item::Question(select_one(
                "genero",
                "genero",
                "4. ¿Con cuál de estas opciones se identifica?",
            )),
            Item::Question(select_one(
                "escolaridad",
                "escolaridad",
                "5. Escolaridad:",
            )),
            Item::Question(FixedQuestion {
                name: "tipo_local",
                label: "6. Tipo de local comercial",
                kind: FixedKind::SelectOne("tipo_local"),
                required: true,
                appearance: Some("minimal"),
                show: Show::Always,
                choice_filter: None,
                other_detail: Some(("tipo_local_otro", "Otro (especifique):")),
            }),
        ],
        glossary: &[],
    },
    // ---------------- P4 — Percepción (7..10) ----------------
    PageDef {
        id: PageId::Percepcion,
        group: "p4_percepcion_comercio",
        label: "Percepción ciudadana de seguridad en el comercio",
        gated: true,
        items: &[
            Item::Question(select_one(
                "p7_seguridad_entorno_comercial",
                "seguridad_5",
                "7. ¿Qué tan seguro percibe usted el entorno de la zona comercial?",
            )),
            Item::Question(FixedQuestion {
                name: "p71_causas_inseguridad_comercio",
                label: "7.1. Indique por qué considera insegura esta zona comercial (Marque todos los que apliquen):",
                kind: FixedKind::SelectMultiple("causas_inseguridad_comercio"),
                required: true,
                appearance: None,
                show: Show::Equals(
                    "p7_seguridad_entorno_comercial",
                    &["Muy inseguro", "Inseguro"],
                ),
                choice_filter: None,
                other_detail: Some(("p71_otro_detalle", "Otro (detalle):")),
            }),
            Item::Question(select_one(
                "p8_comparacion_anno",
                "escala_1_5",
                "8. ¿Cómo se percibe usted la seguridad en la zona comercial este año en comparación con el año anterior?",
            )),
            Item::Question(FixedQuestion {
                name: "p81_indique_por_que",
                label: "8.1. Indique por qué:",
                kind: FixedKind::Text,
                required: true,
                appearance: Some("multiline"),
                show: Show::Answered("p8_comparacion_anno"),
                choice_filter: None,
                other_detail: None,
            }),
            Item::Matrix {
                note_name: "p9_instr",
                instruction: text::MATRIX_INSTRUCTION,
                group: "p9_matriz",
                group_label: "Espacios de la zona comercial",
                list: "matriz_1_5_na",
                rows: &[
                    ("p9_afuera_comercio", "Afuera del comercio"),
                    ("p9_pasillos_aceras", "Pasillos / aceras comerciales"),
                    ("p9_parqueos", "Parqueos"),
                    ("p9_paradas_bus", "Paradas de bus"),
                    ("p9_calles_cercanas", "Calles cercanas"),
                    ("p9_deficiencia_iluminacion", "Zonas con deficiencia de iluminación"),
                ],
            },
            Item::Question(FixedQuestion {
                name: "p10_punto_inseguro_motivo",
                label: "10. Según su percepción, indique si existe algún espacio específico o punto concreto de la zona comercial que perciba como inseguro y explique brevemente el motivo.",
                kind: FixedKind::Text,
                required: true,
                appearance: Some("multiline"),
                show: Show::Always,
                choice_filter: None,
                other_detail: None,
            }),
        ],
        glossary: &["Extorsión", "Daños a la propiedad"],
    },
    // ---------------- P5 — Riesgos (11..16) ----------------
    PageDef {
        id: PageId::Riesgos,
        group: "p5_riesgos_situacionales",
        label: "Riesgos sociales y situacionales",
        gated: true,
        items: &[
            Item::Note {
                name: "p5_titulo",
                text: text::RISKS_SECTION_TITLE,
            },
            Item::Question(FixedQuestion {
                name: "p11_horarios_inseguridad",
                label: "11. ¿En qué horarios percibe mayor inseguridad en la zona comercial donde se ubica su comercio? (Marque todas)",
                kind: FixedKind::SelectMultiple("horarios_inseguridad"),
                required: true,
                appearance: None,
                show: Show::Always,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(multi_with_other(
                "p12_problematicas",
                "problematicas_comercio",
                "12. Seleccione las problemáticas que, según su percepción u observación, afectan la zona comercial donde se ubica su comercio:",
                "p12_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p13_donde_drogas",
                "donde_drogas",
                "13. En relación con el consumo de drogas en el entorno de la zona comercial, indique dónde lo ha observado: (Marque todas las que observe)",
                "p13_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p14_infra_vial",
                "infra_vial",
                "14. Indique las principales deficiencias de infraestructura vial que afectan el entorno de la zona comercial:",
                "p14_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p15_transporte",
                "transporte_afect",
                "15. En relación con el transporte en la zona comercial, indique cuáles situaciones representan una afectación: (Marque todos los que representen afectación)",
                "p15_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p16_presencia_policial",
                "presencia_policial_comercio",
                "16. En relación con la presencia policial en la zona comercial, indique cuál(es) de las siguientes situaciones identifica:",
                "p16_otro_detalle",
            )),
        ],
        glossary: &["Extorsión", "Daños a la propiedad"],
    },
    // ---------------- P6 — Delitos (17..21) ----------------
    PageDef {
        id: PageId::Delitos,
        group: "p6_delitos",
        label: "Delitos",
        gated: true,
        items: &[
            Item::Note {
                name: "p6_intro_delitos",
                text: text::CRIMES_INTRO,
            },
            Item::Question(multi_with_other(
                "p17_delitos",
                "delitos_comercio",
                "17. Selección múltiple de delitos:",
                "p17_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p18_manifestacion_drogas",
                "manifest_drogas",
                "18. Según su percepción u observación, indique de qué forma se manifiesta la presencia de consumo o venta de drogas en el entorno de la zona comercial:",
                "p18_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p19_tipos_asaltos",
                "asaltos_tipo",
                "19. Según su percepción u observación, indique qué tipos de asaltos considera que ocurren en la zona comercial:",
                "p19_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p20_estafas",
                "estafas_comercio",
                "20. Estafas que afectan al comercio",
                "p20_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p21_robos_fuerza",
                "robos_fuerza",
                "21. Según su percepción u observación, indique cuáles de los siguientes robos con fuerza considera que afectan a los comercios o su entorno inmediato:",
                "p21_otro_detalle",
            )),
        ],
        glossary: &[
            "Extorsión",
            "Receptación",
            "Contrabando",
            "Búnker",
            "Tacha",
            "Ganzúa",
            "Arrebato",
            "Boquete",
        ],
    },
    // ---------------- P7 — Victimización (22..23.1) ----------------
    PageDef {
        id: PageId::Victimizacion,
        group: "p7_victimizacion",
        label: "Victimización",
        gated: true,
        items: &[
            Item::Note {
                name: "p7_intro",
                text: text::VICTIMIZATION_INTRO,
            },
            Item::Question(select_one(
                "p22_afectado_delito",
                "victim_22",
                "22. Durante los últimos 12 meses, ¿su local comercial fue afectado por algún delito?",
            )),
            Item::Question(FixedQuestion {
                name: "p221_delitos_afectacion",
                label: "22.1 ¿Cuál fue el delito por el cual su local comercial o personas vinculadas a su actividad comercial resultaron directamente afectadas?",
                kind: FixedKind::SelectMultiple("delitos_afectacion"),
                required: true,
                appearance: None,
                show: SHOW_P22_AFFECTED,
                choice_filter: None,
                other_detail: Some(("p221_otro_detalle", "Otro (detalle):")),
            }),
            Item::Question(FixedQuestion {
                name: "p222_motivo_no_denuncia",
                label: "22.2 En caso de NO haber realizado la denuncia ante el OIJ, indique ¿cuál fue el motivo?",
                kind: FixedKind::SelectMultiple("motivo_no_denuncia"),
                required: true,
                appearance: None,
                show: Show::Equals("p22_afectado_delito", &["Sí, pero no denuncié"]),
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p223_horario_hecho",
                label: "22.3 ¿Tiene conocimiento del horario en el cual se presentó el hecho delictivo que afectó a su local comercial o a personas vinculadas a su actividad comercial?",
                kind: FixedKind::SelectOne("horario_hecho"),
                required: true,
                appearance: Some("minimal"),
                show: SHOW_P22_AFFECTED,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p23_modo_ocurrio",
                label: "23. ¿Cuál fue la forma o modo en que ocurrió la situación que afectó a su local comercial?",
                kind: FixedKind::SelectMultiple("modo_ocurrio"),
                required: true,
                appearance: None,
                show: SHOW_P22_AFFECTED,
                choice_filter: None,
                other_detail: Some(("p23_otro_detalle", "Otro (detalle):")),
            }),
            Item::Question(FixedQuestion {
                name: "p231_incidentes_operacion",
                label: "23.1 Incidentes de seguridad asociados a la operación del comercio",
                kind: FixedKind::SelectMultiple("incidentes_operacion"),
                required: true,
                appearance: None,
                show: Show::Always,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Note {
                name: "p231_texto",
                text: text::OPERATION_INCIDENTS_NOTE,
            },
        ],
        glossary: &["Extorsión", "Tacha", "Ganzúa", "Arrebato", "Boquete"],
    },
    // ---------------- P8 — Acciones / Confianza / Contacto (24..34) ----------------
    PageDef {
        id: PageId::Acciones,
        group: "p8_acciones_confianza_contacto",
        label: "Acciones sugeridas, confianza y contacto",
        gated: true,
        items: &[
            Item::Note {
                name: "p8_intro",
                text: text::ACTIONS_INTRO,
            },
            Item::Question(multi_with_other(
                "p24_acciones_fp",
                "act_fp",
                "24. Seleccione las acciones o mejoras que considera necesarias por parte de Fuerza Pública para mejorar la seguridad en la zona comercial: (Marque todas)",
                "p24_otro_detalle",
            )),
            Item::Question(multi_with_other(
                "p25_acciones_municipalidad",
                "act_muni",
                "25. Seleccione las acciones o mejoras que considera necesarias por parte de la Municipalidad para mejorar la seguridad en la zona comercial: (Marque todas)",
                "p25_otro_detalle",
            )),
            Item::Question(select_one(
                "p26_servicio_24m",
                "servicio_24m",
                "26. En los últimos 24 meses, ¿cómo considera que ha sido el servicio de Fuerza Pública en esta zona comercial?",
            )),
            Item::Question(select_one(
                "p27_conoce_policias",
                "yesno",
                "27. ¿Conoce policías de Fuerza Pública que se desempeñen en esta zona comercial?",
            )),
            Item::Question(select_one(
                "p28_conoce_programa",
                "yesno",
                "28. ¿Conoce el Programa de Seguridad Comercial implementado en su distrito?",
            )),
            Item::Question(FixedQuestion {
                name: "p29_inscrito_programa",
                label: "29. ¿Su comercio está inscrito o participa actualmente en el Programa de Seguridad Comercial?",
                kind: FixedKind::SelectOne("yesno"),
                required: true,
                appearance: Some("minimal"),
                show: Show::Equals("p28_conoce_programa", &[SI]),
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p30_desea_contacto_programa",
                label: "30. ¿Desea que se le contacte para brindarle información sobre el Programa de Seguridad Comercial?",
                kind: FixedKind::SelectOne("yesno"),
                required: true,
                appearance: Some("minimal"),
                show: SHOW_P30,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p31_nombre_contacto",
                label: "31.1 Nombre (opcional):",
                kind: FixedKind::Text,
                required: false,
                appearance: None,
                show: SHOW_P31,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p31_telefono_contacto",
                label: "31.2 Teléfono:",
                kind: FixedKind::Text,
                required: true,
                appearance: None,
                show: SHOW_P31,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(FixedQuestion {
                name: "p31_correo_contacto",
                label: "31.3 Correo electrónico:",
                kind: FixedKind::Text,
                required: false,
                appearance: None,
                show: SHOW_P31,
                choice_filter: None,
                other_detail: None,
            }),
            Item::Question(select_one(
                "p32_info_grupo_delito",
                "yesno",
                "32. ¿Tiene información sobre alguna persona o grupo que genere delitos o situaciones de inseguridad en la zona comercial?",
            )),
            Item::Question(FixedQuestion {
                name: "p33_detalle_info",
                label: "33. Detalle la información (de forma general):",
                kind: FixedKind::Text,
                required: true,
                appearance: Some("multiline"),
                show: Show::Equals("p32_info_grupo_delito", &[SI]),
                choice_filter: None,
                other_detail: None,
            }),
            Item::Note {
                name: "p34_cierre",
                text: text::CLOSING_NOTE,
            },
        ],
        glossary: &["Extorsión", "Receptación", "Contrabando"],
    },
];

/// select_one with minimal appearance, required, always shown.
const fn select_one(
    name: &'static str,
    list: &'static str,
    label: &'static str,
) -> FixedQuestion {
    FixedQuestion {
        name,
        label,
        kind: FixedKind::SelectOne(list),
        required: true,
        appearance: Some("minimal"),
        show: Show::Always,
        choice_filter: None,
        other_detail: None,
    }
}

/// Required select_multiple with an "Otro (detalle)" companion row.
const fn multi_with_other(
    name: &'static str,
    list: &'static str,
    label: &'static str,
    detail_name: &'static str,
) -> FixedQuestion {
    FixedQuestion {
        name,
        label,
        kind: FixedKind::SelectMultiple(list),
        required: true,
        appearance: None,
        show: Show::Always,
        choice_filter: None,
        other_detail: Some((detail_name, "Otro (detalle):")),
    }
}

/// Names of every fixed question, companion detail rows included.
pub fn fixed_question_names() -> Vec<&'static str> {
    let mut names = Vec::new();
    for page in PAGES {
        for item in page.items {
            match item {
                Item::Question(q) => {
                    names.push(q.name);
                    if let Some((detail, _)) = q.other_detail {
                        names.push(detail);
                    }
                }
                Item::Matrix { rows, .. } => {
                    names.extend(rows.iter().map(|(name, _)| *name));
                }
                _ => {}
            }
        }
    }
    names
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_order_matches_ids() {
        let ids: Vec<PageId> = PAGES.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_fixed_names_are_unique() {
        let names = fixed_question_names();
        let set: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), set.len());
    }

    #[test]
    fn test_only_first_two_pages_ungated() {
        for page in PAGES {
            let expect_gated = !matches!(
                page.id,
                PageId::Introduccion | PageId::Consentimiento
            );
            assert_eq!(page.gated, expect_gated, "page {}", page.group);
        }
    }

    #[test]
    fn test_p30_show_renders_program_condition() {
        let rendered = SHOW_P30.render().unwrap();
        assert_eq!(
            rendered,
            "(${p28_conoce_programa}='no') or \
             ((${p28_conoce_programa}='si') and (${p29_inscrito_programa}='no'))"
        );
    }

    #[test]
    fn test_glossary_terms_all_defined() {
        for page in PAGES {
            for term in page.glossary {
                assert!(
                    super::text::glossary_definition(term).is_some(),
                    "missing glossary entry for {term}"
                );
            }
        }
    }
}
