// sondeo-core/src/domain/content/text.rs
//
// Literal survey text. The wording is fixed by the institution that owns the
// questionnaire; do not edit without a new approved version.

pub const INTRO_COMERCIO: &str = "Con el fin de hacer más segura la zona comercial de este distrito, deseamos concentrarnos en \n\
los problemas de seguridad más importantes que afectan a los negocios. Queremos trabajar \n\
en conjunto con el gobierno local, otras instituciones y las personas comerciantes para reducir \n\
los delitos y riesgos que afectan la actividad comercial. \n\
Es importante recordarle que la información que usted nos proporcione es confidencial y se \n\
utilizará únicamente para mejorar la seguridad en esta zona comercial.";

pub const CONSENT_TITLE: &str =
    "Consentimiento Informado para la Participación en la Encuesta";

pub const CONSENT_PARAGRAPHS: &[&str] = &[
    "Usted está siendo invitado(a) a participar de forma libre y voluntaria en una encuesta sobre seguridad, convivencia y percepción ciudadana, dirigida a personas mayores de 18 años.",
    "El objetivo de esta encuesta es recopilar información de carácter preventivo y estadístico, con el fin de apoyar la planificación de acciones de prevención, mejora de la convivencia y fortalecimiento de la seguridad en comunidades y zonas comerciales.",
    "La participación es totalmente voluntaria. Usted puede negarse a responder cualquier pregunta, así como retirarse de la encuesta en cualquier momento, sin que ello genere consecuencia alguna.",
    "De conformidad con lo dispuesto en el artículo 5 de la Ley N.º 8968, Ley de Protección de la Persona frente al Tratamiento de sus Datos Personales, se le informa que:",
];

pub const CONSENT_BULLETS: &[&str] = &[
    "Finalidad del tratamiento: La información recopilada será utilizada exclusivamente para fines estadísticos, analíticos y preventivos, y no para investigaciones penales, procesos judiciales, sanciones administrativas ni procedimientos disciplinarios.",
    "Datos personales: Algunos apartados permiten, de forma voluntaria, el suministro de datos personales o información de contacto.",
    "Tratamiento de los datos: Los datos serán almacenados, analizados y resguardados bajo criterios de confidencialidad y seguridad, conforme a la normativa vigente.",
    "Destinatarios y acceso: La información será conocida únicamente por el personal autorizado de la Fuerza Pública / Ministerio de Seguridad Pública, para los fines indicados. No será cedida a terceros ajenos a estos fines.",
    "Responsable de la base de datos: El Ministerio de Seguridad Pública, a través de la Dirección de Programas Policiales Preventivos, Oficina Estrategia Integral de Prevención para la Seguridad Pública (EIPSEP / Estrategia Sembremos Seguridad) será el responsable del tratamiento y custodia de la información recolectada.",
    "Derechos de la persona participante: Usted conserva el derecho a la autodeterminación informativa y a decidir libremente sobre el suministro de sus datos.",
];

pub const CONSENT_CLOSING: &[&str] = &[
    "Las respuestas brindadas no constituyen denuncias formales, ni sustituyen los mecanismos legales correspondientes.",
    "Al continuar con la encuesta, usted manifiesta haber leído y comprendido la información anterior y otorga su consentimiento informado para participar.",
];

pub const CONSENT_QUESTION_LABEL: &str = "¿Acepta participar en esta encuesta?";

pub const FINISH_NO_CONSENT: &str =
    "Gracias. Usted indicó que no acepta participar en esta encuesta.";

/// Glossary terms referenced by page definitions. Each entry is
/// `(term, definition)`; the definition already repeats the term.
pub const GLOSSARY: &[(&str, &str)] = &[
    (
        "Extorsión",
        "Extorsión: El que, para procurar un lucro injusto, obligare a otro, mediante intimidación o amenaza, a realizar u omitir un acto o negocio en perjuicio de su patrimonio o del de un tercero.",
    ),
    (
        "Daños a la propiedad",
        "Daños a la propiedad: El que destruyere, inutilizare, hiciere desaparecer o deteriorare bienes, sean de naturaleza pública o privada, en perjuicio de persona física o jurídica.",
    ),
    (
        "Receptación",
        "Receptación: Adquirir, recibir, ocultar o comercializar bienes de origen ilícito, con conocimiento o sospecha razonable de su procedencia.",
    ),
    (
        "Contrabando",
        "Contrabando: Introducción, extracción o comercio de mercancías eludiendo controles aduaneros o tributarios, conforme al ordenamiento aplicable.",
    ),
    (
        "Búnker",
        "Búnker: Punto fijo asociado a consumo o venta de drogas, usualmente en una vivienda o edificación; en la encuesta se utiliza como descriptor situacional.",
    ),
    (
        "Tacha",
        "Tacha: Modalidad de robo mediante forzamiento de accesos (puertas, ventanas, cerraduras) para ingresar a vivienda, comercio o edificación.",
    ),
    (
        "Ganzúa",
        "Ganzúa: Herramienta utilizada para manipular o abrir cerraduras sin la llave correspondiente.",
    ),
    (
        "Arrebato",
        "Arrebato: Sustracción súbita de un bien que porta la víctima (por ejemplo, bolso o celular), mediante fuerza sorpresiva.",
    ),
    (
        "Boquete",
        "Boquete: Modalidad de ingreso forzado mediante apertura de un hueco u orificio en paredes, techos u otras estructuras para acceder a un inmueble.",
    ),
];

pub fn glossary_definition(term: &str) -> Option<&'static str> {
    GLOSSARY
        .iter()
        .find(|(t, _)| *t == term)
        .map(|(_, def)| *def)
}

pub const GLOSSARY_GATE_LABEL: &str = "¿Desea acceder al glosario de esta sección?";
pub const GLOSSARY_INTRO: &str =
    "A continuación, se muestran definiciones de términos que aparecen en esta sección.";
pub const GLOSSARY_CLOSING: &str =
    "Para continuar con la encuesta, desplácese hacia arriba y continúe con normalidad.";

// --- Section introductions ---

pub const RISKS_SECTION_TITLE: &str =
    "III. RIESGOS SOCIALES Y SITUACIONALES EN LA ZONA COMERCIAL";

pub const CRIMES_INTRO: &str = "DELITOS\n\nA continuación, se presentará una lista de delitos y situaciones delictivas para que seleccione aquellos que, según su percepción u observación, considera que se presentan en la zona comercial. No es necesario haber sido víctima ni que la información corresponda a hechos confirmados.";

pub const VICTIMIZATION_INTRO: &str = "VICTIMIZACIÓN\n\nA continuación, se presentará una lista de situaciones o hechos para que seleccione aquellos en los que su local comercial, o personas vinculadas a su actividad comercial, hayan sido directamente afectados en su zona comercial durante el último año. La información se utiliza con fines preventivos y no sustituye una denuncia formal.";

pub const ACTIONS_INTRO: &str = "IV. ACCIONES Y MEJORAS PARA LA SEGURIDAD COMERCIAL\n\nA continuación, se presentan preguntas orientadas a identificar acciones sugeridas para mejorar la seguridad en la zona comercial, valoración del servicio policial, conocimiento de programas preventivos y opciones de contacto (voluntario).";

pub const MATRIX_INSTRUCTION: &str = "9. Indique qué tan seguros percibe, en términos de seguridad, los siguientes espacios de la zona comercial:";

pub const OPERATION_INCIDENTS_NOTE: &str = "Estos incidentes no necesariamente constituyen delitos, pero afectan la seguridad y el funcionamiento del comercio.";

pub const CLOSING_NOTE: &str = "34. Fin de la encuesta.\n\nMuchas gracias por su colaboración. Su participación contribuirá al fortalecimiento de la seguridad en la zona comercial.";
