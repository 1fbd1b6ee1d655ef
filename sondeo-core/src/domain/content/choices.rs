// sondeo-core/src/domain/content/choices.rs
//
// Base choice lists of the commerce survey. Labels land in the `choices`
// sheet as-is; names are derived by slugifying the label.

pub const YESNO: &str = "yesno";

/// Every fixed list as `(list_name, labels)`.
pub const BASE_LISTS: &[(&str, &[&str])] = &[
    (YESNO, &["Sí", "No"]),
    (
        "genero",
        &["Femenino", "Masculino", "Persona No Binaria", "Prefiero no decir"],
    ),
    (
        "escolaridad",
        &[
            "Ninguna",
            "Primaria incompleta",
            "Primaria completa",
            "Secundaria incompleta",
            "Secundaria completa",
            "Técnico",
            "Universitaria incompleta",
            "Universitaria completa",
        ],
    ),
    (
        "edad_rangos",
        &["18 a 29 años", "30 a 44 años", "45 a 59 años", "60 años o más"],
    ),
    (
        "tipo_local",
        &[
            "Supermercado",
            "Pulpería / Licorera",
            "Restaurante / Soda",
            "Bar",
            "Tienda de artículos",
            "Gasolinera",
            "Servicios estéticos",
            "Puesto de lotería",
            "Ferretería",
            "Otro",
        ],
    ),
    // Página 4
    (
        "seguridad_5",
        &["Muy inseguro", "Inseguro", "Ni seguro ni inseguro", "Seguro", "Muy seguro"],
    ),
    (
        "escala_1_5",
        &[
            "1 (Mucho Menos Seguro)",
            "2 (Menos Seguro)",
            "3 (Se mantiene igual)",
            "4 (Más Seguro)",
            "5 (Mucho Más Seguro)",
        ],
    ),
    (
        "matriz_1_5_na",
        &[
            "Muy inseguro (1)",
            "Inseguro (2)",
            "Ni seguro ni inseguro (3)",
            "Seguro (4)",
            "Muy seguro (5)",
            "No aplica",
        ],
    ),
    (
        "causas_inseguridad_comercio",
        &[
            "Venta de drogas",
            "Consumo de drogas",
            "Consumo de alcohol en vía pública",
            "Riñas o peleas",
            "Asaltos",
            "Robos o tachas",
            "Extorsiones o amenazas",
            "Daños a la propiedad",
            "Vandalismo",
            "Ventas informales desordenadas",
            "Personas en situación de calle",
            "Presencia de comportamientos o actividades inusuales en el entorno",
            "Intentos de cobro ilegal o exigencias indebidas a comercios",
            "Otro",
        ],
    ),
    // Página 5
    (
        "horarios_inseguridad",
        &["Mañana", "Tarde", "Noche", "Madrugada", "Todo el día"],
    ),
    (
        "problematicas_comercio",
        &[
            "Personas en situación de calle",
            "Actividades sexuales comerciales en el entorno",
            "Consumo de alcohol en vía pública",
            "Acumulación de basura / aguas negras / alcantarillado deficiente",
            "Falta o deficiencia de alumbrado público",
            "Lotes baldíos y edificaciones abandonadas",
            "Ventas informales",
            "Intentos de cobro ilegal o exigencias indebidas en la zona comercial",
            "Otro",
        ],
    ),
    (
        "donde_drogas",
        &[
            "Área pública (calle, aceras, alrededores del local)",
            "Área semipública (parques, lotes abandonados)",
            "No se observa consumo",
            "Otro",
        ],
    ),
    (
        "infra_vial",
        &[
            "Calles en mal estado",
            "Falta de señalización",
            "Falta o deterioro de aceras",
            "Otro",
        ],
    ),
    (
        "transporte_afect",
        &[
            "Transporte informal (piratas)",
            "Plataformas digitales mal estacionadas u obstruyendo vías",
            "Paradas de bus inseguras",
            "Otro",
        ],
    ),
    (
        "presencia_policial_comercio",
        &[
            "Falta de presencia policial",
            "Patrullaje insuficiente",
            "Presencia policial solo en ciertos horarios",
            "No observa presencia policial",
            "Otro",
        ],
    ),
    // Página 6
    (
        "delitos_comercio",
        &[
            "Disturbios en vía pública (riñas o agresiones)",
            "Daños a la propiedad",
            "Extorsión (cobro ilegal a comercios)",
            "Hurto (por descuido)",
            "Compra o venta de bienes de dudosa procedencia (receptación)",
            "Contrabando (licor, cigarrillos, medicinas, ropa, calzado, etc.)",
            "Maltrato animal",
            "Otro",
        ],
    ),
    (
        "manifest_drogas",
        &["Búnker / espacio cerrado", "Vía pública", "Modalidad exprés", "Otro"],
    ),
    (
        "asaltos_tipo",
        &[
            "Asalto a personas",
            "Asalto a comercios",
            "Asalto en transporte público",
            "Otro",
        ],
    ),
    (
        "estafas_comercio",
        &[
            "Billetes falsos",
            "Documentos falsos",
            "Estafas con oro",
            "Estafas con lotería",
            "Estafas informáticas",
            "Estafa telefónica",
            "Estafa con tarjetas",
            "Otro",
        ],
    ),
    (
        "robos_fuerza",
        &[
            "Tacha a comercio",
            "Tacha a edificaciones comerciales",
            "Tacha de vehículos",
            "Robo de vehículos",
            "Robo de cable",
            "Robo de combustible",
            "Otro",
        ],
    ),
    // Página 7
    (
        "victim_22",
        &["No", "Sí, y denuncié", "Sí, pero no denuncié"],
    ),
    (
        "delitos_afectacion",
        &[
            "Asalto a mano armada (amenaza con arma o uso de violencia) en la calle o espacio público",
            "Asalto en el transporte público (bus, taxi, metro, etc.)",
            "Asalto o robo de su vehículo (coche, motocicleta, etc.)",
            "Robo de accesorios o partes de su vehículo (espejos, llantas, radio)",
            "Robo o intento de robo con fuerza a su vivienda (ej. forzar una puerta o ventana)",
            "Robo o intento de robo con fuerza a su comercio o negocio",
            "Hurto de su cartera, bolso o celular (sin que se diera cuenta, por descuido)",
            "Daños a su propiedad (ej. grafitis, rotura de cristales, destrucción de cercas)",
            "Receptación (alguien compró o recibió un artículo y luego supo que era robado)",
            "Pérdida de artículos (celular, bicicleta, etc.) por descuido",
            "Estafa telefónica (llamadas para pedir dinero o datos personales)",
            "Estafa o fraude informático (internet, redes sociales o correo electrónico)",
            "Fraude con tarjetas bancarias (clonación o uso no autorizado)",
            "Ser víctima de billetes o documentos falsos",
            "Extorsión (intimidación o amenaza para obtener dinero u otro beneficio)",
            "Maltrato animal (fue testigo o su mascota fue la víctima)",
            "Acoso o intimidación sexual en un espacio público",
            "Algún tipo de delito sexual (abuso, violación)",
            "Lesiones personales (haber sido herido en una riña o agresión)",
            "Violencia intrafamiliar (violencia doméstica)",
            "Otro",
        ],
    ),
    (
        "motivo_no_denuncia",
        &[
            "Distancia (falta de oficinas para recepción de denuncias)",
            "Miedo a represalias",
            "Falta de respuesta oportuna",
            "He realizado denuncias y no ha pasado nada",
            "Complejidad al colocar la denuncia",
            "Desconocimiento de dónde colocar la denuncia",
            "El Policía me dijo que era mejor no denunciar",
            "Falta de tiempo para colocar la denuncia",
        ],
    ),
    (
        "horario_hecho",
        &[
            "00:00 - 02:59 a. m.",
            "03:00 - 05:59 a. m.",
            "06:00 - 08:59 a. m.",
            "09:00 - 11:59 a. m.",
            "12:00 - 14:59 p. m.",
            "15:00 - 17:59 p. m.",
            "18:00 - 20:59 p. m.",
            "21:00 - 23:59 p. m.",
            "DESCONOCIDO",
        ],
    ),
    (
        "modo_ocurrio",
        &[
            "Arma blanca (cuchillo, machete, tijeras)",
            "Arma de fuego",
            "Amenazas",
            "Arrebato",
            "Boquete",
            "Ganzúa (pata de chancho)",
            "Engaño",
            "No sé",
            "Otro",
        ],
    ),
    (
        "incidentes_operacion",
        &[
            "Riñas o disturbios dentro del local",
            "Riñas o disturbios en las inmediaciones del comercio",
            "Agresiones físicas al personal del comercio",
            "Amenazas verbales al personal",
            "Ingreso de personas en estado de ebriedad o bajo efectos de drogas que generaron conflictos",
            "Daños ocasionados por clientes o terceros",
            "Ninguno de los anteriores",
        ],
    ),
    // Página 8
    (
        "act_fp",
        &[
            "Mayor presencia policial y patrullaje",
            "Acciones disuasivas en puntos conflictivos",
            "Acciones contra consumo y venta de drogas",
            "Mejorar el servicio policial de la zona comercial",
            "Acercamiento comercial",
            "Actividades de prevención y educación",
            "Coordinación interinstitucional",
            "Integridad y credibilidad policial",
            "Otro",
            "No indica",
        ],
    ),
    (
        "act_muni",
        &[
            "Mantenimiento e iluminación del espacio público en áreas comerciales",
            "Limpieza, recolección de desechos y ordenamiento urbano",
            "Instalación de cámaras municipales y vigilancia en puntos comerciales",
            "Control de ventas informales y ocupación indebida del espacio público",
            "Regulación del transporte informal y mejora de paradas de bus",
            "Mejoramiento de aceras, calles y espacios públicos del casco comercial",
            "Coordinación interinstitucional con Fuerza Pública y otras entidades",
            "Acercamiento y comunicación directa con las personas comerciantes",
            "Otro",
            "No indica",
        ],
    ),
    ("servicio_24m", &["Mejor servicio", "Igual", "Peor servicio"]),
];
