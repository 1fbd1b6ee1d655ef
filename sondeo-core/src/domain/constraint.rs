// sondeo-core/src/domain/constraint.rs
//
// Multi-select questions often carry a "none of the above" option. Selecting
// it together with any other option is contradictory, so those questions get
// a constraint forbidding the combination. In constraint expressions `.`
// refers to the question's own answer.

use super::expr::negate;
use super::naming::slugify;

/// Label prefixes that mark an option as a "none observed" answer.
pub const NONE_PHRASES: [&str; 3] = ["Ninguno", "Ninguna", "No se observa"];

/// Message shown by the platform when the constraint rejects an answer.
pub const EXCLUSIVITY_MESSAGE: &str =
    "Esta opción no puede combinarse con otras respuestas. Deseleccione las demás opciones.";

/// Finds the first option whose label starts with a "none observed" phrase
/// and returns its choice name.
pub fn none_option(labels: &[&str]) -> Option<String> {
    labels
        .iter()
        .find(|label| NONE_PHRASES.iter().any(|p| label.starts_with(p)))
        .map(|label| slugify(label))
}

/// `not(selected(., 'none') and count-selected(.) > 1)` — the none option
/// cannot be selected alongside any other option of the same question.
pub fn exclusivity_constraint(none_name: &str) -> String {
    negate(&format!(
        "selected(., '{none_name}') and count-selected(.) > 1"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_option_detected_by_prefix() {
        let labels = [
            "Riñas o disturbios dentro del local",
            "Daños ocasionados por clientes o terceros",
            "Ninguno de los anteriores",
        ];
        assert_eq!(
            none_option(&labels),
            Some("ninguno_de_los_anteriores".to_string())
        );

        let observed = ["Área pública", "No se observa consumo", "Otro"];
        assert_eq!(none_option(&observed), Some("no_se_observa_consumo".into()));
    }

    #[test]
    fn test_none_option_absent() {
        assert_eq!(none_option(&["Mañana", "Tarde", "Noche"]), None);
    }

    #[test]
    fn test_exclusivity_constraint_shape() {
        assert_eq!(
            exclusivity_constraint("ninguno_de_los_anteriores"),
            "not(selected(., 'ninguno_de_los_anteriores') and count-selected(.) > 1)"
        );
    }
}
