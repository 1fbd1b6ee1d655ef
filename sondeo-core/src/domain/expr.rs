// sondeo-core/src/domain/expr.rs
//
// Builder for the boolean predicate strings Survey123 evaluates at runtime
// (`relevant`, `constraint` columns). Pure string templating: nothing here
// evaluates anything. Every combination step wraps its operands in
// parentheses, so the emitted expressions carry no precedence ambiguity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::naming::slugify;

/// `${name}` — field reference in the platform's expression syntax.
pub fn field(name: &str) -> String {
    format!("${{{name}}}")
}

/// `string-length(${name}) > 0` — true once the question has an answer.
pub fn answered(name: &str) -> String {
    format!("string-length({}) > 0", field(name))
}

/// `not(expr)`
pub fn negate(expr: &str) -> String {
    format!("not({expr})")
}

/// OR-joins expressions, wrapping each operand in parentheses.
/// Returns `None` for an empty slice; a single expression passes through.
pub fn any_of(exprs: &[String]) -> Option<String> {
    combine(exprs, "or")
}

/// AND-joins expressions, wrapping each operand in parentheses.
pub fn all_of(exprs: &[String]) -> Option<String> {
    combine(exprs, "and")
}

fn combine(exprs: &[String], op: &str) -> Option<String> {
    match exprs {
        [] => None,
        [single] => Some(single.clone()),
        many => Some(
            many.iter()
                .map(|e| format!("({e})"))
                .collect::<Vec<_>>()
                .join(&format!(" {op} ")),
        ),
    }
}

/// Comparison operators a rule can apply to a source question's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleOperator {
    Equals,
    #[serde(rename = "contains-selected")]
    Selected,
    NotEquals,
}

impl RuleOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Selected => "contains-selected",
            Self::NotEquals => "not-equals",
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RuleOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equals" => Ok(Self::Equals),
            "contains-selected" | "selected" => Ok(Self::Selected),
            "not-equals" => Ok(Self::NotEquals),
            _ => Err(format!("Unknown rule operator: {}", s)),
        }
    }
}

/// One predicate over a source question's answer. Values are labels; they are
/// slugified on render because answers are stored as choice names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub source: String,
    pub operator: RuleOperator,
    pub values: Vec<String>,
}

impl Condition {
    pub fn new(source: impl Into<String>, operator: RuleOperator, values: Vec<String>) -> Self {
        Self {
            source: source.into(),
            operator,
            values,
        }
    }

    fn atom(&self, value: &str) -> String {
        let v = slugify(value);
        match self.operator {
            RuleOperator::Equals => format!("{}='{}'", field(&self.source), v),
            RuleOperator::Selected => format!("selected({}, '{}')", field(&self.source), v),
            RuleOperator::NotEquals => format!("{}!='{}'", field(&self.source), v),
        }
    }

    /// Renders the condition: one atom per value, OR-joined. Grouping is the
    /// combinators' job, so no parentheses are added here.
    pub fn render(&self) -> String {
        let atoms: Vec<String> = self.values.iter().map(|v| self.atom(v)).collect();
        atoms.join(" or ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_field_and_answered() {
        assert_eq!(field("canton"), "${canton}");
        assert_eq!(answered("canton"), "string-length(${canton}) > 0");
    }

    #[test]
    fn test_condition_equals_single_value() {
        let c = Condition::new("acepta_participar", RuleOperator::Equals, vec!["No".into()]);
        assert_eq!(c.render(), "${acepta_participar}='no'");
    }

    #[test]
    fn test_condition_multi_value_or_joined() {
        let c = Condition::new(
            "p7_seguridad_entorno_comercial",
            RuleOperator::Equals,
            vec!["Muy inseguro".into(), "Inseguro".into()],
        );
        assert_eq!(
            c.render(),
            "${p7_seguridad_entorno_comercial}='muy_inseguro' or \
             ${p7_seguridad_entorno_comercial}='inseguro'"
        );
    }

    #[test]
    fn test_condition_selected_and_not_equals() {
        let sel = Condition::new("p12_problematicas", RuleOperator::Selected, vec!["Otro".into()]);
        assert_eq!(sel.render(), "selected(${p12_problematicas}, 'otro')");

        let ne = Condition::new("genero", RuleOperator::NotEquals, vec!["Femenino".into()]);
        assert_eq!(ne.render(), "${genero}!='femenino'");
    }

    #[test]
    fn test_combinators_parenthesize() {
        let a = "${a}='1'".to_string();
        let b = "${b}='2'".to_string();
        assert_eq!(any_of(&[]), None);
        assert_eq!(any_of(&[a.clone()]).unwrap(), "${a}='1'");
        assert_eq!(
            any_of(&[a.clone(), b.clone()]).unwrap(),
            "(${a}='1') or (${b}='2')"
        );
        assert_eq!(all_of(&[a, b]).unwrap(), "(${a}='1') and (${b}='2')");
        assert_eq!(negate("${a}='1'"), "not(${a}='1')");
    }

    // OR-combination is commutative in meaning: both orderings emit the same
    // set of parenthesized atoms under the same combinator.
    #[test]
    fn test_or_combination_commutative() {
        let r1 = Condition::new("p22", RuleOperator::Equals, vec!["Sí, y denuncié".into()]);
        let r2 = Condition::new("p17_delitos", RuleOperator::Selected, vec!["Otro".into()]);

        let ab = any_of(&[r1.render(), r2.render()]).unwrap();
        let ba = any_of(&[r2.render(), r1.render()]).unwrap();

        let atoms = |expr: &str| -> BTreeSet<String> {
            expr.split(" or ").map(|s| s.trim().to_string()).collect()
        };
        assert_eq!(atoms(&ab), atoms(&ba));
        assert_ne!(ab, ba); // string order differs, meaning does not
    }
}
