// sondeo-core/src/domain/form/rules.rs

use serde::{Deserialize, Serialize};

use crate::domain::expr::{Condition, RuleOperator};

/// Shows `target` when `source`'s answer matches. Several rules may point at
/// the same target; they OR-combine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    pub target: String,
    pub source: String,
    pub operator: RuleOperator,
    pub values: Vec<String>,
}

impl VisibilityRule {
    pub fn condition(&self) -> Condition {
        Condition::new(self.source.clone(), self.operator, self.values.clone())
    }
}

/// Hides every question after `source_position` when the condition holds,
/// simulating early survey termination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishRule {
    pub source: String,
    pub operator: RuleOperator,
    pub values: Vec<String>,
    pub source_position: usize,
}

impl FinishRule {
    pub fn condition(&self) -> Condition {
        Condition::new(self.source.clone(), self.operator, self.values.clone())
    }

    /// Whether the rule hides the question at `position`.
    pub fn applies_after(&self, position: usize) -> bool {
        position > self.source_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expr::negate;

    #[test]
    fn test_visibility_rule_condition() {
        let rule = VisibilityRule {
            target: "detalle".into(),
            source: "p17_delitos".into(),
            operator: RuleOperator::Selected,
            values: vec!["Otro".into()],
        };
        assert_eq!(rule.condition().render(), "selected(${p17_delitos}, 'otro')");
    }

    #[test]
    fn test_finish_rule_applies_only_after_source() {
        let rule = FinishRule {
            source: "acepta_participar".into(),
            operator: RuleOperator::Equals,
            values: vec!["No".into()],
            source_position: 0,
        };
        assert!(!rule.applies_after(0));
        assert!(rule.applies_after(1));
        assert_eq!(
            negate(&rule.condition().render()),
            "not(${acepta_participar}='no')"
        );
    }
}
