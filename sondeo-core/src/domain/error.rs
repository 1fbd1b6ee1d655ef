// sondeo-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Empty catalog batch for canton '{0}'")]
    #[diagnostic(
        code(sondeo::domain::empty_batch),
        help("A batch needs a canton name and at least one district, one per line.")
    )]
    EmptyBatch(String),

    #[error("Duplicate question name '{0}'")]
    #[diagnostic(code(sondeo::domain::duplicate_name))]
    DuplicateName(String),

    #[error("Rule targets its own source question '{0}'")]
    #[diagnostic(
        code(sondeo::domain::rule_self_reference),
        help("A visibility rule cannot show a question based on its own answer.")
    )]
    RuleSelfReference(String),

    #[error("Unknown question '{0}' referenced by a rule")]
    #[diagnostic(code(sondeo::domain::unknown_question))]
    UnknownQuestion(String),

    #[error("Choice question '{0}' has no options")]
    #[diagnostic(
        code(sondeo::domain::empty_options),
        help("single-choice and multi-choice questions need at least one option label.")
    )]
    EmptyOptions(String),
}
