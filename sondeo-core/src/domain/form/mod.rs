// sondeo-core/src/domain/form/mod.rs

pub mod question;
pub mod rules;
pub mod sheet;

pub use question::{PageId, Question, QuestionKind};
pub use rules::{FinishRule, VisibilityRule};
pub use sheet::{Settings, SurveyRow, XlsForm, SURVEY_COLUMNS};
