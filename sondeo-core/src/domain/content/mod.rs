// sondeo-core/src/domain/content/mod.rs
//
// Fixed content of the commerce-zone security survey: the Spanish text
// blocks, the base choice lists and the page definitions the assembler
// iterates. Everything here is data; the assembly logic lives in the
// application layer.

pub mod choices;
pub mod pages;
pub mod text;

pub use pages::{FixedKind, FixedQuestion, Item, PageDef, Show, PAGES};
