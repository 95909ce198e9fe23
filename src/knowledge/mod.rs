pub mod base;
pub(crate) mod corpus;
pub mod index;
pub mod record;

pub use base::{KnowledgeBase, KnowledgeBaseError};
pub use index::{KeywordEntry, KeywordIndex};
pub use record::{RecordError, SymbolRecord};
