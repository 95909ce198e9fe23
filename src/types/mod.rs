pub mod identifiers;
pub mod query;

pub use identifiers::{CorpusVersion, Symbol};
pub use query::Query;
