//! A "prelude" for users of the `inlist` crate.
pub use crate::ast::*;
pub use crate::chunked::{chunks, in_condition, select_in_chunks, selector_column, DEFAULT_CHUNK_SIZE};
pub use crate::connector::Filterable;
pub use crate::error::{Error, ErrorKind};
