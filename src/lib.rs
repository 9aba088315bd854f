//! # inlist
//!
//! Membership queries (`WHERE field IN (...)`) with very large value lists
//! hit hard backend limits: Oracle caps an `IN` list at 1000 elements, other
//! engines cap the number of bind parameters per statement. `inlist` works
//! around this by splitting the filter list into bounded chunks, issuing one
//! query per chunk against an abstract data source, and concatenating the
//! results.
//!
//! The predicate sent to the source is not a closure but data: a small
//! expression tree built from columns, constants, rows and comparisons. The
//! source implementation owns translating that tree into its native query
//! language, which is why the field selector must be a plain column access —
//! an arbitrary computed expression cannot be re-encoded, and is rejected
//! before any query runs.
//!
//! ## Building predicates
//!
//! ```rust
//! use inlist::ast::*;
//!
//! let conditions: ConditionTree<'_> = Column::from(("users", "id"))
//!     .in_selection(vec![1, 2, 3])
//!     .into();
//! ```
//!
//! ## Querying in chunks
//!
//! A data source implements [`connector::Filterable`]; the executor drives
//! it one chunk at a time:
//!
//! ```rust
//! use inlist::{ast::*, chunked::select_in_chunks, connector::Filterable};
//!
//! # async fn run<S: Filterable<Record = u64>>(users: &S) -> inlist::Result<()> {
//! let ids: Vec<Value<'_>> = (0..5000i64).map(Value::from).collect();
//!
//! // Five queries of a thousand ids each, results in chunk order.
//! let records = select_in_chunks(users, Column::from("id").into(), &ids, 1000).await?;
//! # Ok(())
//! # }
//! ```
//!
//! If the filter list is empty the source is never contacted. If any chunk
//! query fails, the whole operation fails with the offending chunk's index
//! and no further chunks are issued.

#[macro_use]
mod macros;

pub mod ast;
pub mod chunked;
pub mod connector;
pub mod error;
pub mod prelude;

pub use chunked::{chunks, in_condition, select_in_chunks, selector_column, DEFAULT_CHUNK_SIZE};
pub use connector::Filterable;
pub use error::{Error, ErrorKind};

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, error::Error>;
