//! The boundary to the external data sources the chunked queries run
//! against.
use crate::ast::ConditionTree;
use async_trait::async_trait;

/// A data source that can be restricted with a condition tree and
/// materialized into records.
///
/// Implementations own the translation of the tree into their native query
/// language; this crate only assembles trees. An implementation must at
/// least understand a [`Compare::In`](crate::ast::Compare::In) comparison of
/// a [`Column`](crate::ast::Column) against a [`Row`](crate::ast::Row) of
/// parameterized values, which is the only shape
/// [`select_in_chunks`](crate::chunked::select_in_chunks) produces.
///
/// Errors are reported through [`crate::Error`], typically with
/// [`ErrorKind::QueryError`](crate::ErrorKind::QueryError) wrapping the
/// underlying driver failure.
#[async_trait]
pub trait Filterable: Send + Sync {
    /// The record type this source produces.
    type Record: Send;

    /// Restricts the source to records matching the conditions, then
    /// executes the query and returns the matching records in the order the
    /// source produces them.
    async fn filter(&self, conditions: ConditionTree<'_>) -> crate::Result<Vec<Self::Record>>;
}
