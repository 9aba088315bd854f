//! Splitting oversized membership filters into bounded per-query chunks.
//!
//! Backends limit how many values fit into one `IN (...)` list, either
//! directly (Oracle stops at 1000 elements) or through a cap on bind
//! parameters per statement. The functions here turn one unbounded
//! membership filter into a series of bounded queries whose concatenated
//! results are equivalent.
use crate::ast::{Column, Comparable, ConditionTree, DatabaseValue, Value};
use crate::connector::Filterable;
use crate::error::{Error, ErrorKind};
use tracing::debug;

/// The default maximum number of values in a single membership predicate.
///
/// Matches the `IN` list cap on Oracle. Other backends draw the line
/// elsewhere, which is why every entry point takes the size as a parameter
/// instead of hardcoding this.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Splits the values into contiguous chunks of at most `max_chunk_size`
/// elements.
///
/// All chunks except possibly the last hold exactly `max_chunk_size` values,
/// relative ordering is preserved within and across chunks, and an empty
/// input produces zero chunks. The iterator is lazy, so a very large filter
/// list never materializes all chunk boundaries at once.
///
/// ```rust
/// # use inlist::chunked::chunks;
/// let parts: Vec<_> = chunks(&[1, 3, 5, 7, 9], 2).unwrap().collect();
/// assert_eq!(vec![&[1, 3][..], &[5, 7][..], &[9][..]], parts);
/// ```
///
/// A zero `max_chunk_size` cannot make progress and is refused with
/// [`ErrorKind::InvalidChunkSize`].
pub fn chunks<T>(values: &[T], max_chunk_size: usize) -> crate::Result<std::slice::Chunks<'_, T>> {
    if max_chunk_size == 0 {
        return Err(Error::builder(ErrorKind::InvalidChunkSize(max_chunk_size)).build());
    }

    Ok(values.chunks(max_chunk_size))
}

/// Validates that the selector has a shape the data source's translation
/// layer can encode: a direct access to a single column.
///
/// The selector is read structurally and never evaluated. Anything other
/// than a plain column reference, such as an embedded constant or a row of
/// values, cannot be re-encoded into a field comparison and fails with
/// [`ErrorKind::UnsupportedSelector`].
pub fn selector_column(selector: DatabaseValue<'_>) -> crate::Result<Column<'_>> {
    match selector {
        DatabaseValue::Column(column) => Ok(*column),
        DatabaseValue::Parameterized(_) => Err(Error::builder(ErrorKind::UnsupportedSelector(
            "a constant value does not select a field",
        ))
        .build()),
        DatabaseValue::Row(_) => Err(Error::builder(ErrorKind::UnsupportedSelector(
            "a row of values does not select a single field",
        ))
        .build()),
    }
}

/// Builds the membership predicate `column IN (chunk values)` for one chunk.
///
/// The result is a single-leaf condition tree assembled purely from
/// declarative nodes, ready for the source to compile.
pub fn in_condition<'a>(selector: &Column<'a>, chunk: &[Value<'a>]) -> ConditionTree<'a> {
    let values: Vec<DatabaseValue<'a>> = chunk.iter().cloned().map(DatabaseValue::from).collect();

    selector.clone().in_selection(values).into()
}

/// Fetches every record whose selected field value appears anywhere in
/// `values`, issuing one query per chunk of at most `max_chunk_size` values
/// and concatenating the results.
///
/// Chunk queries run strictly sequentially; each one completes before the
/// next is issued, so the source never sees more than one in-flight query
/// per invocation. Results keep chunk submission order, and within a chunk
/// the order the source returned them. Duplicate filter values are not
/// deduplicated; a value present in two chunks can fetch its matching
/// records once per chunk.
///
/// An empty `values` list returns an empty result without contacting the
/// source. The first failing chunk aborts the whole operation with
/// [`ErrorKind::ChunkQueryError`] naming the chunk index; no further chunks
/// are issued and no partial results are returned. Dropping the returned
/// future between chunks likewise abandons all accumulated results.
pub async fn select_in_chunks<'a, S>(
    source: &S,
    selector: DatabaseValue<'a>,
    values: &'a [Value<'a>],
    max_chunk_size: usize,
) -> crate::Result<Vec<S::Record>>
where
    S: Filterable,
{
    let chunks = chunks(values, max_chunk_size)?;

    if values.is_empty() {
        return Ok(Vec::new());
    }

    let column = selector_column(selector)?;
    let mut records = Vec::new();

    for (index, chunk) in chunks.enumerate() {
        debug!(chunk = index, values = chunk.len(), "executing membership chunk");

        let conditions = in_condition(&column, chunk);

        let mut result = source.filter(conditions).await.map_err(|e| {
            Error::builder(ErrorKind::ChunkQueryError {
                chunk: index,
                source: Box::new(e),
            })
            .build()
        })?;

        records.append(&mut result);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Compare, Expression, Row};

    #[test]
    fn chunking_and_concatenating_reconstructs_the_input() {
        let values: Vec<i64> = (0..97).collect();

        for max_chunk_size in 1..=10 {
            let rejoined: Vec<i64> = chunks(&values, max_chunk_size)
                .unwrap()
                .flatten()
                .copied()
                .collect();

            assert_eq!(values, rejoined);
        }
    }

    #[test]
    fn all_chunks_but_the_last_are_full() {
        let values: Vec<i64> = (0..10).collect();
        let parts: Vec<_> = chunks(&values, 4).unwrap().collect();

        assert_eq!(3, parts.len());
        assert_eq!(&[0, 1, 2, 3][..], parts[0]);
        assert_eq!(&[4, 5, 6, 7][..], parts[1]);
        assert_eq!(&[8, 9][..], parts[2]);
    }

    #[test]
    fn an_evenly_divisible_input_has_only_full_chunks() {
        let values: Vec<i64> = (0..9).collect();

        for part in chunks(&values, 3).unwrap() {
            assert_eq!(3, part.len());
        }
    }

    #[test]
    fn an_empty_input_produces_zero_chunks() {
        let values: Vec<i64> = Vec::new();
        assert_eq!(0, chunks(&values, 5).unwrap().count());
    }

    #[test]
    fn a_zero_chunk_size_is_refused() {
        let values = vec![1, 2, 3];
        let error = chunks(&values, 0).unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::InvalidChunkSize(0)));
    }

    #[test]
    fn a_column_selector_passes_the_shape_gate() {
        let column = selector_column(Column::from(("users", "id")).into()).unwrap();

        assert_eq!(Column::from(("users", "id")), column);
    }

    #[test]
    fn a_constant_selector_is_rejected() {
        let error = selector_column(Value::integer(1).into()).unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::UnsupportedSelector(_)));
    }

    #[test]
    fn a_row_selector_is_rejected() {
        let error = selector_column(Row::from(vec![1, 2]).into()).unwrap_err();

        assert!(matches!(error.kind(), ErrorKind::UnsupportedSelector(_)));
    }

    #[test]
    fn the_membership_predicate_is_a_single_in_comparison() {
        let column = Column::from("id");
        let chunk = vec![Value::integer(1), Value::integer(2)];

        let tree = in_condition(&column, &chunk);

        let expected = ConditionTree::Single(Box::new(Expression::Compare(Compare::In(
            Box::new(Column::from("id").into()),
            Box::new(Row::from(vec![Value::integer(1), Value::integer(2)])),
        ))));

        assert_eq!(expected, tree);
    }
}
