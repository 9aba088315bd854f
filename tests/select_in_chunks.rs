//! Tests for the chunked membership executor against an in-memory data
//! source that compiles membership trees the way a real translation layer
//! would.
use async_trait::async_trait;
use inlist::{
    ast::*,
    chunked::{select_in_chunks, DEFAULT_CHUNK_SIZE},
    connector::Filterable,
    Error, ErrorKind,
};
use std::sync::Mutex;

/// An in-memory collection of integer records keyed by themselves. It
/// understands exactly the tree shape the executor produces: a single `IN`
/// comparison of a column against a row of integer constants.
struct MemorySource {
    records: Vec<i64>,
    /// Value count of every query issued, in order.
    calls: Mutex<Vec<usize>>,
    /// Fail the query with this call index, if set.
    fail_on: Option<usize>,
}

impl MemorySource {
    fn new(records: Vec<i64>) -> Self {
        Self {
            records,
            calls: Mutex::new(Vec::new()),
            fail_on: None,
        }
    }

    fn failing_on(records: Vec<i64>, call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::new(records)
        }
    }

    fn issued_queries(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }

    fn compile_membership(conditions: &ConditionTree<'_>) -> Option<Vec<i64>> {
        let expression = match conditions {
            ConditionTree::Single(expression) => expression.as_ref(),
            _ => return None,
        };

        let (selector, row) = match expression {
            Expression::Compare(Compare::In(selector, row)) => (selector.as_ref(), row),
            _ => return None,
        };

        match selector {
            DatabaseValue::Column(column) if column.name == "id" => (),
            _ => return None,
        }

        let mut values = Vec::with_capacity(row.len());

        for value in row.values.iter() {
            match value {
                DatabaseValue::Parameterized(Value::Integer(Some(i))) => values.push(*i),
                _ => return None,
            }
        }

        Some(values)
    }
}

#[async_trait]
impl Filterable for MemorySource {
    type Record = i64;

    async fn filter(&self, conditions: ConditionTree<'_>) -> inlist::Result<Vec<i64>> {
        let call = {
            let mut calls = self.calls.lock().unwrap();

            let values =
                Self::compile_membership(&conditions).expect("untranslatable condition tree");

            calls.push(values.len());
            (calls.len() - 1, values)
        };
        let (call_index, values) = call;

        if self.fail_on == Some(call_index) {
            return Err(Error::builder(ErrorKind::QueryError("connection reset".into())).build());
        }

        Ok(self
            .records
            .iter()
            .copied()
            .filter(|record| values.contains(record))
            .collect())
    }
}

fn id_selector() -> DatabaseValue<'static> {
    Column::from("id").into()
}

fn integer_values(values: &[i64]) -> Vec<Value<'static>> {
    values.iter().copied().map(Value::from).collect()
}

#[tokio::test]
async fn merges_per_chunk_results_in_order() {
    let source = MemorySource::new(vec![1, 2, 3, 4, 5, 6, 7]);
    let values = integer_values(&[1, 3, 5, 7, 9]);

    let records = select_in_chunks(&source, id_selector(), &values, 2)
        .await
        .unwrap();

    assert_eq!(vec![1, 3, 5, 7], records);
    assert_eq!(vec![2, 2, 1], source.issued_queries());
}

#[tokio::test]
async fn keeps_the_order_the_source_returns_within_a_chunk() {
    let source = MemorySource::new(vec![5, 3, 1]);
    let values = integer_values(&[1, 3, 5]);

    let records = select_in_chunks(&source, id_selector(), &values, 10)
        .await
        .unwrap();

    assert_eq!(vec![5, 3, 1], records);
}

#[tokio::test]
async fn an_empty_filter_list_never_contacts_the_source() {
    let source = MemorySource::new(vec![1, 2, 3]);
    let values = Vec::new();

    let records = select_in_chunks(&source, id_selector(), &values, 2)
        .await
        .unwrap();

    assert!(records.is_empty());
    assert!(source.issued_queries().is_empty());
}

#[tokio::test]
async fn repeated_invocations_return_identical_results() {
    let source = MemorySource::new((1..=100).collect());
    let values = integer_values(&[4, 8, 15, 16, 23, 42]);

    let first = select_in_chunks(&source, id_selector(), &values, 4)
        .await
        .unwrap();
    let second = select_in_chunks(&source, id_selector(), &values, 4)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn duplicate_filter_values_are_not_deduplicated() {
    let source = MemorySource::new(vec![1, 2]);
    let values = integer_values(&[1, 1]);

    let records = select_in_chunks(&source, id_selector(), &values, 1)
        .await
        .unwrap();

    // One query per chunk, each matching the same record.
    assert_eq!(vec![1, 1], records);
    assert_eq!(vec![1, 1], source.issued_queries());
}

#[tokio::test]
async fn a_constant_selector_fails_before_any_query() {
    let source = MemorySource::new(vec![1, 2, 3]);
    let values = integer_values(&[1, 2]);

    let error = select_in_chunks(&source, Value::integer(1).into(), &values, 2)
        .await
        .unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::UnsupportedSelector(_)));
    assert!(source.issued_queries().is_empty());
}

#[tokio::test]
async fn a_zero_chunk_size_fails_before_any_query() {
    let source = MemorySource::new(vec![1, 2, 3]);
    let values = integer_values(&[1, 2]);

    let error = select_in_chunks(&source, id_selector(), &values, 0)
        .await
        .unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::InvalidChunkSize(0)));
    assert!(source.issued_queries().is_empty());
}

#[tokio::test]
async fn a_failing_chunk_aborts_without_partial_results() {
    let source = MemorySource::failing_on(vec![1, 2, 3, 4, 5, 6, 7], 1);
    let values = integer_values(&[1, 3, 5, 7, 9]);

    let error = select_in_chunks(&source, id_selector(), &values, 2)
        .await
        .unwrap_err();

    match error.kind() {
        ErrorKind::ChunkQueryError { chunk, source } => {
            assert_eq!(1, *chunk);
            assert!(matches!(source.kind(), ErrorKind::QueryError(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }

    // The first chunk succeeded, the second failed, the third was never issued.
    assert_eq!(vec![2, 2], source.issued_queries());
}

#[tokio::test]
async fn the_default_chunk_size_issues_thousand_value_queries() {
    let source = MemorySource::new(Vec::new());
    let values = integer_values(&(0..2500i64).collect::<Vec<_>>());

    let records = select_in_chunks(&source, id_selector(), &values, DEFAULT_CHUNK_SIZE)
        .await
        .unwrap();

    assert!(records.is_empty());
    assert_eq!(vec![1000, 1000, 500], source.issued_queries());
}
