use crate::ast::DatabaseValue;

/// A collection of values surrounded by parentheses, e.g. the right side of
/// an `IN` comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row<'a> {
    pub values: Vec<DatabaseValue<'a>>,
}

impl<'a> Row<'a> {
    pub fn new() -> Self {
        Row { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Row {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Adds a value to the row.
    pub fn push<T>(mut self, value: T) -> Self
    where
        T: Into<DatabaseValue<'a>>,
    {
        self.values.push(value.into());
        self
    }

    /// The number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the row holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, T> From<Vec<T>> for Row<'a>
where
    T: Into<DatabaseValue<'a>>,
{
    fn from(vector: Vec<T>) -> Row<'a> {
        let row = Row::with_capacity(vector.len());
        vector.into_iter().fold(row, |row, v| row.push(v))
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = DatabaseValue<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
