use crate::ast::{Comparable, Compare, DatabaseValue};
use std::borrow::Cow;

/// A direct reference to a single field of the queried records, optionally
/// qualified with the table holding it.
///
/// This is the only selector shape a
/// [`Filterable`](crate::connector::Filterable) implementation is required
/// to understand: it names the field, nothing is computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column<'a> {
    pub name: Cow<'a, str>,
    pub table: Option<Cow<'a, str>>,
}

impl<'a> Column<'a> {
    /// Creates a column with the given name.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<Cow<'a, str>>,
    {
        Column {
            name: name.into(),
            table: None,
        }
    }

    /// Includes the table name in the column reference.
    pub fn table<T>(mut self, table: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.table = Some(table.into());
        self
    }
}

impl<'a> From<Column<'a>> for DatabaseValue<'a> {
    fn from(column: Column<'a>) -> Self {
        DatabaseValue::Column(Box::new(column))
    }
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(name: &'a str) -> Self {
        Column::new(name)
    }
}

impl<'a> From<String> for Column<'a> {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

impl<'a, T, C> From<(T, C)> for Column<'a>
where
    T: Into<Cow<'a, str>>,
    C: Into<Cow<'a, str>>,
{
    fn from((table, name): (T, C)) -> Self {
        Column::new(name).table(table)
    }
}

impl<'a> Comparable<'a> for Column<'a> {
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.equals(comparison)
    }

    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.not_equals(comparison)
    }

    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.less_than(comparison)
    }

    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.less_than_or_equals(comparison)
    }

    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.greater_than(comparison)
    }

    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.greater_than_or_equals(comparison)
    }

    fn in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.in_selection(selection)
    }

    fn not_in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        let value: DatabaseValue<'a> = self.into();
        value.not_in_selection(selection)
    }

    fn is_null(self) -> Compare<'a> {
        let value: DatabaseValue<'a> = self.into();
        value.is_null()
    }

    fn is_not_null(self) -> Compare<'a> {
        let value: DatabaseValue<'a> = self.into();
        value.is_not_null()
    }
}

// Quality of life, treating a bare string as a column name.
impl<'a> Comparable<'a> for &'a str {
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).equals(comparison)
    }

    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).not_equals(comparison)
    }

    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).less_than(comparison)
    }

    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).less_than_or_equals(comparison)
    }

    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).greater_than(comparison)
    }

    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).greater_than_or_equals(comparison)
    }

    fn in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).in_selection(selection)
    }

    fn not_in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Column::from(self).not_in_selection(selection)
    }

    fn is_null(self) -> Compare<'a> {
        Column::from(self).is_null()
    }

    fn is_not_null(self) -> Compare<'a> {
        Column::from(self).is_not_null()
    }
}
