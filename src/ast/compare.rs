use crate::ast::{ConditionTree, DatabaseValue, Expression, Row};

/// A comparison between two database values, described declaratively so the
/// data source can compile it instead of calling it.
#[derive(Debug, Clone, PartialEq)]
pub enum Compare<'a> {
    /// `left = right`
    Equals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left <> right`
    NotEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left < right`
    LessThan(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left <= right`
    LessThanOrEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left > right`
    GreaterThan(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left >= right`
    GreaterThanOrEquals(Box<DatabaseValue<'a>>, Box<DatabaseValue<'a>>),
    /// `left IN (..)`
    In(Box<DatabaseValue<'a>>, Box<Row<'a>>),
    /// `left NOT IN (..)`
    NotIn(Box<DatabaseValue<'a>>, Box<Row<'a>>),
    /// `value IS NULL`
    Null(Box<DatabaseValue<'a>>),
    /// `value IS NOT NULL`
    NotNull(Box<DatabaseValue<'a>>),
}

impl<'a> From<Compare<'a>> for ConditionTree<'a> {
    fn from(cmp: Compare<'a>) -> Self {
        ConditionTree::single(Expression::Compare(cmp))
    }
}

impl<'a> From<Compare<'a>> for Expression<'a> {
    fn from(cmp: Compare<'a>) -> Self {
        Expression::Compare(cmp)
    }
}

/// An item that can be the left side of a comparison.
pub trait Comparable<'a> {
    /// Tests if both sides are the same value.
    ///
    /// ```rust
    /// # use inlist::ast::*;
    /// let cmp = "name".equals("Musti");
    ///
    /// assert_eq!(
    ///     Compare::Equals(
    ///         Box::new(Column::from("name").into()),
    ///         Box::new("Musti".into()),
    ///     ),
    ///     cmp
    /// );
    /// ```
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if both sides are not the same value.
    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is smaller than the right side.
    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is smaller than the right side or the same.
    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is bigger than the right side.
    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is bigger than the right side or the same.
    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is included in the right side collection.
    ///
    /// ```rust
    /// # use inlist::ast::*;
    /// let cmp = "id".in_selection(vec![1, 2]);
    ///
    /// assert_eq!(
    ///     Compare::In(
    ///         Box::new(Column::from("id").into()),
    ///         Box::new(Row::from(vec![1, 2])),
    ///     ),
    ///     cmp
    /// );
    /// ```
    fn in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is not included in the right side collection.
    fn not_in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>;

    /// Tests if the left side is `NULL`.
    fn is_null(self) -> Compare<'a>;

    /// Tests if the left side is not `NULL`.
    fn is_not_null(self) -> Compare<'a>;
}

impl<'a> Comparable<'a> for DatabaseValue<'a> {
    fn equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::Equals(Box::new(self), Box::new(comparison.into()))
    }

    fn not_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::NotEquals(Box::new(self), Box::new(comparison.into()))
    }

    fn less_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::LessThan(Box::new(self), Box::new(comparison.into()))
    }

    fn less_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::LessThanOrEquals(Box::new(self), Box::new(comparison.into()))
    }

    fn greater_than<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::GreaterThan(Box::new(self), Box::new(comparison.into()))
    }

    fn greater_than_or_equals<T>(self, comparison: T) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::GreaterThanOrEquals(Box::new(self), Box::new(comparison.into()))
    }

    fn in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::In(Box::new(self), Box::new(Row::from(selection)))
    }

    fn not_in_selection<T>(self, selection: Vec<T>) -> Compare<'a>
    where
        T: Into<DatabaseValue<'a>>,
    {
        Compare::NotIn(Box::new(self), Box::new(Row::from(selection)))
    }

    fn is_null(self) -> Compare<'a> {
        Compare::Null(Box::new(self))
    }

    fn is_not_null(self) -> Compare<'a> {
        Compare::NotNull(Box::new(self))
    }
}
