use crate::ast::{Column, Compare, ConditionTree, Row, Value};

/// A database expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
    /// A tree of expressions to evaluate from the deepest value to up
    ConditionTree(ConditionTree<'a>),
    /// A comparison expression
    Compare(Compare<'a>),
    /// A single value, column or row
    Value(Box<DatabaseValue<'a>>),
}

/// A value the expression tree can embed: a parameterized constant, a column
/// reference or a parenthesized row of values.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue<'a> {
    /// A parameterized value written into the query
    Parameterized(Value<'a>),
    /// A database column
    Column(Box<Column<'a>>),
    /// A collection of values surrounded by parentheses
    Row(Row<'a>),
}

impl<'a> From<Value<'a>> for DatabaseValue<'a> {
    fn from(value: Value<'a>) -> Self {
        DatabaseValue::Parameterized(value)
    }
}

impl<'a> From<Row<'a>> for DatabaseValue<'a> {
    fn from(row: Row<'a>) -> Self {
        DatabaseValue::Row(row)
    }
}

impl<'a> From<DatabaseValue<'a>> for Expression<'a> {
    fn from(value: DatabaseValue<'a>) -> Self {
        Expression::Value(Box::new(value))
    }
}
