use crate::ast::{ConditionTree, Expression};

/// `AND`, `OR` and `NOT` conjunctive implementations.
pub trait Conjunctive<'a> {
    /// Builds an `AND` condition having `self` as the left leaf and `other` as the right.
    ///
    /// ```rust
    /// # use inlist::ast::*;
    /// assert_eq!(
    ///     "name".equals("Musti").and("age".less_than(10)),
    ///     ConditionTree::and("name".equals("Musti"), "age".less_than(10))
    /// )
    /// ```
    fn and<E>(self, other: E) -> ConditionTree<'a>
    where
        E: Into<Expression<'a>>;

    /// Builds an `OR` condition having `self` as the left leaf and `other` as the right.
    fn or<E>(self, other: E) -> ConditionTree<'a>
    where
        E: Into<Expression<'a>>;

    /// Builds a `NOT` condition having `self` as the condition.
    fn not(self) -> ConditionTree<'a>;
}

impl<'a, T> Conjunctive<'a> for T
where
    T: Into<Expression<'a>>,
{
    fn and<E>(self, other: E) -> ConditionTree<'a>
    where
        E: Into<Expression<'a>>,
    {
        ConditionTree::and(self.into(), other.into())
    }

    fn or<E>(self, other: E) -> ConditionTree<'a>
    where
        E: Into<Expression<'a>>,
    {
        ConditionTree::or(self.into(), other.into())
    }

    fn not(self) -> ConditionTree<'a> {
        ConditionTree::not(self.into())
    }
}
