//! An abstract syntax tree for membership predicates.
//!
//! The ast module handles everything related to building declarative filter
//! conditions without going into database-level specifics. The tree is only
//! assembled here; compiling it into an actual query language is the job of
//! the data source behind [`Filterable`](crate::connector::Filterable).
mod column;
mod compare;
mod conditions;
mod conjunctive;
mod expression;
mod row;
mod values;

pub use column::Column;
pub use compare::{Comparable, Compare};
pub use conditions::ConditionTree;
pub use conjunctive::Conjunctive;
pub use expression::{DatabaseValue, Expression};
pub use row::Row;
pub use values::Value;
