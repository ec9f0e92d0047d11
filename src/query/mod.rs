//! In-memory query operators: type-parametric sequence combinators covering
//! filtering, projection, ordering, joins, grouping, and aggregation.

pub mod aggregate;
pub mod join;
pub mod transform;

pub use transform::Direction;
