//! Filter evaluation, history queries and candidate generation.
//!
//! Everything in this module is a pure function of its inputs: the caller
//! owns the rows, the candidate sets and the [`FilterState`](crate::FilterState)
//! and passes them in by reference.
//!
//! ## How the parts work together
//!
//! ```text
//!                 FilterState + per-position DigitSets
//!                                 │
//!                                 v
//!                   matches (predicate.rs)
//!                     1. position membership
//!                     2. dragon / tiger / tie
//!                     3. all-big / all-small / all-odd / all-even
//!                     4. sum big / small / odd / even
//!                     5. repetition  (repeat-mode)
//!                     6. adjacency   (adjacency-mode, adjacency.rs)
//!                        ▲                         ▲
//!                        │                         │
//!   rows ── query (query.rs)          generate (generator.rs) ── CandidateSpec
//!            - split row                - cartesian product, rightmost fastest
//!            - date/period bounds       - sum-target pruning
//!            - storage order kept       - full count, display cap separate
//!                        │                         │
//!                        v                         v
//!                   QueryResult             GenerationResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `predicate.rs`: the six-step match over one 4-digit sequence.
//! - `adjacency.rs`: consecutive-run detection including the fixed 9→0
//!   wraparound tables.
//! - `query.rs`: scans archive rows with lexicographic date/period bounds.
//! - `generator.rs`: enumerates candidate combinations.

#[path = "engine/adjacency.rs"]
mod adjacency;
#[path = "engine/generator.rs"]
mod generator;
#[path = "engine/predicate.rs"]
mod predicate;
#[path = "engine/query.rs"]
mod query;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use adjacency::has_consecutive;
pub use generator::{CandidateSpec, GenerationResult, SumTarget, generate};
pub use predicate::{is_pair_repeat, is_quad_repeat, is_triple_repeat, matches};
pub use query::{Bounds, QueryResult, query, query_records};
