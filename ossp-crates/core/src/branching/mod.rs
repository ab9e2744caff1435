//! Contains the branching strategy which drives the search.
//!
//! A [`Brancher`] proposes the alternatives of the next choice point. The default strategy first
//! assigns every job to a machine, in order of job id, and then builds the sequence of every
//! machine from left to right (see [`AssignThenRankBrancher`]).
mod assign_then_rank;
mod brancher;
mod decision;

pub(crate) use assign_then_rank::AssignThenRankBrancher;
pub(crate) use brancher::Brancher;
pub(crate) use decision::Decision;
