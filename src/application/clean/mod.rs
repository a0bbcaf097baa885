//! Clean Use Case
//!
//! Orchestrates the cleaning of a vendor tree.
//!
//! This module handles:
//! - Checking that the vendor directory and lock manifest are in place
//! - Building the classifier from the options
//! - Walking the tree into a removal plan
//! - Executing the plan best-effort and reporting what happened

mod executor;
mod options;
mod result;
mod use_case;

pub use executor::Executor;
pub use options::CleanOptions;
pub use result::{CleanReport, ExecutionOutcome, PlannedCleanup};
pub use use_case::CleanUseCase;
