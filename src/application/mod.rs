//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CleanUseCase` - Orchestrates the cleanup flow (check, load manifest, plan, execute)

pub mod clean;

pub use clean::{CleanOptions, CleanReport, CleanUseCase, Executor, PlannedCleanup};
