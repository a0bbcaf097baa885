//! Domain Layer
//!
//! The core of vendorclean: deciding what survives in a vendor tree.
//!
//! ## Structure
//!
//! - `entities/` - Lock manifest and removal plan
//! - `value_objects/` - Immutable value types (SafePath, KeepPatterns)
//! - `policies/` - The path classifier and its rules
//! - `services/` - Tree walker and nested vendor detection
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - The tree is read through the `FileSystem` port
//! 2. **Plan, then mutate** - Services only build plans; execution happens
//!    in the application layer
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
