//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod glide_lock;

pub use glide_lock::{GlideLockRepository, GLIDE_LOCK_FILE};
