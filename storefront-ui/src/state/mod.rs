//! State Management
//!
//! Per-view request lifecycle.

pub mod loader;

pub use loader::{use_loader, use_mount_guard, MountGuard, Resource, Unwrap, ViewState};
