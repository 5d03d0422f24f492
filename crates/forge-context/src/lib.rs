//! Build-context derivation for cross-compiled firmware projects.
//!
//! Assembles the full per-process build configuration: catalog-backed
//! target resolution, conditional-compilation flags, the cross-toolchain
//! environment, project paths, application discovery, and the sentinel
//! files that detect target drift between build invocations.

pub mod apps;
pub mod context;
pub mod environment;
pub mod error;
pub mod flags;
pub mod layout;
pub mod toolchain;
pub mod tracking;

pub use context::BuildContext;
pub use environment::BuildEnv;
pub use error::{ContextError, Result};
pub use layout::Layout;
pub use toolchain::{GccLocator, LibgccLocator, ToolchainSettings};
pub use tracking::{TrackedValue, TrackingState, TrackingTargets};
