//! The module catalog as selected by the user.
//!
//! - [`key`] - Module identity (`:category name`)
//! - [`registry`] - Registry loading from the selection file

pub mod key;
pub mod registry;

pub use key::ModuleKey;
pub use registry::{ModuleDescriptor, ModuleMeta, ModuleRegistry, MODULE_META_FILE};
