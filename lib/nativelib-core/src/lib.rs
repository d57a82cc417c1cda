//! Native side of the nativelib bindings: version information of the
//! embedded engines and lifecycle management of handles passed to foreign
//! runtimes.

pub mod config;
pub mod handle;
pub mod proxy;
pub mod version;

pub use handle::{HandleError, HandleTable, NativeHandle, NativeRelease};
pub use proxy::{ProxyError, ProxyInstance};
pub use version::{BuildInfo, EmbeddedEngine, VersionEngine, VersionQuery};
