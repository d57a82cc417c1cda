use std::sync::{Arc, LazyLock, OnceLock};

use shadow_rs::shadow;

shadow!(build);


/// Version of the bundled OpenPGP engine, overridable at build time
pub const PGP_ENGINE_VERSION: &str = match option_env!("NATIVELIB_PGP_VERSION") {
    Some(version) => version,
    None => "2.7.4",
};

/// Version of the bundled vCard engine, overridable at build time
pub const VCARD_ENGINE_VERSION: &str = match option_env!("NATIVELIB_VCARD_VERSION") {
    Some(version) => version,
    None => "0.5.0",
};

/// Query entry points of the native engine
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait VersionEngine: Send + Sync {
    fn lib_version(&self) -> String;
    fn pgp_version(&self) -> String;
    fn vcard_version(&self) -> String;
}

/// Engine compiled into this library
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedEngine;

impl VersionEngine for EmbeddedEngine {
    fn lib_version(&self) -> String {
        build::PKG_VERSION.to_owned()
    }

    fn pgp_version(&self) -> String {
        PGP_ENGINE_VERSION.to_owned()
    }

    fn vcard_version(&self) -> String {
        VCARD_ENGINE_VERSION.to_owned()
    }
}

/// Read-only version queries over an engine.
///
/// Every query reaches the engine at most once, later calls are served from
/// the stored value. This keeps the answers stable for the lifetime of the
/// process regardless of the engine behind it.
pub struct VersionQuery {
    engine: Arc<dyn VersionEngine>,
    lib_version: OnceLock<String>,
    pgp_version: OnceLock<String>,
    vcard_version: OnceLock<String>,
}

impl VersionQuery {
    pub fn new(engine: Arc<dyn VersionEngine>) -> Self {
        Self {
            engine,
            lib_version: OnceLock::new(),
            pgp_version: OnceLock::new(),
            vcard_version: OnceLock::new(),
        }
    }

    pub fn lib_version(&self) -> String {
        self.lib_version
            .get_or_init(|| self.engine.lib_version())
            .to_owned()
    }

    pub fn pgp_version(&self) -> String {
        self.pgp_version
            .get_or_init(|| self.engine.pgp_version())
            .to_owned()
    }

    pub fn vcard_version(&self) -> String {
        self.vcard_version
            .get_or_init(|| self.engine.vcard_version())
            .to_owned()
    }
}

static EMBEDDED: LazyLock<VersionQuery> =
    LazyLock::new(|| VersionQuery::new(Arc::new(EmbeddedEngine)));

/// Version of this library
pub fn get_lib_version() -> String {
    EMBEDDED.lib_version()
}

/// Version of the embedded OpenPGP engine
pub fn get_pgp_version() -> String {
    EMBEDDED.pgp_version()
}

/// Version of the embedded vCard engine
pub fn get_vcard_version() -> String {
    EMBEDDED.vcard_version()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub target: String,
    pub build_time: String,
    pub branch: String,
    pub tag: String,
    pub commit: String,
    pub rust_version: String,
    pub pkg_version: String,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        target: build::BUILD_RUST_CHANNEL.to_owned(),
        build_time: build::BUILD_TIME_3339.to_owned(),
        branch: build::BRANCH.to_owned(),
        tag: build::TAG.to_owned(),
        commit: build::COMMIT_HASH.to_owned(),
        rust_version: build::RUST_VERSION.to_owned(),
        pkg_version: build::PKG_VERSION.to_owned(),
    }
}
