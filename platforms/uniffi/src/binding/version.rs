use nativelib_core::version::{self, BuildInfo};
use one_dto_mapper::From;

/// Version of the native library
#[uniffi::export]
pub fn get_lib_version() -> String {
    version::get_lib_version()
}

/// Version of the embedded OpenPGP engine
#[uniffi::export]
pub fn get_pgp_version() -> String {
    version::get_pgp_version()
}

/// Version of the embedded vCard engine
#[uniffi::export]
pub fn get_vcard_version() -> String {
    version::get_vcard_version()
}

/// Build metadata of the native library
#[uniffi::export]
pub fn get_build_info() -> BuildInfoBindingDTO {
    version::build_info().into()
}

#[derive(Clone, Debug, From, uniffi::Record)]
#[from(BuildInfo)]
pub struct BuildInfoBindingDTO {
    pub target: String,
    pub build_time: String,
    pub branch: String,
    pub tag: String,
    pub commit: String,
    pub rust_version: String,
    pub pkg_version: String,
}
