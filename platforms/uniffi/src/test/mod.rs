use std::sync::Arc;

use nativelib_core::NativeHandle;
use nativelib_core::handle::MockNativeRelease;
use similar_asserts::assert_eq;

use crate::binding::engine::{ENGINES, LibVersionProxy, live_engine_count, open_engine};
use crate::binding::version::{
    get_build_info, get_lib_version, get_pgp_version, get_vcard_version,
};
use crate::error::BindingError;
use crate::logging::{env_filter, initialize_logging};

fn registered(native_ref: u64) -> bool {
    ENGINES.contains(NativeHandle::try_from(native_ref).unwrap())
}

#[test]
fn test_versions_match_native_library() {
    assert_eq!(get_lib_version(), nativelib_core::version::get_lib_version());
    assert_eq!(get_pgp_version(), nativelib_core::version::PGP_ENGINE_VERSION);
    assert_eq!(
        get_vcard_version(),
        nativelib_core::version::VCARD_ENGINE_VERSION
    );

    let lib_version = get_lib_version();
    for _ in 0..10 {
        assert_eq!(get_lib_version(), lib_version);
    }
}

#[test]
fn test_build_info_is_mapped() {
    let native = nativelib_core::version::build_info();
    let info = get_build_info();

    assert_eq!(info.pkg_version, native.pkg_version);
    assert_eq!(info.commit, native.commit);
    assert_eq!(info.build_time, native.build_time);
}

#[test]
fn test_zero_native_ref_fails_construction() {
    let mut releaser = MockNativeRelease::new();
    releaser.expect_release().never();

    let result = LibVersionProxy::with_releaser(0, Arc::new(releaser));
    assert!(matches!(result, Err(BindingError::InvalidHandle(_))));
}

#[test]
fn test_open_engine_and_release() {
    let proxy = open_engine().unwrap();
    let native_ref = proxy.native_ref();
    assert_ne!(native_ref, 0);
    assert!(registered(native_ref));
    assert!(live_engine_count() >= 1);
    assert!(!proxy.is_released());

    proxy.release_engine();
    assert!(proxy.is_released());
    assert!(!registered(native_ref));

    proxy.release_engine();
    assert!(proxy.is_released());
}

#[test]
fn test_dropping_last_reference_releases_engine() {
    let proxy = open_engine().unwrap();
    let native_ref = proxy.native_ref();
    let foreign_copy = proxy.clone();

    drop(proxy);
    assert!(registered(native_ref));

    drop(foreign_copy);
    assert!(!registered(native_ref));
}

#[test]
fn test_each_opened_engine_has_a_single_owner() {
    let first = open_engine().unwrap();
    let second = open_engine().unwrap();

    assert_eq!(Arc::strong_count(&first), 1);
    assert_eq!(Arc::strong_count(&second), 1);
    assert_ne!(first.native_ref(), second.native_ref());

    let second_ref = second.native_ref();
    first.release_engine();
    assert!(registered(second_ref));
    assert!(!second.is_released());

    drop(second);
    assert!(!registered(second_ref));
}

#[test]
fn test_release_engine_twice_releases_once() {
    let mut releaser = MockNativeRelease::new();
    releaser
        .expect_release()
        .withf(|handle| handle.into_raw() == 12345)
        .once()
        .return_const(());

    let proxy = LibVersionProxy::with_releaser(12345, Arc::new(releaser)).unwrap();
    proxy.release_engine();
    proxy.release_engine();
    drop(proxy);
}

#[test]
fn test_drop_without_release_engine_releases_once() {
    let mut releaser = MockNativeRelease::new();
    releaser.expect_release().once().return_const(());

    let proxy = Arc::new(LibVersionProxy::with_releaser(99, Arc::new(releaser)).unwrap());
    drop(proxy);
}

#[test]
fn test_initialize_logging_with_defaults_is_repeatable() {
    initialize_logging(None).unwrap();
    initialize_logging(Some(r#"{"logging": {"filter": "debug"}}"#.to_owned())).unwrap();
}

#[test]
fn test_initialize_logging_rejects_malformed_config() {
    let result = initialize_logging(Some("{ logging".to_owned()));
    assert!(matches!(result, Err(BindingError::ConfigValidationError(_))));
}

#[test]
fn test_invalid_filter_directive_is_rejected() {
    let config = nativelib_core::config::LoggingConfig {
        filter: "nativelib=verbose".to_owned(),
        json: false,
    };

    let result = env_filter(&config);
    assert!(matches!(result, Err(BindingError::ConfigValidationError(_))));
}

#[test]
fn test_json_config_is_accepted() {
    let json = serde_json::json!({ "logging": { "json": true, "filter": "warn" } }).to_string();
    initialize_logging(Some(json)).unwrap();
}
