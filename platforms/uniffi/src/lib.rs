#![cfg_attr(feature = "strict", deny(warnings))]

mod binding;
mod error;
mod logging;

#[cfg(test)]
mod test;

uniffi::setup_scaffolding!("nativelib");
