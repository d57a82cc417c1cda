fn main() -> shadow_rs::SdResult<()> {
    println!("cargo:rerun-if-env-changed=NATIVELIB_PGP_VERSION");
    println!("cargo:rerun-if-env-changed=NATIVELIB_VCARD_VERSION");

    shadow_rs::ShadowBuilder::builder().build()?;
    Ok(())
}
