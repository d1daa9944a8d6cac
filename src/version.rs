use std::sync::LazyLock;

/// Version of the software: the Cargo package version, plus the git commit when the build
/// environment provides one in `FGBARCODES_GIT_HASH`.
pub static VERSION: LazyLock<String> = LazyLock::new(|| match option_env!("FGBARCODES_GIT_HASH") {
    Some(hash) if !hash.is_empty() => format!("{}-{hash}", env!("CARGO_PKG_VERSION")),
    _ => env!("CARGO_PKG_VERSION").to_string(),
});
