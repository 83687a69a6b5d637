//! Base-path handling for static asset URLs.
//!
//! The deploy base is fixed at build time through `SKILLHUNTER_BASE_PATH`
//! and defaults to a relative `./` so the bundle can be served from any
//! directory.

#[cfg(test)]
#[path = "asset_path_test.rs"]
mod asset_path_test;

pub const DEFAULT_BASE_PATH: &str = "./";

/// Build-time base path for static assets.
pub const BASE_PATH: &str = match option_env!("SKILLHUNTER_BASE_PATH") {
    Some(path) => path,
    None => DEFAULT_BASE_PATH,
};

/// Join `path` onto the configured [`BASE_PATH`].
#[must_use]
pub fn asset_url(path: &str) -> String {
    join(BASE_PATH, path)
}

/// Join `base` and `path` with exactly one `/` between them.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        return path.to_owned();
    }
    let base = base.trim_end_matches('/');
    format!("{base}/{path}")
}
