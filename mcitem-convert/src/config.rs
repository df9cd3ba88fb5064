//! The configuration for the converter, given from environment variables and lazy
//! initialized when needed.

use once_cell::race::{OnceBool, OnceBox};
use std::env;


/// Return true if converted documents should be pretty printed.
///
/// To enable this feature, set `MCITEM_PRETTY=1`.
pub fn pretty() -> bool {
    static ENV: OnceBool = OnceBool::new();
    ENV.get_or_init(|| env_flag("MCITEM_PRETTY"))
}

/// Return true if files should only be validated and never written.
///
/// To enable this feature, set `MCITEM_DRY_RUN=1`.
pub fn dry_run() -> bool {
    static ENV: OnceBool = OnceBool::new();
    ENV.get_or_init(|| env_flag("MCITEM_DRY_RUN"))
}

/// Return the extension converted documents are written with, next to the original
/// file, instead of overwriting it.
///
/// To enable this feature, set `MCITEM_SUFFIX=<ext>`, for example `MCITEM_SUFFIX=new`.
pub fn suffix() -> Option<&'static str> {
    static ENV: OnceBox<Option<String>> = OnceBox::new();
    ENV.get_or_init(|| {
        Box::new(env::var("MCITEM_SUFFIX").ok().filter(|s| !s.is_empty()))
    }).as_deref()
}

fn env_flag(name: &str) -> bool {
    env::var_os(name)
        .map(|s| s.as_encoded_bytes() == b"1")
        .unwrap_or(false)
}
