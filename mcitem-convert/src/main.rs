//! Upgrade item JSON files written with legacy numeric item ids.
//!
//! Usage: `mcitem-convert <FILE>...`, each file holding an item object or an array of
//! item objects. See the `config` module for the environment variables.

pub mod config;
pub mod convert;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mcitem::ItemCodec;

use convert::Options;


pub fn main() -> ExitCode {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let paths = env::args_os().skip(1).map(PathBuf::from).collect::<Vec<_>>();
    if paths.is_empty() {
        eprintln!("usage: mcitem-convert <FILE>...");
        return ExitCode::from(2);
    }

    let codec = ItemCodec::default();
    let options = Options::from_env();
    let mut failed = 0usize;

    for path in &paths {
        match convert::convert_file(&codec, path, &options) {
            Ok(outcome) => {
                match outcome.output {
                    Some(output) => info!("{}: {} items, {} upgraded, written to {}", path.display(), outcome.items, outcome.upgraded, output.display()),
                    None => info!("{}: {} items, {} to upgrade", path.display(), outcome.items, outcome.upgraded),
                }
            }
            Err(err) => {
                warn!("{}: {err}", path.display());
                failed += 1;
            }
        }
    }

    if failed != 0 {
        warn!("{failed} of {} files failed", paths.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }

}
