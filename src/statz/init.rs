use crate::api::StatzApi;
use crate::config::StatzConfig;
use crate::error::{Result, StatzError};
use crate::reducers::ReducerRegistry;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "STATZ_HOME";

pub struct StatzContext {
    pub api: StatzApi<FileStore>,
}

/// Where the ledger lives, in order of precedence: an explicit directory,
/// the per-user data dir when `use_global` is set, `$STATZ_HOME`, and
/// finally the working directory.
pub fn resolve_data_dir(
    cwd: &Path,
    explicit: Option<&Path>,
    use_global: bool,
    home_env: Option<&str>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(cwd.join(dir));
    }
    if use_global {
        return global_data_dir();
    }
    match home_env {
        Some(home) if !home.trim().is_empty() => Ok(cwd.join(home)),
        _ => Ok(cwd.to_path_buf()),
    }
}

fn global_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "statz", "statz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StatzError::Store("Could not determine the user data directory".into()))
}

/// Loads config and the ledger snapshot from `data_dir` and wires the API.
pub fn initialize(data_dir: PathBuf) -> Result<StatzContext> {
    let config = StatzConfig::load(&data_dir)?;
    debug!(
        data_dir = %data_dir.display(),
        bar_width = config.bar_width,
        "configuration loaded"
    );

    let store = FileStore::new(data_dir);
    let api = StatzApi::new(store, ReducerRegistry::default(), config.formatters())?;

    Ok(StatzContext { api })
}
