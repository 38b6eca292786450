use crate::error::ConfigError;
use crate::threshold::ThresholdMethod;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON run configuration. Every field is optional; command-line flags take
/// precedence over whatever is set here.
///
/// ```json
/// {
///   "input": "scans/page.png",
///   "output": "out/page.png",
///   "threshold": { "method": "adaptive", "blockSize": 15, "constant": 4.0 },
///   "statsJson": "out/page_stats.json"
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RunConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub batch: bool,
    pub display: bool,
    pub threshold: Option<ThresholdMethod>,
    pub stats_json: Option<PathBuf>,
    pub preview_path: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
