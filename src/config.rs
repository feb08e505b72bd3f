//! Optional `petviz.yaml` in the working directory. Every field has a default,
//! so an absent file (or an empty one) means "use the stock dataset layout".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};

pub const DEFAULT_CONFIG_PATH: &str = "petviz.yaml";

pub const OWNERSHIP_OUTPUT: &str = "viz1_pet_ownership.html";
pub const MAP_OUTPUT: &str = "viz2_regional_map.html";
pub const BUMP_OUTPUT: &str = "viz3_bump_chart.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub datasets_dir: PathBuf,
    pub output_dir: PathBuf,
    pub ownership_csv: String,
    pub regions_csv: String,
    pub breeds_csv: String,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            datasets_dir: PathBuf::from("datasets"),
            output_dir: PathBuf::from("."),
            ownership_csv: "2024_pet_ownership_full.csv".to_string(),
            regions_csv: "data-VJH4o.csv".to_string(),
            breeds_csv: "dog_breeds_2015_2024.csv".to_string(),
        }
    }
}

impl VizConfig {
    pub fn ownership_input(&self) -> PathBuf {
        self.datasets_dir.join(&self.ownership_csv)
    }

    pub fn regions_input(&self) -> PathBuf {
        self.datasets_dir.join(&self.regions_csv)
    }

    pub fn breeds_input(&self) -> PathBuf {
        self.datasets_dir.join(&self.breeds_csv)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Load `petviz.yaml` from the working directory, falling back to defaults.
pub fn load_config() -> Result<VizConfig> {
    load_config_from(Path::new(DEFAULT_CONFIG_PATH))
}

pub fn load_config_from(path: &Path) -> Result<VizConfig> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(VizConfig::default());
        }
        Err(err) => return Err(VizError::io(path, err)),
    };
    if raw.trim().is_empty() {
        return Ok(VizConfig::default());
    }
    serde_yaml::from_str(&raw).map_err(|source| VizError::Config {
        path: path.to_path_buf(),
        source,
    })
}
