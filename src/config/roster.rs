use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::DEFAULT_PLAYERS_PER_COURT;

/// Name of the optional settings file inside the data directory.
pub const CONFIG_FILE: &str = "courtside.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Capacity given to the counter when it is first created.
    pub players_per_court: usize,
}

impl RosterConfig {
    #[must_use]
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads `<data_dir>/courtside.toml`, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: Into<PathBuf>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.into();
        let path = data_dir.join(CONFIG_FILE);

        let mut config = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str::<Self>(&content)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.data_dir = data_dir;
        config.validate()?;
        Ok(config)
    }

    /// Writes the settings file, creating the data directory if needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;
        fs::create_dir_all(&self.data_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to encode settings: {e}")))?;
        fs::write(self.config_path(), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.players_per_court == 0 {
            return Err(Error::Config(
                "players_per_court must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            players_per_court: DEFAULT_PLAYERS_PER_COURT,
        }
    }
}
