use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use unarc_archive::DEFAULT_UNRAR_PATH;

const ENV_PREFIX: &str = "UNARC_";

/// Settings merged from defaults, a TOML file, `UNARC_*` variables and flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub unrar: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unrar: PathBuf::from(DEFAULT_UNRAR_PATH),
            log_level: "warn".to_string(),
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrar: Option<PathBuf>,
}

impl Config {
    /// Load with `file` as the TOML layer, or the per-user file when `None`.
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, figment::Error> {
        Self::figment(file)
            .merge(Serialized::defaults(overrides))
            .extract()
    }

    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file.map(Path::to_path_buf).or_else(default_config_path) {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

/// `$HOME/.config/unarc/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".config").join("unarc").join("config.toml"))
}
