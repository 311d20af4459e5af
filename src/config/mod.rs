use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the attendance API, e.g. "https://hr.example.com/api".
    pub api_base_url: String,
    /// User selector for event fetches: an id, or "mine" for the
    /// authenticated user.
    pub user: String,
    /// Work mode code used when the CLI does not pass one (O/H/R).
    #[serde(default = "default_work_mode")]
    pub default_work_mode: String,
    /// Whether capture should request a location fix at all.
    #[serde(default = "default_use_location")]
    pub use_location: bool,
    /// Fixed coordinates reported by the CLI locator, if any.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Deflate level for the attendance photo (0-9).
    #[serde(default = "default_photo_quality")]
    pub photo_quality: u32,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_work_mode() -> String {
    "O".to_string()
}
fn default_use_location() -> bool {
    true
}
fn default_photo_quality() -> u32 {
    6
}
fn default_connect_timeout_ms() -> u64 {
    5_000
}
fn default_request_timeout_ms() -> u64 {
    15_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            user: "mine".to_string(),
            default_work_mode: default_work_mode(),
            use_location: default_use_location(),
            latitude: None,
            longitude: None,
            photo_quality: default_photo_quality(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("presenza")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".presenza")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("presenza.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file with defaults (or the given API
    /// base URL). `is_test` skips the write, as in CI runs.
    pub fn init_all(api_base_url: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(url) = api_base_url {
            config.api_base_url = url;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}
