use crate::error::{OggError, Result};
use lazy_static::lazy_static;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::RwLock;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::load().unwrap_or_default());
}

const CONFIG_PATHS: [&str; 2] = ["./ogginfo.toml", "./ogginfo_config.toml"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Drop pages whose CRC does not match their contents
    pub verify_crc: bool,
    /// Default log filter when `OGGINFO_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verify_crc: true,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Builds a configuration from defaults, the environment and the first
    /// readable config file, in that order.
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(value) = env::var("OGGINFO_VERIFY_CRC") {
            config.set("verify_crc", &value)?;
        }
        if let Ok(value) = env::var("OGGINFO_LOG_LEVEL") {
            config.set("log_level", &value)?;
        }

        for path in &CONFIG_PATHS {
            if let Ok(mut file) = File::open(path) {
                let mut content = String::new();
                if file.read_to_string(&mut content).is_ok() {
                    config.apply_file(&content)?;
                    break;
                }
            }
        }

        Ok(config)
    }

    /// Applies `key = value` lines on top of the current values.
    pub fn apply_file(&mut self, content: &str) -> Result<()> {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                self.set(key.trim(), value)?;
            }
        }
        Ok(())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "verify_crc" => self.verify_crc = parse_bool(key, value)?,
            "log_level" => {
                if !value.is_empty() {
                    self.log_level = value.to_string();
                }
            }
            other => log::debug!("ignoring unknown config key {}", other),
        }
        Ok(())
    }

    pub fn reload() -> Result<()> {
        let new_config = Config::load()?;
        if let Ok(mut config) = CONFIG.write() {
            *config = new_config;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OggError::Config(format!(
            "{} expects a boolean, got {:?}",
            key, value
        ))),
    }
}

/// Returns a snapshot of the process-wide configuration
pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}

/// Creates a default config template file if it doesn't exist
pub fn create_default_config_template<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    if !path.as_ref().exists() {
        std::fs::write(path, TEMPLATE)?;
    }
    Ok(())
}

const TEMPLATE: &str = r#"# ogginfo configuration
# Environment variables OGGINFO_VERIFY_CRC and OGGINFO_LOG_LEVEL are read first,
# values in this file override them.

# Drop pages with a bad checksum
verify_crc = true

# Log filter used when OGGINFO_LOG is unset
log_level = "warn"
"#;
