use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_notifications_allowed")]
    pub notifications_allowed: bool,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_notifications_allowed() -> bool {
    true
}
fn default_show_weekday() -> bool {
    true
}
fn default_preview_width() -> usize {
    48
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            notifications_allowed: default_notifications_allowed(),
            show_weekday: default_show_weekday(),
            preview_width: default_preview_width(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.gratitude`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gratitude")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gratitude.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gratitude.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration directory and file.
    ///
    /// Returns the database path the new configuration points to.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config
                .save_to(&Self::config_file())
                .map_err(|e| AppError::Config(format!("cannot write config file: {e}")))?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("{name}_gratitude.conf"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = temp_conf("cfg_missing");
        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.notifications_allowed);
        assert!(cfg.show_weekday);
        assert_eq!(cfg.preview_width, 48);
        assert!(cfg.database.ends_with("gratitude.sqlite"));
    }

    #[test]
    fn partial_file_fills_serde_defaults() {
        let path = temp_conf("cfg_partial");
        fs::write(&path, "database: /tmp/journal.sqlite\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/journal.sqlite");
        assert!(cfg.notifications_allowed);
        assert_eq!(cfg.preview_width, 48);
    }

    #[test]
    fn save_and_reload() {
        let path = temp_conf("cfg_roundtrip");
        let cfg = Config {
            database: "/tmp/other.sqlite".into(),
            notifications_allowed: false,
            show_weekday: false,
            preview_width: 20,
        };
        cfg.save_to(&path).unwrap();

        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.database, "/tmp/other.sqlite");
        assert!(!back.notifications_allowed);
        assert!(!back.show_weekday);
        assert_eq!(back.preview_width, 20);
    }

    #[test]
    fn garbage_file_is_an_error() {
        let path = temp_conf("cfg_garbage");
        fs::write(&path, "database: [unterminated").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::ConfigParse(_))
        ));
    }
}
