use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.logging)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let templates_root = expand_path(&prof.templates_root)?;

        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&file.to_string_lossy())?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            templates_root,
            project_name: prof.project_name.clone(),
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("stencil").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("stencil").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn loads_profile_and_logging() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
version = 1
profile = "work"

[profiles.work]
templates_root = "/tmp/templates"
project_name = "Acme"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let rc = ConfigLoader::load(Some(&cfg_path), None).unwrap();
        assert_eq!(rc.active_profile, "work");
        assert_eq!(rc.templates_root, PathBuf::from("/tmp/templates"));
        assert_eq!(rc.project_name.as_deref(), Some("Acme"));
        assert_eq!(rc.logging.level, "debug");
    }

    #[test]
    fn rejects_unknown_version() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("config.toml");
        fs::write(
            &cfg_path,
            "version = 2\n[profiles.default]\ntemplates_root = \"/tmp\"\n",
        )
        .unwrap();

        let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
        assert!(matches!(err, ConfigError::BadVersion(2)));
    }

    #[test]
    fn rejects_missing_profile() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("config.toml");
        fs::write(
            &cfg_path,
            "version = 1\n[profiles.default]\ntemplates_root = \"/tmp\"\n",
        )
        .unwrap();

        let err = ConfigLoader::load(Some(&cfg_path), Some("other")).unwrap_err();
        assert!(matches!(err, ConfigError::ProfileNotFound(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = tempdir().unwrap();
        let err =
            ConfigLoader::load(Some(&tmp.path().join("nope.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
