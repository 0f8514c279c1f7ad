use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, TokenomicsError};

/// Options for the `init` command.
pub struct InitOptions {
    pub root: PathBuf,
    pub force: bool,
}

/// Result of a successful `init` operation.
#[derive(Debug)]
pub struct InitResult {
    pub config_path: PathBuf,
}

/// Run the init command: write a default config file.
pub fn run(options: InitOptions) -> Result<InitResult> {
    if !options.root.exists() {
        return Err(TokenomicsError::invalid_path(
            options.root.display().to_string(),
            "directory does not exist",
        ));
    }
    if !options.root.is_dir() {
        return Err(TokenomicsError::invalid_path(
            options.root.display().to_string(),
            "not a directory",
        ));
    }

    let config_path = options.root.join("tokenomics.toml");
    if config_path.exists() && !options.force {
        return Err(TokenomicsError::config(format!(
            "config already exists at '{}' (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save(&config_path)?;
    Ok(InitResult { config_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(InitOptions {
            root: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();

        assert!(result.config_path.exists());
        let loaded = Config::load(&result.config_path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn init_errors_on_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        run(InitOptions {
            root: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();

        let err = run(InitOptions {
            root: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn init_force_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        run(InitOptions {
            root: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();

        run(InitOptions {
            root: dir.path().to_path_buf(),
            force: true,
        })
        .unwrap();
    }

    #[test]
    fn init_errors_on_bad_root() {
        let err = run(InitOptions {
            root: PathBuf::from("/nonexistent/path/that/should/not/exist"),
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
