use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::platform::config::AppConfig;
use crate::tools::logger::Logger;

#[derive(Clone)]
pub struct CliContext {
    logger: Arc<Logger>,
    config: Arc<AppConfig>,
}

impl CliContext {
    /// Read the config (explicit path, or discovered in the current directory)
    /// and build the logger; `--debug` forces debug output on.
    pub fn load(config_path: Option<&Path>, debug: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => AppConfig::load_file(path)?,
            None => AppConfig::load(std::env::current_dir()?)?,
        };
        Ok(Self::with_config(config, debug))
    }

    pub fn with_config(config: AppConfig, debug: bool) -> Self {
        let logger = Logger::with_debug(debug || config.log.debug);
        Self {
            logger: Arc::new(logger),
            config: Arc::new(config),
        }
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
