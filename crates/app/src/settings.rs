//! Handles settings for the application.
//!
//! Sources, later ones winning:
//!
//! 1. `settings.toml` in the working directory (optional, `--config` to move it)
//! 2. `HOLONET__<SECTION>__<KEY>` environment variables
//! 3. command line flags, which also read `DATABASE_URL` and `PORT`
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const DEFAULT_DATABASE_URL: &str = "sqlite:./holonet.db?mode=rwc";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Tracing level for the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "holonet")]
#[command(about = "REST API for planets, characters and user favorites")]
struct Args {
    /// Optional config file path (TOML, extension may be omitted).
    #[arg(long)]
    config: Option<String>,
    /// Database connection string.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    /// Listen port.
    #[arg(long, env = "PORT")]
    port: Option<u16>,
    /// Listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Tracing level (e.g. `debug`).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Args::parse())
    }

    fn load(args: Args) -> Result<Self, ConfigError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("HOLONET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(database_url) = args.database_url {
            settings.server.database_url = database_url;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }
}
