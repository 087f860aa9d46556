use anyhow::{Result, anyhow};
use std::str::FromStr;

pub const FORMAT_ENV_VAR: &str = "HELLO_ALGO_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("Unknown output format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DemoConfig {
    pub format: OutputFormat,
}

impl DemoConfig {
    /// The command line wins over the environment; both absent means text.
    pub fn resolve(cli_format: Option<&str>, env_format: Option<String>) -> Result<Self> {
        let format = match (cli_format, env_format) {
            (Some(format), _) => format.parse()?,
            (None, Some(format)) if !format.trim().is_empty() => format.parse()?,
            _ => OutputFormat::default(),
        };
        Ok(Self { format })
    }

    pub fn from_env(cli_format: Option<&str>) -> Result<Self> {
        Self::resolve(cli_format, std::env::var(FORMAT_ENV_VAR).ok())
    }
}
