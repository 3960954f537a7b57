pub mod script_config;

pub use script_config::{ScriptConfig, ScriptInfo};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster")]
#[command(about = "Ordered record list demo: scripted roster mutations")]
pub struct CliConfig {
    #[arg(long, help = "TOML script to run instead of the built-in demo")]
    pub script: Option<String>,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)?;
        if let Some(path) = &self.script {
            validate_non_empty_string("script", path)?;
        }
        Ok(())
    }
}
