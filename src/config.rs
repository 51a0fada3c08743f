use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, read from flags or the matching environment variables
#[derive(Debug, Clone, Parser)]
#[command(name = "awake", version, about = "Liveness endpoint server")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "AWAKE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "AWAKE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Do not serve the OpenAPI document and Swagger UI
    #[arg(
        long,
        env = "AWAKE_NO_DOCS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub no_docs: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn docs_enabled(&self) -> bool {
        !self.no_docs
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            no_docs: false,
        }
    }
}
