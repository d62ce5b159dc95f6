use clap::Parser;
use shortly_telemetry::LogFormat;
use std::net::IpAddr;

pub const PORT_ENV: &str = "SHORTLY_PORT";
pub const BIND_ADDR_ENV: &str = "SHORTLY_BIND_ADDR";
pub const STORAGE_ENV: &str = "SHORTLY_STORAGE";
pub const MIN_LENGTH_ENV: &str = "SHORTLY_MIN_LENGTH";
pub const LOG_FORMAT_ENV: &str = "SHORTLY_LOG_FORMAT";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_STORAGE: &str = "memory";

#[derive(Debug, Parser)]
#[command(name = "shortly", about = "In-memory URL shortener")]
pub struct CLI {
    /// HTTP port to run the service on
    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = BIND_ADDR_ENV, default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: IpAddr,

    /// Storage type to use [memory]; unknown values fall back to memory
    #[arg(long, env = STORAGE_ENV, default_value = DEFAULT_STORAGE)]
    pub storage: String,

    /// Minimum length of generated ids
    #[arg(long, env = MIN_LENGTH_ENV, default_value_t = 0)]
    pub min_length: usize,

    #[arg(long, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
