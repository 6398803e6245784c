use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("HOST", "127.0.0.1"),
        port: get_env_parsed_or_default("PORT", 8000),
        search_delay_ms: get_env_parsed_or_default("SEARCH_DELAY_MS", 2000),
        rng_seed: get_env_parsed("RNG_SEED"),
        cors_origins: get_env_or_default("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
    }
});

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

pub struct Config {
    pub host: String,
    pub port: u16,
    /// Simulated extraction latency applied to every search.
    pub search_delay_ms: u64,
    /// Fixed seed for the synthetic generator. Unset means entropy per request.
    pub rng_seed: Option<u64>,
    pub cors_origins: Vec<String>,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => panic!("Invalid value for environment variable {key}: {raw:?}"),
    }
}

fn get_env_parsed_or_default<T: FromStr>(key: &str, default: T) -> T {
    get_env_parsed(key).unwrap_or(default)
}
