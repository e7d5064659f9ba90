use std::{env, fmt, str::FromStr, time::Duration};

pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLS: usize = 16;
pub const DEFAULT_DELAY_MS: u64 = 2; // Per carved wall and per visited cell.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize, // Including the sentinel border.
    pub cols: usize,
    pub seed: Option<u64>,
    pub delay: Duration,
    pub animate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
        }
    }
}

impl Config {
    /// Reads `MAZE_*` variables from the environment after loading an optional
    /// `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rows = parse(&lookup, "MAZE_ROWS")?.unwrap_or(DEFAULT_ROWS);
        let cols = parse(&lookup, "MAZE_COLS")?.unwrap_or(DEFAULT_COLS);
        let seed = parse(&lookup, "MAZE_SEED")?;
        let delay_ms = parse(&lookup, "MAZE_DELAY_MS")?.unwrap_or(DEFAULT_DELAY_MS);
        let animate = match lookup("MAZE_ANIMATE") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "MAZE_ANIMATE",
                value,
            })?,
        };

        Ok(Config {
            rows,
            cols,
            seed,
            delay: Duration::from_millis(delay_ms),
            animate,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::Invalid { key, value }),
        },
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
