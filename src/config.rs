use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

use crate::briefing::BriefingItem;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub flash_briefings: FlashBriefingsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Briefing definitions plus the shared password. Loaded once at startup and
/// read-only for the life of the process; a briefing value that is not a list
/// of items fails deserialization here rather than at request time.
#[derive(Debug, Deserialize)]
pub struct FlashBriefingsConfig {
    pub password: String,
    #[serde(default)]
    pub briefings: HashMap<String, Vec<BriefingItem>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
