use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

const MENU_RESOURCE: &str = include_str!("../../resource/menu.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    pub title: String,
    pub destinations: Vec<Destination>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Finance Calculators".to_owned(),
            destinations: vec![Destination {
                title: "SIP Calculator".to_owned(),
                screen: ScreenId::SipCalculator.to_string(),
            }],
        }
    }
}

impl Config {
    /// Loads the bundled menu, falling back to the built-in one if it is unusable.
    pub fn load() -> Self {
        Self::from_json(MENU_RESOURCE).unwrap_or_else(|e| {
            warn!(error = %e, "bundled menu unusable, using defaults");
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(json).context("invalid menu resource")?;
        if cfg.destinations.is_empty() {
            bail!("menu resource lists no destinations");
        }
        Ok(cfg)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Destination {
    pub title: String,
    pub screen: String,
}

impl Destination {
    pub fn target(&self) -> Result<ScreenId> {
        self.screen.parse()
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ScreenId {
    #[default]
    Home,
    SipCalculator,
}

impl FromStr for ScreenId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Home" => Ok(ScreenId::Home),
            "SipCalculator" => Ok(ScreenId::SipCalculator),
            _ => bail!("unknown screen '{s}'"),
        }
    }
}

impl Display for ScreenId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenId::Home => write!(f, "Home"),
            ScreenId::SipCalculator => write!(f, "SipCalculator"),
        }
    }
}
