use super::{Error, Result, Topology};
use std::{ops::RangeInclusive, time::Duration};

/// Settings of the simulated world, chosen once at engine construction.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    pub topology: Topology,
    /// Side length of the dense grid; for the unbounded world it is the size
    /// of the randomly seeded square.
    pub side: usize,
    pub rng_seed: Option<u64>,
    /// Period between two generations.
    pub tick_interval: Duration,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Unbounded,
            side: 64,
            rng_seed: None,
            tick_interval: Duration::from_millis(100),
        }
    }
}

impl WorldConfig {
    pub const ENV_TOPOLOGY: &'static str = "LIFE_TOPOLOGY";
    pub const ENV_SIDE: &'static str = "LIFE_SIDE";
    pub const ENV_SEED: &'static str = "LIFE_SEED";
    pub const ENV_TICK_MS: &'static str = "LIFE_TICK_MS";

    /// Accepted tick periods in milliseconds, shared with the GUI slider.
    pub const TICK_MS_RANGE: RangeInclusive<u64> = 1..=10_000;

    /// Defaults overridden by the `LIFE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WorldConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(Self::ENV_TOPOLOGY) {
            config.topology = v.parse()?;
        }
        if let Some(v) = lookup(Self::ENV_SIDE) {
            config.side = parse_positive(Self::ENV_SIDE, &v)? as usize;
        }
        if let Some(v) = lookup(Self::ENV_SEED) {
            config.rng_seed = Some(
                v.trim()
                    .parse()
                    .map_err(|_| Error::Config(format!("{}: '{v}' is not a u64", Self::ENV_SEED)))?,
            );
        }
        if let Some(v) = lookup(Self::ENV_TICK_MS) {
            let ms = parse_positive(Self::ENV_TICK_MS, &v)?;
            if !Self::TICK_MS_RANGE.contains(&ms) {
                return Err(Error::Config(format!(
                    "{}: {ms} is outside {}..={} ms",
                    Self::ENV_TICK_MS,
                    Self::TICK_MS_RANGE.start(),
                    Self::TICK_MS_RANGE.end()
                )));
            }
            config.tick_interval = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!(
            "{key}: '{value}' is not a positive integer"
        ))),
    }
}
