use std::{env, str::FromStr};

use crate::{
    error::VecError,
    vec::{DEFAULT_CAPACITY, LOAD_FACTOR},
};

pub const CAPACITY_VAR: &str = "DYNVEC_CAPACITY";
pub const LOAD_FACTOR_VAR: &str = "DYNVEC_LOAD_FACTOR";

/// Accepted load factors. Below the lower end the doubling threshold rounds
/// to zero and every write doubles; at 1.0 the threshold is never reached
/// after an out-of-range jump and growth degrades to one slot at a time.
pub const MIN_LOAD_FACTOR: f32 = 0.25;
pub const MAX_LOAD_FACTOR: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub initial_capacity: usize,
    /// Fraction of the capacity at which the next set/push doubles it.
    pub load_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: LOAD_FACTOR,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), VecError> {
        if self.initial_capacity == 0 {
            return Err(VecError::InvalidConfig(
                "initial capacity must be at least 1".into(),
            ));
        }
        if !(MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR).contains(&self.load_factor) {
            return Err(VecError::InvalidConfig(format!(
                "load factor must be in [{}, {}], got {}",
                MIN_LOAD_FACTOR, MAX_LOAD_FACTOR, self.load_factor
            )));
        }
        Ok(())
    }

    /// Reads `DYNVEC_CAPACITY` and `DYNVEC_LOAD_FACTOR`, keeping the default
    /// for any variable that isn't set.
    pub fn from_env() -> Result<Config, VecError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, VecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(raw) = lookup(CAPACITY_VAR) {
            config.initial_capacity = parse_var(CAPACITY_VAR, &raw)?;
        }
        if let Some(raw) = lookup(LOAD_FACTOR_VAR) {
            config.load_factor = parse_var(LOAD_FACTOR_VAR, &raw)?;
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, VecError> {
    raw.trim()
        .parse()
        .map_err(|_| VecError::InvalidConfig(format!("couldn't parse {}=`{}`", key, raw)))
}
