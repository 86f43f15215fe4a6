//! Deterministic UUID generation for testing and simulation.
//!
//! With the `simulator` feature enabled, [`TypedUuid::new_v4`] draws its bytes
//! from a process-wide seeded random number generator, so a simulation run
//! produces the same IDs every time.
//!
//! The seed is read from the `SIMULATOR_UUID_SEED` environment variable the
//! first time a UUID is generated. If not set, it defaults to 12345.
//!
//! [`TypedUuid::new_v4`]: crate::TypedUuid::new_v4

use std::{
    fmt::Display,
    str::FromStr,
    sync::{LazyLock, Mutex, PoisonError},
};

use rand::{RngCore as _, SeedableRng as _, rngs::StdRng};
use uuid::Uuid;

/// Environment variable holding the simulator seed.
pub const SEED_ENV_VAR: &str = "SIMULATOR_UUID_SEED";

/// Seed used when [`SEED_ENV_VAR`] is unset or invalid.
pub const DEFAULT_SEED: u64 = 12345;

static RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| {
    let seed = var_parse_or(SEED_ENV_VAR, DEFAULT_SEED);

    log::debug!("Using UUID seed: {seed}");
    Mutex::new(StdRng::seed_from_u64(seed))
});

/// Get an environment variable parsed with a default value
///
/// Unset variables silently fall back to `default`. Values that don't parse
/// fall back with a warning.
fn var_parse_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(name, std::env::var(name).ok().as_deref(), default)
}

fn parse_or<T>(name: &str, value: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(value) = value else {
        return default;
    };

    value.trim().parse().unwrap_or_else(|e| {
        log::warn!("Invalid {name} value '{value}' ({e}), using {default}");
        default
    })
}

/// Resets the generator to a known seed.
///
/// Subsequent calls to [`new_v4`] replay the same sequence for the same seed.
pub fn reseed(seed: u64) {
    log::debug!("Reseeding UUID generator with {seed}");
    *RNG.lock().unwrap_or_else(PoisonError::into_inner) = StdRng::seed_from_u64(seed);
}

/// Generates a deterministic version 4 UUID.
#[must_use]
pub fn new_v4() -> Uuid {
    let mut bytes = [0u8; 16];
    RNG.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .fill_bytes(&mut bytes);

    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
