//! `patina-core` — foundational types for the patina deterioration engine.
//!
//! Every other `patina-*` crate depends on this one, so it sits at the
//! bottom of the dependency graph: no `patina-*` dependencies of its own
//! and few external ones (`log` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`env`]      | `EnvironmentState`, physical bounds, comfort bands    |
//! | [`exposure`] | `ExposureDuration`, `ExposureClock`, calendar weights |
//! | [`presets`]  | `ScenarioPreset` — the fixed scenario table           |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (snapshots).  |

pub mod env;
pub mod error;
pub mod exposure;
pub mod presets;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use env::{EnvironmentState, HumidityBand, TemperatureBand, KELVIN_OFFSET};
pub use error::{CoreError, CoreResult};
pub use exposure::{ExposureClock, ExposureDuration, DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
pub use presets::ScenarioPreset;
