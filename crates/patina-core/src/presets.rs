//! Named scenario presets.
//!
//! Fixed bundles of environment + exposure applied atomically by hosts.
//! The values are part of the compatibility contract with existing host
//! front-ends and must not drift:
//!
//! | Preset        | °C | %RH | Exposure | klux |
//! |---------------|----|-----|----------|------|
//! | `museum`      | 20 | 50  | 100 y    | 0.15 |
//! | `poorStorage` | 30 | 80  | 50 y     | 5    |
//! | `outdoor`     | 25 | 70  | 20 y     | 20   |
//! | `extreme`     | 40 | 100 | 10 y     | 30   |
//! | `oneMonth`    | 25 | 60  | 1 mo     | 10   |
//! | `oneYear`     | 25 | 60  | 1 y      | 10   |
//! | `tenYears`    | 25 | 60  | 10 y     | 10   |

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, EnvironmentState, ExposureDuration};

/// A named environment + exposure bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioPreset {
    Museum,
    PoorStorage,
    Outdoor,
    Extreme,
    OneMonth,
    OneYear,
    TenYears,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 7] = [
        ScenarioPreset::Museum,
        ScenarioPreset::PoorStorage,
        ScenarioPreset::Outdoor,
        ScenarioPreset::Extreme,
        ScenarioPreset::OneMonth,
        ScenarioPreset::OneYear,
        ScenarioPreset::TenYears,
    ];

    /// The wire name hosts use to request this preset.
    pub fn name(self) -> &'static str {
        match self {
            ScenarioPreset::Museum      => "museum",
            ScenarioPreset::PoorStorage => "poorStorage",
            ScenarioPreset::Outdoor     => "outdoor",
            ScenarioPreset::Extreme     => "extreme",
            ScenarioPreset::OneMonth    => "oneMonth",
            ScenarioPreset::OneYear     => "oneYear",
            ScenarioPreset::TenYears    => "tenYears",
        }
    }

    /// The environmental conditions this preset sets.
    pub fn environment(self) -> EnvironmentState {
        match self {
            ScenarioPreset::Museum      => EnvironmentState::new(20.0, 50.0, 0.15),
            ScenarioPreset::PoorStorage => EnvironmentState::new(30.0, 80.0, 5.0),
            ScenarioPreset::Outdoor     => EnvironmentState::new(25.0, 70.0, 20.0),
            ScenarioPreset::Extreme     => EnvironmentState::new(40.0, 100.0, 30.0),
            ScenarioPreset::OneMonth    => EnvironmentState::new(25.0, 60.0, 10.0),
            ScenarioPreset::OneYear     => EnvironmentState::new(25.0, 60.0, 10.0),
            ScenarioPreset::TenYears    => EnvironmentState::new(25.0, 60.0, 10.0),
        }
    }

    /// The exposure span this preset sets.
    pub fn exposure(self) -> ExposureDuration {
        match self {
            ScenarioPreset::Museum      => ExposureDuration::from_years(100.0),
            ScenarioPreset::PoorStorage => ExposureDuration::from_years(50.0),
            ScenarioPreset::Outdoor     => ExposureDuration::from_years(20.0),
            ScenarioPreset::Extreme     => ExposureDuration::from_years(10.0),
            ScenarioPreset::OneMonth    => ExposureDuration::from_months(1.0),
            ScenarioPreset::OneYear     => ExposureDuration::from_years(1.0),
            ScenarioPreset::TenYears    => ExposureDuration::from_years(10.0),
        }
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioPreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CoreError::UnknownPreset(s.to_owned()))
    }
}
