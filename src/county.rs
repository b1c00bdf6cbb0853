use crate::{
    error::{HealthDataError, Result},
    metric::MetricKind,
};
use serde::Serialize;
use std::fmt;

/// One metric's values for 2021, 2022 and 2023.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MetricSeries {
    pub y2021: f64,
    pub y2022: f64,
    pub y2023: f64,
}

impl MetricSeries {
    pub const fn new(y2021: f64, y2022: f64, y2023: f64) -> Self {
        Self {
            y2021,
            y2022,
            y2023,
        }
    }

    pub fn get(&self, year: u16) -> Result<f64> {
        match year {
            2021 => Ok(self.y2021),
            2022 => Ok(self.y2022),
            2023 => Ok(self.y2023),
            _ => Err(HealthDataError::UnknownYear(year)),
        }
    }

    pub fn latest(&self) -> f64 {
        self.y2023
    }

    /// `(year, value)` pairs, oldest first.
    pub fn points(&self) -> [(u16, f64); 3] {
        [(2021, self.y2021), (2022, self.y2022), (2023, self.y2023)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CountyMetrics {
    pub maternal_mortality: MetricSeries,
    pub low_birth_weight: MetricSeries,
    pub preterm_birth: MetricSeries,
    pub teen_birth_rate: MetricSeries,
}

impl CountyMetrics {
    pub fn series(&self, metric: MetricKind) -> &MetricSeries {
        match metric {
            MetricKind::MaternalMortality => &self.maternal_mortality,
            MetricKind::LowBirthWeight => &self.low_birth_weight,
            MetricKind::PretermBirth => &self.preterm_birth,
            MetricKind::TeenBirthRate => &self.teen_birth_rate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RaceEthnicity {
    WhiteNonHispanic,
    BlackNonHispanic,
    Hispanic,
    AsianPacificIslander,
    Other,
}

impl RaceEthnicity {
    pub fn all() -> &'static [RaceEthnicity] {
        &[
            RaceEthnicity::WhiteNonHispanic,
            RaceEthnicity::BlackNonHispanic,
            RaceEthnicity::Hispanic,
            RaceEthnicity::AsianPacificIslander,
            RaceEthnicity::Other,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            RaceEthnicity::WhiteNonHispanic => "White NH",
            RaceEthnicity::BlackNonHispanic => "Black NH",
            RaceEthnicity::Hispanic => "Hispanic",
            RaceEthnicity::AsianPacificIslander => "Asian/PI",
            RaceEthnicity::Other => "Other",
        }
    }
}

impl fmt::Display for RaceEthnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-year values for one race/ethnicity group. Maternal mortality is not
/// broken down by group.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DemographicValues {
    pub low_birth_weight: f64,
    pub preterm: f64,
    pub teen_birth_rate: f64,
}

impl DemographicValues {
    pub const fn new(low_birth_weight: f64, preterm: f64, teen_birth_rate: f64) -> Self {
        Self {
            low_birth_weight,
            preterm,
            teen_birth_rate,
        }
    }

    pub fn get(&self, metric: MetricKind) -> Option<f64> {
        match metric {
            MetricKind::MaternalMortality => None,
            MetricKind::LowBirthWeight => Some(self.low_birth_weight),
            MetricKind::PretermBirth => Some(self.preterm),
            MetricKind::TeenBirthRate => Some(self.teen_birth_rate),
        }
    }
}

/// Breakdown in `RaceEthnicity::all()` order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Demographics {
    pub white_nh: DemographicValues,
    pub black_nh: DemographicValues,
    pub hispanic: DemographicValues,
    pub asian_pi: DemographicValues,
    pub other: DemographicValues,
}

impl Demographics {
    pub fn get(&self, group: RaceEthnicity) -> &DemographicValues {
        match group {
            RaceEthnicity::WhiteNonHispanic => &self.white_nh,
            RaceEthnicity::BlackNonHispanic => &self.black_nh,
            RaceEthnicity::Hispanic => &self.hispanic,
            RaceEthnicity::AsianPacificIslander => &self.asian_pi,
            RaceEthnicity::Other => &self.other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountyRecord {
    pub name: &'static str,
    pub population: u32,
    pub metrics: CountyMetrics,
    pub demographics: Demographics,
}

impl CountyRecord {
    pub fn latest(&self, metric: MetricKind) -> f64 {
        self.metrics.series(metric).latest()
    }

    pub fn matches_name(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}
