use crate::error::HealthDataError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Years covered by every county's metric series, oldest first.
pub const YEARS: [u16; 3] = [2021, 2022, 2023];

/// The year the table, comparison chart and export report on.
pub const LATEST_YEAR: u16 = 2023;

pub const PREVIOUS_YEAR: u16 = 2022;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    MaternalMortality,
    LowBirthWeight,
    PretermBirth,
    TeenBirthRate,
}

impl MetricKind {
    /// Table column order.
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::MaternalMortality,
            MetricKind::LowBirthWeight,
            MetricKind::PretermBirth,
            MetricKind::TeenBirthRate,
        ]
    }

    /// Order of the metric selector, which leads with the birth outcomes.
    pub fn selector_order() -> &'static [MetricKind] {
        &[
            MetricKind::LowBirthWeight,
            MetricKind::PretermBirth,
            MetricKind::MaternalMortality,
            MetricKind::TeenBirthRate,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => "maternalMortality",
            MetricKind::LowBirthWeight => "lowBirthWeight",
            MetricKind::PretermBirth => "pretermBirth",
            MetricKind::TeenBirthRate => "teenBirthRate",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => "Maternal Mortality",
            MetricKind::LowBirthWeight => "Low Birth Weight",
            MetricKind::PretermBirth => "Preterm Birth",
            MetricKind::TeenBirthRate => "Teen Birth Rate",
        }
    }

    /// Label shown in the metric selector.
    pub fn selector_label(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => "Maternal Mortality Rate",
            MetricKind::LowBirthWeight => "Low Birth Weight %",
            MetricKind::PretermBirth => "Preterm Birth %",
            MetricKind::TeenBirthRate => "Teen Birth Rate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => "per 100,000 births",
            MetricKind::LowBirthWeight | MetricKind::PretermBirth => "%",
            MetricKind::TeenBirthRate => "per 1,000 teens",
        }
    }

    /// Compact unit appended directly to a value, e.g. `20.5 per 100k` or `9.6%`.
    pub fn short_unit(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => " per 100k",
            MetricKind::LowBirthWeight | MetricKind::PretermBirth => "%",
            MetricKind::TeenBirthRate => " per 1k",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MetricKind::MaternalMortality => {
                "Deaths per 100,000 live births within 42 days of pregnancy termination"
            }
            MetricKind::LowBirthWeight => {
                "Percentage of live births weighing less than 2,500 grams (5.5 pounds)"
            }
            MetricKind::PretermBirth => {
                "Percentage of live births occurring before 37 weeks of gestation"
            }
            MetricKind::TeenBirthRate => "Births per 1,000 females aged 15-19 years",
        }
    }

    /// Value followed by its short unit, one decimal place.
    pub fn format_value(self, value: f64) -> String {
        format!("{:.1}{}", value, self.short_unit())
    }

    pub fn next(self) -> MetricKind {
        let order = Self::selector_order();
        let position = order.iter().position(|m| *m == self).unwrap_or(0);
        order[(position + 1) % order.len()]
    }

    pub fn previous(self) -> MetricKind {
        let order = Self::selector_order();
        let position = order.iter().position(|m| *m == self).unwrap_or(0);
        order[(position + order.len() - 1) % order.len()]
    }
}

impl From<MetricKind> for usize {
    fn from(metric: MetricKind) -> Self {
        MetricKind::selector_order()
            .iter()
            .position(|m| *m == metric)
            .unwrap_or(0)
    }
}

impl TryFrom<usize> for MetricKind {
    type Error = HealthDataError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        MetricKind::selector_order()
            .get(index)
            .copied()
            .ok_or_else(|| HealthDataError::UnknownMetric(format!("#{}", index)))
    }
}

impl From<MetricKind> for &'static str {
    fn from(metric: MetricKind) -> Self {
        metric.key()
    }
}

impl FromStr for MetricKind {
    type Err = HealthDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::all()
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| HealthDataError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric_keys() {
        for metric in MetricKind::all() {
            assert_eq!(metric.key().parse::<MetricKind>().unwrap(), *metric);
        }
    }

    #[test]
    fn test_unknown_metric_is_an_error() {
        let err = "infantMortality".parse::<MetricKind>().unwrap_err();
        assert!(matches!(err, HealthDataError::UnknownMetric(ref key) if key == "infantMortality"));
    }

    #[test]
    fn test_units() {
        assert_eq!(MetricKind::MaternalMortality.unit(), "per 100,000 births");
        assert_eq!(MetricKind::LowBirthWeight.unit(), "%");
        assert_eq!(MetricKind::PretermBirth.unit(), "%");
        assert_eq!(MetricKind::TeenBirthRate.unit(), "per 1,000 teens");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            MetricKind::TeenBirthRate.description(),
            "Births per 1,000 females aged 15-19 years"
        );
        assert!(MetricKind::LowBirthWeight
            .description()
            .contains("less than 2,500 grams"));
        for metric in MetricKind::all() {
            assert!(!metric.description().is_empty());
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(MetricKind::LowBirthWeight.format_value(9.6), "9.6%");
        assert_eq!(
            MetricKind::MaternalMortality.format_value(20.5),
            "20.5 per 100k"
        );
        assert_eq!(MetricKind::TeenBirthRate.format_value(11.0), "11.0 per 1k");
    }

    #[test]
    fn test_cycling_visits_every_metric() {
        let mut metric = MetricKind::LowBirthWeight;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(metric);
            metric = metric.next();
        }
        assert_eq!(metric, MetricKind::LowBirthWeight);
        assert_eq!(seen, MetricKind::selector_order());
        assert_eq!(MetricKind::LowBirthWeight.previous(), MetricKind::TeenBirthRate);
    }

    #[test]
    fn test_index_conversions() {
        for (index, metric) in MetricKind::selector_order().iter().enumerate() {
            assert_eq!(usize::from(*metric), index);
            assert_eq!(MetricKind::try_from(index).unwrap(), *metric);
        }
        assert!(MetricKind::try_from(4).is_err());
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&MetricKind::TeenBirthRate).unwrap();
        assert_eq!(json, "\"teenBirthRate\"");
    }
}
