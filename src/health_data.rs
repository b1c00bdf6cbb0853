//! The mock dataset: ten Florida counties, 2021-2023.
//!
//! Values are illustrative, not official Florida DOH figures.

use crate::{
    county::{CountyMetrics, CountyRecord, DemographicValues, Demographics, MetricSeries},
    error::{HealthDataError, Result},
};

pub static FLORIDA_COUNTIES: [CountyRecord; 10] = [
    CountyRecord {
        name: "Miami-Dade",
        population: 2_701_767,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(23.1, 21.8, 20.5),
            low_birth_weight: MetricSeries::new(9.8, 10.1, 9.6),
            preterm_birth: MetricSeries::new(11.2, 11.5, 11.0),
            teen_birth_rate: MetricSeries::new(15.3, 14.8, 14.2),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(7.2, 8.9, 8.1),
            black_nh: DemographicValues::new(13.4, 12.1, 22.3),
            hispanic: DemographicValues::new(8.9, 10.2, 18.7),
            asian_pi: DemographicValues::new(6.8, 7.5, 4.2),
            other: DemographicValues::new(9.1, 9.8, 12.4),
        },
    },
    CountyRecord {
        name: "Broward",
        population: 1_942_389,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(19.8, 18.5, 17.2),
            low_birth_weight: MetricSeries::new(8.9, 9.2, 8.7),
            preterm_birth: MetricSeries::new(10.1, 10.4, 9.9),
            teen_birth_rate: MetricSeries::new(12.8, 12.3, 11.7),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(6.8, 8.2, 7.2),
            black_nh: DemographicValues::new(12.1, 11.3, 19.8),
            hispanic: DemographicValues::new(8.2, 9.5, 16.1),
            asian_pi: DemographicValues::new(6.2, 6.9, 3.8),
            other: DemographicValues::new(8.5, 9.1, 10.9),
        },
    },
    CountyRecord {
        name: "Orange",
        population: 1_393_452,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(18.2, 17.1, 16.3),
            low_birth_weight: MetricSeries::new(8.4, 8.7, 8.2),
            preterm_birth: MetricSeries::new(9.8, 10.1, 9.6),
            teen_birth_rate: MetricSeries::new(11.9, 11.4, 10.8),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(6.5, 7.8, 6.8),
            black_nh: DemographicValues::new(11.8, 10.9, 18.2),
            hispanic: DemographicValues::new(7.9, 9.1, 15.3),
            asian_pi: DemographicValues::new(5.9, 6.6, 3.5),
            other: DemographicValues::new(8.1, 8.7, 9.8),
        },
    },
    CountyRecord {
        name: "Hillsborough",
        population: 1_471_968,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(20.1, 19.2, 18.4),
            low_birth_weight: MetricSeries::new(9.1, 9.4, 8.9),
            preterm_birth: MetricSeries::new(10.5, 10.8, 10.3),
            teen_birth_rate: MetricSeries::new(13.2, 12.7, 12.1),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(7.1, 8.5, 7.5),
            black_nh: DemographicValues::new(12.8, 11.7, 20.1),
            hispanic: DemographicValues::new(8.5, 9.8, 17.2),
            asian_pi: DemographicValues::new(6.4, 7.1, 3.9),
            other: DemographicValues::new(8.8, 9.4, 11.2),
        },
    },
    CountyRecord {
        name: "Palm Beach",
        population: 1_496_770,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(17.5, 16.8, 16.1),
            low_birth_weight: MetricSeries::new(8.2, 8.5, 8.0),
            preterm_birth: MetricSeries::new(9.5, 9.8, 9.3),
            teen_birth_rate: MetricSeries::new(11.2, 10.8, 10.2),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(6.2, 7.5, 6.5),
            black_nh: DemographicValues::new(11.5, 10.6, 17.8),
            hispanic: DemographicValues::new(7.8, 9.0, 14.9),
            asian_pi: DemographicValues::new(5.7, 6.4, 3.3),
            other: DemographicValues::new(7.9, 8.5, 9.5),
        },
    },
    CountyRecord {
        name: "Pinellas",
        population: 959_107,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(16.8, 16.1, 15.4),
            low_birth_weight: MetricSeries::new(7.9, 8.2, 7.7),
            preterm_birth: MetricSeries::new(9.2, 9.5, 9.0),
            teen_birth_rate: MetricSeries::new(10.8, 10.4, 9.8),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(5.9, 7.2, 6.2),
            black_nh: DemographicValues::new(11.2, 10.3, 16.9),
            hispanic: DemographicValues::new(7.5, 8.7, 13.8),
            asian_pi: DemographicValues::new(5.4, 6.1, 3.1),
            other: DemographicValues::new(7.6, 8.2, 9.1),
        },
    },
    CountyRecord {
        name: "Duval",
        population: 995_567,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(22.3, 21.5, 20.8),
            low_birth_weight: MetricSeries::new(10.2, 10.5, 10.0),
            preterm_birth: MetricSeries::new(11.8, 12.1, 11.6),
            teen_birth_rate: MetricSeries::new(16.1, 15.6, 15.0),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(7.8, 9.1, 8.8),
            black_nh: DemographicValues::new(14.2, 13.1, 24.5),
            hispanic: DemographicValues::new(9.1, 10.4, 19.2),
            asian_pi: DemographicValues::new(6.9, 7.6, 4.5),
            other: DemographicValues::new(9.4, 10.1, 13.1),
        },
    },
    CountyRecord {
        name: "Lee",
        population: 760_822,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(15.9, 15.2, 14.6),
            low_birth_weight: MetricSeries::new(7.6, 7.9, 7.4),
            preterm_birth: MetricSeries::new(8.9, 9.2, 8.7),
            teen_birth_rate: MetricSeries::new(10.2, 9.8, 9.3),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(5.6, 6.9, 6.0),
            black_nh: DemographicValues::new(10.8, 9.9, 15.7),
            hispanic: DemographicValues::new(7.2, 8.4, 12.6),
            asian_pi: DemographicValues::new(5.1, 5.8, 2.9),
            other: DemographicValues::new(7.3, 7.9, 8.7),
        },
    },
    CountyRecord {
        name: "Polk",
        population: 724_777,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(18.7, 17.9, 17.2),
            low_birth_weight: MetricSeries::new(8.7, 9.0, 8.5),
            preterm_birth: MetricSeries::new(10.1, 10.4, 9.9),
            teen_birth_rate: MetricSeries::new(12.5, 12.0, 11.4),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(6.7, 8.0, 7.3),
            black_nh: DemographicValues::new(12.4, 11.5, 19.2),
            hispanic: DemographicValues::new(8.1, 9.3, 15.8),
            asian_pi: DemographicValues::new(6.1, 6.8, 3.6),
            other: DemographicValues::new(8.3, 8.9, 10.5),
        },
    },
    CountyRecord {
        name: "Sarasota",
        population: 434_006,
        metrics: CountyMetrics {
            maternal_mortality: MetricSeries::new(14.2, 13.6, 13.0),
            low_birth_weight: MetricSeries::new(7.1, 7.4, 6.9),
            preterm_birth: MetricSeries::new(8.4, 8.7, 8.2),
            teen_birth_rate: MetricSeries::new(9.5, 9.1, 8.6),
        },
        demographics: Demographics {
            white_nh: DemographicValues::new(5.3, 6.6, 5.8),
            black_nh: DemographicValues::new(10.2, 9.3, 14.8),
            hispanic: DemographicValues::new(6.8, 8.0, 11.9),
            asian_pi: DemographicValues::new(4.9, 5.6, 2.7),
            other: DemographicValues::new(7.0, 7.6, 8.2),
        },
    },
];

pub fn florida_counties() -> &'static [CountyRecord] {
    &FLORIDA_COUNTIES
}

pub fn find_county(name: &str) -> Result<&'static CountyRecord> {
    FLORIDA_COUNTIES
        .iter()
        .find(|county| county.name == name)
        .ok_or_else(|| HealthDataError::UnknownCounty(name.to_string()))
}

pub fn county_index(name: &str) -> Result<usize> {
    FLORIDA_COUNTIES
        .iter()
        .position(|county| county.name == name)
        .ok_or_else(|| HealthDataError::UnknownCounty(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{county::RaceEthnicity, metric::{MetricKind, YEARS}};
    use std::collections::HashSet;

    #[test]
    fn test_county_names_are_unique() {
        let names: HashSet<_> = florida_counties().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_every_metric_and_year_is_present() {
        for county in florida_counties() {
            for metric in MetricKind::all() {
                for year in YEARS {
                    let value = county.metrics.series(*metric).get(year).unwrap();
                    assert!(value > 0.0, "{} {} {}", county.name, metric, year);
                }
            }
            for group in RaceEthnicity::all() {
                let values = county.demographics.get(*group);
                assert!(values.get(MetricKind::TeenBirthRate).unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_find_county() {
        assert_eq!(find_county("Sarasota").unwrap().population, 434_006);
        assert_eq!(county_index("Orange").unwrap(), 2);
        assert!(matches!(
            find_county("Monroe"),
            Err(HealthDataError::UnknownCounty(ref name)) if name == "Monroe"
        ));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(find_county("miami-dade").is_err());
    }
}
