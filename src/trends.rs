//! Derivations behind the summary cards and the three chart panels.

use crate::{
    county::{CountyRecord, RaceEthnicity},
    formatting::format_thousands,
    metric::{MetricKind, LATEST_YEAR, PREVIOUS_YEAR},
    table_view::Severity,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: u16,
    pub value: f64,
}

/// The selected metric for one county, 2021 through 2023.
pub fn trend(record: &CountyRecord, metric: MetricKind) -> [TrendPoint; 3] {
    record
        .metrics
        .series(metric)
        .points()
        .map(|(year, value)| TrendPoint { year, value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Improving,
    Worsening,
}

/// Latest value of a metric and its change since the previous year. Every
/// tracked metric is an adverse outcome, so a decrease is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: MetricKind,
    pub current: f64,
    pub previous: f64,
    pub change: f64,
}

impl MetricSummary {
    pub fn direction(&self) -> TrendDirection {
        if self.change < 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Worsening
        }
    }

    /// e.g. `9.6 %`
    pub fn value_label(&self) -> String {
        format!("{:.1} {}", self.current, self.metric.unit())
    }

    /// e.g. `0.5 from 2022`
    pub fn change_label(&self) -> String {
        format!("{:.1} from {}", self.change.abs(), PREVIOUS_YEAR)
    }
}

pub fn metric_summary(record: &CountyRecord, metric: MetricKind) -> MetricSummary {
    let series = record.metrics.series(metric);
    MetricSummary {
        metric,
        current: series.y2023,
        previous: series.y2022,
        change: series.y2023 - series.y2022,
    }
}

/// The four cards across the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub selected: MetricSummary,
    pub population: u32,
    pub maternal_mortality: f64,
    pub teen_birth_rate: f64,
}

impl SummaryCards {
    pub fn population_label(&self) -> String {
        format_thousands(u64::from(self.population))
    }
}

pub fn summary_cards(record: &CountyRecord, metric: MetricKind) -> SummaryCards {
    SummaryCards {
        selected: metric_summary(record, metric),
        population: record.population,
        maternal_mortality: record.latest(MetricKind::MaternalMortality),
        teen_birth_rate: record.latest(MetricKind::TeenBirthRate),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemographicBar {
    pub group: RaceEthnicity,
    /// `None` for metrics without a race/ethnicity breakdown.
    pub value: Option<f64>,
}

pub fn demographic_breakdown(record: &CountyRecord, metric: MetricKind) -> Vec<DemographicBar> {
    RaceEthnicity::all()
        .iter()
        .map(|group| DemographicBar {
            group: *group,
            value: record.demographics.get(*group).get(metric),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub county: &'static str,
    pub value: f64,
    pub population: u32,
    pub severity: Severity,
}

/// One bar per county with its latest value, highest first. Severity is
/// relative to the largest value among `records`.
pub fn county_comparison(records: &[CountyRecord], metric: MetricKind) -> Vec<ComparisonBar> {
    let mut bars: Vec<(&'static str, f64, u32)> = records
        .iter()
        .map(|record| (record.name, record.latest(metric), record.population))
        .collect();
    bars.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let max = bars.first().map(|bar| bar.1).unwrap_or(0.0);
    tracing::debug!(metric = metric.key(), max, year = LATEST_YEAR, "County comparison");

    bars.into_iter()
        .map(|(county, value, population)| ComparisonBar {
            county,
            value,
            population,
            severity: Severity::classify(value, max),
        })
        .collect()
}
