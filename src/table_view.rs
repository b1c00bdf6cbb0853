//! The county table: filter by name, project 2023 values, sort, and classify
//! each cell's severity relative to the rows currently visible.

use crate::{
    county::CountyRecord,
    error::HealthDataError,
    metric::MetricKind,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    County,
    Population,
    Metric(MetricKind),
}

impl SortField {
    /// Columns in table order.
    pub fn all() -> [SortField; 6] {
        [
            SortField::County,
            SortField::Population,
            SortField::Metric(MetricKind::MaternalMortality),
            SortField::Metric(MetricKind::LowBirthWeight),
            SortField::Metric(MetricKind::PretermBirth),
            SortField::Metric(MetricKind::TeenBirthRate),
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortField::County => "County",
            SortField::Population => "Population",
            SortField::Metric(metric) => metric.display_name(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortField::County => "county",
            SortField::Population => "population",
            SortField::Metric(metric) => metric.key(),
        }
    }

    /// Position of this column in `SortField::all()`.
    pub fn column_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|field| field == self)
            .unwrap_or(0)
    }
}

impl FromStr for SortField {
    type Err = HealthDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "county" => Ok(SortField::County),
            "population" => Ok(SortField::Population),
            other => other.parse().map(SortField::Metric),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::County,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click semantics: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggle(self, field: SortField) -> SortSpec {
        if self.field == field {
            SortSpec::new(field, self.direction.reversed())
        } else {
            SortSpec::new(field, SortDirection::Ascending)
        }
    }

    /// Equal keys compare `Equal` in both directions so a stable sort keeps
    /// ties in dataset order.
    pub fn compare(&self, a: &TableRow, b: &TableRow) -> Ordering {
        let ordering = match self.field {
            SortField::County => a.county.cmp(b.county),
            SortField::Population => a.population.cmp(&b.population),
            SortField::Metric(metric) => a
                .value(metric)
                .partial_cmp(&b.value(metric))
                .unwrap_or(Ordering::Equal),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Severity tier of a value relative to the largest value on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Highest,
}

impl Severity {
    /// Buckets `value / max`: (0.8, 1] highest, (0.6, 0.8] high,
    /// (0.4, 0.6] medium, anything else low. A non-positive max has no
    /// meaningful ratio and classifies as low.
    pub fn classify(value: f64, max: f64) -> Severity {
        if max.is_nan() || max <= 0.0 || max.is_infinite() {
            return Severity::Low;
        }
        let ratio = value / max;
        if ratio > 0.8 {
            Severity::Highest
        } else if ratio > 0.6 {
            Severity::High
        } else if ratio > 0.4 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Highest => "Highest",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A county projected down to its population and 2023 values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub county: &'static str,
    pub population: u32,
    pub maternal_mortality: f64,
    pub low_birth_weight: f64,
    pub preterm_birth: f64,
    pub teen_birth_rate: f64,
}

impl TableRow {
    pub fn from_record(record: &CountyRecord) -> Self {
        Self {
            county: record.name,
            population: record.population,
            maternal_mortality: record.latest(MetricKind::MaternalMortality),
            low_birth_weight: record.latest(MetricKind::LowBirthWeight),
            preterm_birth: record.latest(MetricKind::PretermBirth),
            teen_birth_rate: record.latest(MetricKind::TeenBirthRate),
        }
    }

    pub fn value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::MaternalMortality => self.maternal_mortality,
            MetricKind::LowBirthWeight => self.low_birth_weight,
            MetricKind::PretermBirth => self.preterm_birth,
            MetricKind::TeenBirthRate => self.teen_birth_rate,
        }
    }
}

/// Records whose name contains `filter`, ignoring case. An empty filter keeps
/// everything.
pub fn filter_by_name<'a>(records: &'a [CountyRecord], filter: &str) -> Vec<&'a CountyRecord> {
    records
        .iter()
        .filter(|record| record.matches_name(filter))
        .collect()
}

pub fn project(records: &[&CountyRecord]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow::from_record(record))
        .collect()
}

pub fn sort_rows(rows: &mut [TableRow], spec: SortSpec) {
    // `sort_by` is stable
    rows.sort_by(|a, b| spec.compare(a, b));
}

pub fn column_max(rows: &[TableRow], metric: MetricKind) -> Option<f64> {
    rows.iter()
        .map(|row| row.value(metric))
        .fold(None, |max, value| match max {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

/// The table as displayed for one filter/sort/metric selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    selected_metric: MetricKind,
    filter: String,
    sort: SortSpec,
    rows: Vec<TableRow>,
    #[serde(skip)]
    maxima: [Option<f64>; 4],
}

impl TableView {
    pub fn build(
        records: &[CountyRecord],
        selected_metric: MetricKind,
        filter: &str,
        sort: SortSpec,
    ) -> Self {
        let mut rows = project(&filter_by_name(records, filter));
        sort_rows(&mut rows, sort);

        let mut maxima = [None; 4];
        for (slot, metric) in maxima.iter_mut().zip(MetricKind::all()) {
            *slot = column_max(&rows, *metric);
        }

        tracing::debug!(
            filter,
            sort = sort.field.key(),
            direction = ?sort.direction,
            rows = rows.len(),
            "Built table view"
        );

        Self {
            selected_metric,
            filter: filter.to_string(),
            sort,
            rows,
            maxima,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_metric(&self) -> MetricKind {
        self.selected_metric
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Largest 2023 value of `metric` among the visible rows.
    pub fn column_max(&self, metric: MetricKind) -> Option<f64> {
        let index = MetricKind::all()
            .iter()
            .position(|m| *m == metric)
            .unwrap_or(0);
        self.maxima[index]
    }

    pub fn severity(&self, row: &TableRow, metric: MetricKind) -> Severity {
        match self.column_max(metric) {
            Some(max) => Severity::classify(row.value(metric), max),
            None => Severity::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_data::florida_counties;

    fn names(view: &TableView) -> Vec<&'static str> {
        view.rows().iter().map(|row| row.county).collect()
    }

    #[test]
    fn test_empty_filter_keeps_dataset_order() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::LowBirthWeight,
            "",
            SortSpec::new(SortField::Population, SortDirection::Ascending),
        );
        assert_eq!(view.len(), 10);

        let filtered = filter_by_name(florida_counties(), "");
        assert_eq!(filtered.len(), 10);
        assert_eq!(filtered[0].name, "Miami-Dade");
        assert_eq!(filtered[9].name, "Sarasota");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::LowBirthWeight,
            "Pa",
            SortSpec::default(),
        );
        assert_eq!(names(&view), vec!["Palm Beach"]);

        let view = TableView::build(
            florida_counties(),
            MetricKind::LowBirthWeight,
            "OR",
            SortSpec::default(),
        );
        assert_eq!(names(&view), vec!["Hillsborough", "Orange"]);
    }

    #[test]
    fn test_filter_with_no_matches() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::PretermBirth,
            "Monroe",
            SortSpec::default(),
        );
        assert!(view.is_empty());
        assert_eq!(view.column_max(MetricKind::PretermBirth), None);
    }

    #[test]
    fn test_default_sort_is_county_ascending() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::LowBirthWeight,
            "",
            SortSpec::default(),
        );
        assert_eq!(
            names(&view),
            vec![
                "Broward",
                "Duval",
                "Hillsborough",
                "Lee",
                "Miami-Dade",
                "Orange",
                "Palm Beach",
                "Pinellas",
                "Polk",
                "Sarasota",
            ]
        );
    }

    #[test]
    fn test_sort_population_descending() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::LowBirthWeight,
            "",
            SortSpec::new(SortField::Population, SortDirection::Descending),
        );
        let first = &view.rows()[0];
        let last = &view.rows()[view.len() - 1];
        assert_eq!((first.county, first.population), ("Miami-Dade", 2_701_767));
        assert_eq!((last.county, last.population), ("Sarasota", 434_006));
    }

    #[test]
    fn test_metric_ties_keep_dataset_order_in_both_directions() {
        // Broward and Polk both have a 2023 preterm birth rate of 9.9
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let view = TableView::build(
                florida_counties(),
                MetricKind::PretermBirth,
                "",
                SortSpec::new(SortField::Metric(MetricKind::PretermBirth), direction),
            );
            let order = names(&view);
            let broward = order.iter().position(|n| *n == "Broward").unwrap();
            let polk = order.iter().position(|n| *n == "Polk").unwrap();
            assert_eq!(polk, broward + 1);
        }
    }

    #[test]
    fn test_toggle_matches_header_clicks() {
        let spec = SortSpec::default();
        let spec = spec.toggle(SortField::County);
        assert_eq!(spec.direction, SortDirection::Descending);

        let spec = spec.toggle(SortField::Population);
        assert_eq!(
            spec,
            SortSpec::new(SortField::Population, SortDirection::Ascending)
        );

        let spec = spec.toggle(SortField::Population);
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::classify(10.0, 10.0), Severity::Highest);
        assert_eq!(Severity::classify(8.0, 10.0), Severity::High);
        assert_eq!(Severity::classify(8.01, 10.0), Severity::Highest);
        assert_eq!(Severity::classify(6.0, 10.0), Severity::Medium);
        assert_eq!(Severity::classify(4.0, 10.0), Severity::Low);
        assert_eq!(Severity::classify(4.5, 10.0), Severity::Medium);
        assert_eq!(Severity::classify(0.0, 10.0), Severity::Low);
        assert_eq!(Severity::classify(3.0, 0.0), Severity::Low);
    }

    #[test]
    fn test_severity_is_relative_to_filtered_rows() {
        let all = TableView::build(
            florida_counties(),
            MetricKind::TeenBirthRate,
            "",
            SortSpec::default(),
        );
        let sarasota = all
            .rows()
            .iter()
            .find(|row| row.county == "Sarasota")
            .unwrap();
        // 8.6 / 15.0 against Duval
        assert_eq!(all.severity(sarasota, MetricKind::TeenBirthRate), Severity::Medium);

        let alone = TableView::build(
            florida_counties(),
            MetricKind::TeenBirthRate,
            "sara",
            SortSpec::default(),
        );
        let sarasota = &alone.rows()[0];
        assert_eq!(
            alone.severity(sarasota, MetricKind::TeenBirthRate),
            Severity::Highest
        );
    }

    #[test]
    fn test_column_max_tracks_filter() {
        let view = TableView::build(
            florida_counties(),
            MetricKind::MaternalMortality,
            "",
            SortSpec::default(),
        );
        assert_eq!(view.column_max(MetricKind::MaternalMortality), Some(20.8));

        let view = TableView::build(
            florida_counties(),
            MetricKind::MaternalMortality,
            "o",
            SortSpec::default(),
        );
        // Broward, Orange, Hillsborough, Polk, Sarasota
        assert_eq!(view.column_max(MetricKind::MaternalMortality), Some(18.4));
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("county".parse::<SortField>().unwrap(), SortField::County);
        assert_eq!(
            "teenBirthRate".parse::<SortField>().unwrap(),
            SortField::Metric(MetricKind::TeenBirthRate)
        );
        assert!("rank".parse::<SortField>().is_err());
    }

    #[test]
    fn test_column_index_follows_table_order() {
        for (index, field) in SortField::all().iter().enumerate() {
            assert_eq!(field.column_index(), index);
        }
    }
}
