//! Florida county public-health dashboard.
//!
//! A static mock dataset of ten counties and the derived views the terminal
//! dashboard renders: a filterable, sortable 2023 table with relative
//! severity tiers, per-county trends, demographic breakdowns, a cross-county
//! comparison and a CSV export.

pub mod app_state;
pub mod config;
pub mod county;
pub mod csv_export;
pub mod error;
pub mod formatting;
pub mod health_data;
pub mod metric;
pub mod table_view;
pub mod trends;

pub use county::{CountyRecord, RaceEthnicity};
pub use error::{HealthDataError, Result};
pub use health_data::{find_county, florida_counties};
pub use metric::MetricKind;
pub use table_view::{Severity, SortDirection, SortField, SortSpec, TableView};
