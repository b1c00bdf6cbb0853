use crate::{
    config::DisplayConfig,
    county::CountyRecord,
    health_data::{county_index, florida_counties},
    metric::MetricKind,
    table_view::{SortField, SortSpec, TableView},
    trends::{self, ComparisonBar, DemographicBar, SummaryCards, TrendPoint},
};
use ratatui::widgets::ListState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the county search text.
    Search,
}

/// Everything the dashboard's controls can change. The dataset itself is
/// static and never stored here.
pub struct DashboardState {
    pub active_metric: MetricKind,
    pub counties_list: ListState,
    pub search: String,
    pub sort: SortSpec,
    /// Table column the sort key acts on, index into `SortField::all()`.
    pub sort_cursor: usize,
    pub input_mode: InputMode,
    pub status: Option<String>,
    counties: &'static [CountyRecord],
}

impl DashboardState {
    pub fn new(display: &DisplayConfig) -> Self {
        let mut state = Self::default();
        state.active_metric = display.metric_kind();
        if let Err(e) = state.select_county(&display.county) {
            tracing::warn!("{}; starting on {}", e, state.selected_county().name);
        }
        state
    }

    pub fn counties(&self) -> &'static [CountyRecord] {
        self.counties
    }

    pub fn select_next_index(&mut self) {
        let next_index = self.counties_list.selected().map_or(0, |i| i + 1);
        if next_index < self.counties.len() {
            self.counties_list.select(Some(next_index));
        }
    }

    pub fn select_previous_index(&mut self) {
        if self.counties.is_empty() {
            return;
        }
        let previous_index = self
            .counties_list
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.counties_list.select(Some(previous_index));
    }

    pub fn select_county(&mut self, name: &str) -> crate::error::Result<()> {
        let index = county_index(name)?;
        self.counties_list.select(Some(index));
        Ok(())
    }

    pub fn selected_county(&self) -> &'static CountyRecord {
        let index = self.counties_list.selected().unwrap_or(0);
        &self.counties[index.min(self.counties.len() - 1)]
    }

    pub fn set_metric(&mut self, metric: MetricKind) {
        tracing::debug!(metric = metric.key(), "Metric selected");
        self.active_metric = metric;
    }

    pub fn next_metric(&mut self) {
        self.set_metric(self.active_metric.next());
    }

    pub fn previous_metric(&mut self) {
        self.set_metric(self.active_metric.previous());
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search.push(ch);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn move_sort_cursor_left(&mut self) {
        self.sort_cursor = self.sort_cursor.saturating_sub(1);
    }

    pub fn move_sort_cursor_right(&mut self) {
        if self.sort_cursor + 1 < SortField::all().len() {
            self.sort_cursor += 1;
        }
    }

    pub fn sort_cursor_field(&self) -> SortField {
        SortField::all()[self.sort_cursor.min(SortField::all().len() - 1)]
    }

    /// Sorts on the column under the cursor, as if its header were clicked.
    pub fn toggle_sort_at_cursor(&mut self) {
        self.toggle_sort(self.sort_cursor_field());
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
        self.sort_cursor = field.column_index();
        tracing::debug!(field = field.key(), direction = ?self.sort.direction, "Sort changed");
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn table_view(&self) -> TableView {
        TableView::build(self.counties, self.active_metric, &self.search, self.sort)
    }

    pub fn summary(&self) -> SummaryCards {
        trends::summary_cards(self.selected_county(), self.active_metric)
    }

    pub fn trend(&self) -> [TrendPoint; 3] {
        trends::trend(self.selected_county(), self.active_metric)
    }

    pub fn demographics(&self) -> Vec<DemographicBar> {
        trends::demographic_breakdown(self.selected_county(), self.active_metric)
    }

    pub fn comparison(&self) -> Vec<ComparisonBar> {
        trends::county_comparison(self.counties, self.active_metric)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        let mut counties_list = ListState::default();
        counties_list.select(Some(0));
        Self {
            active_metric: MetricKind::LowBirthWeight,
            counties_list,
            search: String::new(),
            sort: SortSpec::default(),
            sort_cursor: 0,
            input_mode: InputMode::Normal,
            status: None,
            counties: florida_counties(),
        }
    }
}
