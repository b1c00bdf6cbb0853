use super::widgets::{
    create_comparison_chart, create_county_list_widget, create_county_table_widget,
    create_demographics_widget, create_metric_tabs, create_search_widget, create_summary_cards,
    create_trend_chart, DemographicsWidget,
};
use florida_health::app_state::{DashboardState, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(total_drawing_rect: &mut Frame, app_state: &mut DashboardState) {
    let app_rects = create_app_rects(total_drawing_rect.size());

    total_drawing_rect.render_widget(
        create_metric_tabs(app_state.active_metric),
        app_rects.metric_selector,
    );
    total_drawing_rect.render_widget(
        create_search_widget(&app_state.search, app_state.input_mode),
        app_rects.search,
    );
    total_drawing_rect.render_stateful_widget(
        create_county_list_widget(app_state.counties()),
        app_rects.county_selector,
        &mut app_state.counties_list,
    );

    draw_summary_cards(total_drawing_rect, app_state, &app_rects);
    draw_charts(total_drawing_rect, app_state, &app_rects);

    let table_view = app_state.table_view();
    total_drawing_rect.render_widget(
        create_county_table_widget(&table_view, app_state.sort_cursor),
        app_rects.table,
    );

    total_drawing_rect.render_widget(create_help_line(app_state), app_rects.help);
}

fn draw_summary_cards(rect: &mut Frame, app_state: &DashboardState, app_rects: &AppRects) {
    let card_rects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(app_rects.cards);
    let county = app_state.selected_county();
    let cards = create_summary_cards(county.name, &app_state.summary());
    for (card, area) in cards.into_iter().zip(card_rects.iter()) {
        rect.render_widget(card, *area);
    }
}

fn draw_charts(rect: &mut Frame, app_state: &DashboardState, app_rects: &AppRects) {
    let chart_rects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(app_rects.charts);

    let metric = app_state.active_metric;
    let points: Vec<(f64, f64)> = app_state
        .trend()
        .iter()
        .map(|point| (f64::from(point.year), point.value))
        .collect();
    rect.render_widget(create_trend_chart(&points, metric), chart_rects[0]);

    let demographics = app_state.demographics();
    let bar_width = bar_width_for(chart_rects[1], demographics.len());
    match create_demographics_widget(&demographics, metric, bar_width) {
        DemographicsWidget::Chart(chart) => rect.render_widget(chart, chart_rects[1]),
        DemographicsWidget::Unavailable(message) => rect.render_widget(message, chart_rects[1]),
    }

    let comparison = app_state.comparison();
    let bar_width = bar_width_for(app_rects.comparison, comparison.len());
    rect.render_widget(
        create_comparison_chart(&comparison, metric, bar_width),
        app_rects.comparison,
    );
}

/// Widest bar that still fits `bars` bars and their one-cell gaps inside a
/// bordered `area`.
fn bar_width_for(area: Rect, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2);
    let per_bar = inner / bars as u16;
    per_bar.saturating_sub(1).max(1)
}

fn create_help_line<'a>(app_state: &DashboardState) -> Paragraph<'a> {
    let hints = match app_state.input_mode {
        InputMode::Normal => {
            "q quit | j/k county | m/M 1-4 metric | / search | h/l column | s sort | e export"
        }
        InputMode::Search => "type to filter | Backspace delete | Enter keep | Esc clear",
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];
    if let Some(status) = &app_state.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.clone(), Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans))
}

struct AppRects {
    metric_selector: Rect,
    search: Rect,
    county_selector: Rect,
    cards: Rect,
    charts: Rect,
    comparison: Rect,
    table: Rect,
    help: Rect,
}

fn create_app_rects(total_drawing_rect: Rect) -> AppRects {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(total_drawing_rect);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(areas[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(16), Constraint::Percentage(84)])
        .split(areas[1]);

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(10),
            Constraint::Length(14),
        ])
        .split(body[1]);

    AppRects {
        metric_selector: controls[0],
        search: controls[1],
        county_selector: body[0],
        cards: panels[0],
        charts: panels[1],
        comparison: panels[2],
        table: panels[3],
        help: areas[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use florida_health::{metric::MetricKind, table_view::SortField};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app_state: &mut DashboardState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(200, 60)).unwrap();
        terminal.draw(|frame| draw(frame, app_state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_default_dashboard_shows_miami_dade_low_birth_weight() {
        let mut state = DashboardState::default();
        let lines = render(&mut state);

        assert!(contains(&lines, "9.6 %"));
        assert!(contains(&lines, "0.5 from 2022"));
        assert!(contains(&lines, "2,701,767"));
        assert!(contains(&lines, "Showing 10 counties"));
        assert!(contains(&lines, "County Comparison - Low Birth Weight"));
        assert!(contains(&lines, MetricKind::LowBirthWeight.description()));
    }

    #[test]
    fn test_search_updates_table_caption() {
        let mut state = DashboardState::default();
        state.search = "Pa".to_string();
        let lines = render(&mut state);

        assert!(contains(&lines, "Showing 1 counties"));
        assert!(contains(&lines, "Palm Beach"));
    }

    #[test]
    fn test_maternal_mortality_has_no_breakdown() {
        let mut state = DashboardState::default();
        state.set_metric(MetricKind::MaternalMortality);
        let lines = render(&mut state);

        assert!(contains(&lines, "No race/ethnicity breakdown for Maternal Mortality"));
        assert!(contains(
            &lines,
            "Deaths per 100,000 live births within 42 days of pregnancy termination"
        ));
    }

    #[test]
    fn test_sort_arrow_follows_active_column() {
        let mut state = DashboardState::default();
        state.toggle_sort(SortField::Population);
        state.toggle_sort(SortField::Population);
        let lines = render(&mut state);

        assert!(contains(&lines, "Population ▼"));
        assert!(contains(&lines, "County ↕"));
    }

    #[test]
    fn test_bar_width_fits_area() {
        let area = Rect::new(0, 0, 102, 10);
        assert_eq!(bar_width_for(area, 10), 9);
        assert_eq!(bar_width_for(Rect::new(0, 0, 4, 4), 10), 1);
        assert_eq!(bar_width_for(area, 0), 1);
    }
}
