use florida_health::{
    app_state::InputMode,
    county::{CountyRecord, RaceEthnicity},
    formatting::format_thousands,
    metric::{MetricKind, YEARS},
    table_view::{Severity, SortField, TableView},
    trends::{ComparisonBar, DemographicBar, SummaryCards, TrendDirection},
};
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Cell, Chart, Dataset,
        GraphType, List, ListItem, Paragraph, Row, Table, Tabs,
    },
};

pub fn create_block<'a>(title: impl Into<String>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White))
        .title(title.into())
        .border_type(BorderType::Plain)
}

fn create_highlight_style() -> Style {
    Style::default()
        .bg(Color::Yellow)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Highest => Color::Red,
        Severity::High => Color::Yellow,
        Severity::Medium => Color::Green,
        Severity::Low => Color::Blue,
    }
}

fn race_color(group: RaceEthnicity) -> Color {
    match group {
        RaceEthnicity::WhiteNonHispanic => Color::Blue,
        RaceEthnicity::BlackNonHispanic => Color::Red,
        RaceEthnicity::Hispanic => Color::Green,
        RaceEthnicity::AsianPacificIslander => Color::Magenta,
        RaceEthnicity::Other => Color::Yellow,
    }
}

/// Bar values are tenths so one decimal survives the integer bar height.
fn tenths(value: f64) -> u64 {
    (value * 10.0).round().max(0.0) as u64
}

pub fn create_metric_tabs<'a>(active_metric: MetricKind) -> Tabs<'a> {
    let titles: Vec<Line> = MetricKind::selector_order()
        .iter()
        .enumerate()
        .map(|(i, metric)| Line::from(format!("{} {}", i + 1, metric.selector_label())))
        .collect();
    Tabs::new(titles)
        .select(active_metric.into())
        .block(
            create_block("Health Metric (m)")
                .title(Title::from(active_metric.description()).position(Position::Bottom)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw("|"))
}

pub fn create_search_widget<'a>(search: &str, input_mode: InputMode) -> Paragraph<'a> {
    let (text, style) = match input_mode {
        InputMode::Search => (format!("{}_", search), Style::default().fg(Color::Yellow)),
        InputMode::Normal if search.is_empty() => (
            "Type / to search counties".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        InputMode::Normal => (search.to_string(), Style::default()),
    };
    Paragraph::new(Line::from(Span::styled(text, style))).block(create_block("Search Counties"))
}

pub fn create_county_list_widget<'a>(all_counties: &[CountyRecord]) -> List<'a> {
    let county_items: Vec<_> = all_counties
        .iter()
        .map(|county| ListItem::new(Line::from(county.name)))
        .collect();
    List::new(county_items)
        .block(create_block("Counties (j/k)"))
        .highlight_style(create_highlight_style())
}

pub fn create_summary_cards<'a>(county: &str, cards: &SummaryCards) -> [Paragraph<'a>; 4] {
    let selected = &cards.selected;
    let (arrow, color) = match selected.direction() {
        TrendDirection::Improving => ("▼", Color::Green),
        TrendDirection::Worsening => ("▲", Color::Red),
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);

    [
        Paragraph::new(vec![
            Line::from(Span::styled(selected.value_label(), bold)),
            Line::from(Span::styled(
                format!("{} {}", arrow, selected.change_label()),
                Style::default().fg(color),
            )),
        ])
        .block(create_block(format!(
            "{} · {}",
            selected.metric.display_name(),
            county
        ))),
        Paragraph::new(vec![
            Line::from(Span::styled(cards.population_label(), bold)),
            Line::from("residents"),
        ])
        .block(create_block("Population")),
        Paragraph::new(Line::from(Span::styled(
            MetricKind::MaternalMortality.format_value(cards.maternal_mortality),
            bold,
        )))
        .block(create_block("Maternal Mortality")),
        Paragraph::new(Line::from(Span::styled(
            MetricKind::TeenBirthRate.format_value(cards.teen_birth_rate),
            bold,
        )))
        .block(create_block("Teen Birth Rate")),
    ]
}

/// `points` are `(year, value)` pairs as plotted.
pub fn create_trend_chart<'a>(points: &'a [(f64, f64)], metric: MetricKind) -> Chart<'a> {
    let (low, high) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), (_, v)| {
        (lo.min(*v), hi.max(*v))
    });
    let low = (low - 1.0).max(0.0).floor();
    let high = (high + 1.0).ceil();

    let datasets = vec![Dataset::default()
        .name(metric.display_name())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(points)];

    let first_year = f64::from(YEARS[0]);
    let last_year = f64::from(YEARS[YEARS.len() - 1]);

    Chart::new(datasets)
        .block(create_block("3-Year Trend Analysis"))
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds([first_year, last_year])
                .labels(
                    YEARS
                        .iter()
                        .map(|y| Span::raw(y.to_string()))
                        .collect::<Vec<Span>>(),
                ),
        )
        .y_axis(
            Axis::default()
                .title(metric.short_unit().trim())
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(vec![
                    Span::raw(format!("{:.1}", low)),
                    Span::raw(format!("{:.1}", (low + high) / 2.0)),
                    Span::raw(format!("{:.1}", high)),
                ]),
        )
}

pub enum DemographicsWidget<'a> {
    Chart(BarChart<'a>),
    Unavailable(Paragraph<'a>),
}

pub fn create_demographics_widget<'a>(
    bars: &[DemographicBar],
    metric: MetricKind,
    bar_width: u16,
) -> DemographicsWidget<'a> {
    let title = "Health Disparities by Race/Ethnicity";
    let bars: Vec<Bar> = bars
        .iter()
        .filter_map(|bar| {
            let value = bar.value?;
            Some(
                Bar::default()
                    .value(tenths(value))
                    .text_value(format!("{:.1}", value))
                    .label(Line::from(bar.group.label()))
                    .style(Style::default().fg(race_color(bar.group))),
            )
        })
        .collect();

    if bars.is_empty() {
        return DemographicsWidget::Unavailable(
            Paragraph::new(Line::from(format!(
                "No race/ethnicity breakdown for {}",
                metric.display_name()
            )))
            .block(create_block(title)),
        );
    }

    DemographicsWidget::Chart(
        BarChart::default()
            .block(create_block(title))
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(Style::default().fg(Color::Black).bg(Color::White))
            .data(BarGroup::default().bars(&bars)),
    )
}

pub fn create_comparison_chart<'a>(
    bars: &[ComparisonBar],
    metric: MetricKind,
    bar_width: u16,
) -> BarChart<'a> {
    let bars: Vec<Bar> = bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(tenths(bar.value))
                .text_value(format!("{:.1}", bar.value))
                .label(Line::from(bar.county))
                .style(Style::default().fg(severity_color(bar.severity)))
        })
        .collect();

    BarChart::default()
        .block(create_block(format!(
            "County Comparison - {}",
            metric.display_name()
        )))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(Color::White))
        .data(BarGroup::default().bars(&bars))
}

fn header_cell<'a>(field: SortField, view: &TableView, cursor: usize) -> Cell<'a> {
    let sort = view.sort();
    let arrow = if sort.field == field {
        sort.direction.arrow()
    } else {
        "↕"
    };
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if field == SortField::Metric(view.selected_metric()) {
        style = style.fg(Color::Cyan);
    }
    if field.column_index() == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from(format!("{} {}", field.display_name(), arrow)).style(style)
}

pub fn create_county_table_widget<'a>(view: &TableView, sort_cursor: usize) -> Table<'a> {
    let header = Row::new(
        SortField::all()
            .iter()
            .map(|field| header_cell(*field, view, sort_cursor))
            .collect::<Vec<_>>(),
    );

    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|row| {
            let mut cells = vec![
                Cell::from(row.county),
                Cell::from(format_thousands(u64::from(row.population))),
            ];
            for metric in MetricKind::all() {
                let severity = view.severity(row, *metric);
                cells.push(
                    Cell::from(metric.format_value(row.value(*metric)))
                        .style(Style::default().fg(severity_color(severity))),
                );
            }
            Row::new(cells)
        })
        .collect();

    let legend = Line::from(vec![
        Span::styled("● Highest ", Style::default().fg(severity_color(Severity::Highest))),
        Span::styled("● High ", Style::default().fg(severity_color(Severity::High))),
        Span::styled("● Medium ", Style::default().fg(severity_color(Severity::Medium))),
        Span::styled("● Low ", Style::default().fg(severity_color(Severity::Low))),
        Span::raw("· Data represents 2023 health metrics"),
    ]);

    Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(14),
            Constraint::Percentage(19),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ],
    )
    .header(header)
    .block(
        create_block(format!(
            "Health Metrics by County · Showing {} counties",
            view.len()
        ))
        .title(Title::from(legend).position(Position::Bottom)),
    )
    .column_spacing(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenths_keeps_one_decimal() {
        assert_eq!(tenths(9.6), 96);
        assert_eq!(tenths(10.1), 101);
        assert_eq!(tenths(-1.0), 0);
    }

    #[test]
    fn test_severity_palette_is_distinct() {
        let colors: Vec<Color> = [
            Severity::Highest,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
        .iter()
        .map(|s| severity_color(*s))
        .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
