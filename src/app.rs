use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use florida_health::{
    app_state::{DashboardState, InputMode},
    config::Config,
    csv_export,
    metric::MetricKind,
};
use std::{
    path::Path,
    sync::mpsc::{self, Receiver as StdReceiver, Sender as StdSender},
    thread,
    time::{Duration, Instant},
};

mod drawing;
pub mod logging;
mod terminal_utils;
mod widgets;

pub enum TickedUserInput {
    Input(KeyEvent),
    Tick,
}

#[derive(PartialEq, Debug)]
pub enum ResponseToUserInput {
    Continue,
    Stop,
}

pub fn run(app_state: DashboardState, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (tx_user_input, rx_user_input) = mpsc::channel();
    let tick_rate = config.display.tick_rate();
    thread::spawn(move || run_user_event_loop(tick_rate, tx_user_input));

    tracing::info!(
        county = app_state.selected_county().name,
        metric = app_state.active_metric.key(),
        "Starting dashboard"
    );
    run_app_loop(rx_user_input, app_state, &config.export.directory)
}

pub fn run_app_loop(
    rx_user_input: StdReceiver<TickedUserInput>,
    mut app_state: DashboardState,
    export_directory: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = terminal_utils::create_terminal()?;
    let mut response_to_input = ResponseToUserInput::Continue;

    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        while response_to_input == ResponseToUserInput::Continue {
            terminal.draw(|rect| drawing::draw(rect, &mut app_state))?;
            response_to_input =
                handle_user_input(&rx_user_input.recv()?, &mut app_state, export_directory);
        }
        Ok(())
    })();

    terminal_utils::prepare_terminal_for_app_exit(&mut terminal)?;
    tracing::info!("Dashboard closed");
    result
}

pub fn handle_user_input(
    user_input: &TickedUserInput,
    app_state: &mut DashboardState,
    export_directory: &Path,
) -> ResponseToUserInput {
    let TickedUserInput::Input(event) = user_input else {
        return ResponseToUserInput::Continue;
    };
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return ResponseToUserInput::Stop;
    }
    match app_state.input_mode {
        InputMode::Normal => handle_normal_input(event, app_state, export_directory),
        InputMode::Search => {
            handle_search_input(event, app_state);
            ResponseToUserInput::Continue
        }
    }
}

fn handle_normal_input(
    event: &KeyEvent,
    app_state: &mut DashboardState,
    export_directory: &Path,
) -> ResponseToUserInput {
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => return ResponseToUserInput::Stop,
        KeyCode::Char('j') | KeyCode::Down => app_state.select_next_index(),
        KeyCode::Char('k') | KeyCode::Up => app_state.select_previous_index(),
        KeyCode::Char('m') => app_state.next_metric(),
        KeyCode::Char('M') => app_state.previous_metric(),
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            if let Ok(metric) = MetricKind::try_from(index) {
                app_state.set_metric(metric);
            }
        }
        KeyCode::Char('/') => app_state.input_mode = InputMode::Search,
        KeyCode::Char('h') | KeyCode::Left => app_state.move_sort_cursor_left(),
        KeyCode::Char('l') | KeyCode::Right => app_state.move_sort_cursor_right(),
        KeyCode::Char('s') | KeyCode::Enter => app_state.toggle_sort_at_cursor(),
        KeyCode::Char('e') => export_table(app_state, export_directory),
        _ => {}
    }
    ResponseToUserInput::Continue
}

fn handle_search_input(event: &KeyEvent, app_state: &mut DashboardState) {
    match event.code {
        KeyCode::Char(ch) => app_state.push_search_char(ch),
        KeyCode::Backspace => app_state.pop_search_char(),
        KeyCode::Enter => app_state.input_mode = InputMode::Normal,
        KeyCode::Esc => {
            app_state.clear_search();
            app_state.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

fn export_table(app_state: &mut DashboardState, export_directory: &Path) {
    match csv_export::write_export(export_directory, app_state.counties()) {
        Ok(path) => app_state.set_status(format!("Exported {}", path.display())),
        Err(error) => {
            tracing::error!("Export failed: {error}");
            app_state.set_status(format!("Export failed: {error}"));
        }
    }
}

pub fn run_user_event_loop(tick_rate: Duration, tx: StdSender<TickedUserInput>) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(TickedUserInput::Input(key)).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(error) => tracing::warn!("Failed to read terminal event: {error}"),
            },
            Ok(false) => {}
            Err(error) => {
                tracing::error!("Failed to poll terminal events: {error}");
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(TickedUserInput::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use florida_health::{csv_export::EXPORT_FILE_NAME, table_view::SortField};

    fn key(code: KeyCode) -> TickedUserInput {
        TickedUserInput::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(app_state: &mut DashboardState, code: KeyCode) -> ResponseToUserInput {
        handle_user_input(&key(code), app_state, Path::new("."))
    }

    #[test]
    fn test_quit_keys() {
        let mut state = DashboardState::default();
        assert_eq!(press(&mut state, KeyCode::Char('q')), ResponseToUserInput::Stop);
        assert_eq!(press(&mut state, KeyCode::Esc), ResponseToUserInput::Stop);

        let ctrl_c = TickedUserInput::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(
            handle_user_input(&ctrl_c, &mut state, Path::new(".")),
            ResponseToUserInput::Stop
        );
    }

    #[test]
    fn test_tick_changes_nothing() {
        let mut state = DashboardState::default();
        let response = handle_user_input(&TickedUserInput::Tick, &mut state, Path::new("."));
        assert_eq!(response, ResponseToUserInput::Continue);
        assert_eq!(state.selected_county().name, "Miami-Dade");
    }

    #[test]
    fn test_navigation_and_metric_keys() {
        let mut state = DashboardState::default();
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_county().name, "Orange");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.selected_county().name, "Broward");

        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.active_metric, MetricKind::MaternalMortality);
        press(&mut state, KeyCode::Char('m'));
        assert_eq!(state.active_metric, MetricKind::TeenBirthRate);
        press(&mut state, KeyCode::Char('M'));
        assert_eq!(state.active_metric, MetricKind::MaternalMortality);
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let mut state = DashboardState::default();
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.input_mode, InputMode::Search);

        // 'q' is text while searching, not quit
        for ch in ['p', 'q'] {
            assert_eq!(press(&mut state, KeyCode::Char(ch)), ResponseToUserInput::Continue);
        }
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search, "pa");
        assert_eq!(state.table_view().rows()[0].county, "Palm Beach");

        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Esc);
        assert!(state.search.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_sort_keys() {
        let mut state = DashboardState::default();
        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.sort.field, SortField::Population);
        assert_eq!(state.table_view().rows()[9].county, "Sarasota");
    }

    #[test]
    fn test_export_key_writes_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = DashboardState::default();
        handle_user_input(&key(KeyCode::Char('e')), &mut state, dir.path());

        let path = dir.path().join(EXPORT_FILE_NAME);
        assert!(path.exists());
        let status = state.status.clone().unwrap();
        assert!(status.starts_with("Exported "));
        assert!(status.ends_with(EXPORT_FILE_NAME));
    }
}
