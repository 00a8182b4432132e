use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use finwheel_core::{MemoryLedger, Period};
use ratatui::{DefaultTerminal, Frame};

use crate::components::{Component, EventResult};
use crate::data::storage::DataDirectory;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::overview::OverviewScreen;
use crate::state::{AppState, ConfirmModal, MessageModal, ModalAction, ModalState};

pub const EDITING_UNAVAILABLE: &str = "Adding and editing operations or categories is not available here";

/// Startup choices that override the data directory defaults
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Operations snapshot to read instead of `{data_dir}/operations.yaml`
    pub ledger: Option<PathBuf>,
    /// Period to open instead of the configured default
    pub period: Option<Period>,
}

pub struct App {
    state: AppState,
    overview: OverviewScreen,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            overview: OverviewScreen::new(),
        }
    }

    /// Create the app from a data directory.
    ///
    /// A broken config falls back to defaults; a broken ledger snapshot opens
    /// an empty ledger and reports the problem in a message modal.
    pub fn with_data_dir(data_dir: PathBuf, options: LaunchOptions) -> Self {
        let storage = DataDirectory::new(data_dir);
        let mut config = storage.load_config_or_default();
        if let Some(period) = options.period {
            config.default_period = period;
        }

        let ledger_path = options.ledger.unwrap_or_else(|| storage.ledger_path());
        let (ledger, load_error) = match MemoryLedger::load(&ledger_path) {
            Ok(ledger) => (ledger, None),
            Err(e) => {
                tracing::warn!(error = %e, path = %ledger_path.display(), "Failed to load ledger");
                (MemoryLedger::default(), Some(e))
            }
        };

        let today = jiff::Zoned::now().date();
        let mut state = AppState::new(config, Box::new(ledger), today);
        if let Some(e) = load_error {
            state.modal = ModalState::Message(MessageModal::error(
                "Ledger not loaded",
                &format!("{}: {}", ledger_path.display(), e),
            ));
        }

        Self::new(state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.overview.render(frame, frame.area(), &self.state);
        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_open() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action) => self.handle_modal_result(action),
                ModalResult::Cancelled => self.state.modal = ModalState::None,
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                self.state.info_message = None;
                return;
            }
            KeyCode::Char('n') | KeyCode::Char('e') | KeyCode::Char('c') => {
                self.state.set_info(EDITING_UNAVAILABLE);
                return;
            }
            _ => {}
        }

        // A new key press replaces the previous status
        self.state.clear_error();
        self.state.info_message = None;

        if self.overview.handle_key(key_event, &mut self.state) == EventResult::Exit {
            self.state.exit = true;
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction) {
        let modal = std::mem::take(&mut self.state.modal);
        match action {
            ModalAction::DeleteOperation => {
                if let ModalState::Confirm(ConfirmModal {
                    target: Some(id), ..
                }) = modal
                {
                    self.state.confirm_delete(id);
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::config_data::AppConfig;
    use finwheel_core::{Operation, OperationId, Side};
    use jiff::civil::date;
    use ratatui::{Terminal, backend::TestBackend};

    pub(crate) fn empty_state() -> AppState {
        AppState::new(
            AppConfig::default(),
            Box::new(MemoryLedger::default()),
            date(2026, 10, 19),
        )
    }

    fn sample_app() -> App {
        let op = |id, day, category: &str, amount| Operation {
            id: OperationId(id),
            date: date(2026, 10, day),
            category: category.to_string(),
            amount,
            comment: String::new(),
        };
        let ledger = MemoryLedger::new(vec![
            op(1, 1, "Salary", 3000.0),
            op(2, 2, "Housing", -600.0),
            op(3, 3, "Groceries", -300.0),
            op(4, 4, "Travel", -100.0),
        ]);
        App::new(AppState::new(
            AppConfig::default(),
            Box::new(ledger),
            date(2026, 10, 19),
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);

        let mut app = sample_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_period_and_side_keys() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().period, Period::Year);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.state().period, Period::CurrentMonth);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.state().period, Period::Year);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.state().side, Side::Income);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().side, Side::Outcome);
    }

    #[test]
    fn test_delete_flow() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.state().error_message.is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.state().error_message.is_none());

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.state().modal, ModalState::Confirm(_)));

        // Other keys are swallowed by the modal
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.state().exit);

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.state().modal.is_open());
        assert_eq!(app.state().operations.len(), 3);
        assert_eq!(app.state().aggregate.outcome.total, -400.0);
    }

    #[test]
    fn test_cancelled_delete_keeps_operation() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.state().modal.is_open());
        assert_eq!(app.state().operations.len(), 4);
    }

    #[test]
    fn test_editing_keys_show_info() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state().info_message.as_deref(), Some(EDITING_UNAVAILABLE));
    }

    #[test]
    fn test_renders_breakdown() {
        let mut app = sample_app();
        let text = screen_text(&mut app);
        assert!(text.contains("Outcome by category"));
        assert!(text.contains("Housing"));
        assert!(text.contains("60.0%"));
        assert!(text.contains("2000 ₽"));
        assert!(text.contains(" 2026-10-01 .. 2026-11-01 "));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = App::new(empty_state());
        let text = screen_text(&mut app);
        assert!(text.contains("No outcome for current month"));
    }

    #[test]
    fn test_broken_ledger_opens_message() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = dir.path().join("broken.yaml");
        std::fs::write(&ledger, "operations: 12\n").unwrap();

        let mut app = App::with_data_dir(
            dir.path().to_path_buf(),
            LaunchOptions {
                ledger: Some(ledger),
                period: Some(Period::Year),
            },
        );
        assert!(matches!(app.state().modal, ModalState::Message(_)));
        assert_eq!(app.state().period, Period::Year);
        assert!(app.state().operations.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.state().modal.is_open());
    }
}
