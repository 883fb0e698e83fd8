use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent};
use ledger::{Amount, Ledger, Record, categories};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    quick_add, ui,
    ui::keymap::AppAction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form(FormField),
    Search,
    Table,
    QuickAdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Amount,
    Category,
    Note,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Note => "Note",
        }
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    pub amount: String,
    pub category: String,
    pub note: String,
    /// Index into [`categories::SUGGESTED`] while cycling with Up/Down.
    pub suggestion: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug)]
pub struct AppState {
    pub focus: Focus,
    pub form: FormState,
    pub search: String,
    /// Applied category filter; the search box may be edited without applying.
    pub filter: Option<String>,
    pub quick_input: String,
    /// Rows currently shown (filtered view of the ledger).
    pub rows: Vec<Record>,
    pub selected: usize,
    pub count: usize,
    pub total: Amount,
    pub month_total: Amount,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
    pub file: String,
    pub currency: String,
}

pub struct App {
    ledger: Ledger,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let ledger = Ledger::open(&config.file)?;
        let state = AppState {
            focus: Focus::Form(FormField::Amount),
            form: FormState::default(),
            search: String::new(),
            filter: None,
            quick_input: String::new(),
            rows: Vec::new(),
            selected: 0,
            count: 0,
            total: Amount::ZERO,
            month_total: Amount::ZERO,
            toast: None,
            last_refresh: None,
            file: config.file.clone(),
            currency: config.currency.clone(),
        };

        let mut app = Self {
            ledger,
            state,
            should_quit: false,
        };
        app.refresh();
        Ok(app)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any keypress dismisses a visible toast.
        self.state.toast = None;

        match ui::keymap::map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => self.cancel(),
            AppAction::NextField => self.advance_focus(),
            AppAction::Submit => self.submit(),
            AppAction::Backspace => {
                if let Some(field) = self.active_input_mut() {
                    field.pop();
                }
            }
            AppAction::Delete => {
                if self.state.focus == Focus::Table {
                    self.delete_selected();
                }
            }
            AppAction::Up => self.move_up(),
            AppAction::Down => self.move_down(),
            AppAction::Input(ch) => self.input(ch),
            AppAction::None => {}
        }

        Ok(())
    }

    fn advance_focus(&mut self) {
        self.state.focus = match self.state.focus {
            Focus::Form(FormField::Amount) => Focus::Form(FormField::Category),
            Focus::Form(FormField::Category) => Focus::Form(FormField::Note),
            Focus::Form(FormField::Note) => Focus::Search,
            Focus::Search => Focus::Table,
            Focus::Table => Focus::Form(FormField::Amount),
            Focus::QuickAdd => Focus::QuickAdd,
        };
    }

    fn cancel(&mut self) {
        match self.state.focus {
            Focus::QuickAdd => {
                self.state.quick_input.clear();
                self.state.focus = Focus::Table;
            }
            Focus::Search => {
                self.state.search.clear();
                self.state.filter = None;
                self.refresh();
                self.state.focus = Focus::Table;
            }
            Focus::Form(_) => self.state.focus = Focus::Table,
            Focus::Table => {}
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.state.focus {
            Focus::Form(FormField::Amount) => Some(&mut self.state.form.amount),
            Focus::Form(FormField::Category) => Some(&mut self.state.form.category),
            Focus::Form(FormField::Note) => Some(&mut self.state.form.note),
            Focus::Search => Some(&mut self.state.search),
            Focus::QuickAdd => Some(&mut self.state.quick_input),
            Focus::Table => None,
        }
    }

    fn input(&mut self, ch: char) {
        match self.state.focus {
            Focus::Table => self.table_command(ch),
            Focus::Form(FormField::Category) => {
                self.state.form.suggestion = None;
                self.state.form.category.push(ch);
            }
            _ => {
                if let Some(field) = self.active_input_mut() {
                    field.push(ch);
                }
            }
        }
    }

    fn table_command(&mut self, ch: char) {
        match ch {
            'q' => self.should_quit = true,
            'a' => {
                self.state.quick_input.clear();
                self.state.focus = Focus::QuickAdd;
            }
            'd' => self.delete_selected(),
            't' => {
                let message = format!("Total expenses: {} {}", self.state.total, self.state.currency);
                self.toast(ToastLevel::Info, message);
            }
            'm' => {
                let message = format!(
                    "This month's total: {} {}",
                    self.state.month_total, self.state.currency
                );
                self.toast(ToastLevel::Info, message);
            }
            'r' => self.reload(),
            '/' => self.state.focus = Focus::Search,
            'j' => self.select_next(),
            'k' => self.select_prev(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.state.focus {
            Focus::Form(_) => self.submit_form(),
            Focus::Search => {
                let trimmed = self.state.search.trim();
                self.state.filter = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
                self.state.selected = 0;
                self.refresh();
                self.state.focus = Focus::Table;
            }
            Focus::QuickAdd => self.submit_quick(),
            Focus::Table => {}
        }
    }

    fn submit_form(&mut self) {
        let amount_raw = self.state.form.amount.trim().to_string();
        let category = self.state.form.category.trim().to_string();

        if amount_raw.is_empty() || category.is_empty() {
            self.toast(ToastLevel::Error, "Amount and Category required!");
            return;
        }

        let amount: Amount = match amount_raw.parse() {
            Ok(amount) => amount,
            Err(_) => {
                self.toast(ToastLevel::Error, "Amount must be numeric!");
                return;
            }
        };

        let note = self.state.form.note.trim().to_string();
        match self.ledger.add(amount, &category, &note) {
            Ok(_) => {
                // Category stays selected for repeat entries; amount and note clear.
                self.state.form.amount.clear();
                self.state.form.note.clear();
                self.refresh();
                self.toast(ToastLevel::Success, "Expense added!");
            }
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    fn submit_quick(&mut self) {
        let parsed = match quick_add::parse(&self.state.quick_input) {
            Ok(parsed) => parsed,
            Err(message) => {
                self.toast(ToastLevel::Error, message);
                return;
            }
        };

        match self
            .ledger
            .add(parsed.amount, &parsed.category, &parsed.note)
        {
            Ok(_) => {
                self.state.quick_input.clear();
                self.state.focus = Focus::Table;
                self.refresh();
                self.toast(ToastLevel::Success, "Expense added!");
            }
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    fn delete_selected(&mut self) {
        let Some(record) = self.state.rows.get(self.state.selected).cloned() else {
            self.toast(ToastLevel::Error, "Select a row to delete");
            return;
        };

        match self.ledger.remove(record.id) {
            Ok(_) => {
                self.refresh();
                self.toast(ToastLevel::Success, "Expense deleted!");
            }
            Err(err) => self.toast(ToastLevel::Error, err.to_string()),
        }
    }

    /// Re-reads the file, picking up edits made outside the app.
    fn reload(&mut self) {
        match Ledger::open(&self.state.file) {
            Ok(ledger) => {
                self.ledger = ledger;
                self.refresh();
                self.toast(ToastLevel::Info, "Reloaded");
            }
            Err(err) => {
                tracing::error!(%err, "reload failed");
                self.toast(ToastLevel::Error, err.to_string());
            }
        }
    }

    fn refresh(&mut self) {
        let rows: Vec<Record> = match &self.state.filter {
            Some(category) => self
                .ledger
                .search(category)
                .into_iter()
                .cloned()
                .collect(),
            None => self.ledger.records().to_vec(),
        };

        self.state.selected = self.state.selected.min(rows.len().saturating_sub(1));
        self.state.rows = rows;
        self.state.count = self.ledger.len();
        self.state.total = self.ledger.total();
        self.state.month_total = self.ledger.current_month_total();
        self.state.last_refresh = Some(Local::now());
    }

    fn move_up(&mut self) {
        match self.state.focus {
            Focus::Table => self.select_prev(),
            Focus::Form(FormField::Category) => self.cycle_suggestion(-1),
            _ => {}
        }
    }

    fn move_down(&mut self) {
        match self.state.focus {
            Focus::Table => self.select_next(),
            Focus::Form(FormField::Category) => self.cycle_suggestion(1),
            _ => {}
        }
    }

    fn cycle_suggestion(&mut self, step: isize) {
        let len = categories::SUGGESTED.len() as isize;
        let next = match self.state.form.suggestion {
            None if step > 0 => 0,
            None => len - 1,
            Some(index) => (index as isize + step).rem_euclid(len),
        } as usize;

        self.state.form.suggestion = Some(next);
        self.state.form.category = categories::SUGGESTED[next].to_string();
    }

    fn select_next(&mut self) {
        if self.state.rows.is_empty() {
            return;
        }
        self.state.selected = (self.state.selected + 1).min(self.state.rows.len() - 1);
    }

    fn select_prev(&mut self) {
        if self.state.rows.is_empty() {
            return;
        }
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState {
            level,
            message: message.into(),
        });
    }
}
