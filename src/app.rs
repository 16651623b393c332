//! Application state and core logic

use crate::config::AppConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{
    AppState, FadeState, FieldId, FieldKind, FocusItem, Skill, SubmitOutcome,
    ACTION_BUTTON_COUNT,
};
use crate::ui;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position as ScreenPos, Rect};

/// Buttons of the action panel, matching `ApplicationForm::selected_button`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Submit,
    CopySummary,
    Quit,
}

impl Action {
    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Submit),
            1 => Some(Self::CopySummary),
            2 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Fade-in animation, `None` once finished or when disabled
    pub fade_state: Option<FadeState>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Terminal size for hit-testing mouse clicks (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig) -> Self {
        let fade_state = config
            .fade_in_enabled()
            .then(|| FadeState::new(config.fade_in_duration()));

        Self {
            state: AppState::default(),
            fade_state,
            status_message: None,
            terminal_size: None,
            quit: false,
        }
    }

    /// Advance the fade-in. Returns true while it is still running.
    pub fn update_fade(&mut self) -> bool {
        if let Some(ref mut fade) = self.fade_state {
            fade.update();
            if fade.is_complete() {
                self.fade_state = None;
            }
        }
        self.fade_state.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Any key skips the fade-in
        if let Some(ref mut fade) = self.fade_state {
            fade.skip();
        }
        self.status_message = None;

        // Error dialog swallows input until dismissed
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => {
                self.copy_summary();
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.form.next_item();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.form.prev_item();
                return Ok(());
            }
            _ => {}
        }

        match self.state.form.active() {
            FocusItem::Actions => self.handle_actions_key(key),
            FocusItem::Field(field) => match field.kind() {
                FieldKind::Text => self.handle_text_key(key),
                FieldKind::Select => self.handle_select_key(key),
                FieldKind::Checkbox => self.handle_checkbox_key(key),
            },
        }

        Ok(())
    }

    /// Keys shared by every field: vertical movement and implicit submit
    fn handle_field_navigation(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down => self.state.form.next_item(),
            KeyCode::Up => self.state.form.prev_item(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let ctrl_or_alt = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if !ctrl_or_alt => self.state.form.push_char(c),
            KeyCode::Backspace => self.state.form.pop_char(),
            _ => self.handle_field_navigation(key),
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        let before = self.state.form.values.position;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.cycle_position(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.state.form.cycle_position(true)
            }
            _ => self.handle_field_navigation(key),
        }
        let after = self.state.form.values.position;
        if before != after {
            tracing::debug!("Position changed: {before:?} -> {after:?}");
        }
    }

    fn handle_checkbox_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.move_skill_cursor(false),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.move_skill_cursor(true),
            KeyCode::Char(' ') | KeyCode::Char('x') => self.state.form.toggle_skill_at_cursor(),
            _ => self.handle_field_navigation(key),
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.form.prev_button(),
            KeyCode::Down | KeyCode::Char('j') => self.state.form.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(action) = Action::from_index(self.state.form.selected_button) {
                    self.run_action(action);
                }
            }
            _ => {}
        }
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit(),
            Action::CopySummary => self.copy_summary(),
            Action::Quit => self.quit = true,
        }
    }

    /// Validate the form and, if it passes, replace the summary
    pub fn submit(&mut self) {
        match self.state.submit() {
            SubmitOutcome::Accepted => {
                tracing::info!(
                    position = ?self.state.form.values.position,
                    "Application submitted"
                );
                self.status_message = Some("Application submitted".to_string());
            }
            SubmitOutcome::Rejected(count) => {
                tracing::info!(errors = count, "Submit rejected");
                // Jump to the first field that needs fixing
                if let Some(first) = self.state.errors.keys().next().copied() {
                    self.state.form.focus(FocusItem::Field(first));
                }
            }
        }
    }

    /// Copy the current summary to the system clipboard
    pub fn copy_summary(&mut self) {
        let Some(text) = self.state.summary.as_ref().map(|s| s.to_text()) else {
            self.status_message = Some("Nothing to copy yet, submit first".to_string());
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => self.status_message = Some("Summary copied".to_string()),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err:?}");
                self.push_error(format!("Could not copy the summary: {err}"));
            }
        }
    }

    /// Handle a mouse event: left click focuses (and operates) what it hits
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        if let Some(ref mut fade) = self.fade_state {
            fade.skip();
        }
        if self.state.has_errors() {
            self.state.dismiss_error();
            return Ok(());
        }

        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };
        let click = ScreenPos::new(mouse.column, mouse.row);
        let screen = ui::layout::compute(Rect::new(0, 0, width, height), &self.state);
        let (form_area, action_area) = ui::forms::split(screen.form);

        let clicked_button = ui::forms::button_areas(action_area)
            .into_iter()
            .position(|area| area.contains(click));
        if let Some(index) = clicked_button {
            self.state.form.focus(FocusItem::Actions);
            self.state.form.selected_button = index.min(ACTION_BUTTON_COUNT - 1);
            if let Some(action) = Action::from_index(index) {
                self.run_action(action);
            }
            return Ok(());
        }

        let clicked_field = ui::forms::field_areas(form_area, &self.state.form, &self.state.errors)
            .into_iter()
            .find(|(_, area)| area.contains(click));
        if let Some((field, area)) = clicked_field {
            self.state.form.focus(FocusItem::Field(field));
            match field {
                FieldId::Position => {
                    let option = ui::forms::position_option_at(area, mouse.column, mouse.row);
                    if let Some(option) = option {
                        self.state.form.set_position(option);
                    }
                }
                FieldId::AdditionalSkills => {
                    if let Some(skill) = ui::forms::skill_at(area, mouse.column, mouse.row) {
                        if let Some(index) = Skill::ALL.iter().position(|s| *s == skill) {
                            self.state.form.skill_cursor = index;
                        }
                        self.state.form.values.toggle_skill(skill);
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
