// Picker state machine and event loop.
// ref: ratatui app patterns — https://ratatui.rs/concepts/application-patterns/

use tracing::{debug, info, warn};

use crate::{
    action::Action,
    error::{Error, Result},
    event::{translate_event, EventSource},
    model::workspace::{initial_cursor, Item},
    provider::Provider,
    tui::Surface,
    ui,
};

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    ConfirmingDelete { name: String },
}

/// How a picker run ended.
#[derive(Debug)]
pub enum Outcome {
    Cancelled,
    /// The provider already switched to this workspace.
    Selected(String),
    Failed(Error),
}

/// Result of a run: the outcome plus whatever the provider printed meanwhile.
#[derive(Debug)]
pub struct Report {
    pub outcome: Outcome,
    pub output: Vec<u8>,
}

// ── State ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PickerState {
    pub items: Vec<Item>,
    pub cursor: usize,
    pub mode: Mode,
    pub scroll: usize,
}

impl PickerState {
    pub fn new(items: Vec<Item>) -> Self {
        let cursor = initial_cursor(&items);
        Self { items, cursor, mode: Mode::Browsing, scroll: 0 }
    }

    pub fn pending_delete(&self) -> Option<&str> {
        match &self.mode {
            Mode::ConfirmingDelete { name } => Some(name.as_str()),
            Mode::Browsing => None,
        }
    }

    pub fn selected(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    // Navigation returns whether anything visible changed.

    pub fn nav_down(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
        true
    }

    pub fn nav_up(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.items.len() - 1);
        true
    }

    pub fn request_delete(&mut self) -> bool {
        let Some(item) = self.selected() else {
            return false;
        };
        self.mode = Mode::ConfirmingDelete { name: item.name.clone() };
        true
    }

    pub fn decline_delete(&mut self) -> bool {
        if self.mode == Mode::Browsing {
            return false;
        }
        self.mode = Mode::Browsing;
        true
    }

    /// Take the provider's list after a delete; the cursor steps back one row.
    pub fn apply_delete(&mut self, items: Vec<Item>) {
        self.items = items;
        self.mode = Mode::Browsing;
        self.cursor = self.cursor.saturating_sub(1).min(self.items.len().saturating_sub(1));
    }
}

// ── Picker ───────────────────────────────────────────────────────────────────

enum Step {
    Continue { redraw: bool },
    Done(Outcome),
}

pub struct Picker<S, P, E> {
    state: PickerState,
    label: String,
    surface: S,
    provider: P,
    events: E,
    captured: Vec<u8>,
}

impl<S: Surface, P: Provider, E: EventSource> Picker<S, P, E> {
    pub fn new(items: Vec<Item>, label: impl Into<String>, surface: S, provider: P, events: E) -> Self {
        Self {
            state: PickerState::new(items),
            label: label.into(),
            surface,
            provider,
            events,
            captured: Vec::new(),
        }
    }

    /// Drive the picker until it terminates. The surface is released before returning,
    /// whatever the outcome.
    pub fn run(mut self) -> Report {
        let outcome = self.event_loop().unwrap_or_else(Outcome::Failed);
        if let Err(e) = self.surface.release() {
            warn!("failed to restore terminal: {e}");
        }
        info!(?outcome, "picker finished");
        Report { outcome, output: self.captured }
    }

    fn event_loop(&mut self) -> Result<Outcome> {
        self.draw()?;
        loop {
            let event = self.events.next_event()?;
            if let Some(outcome) = self.handle_event(event)? {
                return Ok(outcome);
            }
        }
    }

    fn handle_event(&mut self, event: crossterm::event::Event) -> Result<Option<Outcome>> {
        let action = translate_event(event);
        match self.dispatch(action)? {
            Step::Continue { redraw: true } => {
                self.draw()?;
                Ok(None)
            }
            Step::Continue { redraw: false } => Ok(None),
            Step::Done(outcome) => Ok(Some(outcome)),
        }
    }

    fn draw(&mut self) -> Result<()> {
        let state = &mut self.state;
        let label = self.label.as_str();
        self.surface.terminal().draw(|frame| ui::render(frame, state, label))?;
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> Result<Step> {
        match action {
            Action::Interrupt => Ok(Step::Done(Outcome::Cancelled)),
            Action::Resize => {
                let terminal = self.surface.terminal();
                terminal.autoresize()?;
                terminal.clear()?;
                Ok(Step::Continue { redraw: true })
            }
            Action::None => Ok(Step::Continue { redraw: false }),
            _ => match self.state.mode {
                Mode::Browsing => Ok(self.dispatch_browsing(action)),
                Mode::ConfirmingDelete { .. } => Ok(self.dispatch_confirm(action)),
            },
        }
    }

    fn dispatch_browsing(&mut self, action: Action) -> Step {
        let redraw = match action {
            Action::NavigateUp => self.state.nav_up(),
            Action::NavigateDown => self.state.nav_down(),
            Action::Delete => {
                let requested = self.state.request_delete();
                if let Some(name) = self.state.pending_delete() {
                    debug!(workspace = name, "delete requested");
                }
                requested
            }
            Action::Escape => return Step::Done(Outcome::Cancelled),
            Action::Select => return self.select(),
            _ => false,
        };
        Step::Continue { redraw }
    }

    fn dispatch_confirm(&mut self, action: Action) -> Step {
        match action {
            Action::ConfirmYes => self.confirm_delete(),
            Action::ConfirmNo | Action::Escape => {
                debug!("delete declined");
                Step::Continue { redraw: self.state.decline_delete() }
            }
            _ => Step::Continue { redraw: false },
        }
    }

    fn select(&mut self) -> Step {
        let Some(name) = self.state.selected().map(|i| i.name.clone()) else {
            return Step::Continue { redraw: false };
        };
        info!(workspace = %name, "selecting workspace");
        match self.provider.select(&name, &mut self.captured) {
            Ok(()) => Step::Done(Outcome::Selected(name)),
            Err(e) => Step::Done(Outcome::Failed(e.into())),
        }
    }

    fn confirm_delete(&mut self) -> Step {
        let Some(name) = self.state.pending_delete().map(str::to_string) else {
            return Step::Continue { redraw: false };
        };
        info!(workspace = %name, "deleting workspace");
        match self.provider.delete(&name, &mut self.captured) {
            Ok(items) => {
                self.state.apply_delete(items);
                Step::Continue { redraw: true }
            }
            // ! provider state may be half-changed; end the session instead of retrying
            Err(e) => Step::Done(Outcome::Failed(e.into())),
        }
    }
}
