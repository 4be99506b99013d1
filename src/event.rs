#[cfg(test)]
use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// Blocking source of terminal events.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads from the real terminal.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Replays a fixed sequence of events; fails once exhausted.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self { events: events.into_iter().collect() }
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }
}

pub fn translate_event(event: Event) -> Action {
    match event {
        // Windows reports releases too; only presses count.
        Event::Key(key) if key.kind != KeyEventKind::Release => translate_key(key),
        Event::Resize(_, _) => Action::Resize,
        _ => Action::None,
    }
}

fn translate_key(key: KeyEvent) -> Action {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Interrupt,
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Action::NavigateUp,
        (KeyModifiers::CONTROL, KeyCode::Char('n')) => Action::NavigateDown,
        // Alt-Up / Alt-Down land here as well.
        (_, KeyCode::Up) | (_, KeyCode::PageUp) => Action::NavigateUp,
        (_, KeyCode::Down) | (_, KeyCode::PageDown) => Action::NavigateDown,
        (_, KeyCode::Enter) => Action::Select,
        (_, KeyCode::Delete) | (_, KeyCode::Backspace) => Action::Delete,
        (_, KeyCode::Esc) => Action::Escape,
        (KeyModifiers::NONE, KeyCode::Char('j')) => Action::NavigateDown,
        (KeyModifiers::NONE, KeyCode::Char('k')) => Action::NavigateUp,
        (KeyModifiers::NONE, KeyCode::Char('d')) => Action::Delete,
        (KeyModifiers::NONE, KeyCode::Char('y')) => Action::ConfirmYes,
        (KeyModifiers::NONE, KeyCode::Char('n')) => Action::ConfirmNo,
        _ => Action::None,
    }
}

#[cfg(test)]
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mods(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn navigation_keys() {
        for code in [KeyCode::Up, KeyCode::PageUp, KeyCode::Char('k')] {
            assert_eq!(translate_event(key(code)), Action::NavigateUp, "{code:?}");
        }
        for code in [KeyCode::Down, KeyCode::PageDown, KeyCode::Char('j')] {
            assert_eq!(translate_event(key(code)), Action::NavigateDown, "{code:?}");
        }
        assert_eq!(translate_event(with_mods(KeyCode::Up, KeyModifiers::ALT)), Action::NavigateUp);
        assert_eq!(translate_event(with_mods(KeyCode::Down, KeyModifiers::ALT)), Action::NavigateDown);
        assert_eq!(
            translate_event(with_mods(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Action::NavigateUp
        );
        assert_eq!(
            translate_event(with_mods(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Action::NavigateDown
        );
    }

    #[test]
    fn commit_delete_and_confirm_keys() {
        assert_eq!(translate_event(key(KeyCode::Enter)), Action::Select);
        assert_eq!(translate_event(key(KeyCode::Delete)), Action::Delete);
        assert_eq!(translate_event(key(KeyCode::Backspace)), Action::Delete);
        assert_eq!(translate_event(key(KeyCode::Char('d'))), Action::Delete);
        assert_eq!(translate_event(key(KeyCode::Char('y'))), Action::ConfirmYes);
        assert_eq!(translate_event(key(KeyCode::Char('n'))), Action::ConfirmNo);
    }

    #[test]
    fn escape_and_interrupt_are_distinct() {
        assert_eq!(translate_event(key(KeyCode::Esc)), Action::Escape);
        assert_eq!(
            translate_event(with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Interrupt
        );
        assert_eq!(translate_event(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn resize_and_key_release() {
        assert_eq!(translate_event(Event::Resize(80, 24)), Action::Resize);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_event(Event::Key(release)), Action::None);
        assert_eq!(translate_event(Event::FocusGained), Action::None);
    }

    #[test]
    fn scripted_events_run_dry() {
        let mut events = ScriptedEvents::new([key(KeyCode::Enter)]);
        assert!(events.next_event().is_ok());
        let err = events.next_event().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
