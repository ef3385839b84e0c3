use livecombo_core::NavEvent;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where a key press goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
	/// Overlay interaction; never reaches the text input.
	Nav(NavEvent),
	/// Text editing, followed by a `TextChanged` event.
	Edit,
	/// Leave without a selection.
	Quit,
}

pub fn route(key: &KeyEvent) -> KeyRoute {
	match key.code {
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyRoute::Quit,
		KeyCode::Down => KeyRoute::Nav(NavEvent::Down),
		KeyCode::Up => KeyRoute::Nav(NavEvent::Up),
		KeyCode::Enter => KeyRoute::Nav(NavEvent::Enter),
		KeyCode::Esc => KeyRoute::Nav(NavEvent::Escape),
		_ => KeyRoute::Edit,
	}
}
