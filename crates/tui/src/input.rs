//! Single-line text input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.set_text(initial);
		input
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the text and park the cursor at its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Apply an editing key. Keys that would start a new line are ignored.
	/// Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input: Input = key.into();
		match input {
			Input {
				key: Key::Enter, ..
			}
			| Input {
				key: Key::Char('m' | 'j'),
				ctrl: true,
				..
			} => false,
			other => self.textarea.input(other),
		}
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, style: Style) {
		let mut textarea = self.textarea.clone();
		textarea.set_style(style);
		frame.render_widget(&textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_after_initial_text() {
		let mut input = QueryInput::new("al");
		assert!(input.input(key(KeyCode::Char('p'))));
		assert_eq!(input.text(), "alp");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "al");
	}

	#[test]
	fn newline_keys_are_ignored() {
		let mut input = QueryInput::new("abc");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn set_text_replaces_content() {
		let mut input = QueryInput::new("abc");
		input.set_text("Beta");
		assert_eq!(input.text(), "Beta");
		assert!(input.input(key(KeyCode::Char('!'))));
		assert_eq!(input.text(), "Beta!");
	}
}
