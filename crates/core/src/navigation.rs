//! Keyboard state machine driving the highlighted entry.

/// Input events understood by a combo box, independent of any terminal or
/// windowing backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
	Down,
	Up,
	Enter,
	Escape,
	/// The input text after a non-navigation keystroke.
	TextChanged(String),
}

/// Which entry of the current result set is keyboard-selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
	#[default]
	Idle,
	Highlighted(usize),
}

/// Direction of the last highlight movement, used to pick the scroll rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Down,
	Up,
}

impl Highlight {
	/// Initial state for a freshly replaced result set of `len` entries.
	pub fn initial(len: usize) -> Self {
		if len == 0 { Self::Idle } else { Self::Highlighted(0) }
	}

	/// Index of the highlighted entry, if any.
	pub fn index(self) -> Option<usize> {
		match self {
			Self::Idle => None,
			Self::Highlighted(index) => Some(index),
		}
	}

	/// Move towards the end of a list of `len` entries, holding at the last one.
	pub fn down(self, len: usize) -> Self {
		let Some(last) = len.checked_sub(1) else {
			return Self::Idle;
		};
		match self {
			Self::Idle => Self::Highlighted(0),
			Self::Highlighted(index) => Self::Highlighted((index + 1).min(last)),
		}
	}

	/// Move towards the start of a list of `len` entries, holding at index 0.
	pub fn up(self, len: usize) -> Self {
		let Some(last) = len.checked_sub(1) else {
			return Self::Idle;
		};
		match self {
			Self::Idle => Self::Highlighted(last),
			Self::Highlighted(index) => Self::Highlighted(index.saturating_sub(1).min(last)),
		}
	}

	/// Apply a movement in `direction`.
	pub fn step(self, direction: Direction, len: usize) -> Self {
		match direction {
			Direction::Down => self.down(len),
			Direction::Up => self.up(len),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn down_holds_at_last_entry() {
		let state = Highlight::Highlighted(0).down(2);
		assert_eq!(state, Highlight::Highlighted(1));
		assert_eq!(state.down(2), Highlight::Highlighted(1));
	}

	#[test]
	fn up_holds_at_first_entry() {
		let state = Highlight::Highlighted(1).up(2);
		assert_eq!(state, Highlight::Highlighted(0));
		assert_eq!(state.up(2), Highlight::Highlighted(0));
	}

	#[test]
	fn idle_enters_from_either_end() {
		assert_eq!(Highlight::Idle.down(5), Highlight::Highlighted(0));
		assert_eq!(Highlight::Idle.up(5), Highlight::Highlighted(4));
	}

	#[test]
	fn empty_lists_stay_idle() {
		assert_eq!(Highlight::Highlighted(3).down(0), Highlight::Idle);
		assert_eq!(Highlight::Idle.up(0), Highlight::Idle);
		assert_eq!(Highlight::initial(0), Highlight::Idle);
		assert_eq!(Highlight::initial(3), Highlight::Highlighted(0));
	}

	#[test]
	fn any_key_sequence_stays_in_bounds() {
		let len = 4;
		let mut state = Highlight::initial(len);
		let script = [
			Direction::Down,
			Direction::Down,
			Direction::Down,
			Direction::Down,
			Direction::Down,
			Direction::Up,
			Direction::Up,
			Direction::Up,
			Direction::Up,
			Direction::Up,
			Direction::Up,
			Direction::Down,
		];
		for direction in script {
			state = state.step(direction, len);
			let index = state.index().expect("highlight is set");
			assert!(index < len);
		}
		assert_eq!(state, Highlight::Highlighted(1));
	}
}
