use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use livecombo_core::{ComboOptions, Highlight};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use serde_json::{Value, json};

use super::{App, SearchOutcome, Selection};

fn fruit(query: &str) -> Result<Value> {
	if query == "boom" {
		bail!("fruit service unavailable");
	}
	let all = [
		json!({"Id": 1, "Text": "Apple"}),
		json!({"Id": 2, "Text": "Apricot"}),
		json!({"Id": 3, "Text": "Banana"}),
	];
	let needle = query.to_lowercase();
	Ok(Value::Array(
		all.into_iter()
			.filter(|record| {
				record["Text"]
					.as_str()
					.is_some_and(|text| text.to_lowercase().contains(&needle))
			})
			.collect(),
	))
}

fn options() -> ComboOptions {
	ComboOptions {
		min_query_length: 2,
		..ComboOptions::default()
	}
}

fn press(app: &mut App, code: KeyCode) -> Option<SearchOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("handle key")
}

fn type_str(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn wait_for_results(app: &mut App) {
	let deadline = Instant::now() + Duration::from_secs(1);
	while app.is_searching() && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(10));
		app.pump_search_results();
	}
	app.pump_search_results();
}

#[test]
fn typing_opens_overlay_with_matches() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "ap");
	wait_for_results(&mut app);

	assert!(app.is_open());
	let combo = app.page().get(app.combo()).expect("combo");
	assert_eq!(combo.overlay().rows(), ["Apple", "Apricot"]);
	assert_eq!(combo.highlight(), Highlight::Highlighted(0));
	assert_eq!(app.preview, Some(json!({"Id": 1, "Text": "Apple"})));
}

#[test]
fn arrows_do_not_edit_the_query() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "ap");
	wait_for_results(&mut app);

	press(&mut app, KeyCode::Down);
	assert_eq!(app.query(), "ap");
	assert_eq!(app.preview, Some(json!({"Id": 2, "Text": "Apricot"})));
}

#[test]
fn enter_commits_and_fills_input() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "ap");
	wait_for_results(&mut app);
	press(&mut app, KeyCode::Down);

	let outcome = press(&mut app, KeyCode::Enter).expect("outcome");
	assert_eq!(
		outcome,
		SearchOutcome {
			accepted: true,
			query: "Apricot".into(),
			selection: Some(Selection {
				id: json!(2),
				text: "Apricot".into(),
				record: json!({"Id": 2, "Text": "Apricot"}),
			}),
		}
	);
	assert!(!app.is_open());
	assert_eq!(app.preview, None);
}

#[test]
fn escape_closes_first_then_cancels() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "ban");
	wait_for_results(&mut app);
	assert!(app.is_open());

	assert_eq!(press(&mut app, KeyCode::Esc), None);
	assert!(!app.is_open());

	let outcome = press(&mut app, KeyCode::Esc).expect("cancel");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "ban");
}

#[test]
fn no_matches_keeps_overlay_closed() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "zz");
	wait_for_results(&mut app);
	assert!(!app.is_open());
}

#[test]
fn provider_failure_is_reported() {
	let mut app = App::new(fruit, options());
	type_str(&mut app, "boom");
	wait_for_results(&mut app);

	assert!(!app.is_open());
	assert_eq!(
		app.error.as_deref(),
		Some("search for 'boom' failed: fruit service unavailable")
	);

	press(&mut app, KeyCode::Backspace);
	assert_eq!(app.error, None);
}

#[test]
fn clicking_a_row_commits_it() {
	let mut app = App::new(fruit, options());
	app.page
		.set_anchor(app.combo, ratatui::layout::Rect::new(0, 0, 30, 1))
		.expect("anchor");
	type_str(&mut app, "ap");
	wait_for_results(&mut app);

	let click = MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 2,
		row: 2,
		modifiers: KeyModifiers::NONE,
	};
	let outcome = app.handle_mouse(click).expect("outcome");
	assert_eq!(
		outcome.selection.map(|selection| selection.text),
		Some("Apricot".to_string())
	);
}

#[test]
fn initial_query_is_searched() {
	let mut app = App::new(fruit, options());
	app.set_initial_query("apple").expect("initial query");
	wait_for_results(&mut app);

	assert_eq!(app.query(), "apple");
	let combo = app.page().get(app.combo()).expect("combo");
	assert_eq!(combo.overlay().rows(), ["Apple"]);
}
