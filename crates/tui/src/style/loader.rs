use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	prompt: StyleSpec,
	input: StyleSpec,
	results: StyleSpec,
	highlight: StyleSpec,
	preview: StyleSpec,
	error: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		Ok(Theme {
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			input: self.input.to_style(&format!("{context}.input"))?,
			results: self.results.to_style(&format!("{context}.results"))?,
			highlight: self.highlight.to_style(&format!("{context}.highlight"))?,
			preview: self.preview.to_style(&format!("{context}.preview"))?,
			error: self.error.to_style(&format!("{context}.error"))?,
		})
	}
}

#[derive(Debug, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{context}: bad fg `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{context}: bad bg `{bg}`"))?);
		}
		for name in &self.modifiers {
			let modifier =
				parse_modifier(name).with_context(|| format!("{context}: bad modifier `{name}`"))?;
			style = style.add_modifier(modifier);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::new();
	let mut default_theme = None;
	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if default_theme.is_some() {
				bail!("more than one built-in theme is marked as default");
			}
			default_theme = Some(registration.theme);
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default_theme.unwrap_or(first.theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	let parsed: ThemeFile =
		toml::from_str(contents).with_context(|| format!("failed to parse theme {path:?}"))?;

	let theme = parsed.styles.into_theme(&parsed.name)?;
	let aliases = parsed
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.collect();
	Ok((
		ThemeRegistration {
			name: parsed.name,
			aliases,
			theme,
		},
		parsed.default,
	))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 || !hex.is_ascii() {
			bail!("hex colours must be six digits");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `{value}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_name(value).as_str() {
		"reset" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_blue" => Ok(Color::LightBlue),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_name(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		other => bail!("unknown modifier `{other}`"),
	}
}

pub(super) fn normalise_name(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| if ch == '-' || ch == ' ' { '_' } else { ch })
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_accept_hex_names_and_indices() {
		assert_eq!(parse_color("#2aa198").expect("hex"), Color::Rgb(0x2a, 0xa1, 0x98));
		assert_eq!(parse_color("Dark-Gray").expect("name"), Color::DarkGray);
		assert_eq!(parse_color("208").expect("index"), Color::Indexed(208));
		assert!(parse_color("#abc").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn multibyte_hex_colours_are_rejected() {
		assert!(parse_color("#aébcd").is_err());
		assert!(parse_color("#ab€d").is_err());
	}

	#[test]
	fn unknown_modifiers_are_rejected() {
		assert_eq!(parse_modifier("Bold").expect("bold"), Modifier::BOLD);
		assert!(parse_modifier("sparkle").is_err());
	}
}
