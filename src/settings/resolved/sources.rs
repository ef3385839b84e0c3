use std::fmt;

/// Where a validated setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => write!(f, "built-in default"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) id_field: Option<SettingSource>,
	pub(crate) text_field: Option<SettingSource>,
	pub(crate) max_visible_items: Option<SettingSource>,
	pub(crate) limit: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for(slot: &Option<SettingSource>) -> SettingSource {
		slot.clone().unwrap_or(SettingSource::Default)
	}
}
