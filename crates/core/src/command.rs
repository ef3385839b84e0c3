use std::fmt;
use std::str::FromStr;

use crate::config::ComboConfig;
use crate::error::ComboError;

/// Public operations of a combo box.
pub enum Command {
	Init(Box<ComboConfig>),
	Open,
	Close,
}

impl Command {
	pub fn init(config: ComboConfig) -> Self {
		Self::Init(Box::new(config))
	}

	pub fn method(&self) -> Method {
		match self {
			Self::Init(_) => Method::Init,
			Self::Open => Method::Open,
			Self::Close => Method::Close,
		}
	}
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Command").field(&self.method()).finish()
	}
}

/// Operation names accepted by [`crate::Page::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Init,
	Open,
	Close,
}

impl Method {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Init => "init",
			Self::Open => "open",
			Self::Close => "close",
		}
	}
}

impl FromStr for Method {
	type Err = ComboError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name {
			"init" => Ok(Self::Init),
			"open" => Ok(Self::Open),
			"close" => Ok(Self::Close),
			other => Err(ComboError::UnknownMethod(other.to_string())),
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
