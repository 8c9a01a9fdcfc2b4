use log::debug;
use std::fmt::{self, Display};
use thiserror::Error;

use crate::{
  invocation::Invocation,
  system::{check_status, ExecError, System},
};

pub const WSLPATH: &str = "wslpath";

/// What the user asked to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  /// Opened as-is by the Windows side
  Url(String),
  /// Must be translated to a Windows path first
  Path(String),
}

impl Target {
  pub fn classify(input: &str) -> Self {
    if input.starts_with("http://") || input.starts_with("https://") {
      Target::Url(input.to_owned())
    } else {
      Target::Path(input.to_owned())
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  /// `wslpath -w`
  ToWindows,
  /// `wslpath -u`
  ToNative,
}

impl Direction {
  fn flag(self) -> &'static str {
    match self {
      Direction::ToWindows => "-w",
      Direction::ToNative => "-u",
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Direction::ToWindows => write!(f, "Windows"),
      Direction::ToNative => write!(f, "WSL"),
    }
  }
}

#[derive(Debug, Error)]
pub enum TranslateError {
  #[error("command 'wslpath' not found in your PATH. Please ensure WSL is installed correctly")]
  NotFound,
  #[error("wslpath failed to convert '{path}' to a {direction} path")]
  Failed {
    path: String,
    direction: Direction,
    source: ExecError,
  },
}

/// Converts paths between the WSL and Windows namespaces through wslpath
pub struct Translator<'a, S: System> {
  system: &'a S,
}

impl<'a, S: System> Translator<'a, S> {
  pub fn new(system: &'a S) -> Self {
    Self { system }
  }

  pub fn to_windows(&self, path: &str) -> Result<String, TranslateError> {
    self.translate(path, Direction::ToWindows)
  }

  pub fn to_native(&self, path: &str) -> Result<String, TranslateError> {
    self.translate(path, Direction::ToNative)
  }

  /// Turn a target into something the Windows shell can open
  pub fn resolve(&self, target: &Target) -> Result<String, TranslateError> {
    match target {
      Target::Url(url) => Ok(url.clone()),
      Target::Path(path) => self.to_windows(path),
    }
  }

  fn translate(&self, path: &str, direction: Direction) -> Result<String, TranslateError> {
    let wslpath = self.system.find(WSLPATH).ok_or(TranslateError::NotFound)?;
    let invocation = Invocation::new(wslpath).arg(direction.flag()).arg(path);
    let output = check_status(self.system.output(&invocation)).map_err(|source| {
      TranslateError::Failed {
        path: path.to_owned(),
        direction,
        source,
      }
    })?;
    let translated = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    debug!("{path} -> {translated}");
    Ok(translated)
  }
}
