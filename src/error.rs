use thiserror::Error;

use crate::{shell::ShellKind, system::ExecError, translate::TranslateError};

/// Every way a run can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid arguments: exactly one URL or file path is required")]
  Usage,
  #[error("this tool requires a WSL environment with Windows interoperability enabled")]
  Environment,
  #[error("command '{tool}' not found in your PATH. Please ensure WSL is installed correctly")]
  ToolNotFound { tool: &'static str },
  #[error("failed to convert WSL path '{path}'")]
  Translation {
    path: String,
    source: TranslateError,
  },
  #[error("could not locate {kind}")]
  Locator {
    kind: ShellKind,
    source: TranslateError,
  },
  #[error("command execution failed for '{target}'")]
  Launch { target: String, source: ExecError },
}

impl Error {
  /// Split a missing wslpath out of the wrapped translation errors
  pub fn translation(path: &str, source: TranslateError) -> Self {
    match source {
      TranslateError::NotFound => Error::ToolNotFound {
        tool: crate::translate::WSLPATH,
      },
      source => Error::Translation {
        path: path.to_owned(),
        source,
      },
    }
  }

  pub fn locator(kind: ShellKind, source: TranslateError) -> Self {
    match source {
      TranslateError::NotFound => Error::ToolNotFound {
        tool: crate::translate::WSLPATH,
      },
      source => Error::Locator { kind, source },
    }
  }
}
