use log::debug;
use std::{
  io,
  path::PathBuf,
  process::{ExitStatus, Output},
};
use thiserror::Error;

use crate::invocation::Invocation;

/// Access to executables of the host.
///
/// Everything the launcher does outside its own process goes through this
/// trait, so tests can run without wslpath or a Windows host.
pub trait System {
  /// Search `PATH` for an executable
  fn find(&self, program: &str) -> Option<PathBuf>;
  /// Run to completion and capture stdout and stderr
  fn output(&self, invocation: &Invocation) -> io::Result<Output>;
}

/// The real host
pub struct OsSystem;

impl System for OsSystem {
  fn find(&self, program: &str) -> Option<PathBuf> {
    match which::which(program) {
      Ok(path) => Some(path),
      Err(e) => {
        debug!("{program} not found in PATH: {e}");
        None
      }
    }
  }

  fn output(&self, invocation: &Invocation) -> io::Result<Output> {
    debug!("running: {invocation}");
    invocation.command().output()
  }
}

#[derive(Debug, Error)]
pub enum ExecError {
  #[error("failed to execute command")]
  IoError(#[from] io::Error),
  #[error("{0}")]
  Status(ExitStatus),
}

/// Treat a non-zero exit as an error
pub fn check_status(output: io::Result<Output>) -> Result<Output, ExecError> {
  let output = output?;
  if output.status.success() {
    Ok(output)
  } else {
    Err(ExecError::Status(output.status))
  }
}
