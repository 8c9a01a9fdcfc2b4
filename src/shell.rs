use clap::ValueEnum;
use log::debug;
use std::{
  fmt::{self, Display},
  path::PathBuf,
};

use crate::{
  config::Config,
  system::System,
  translate::{TranslateError, Translator},
};

/// Windows command host used to open the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
  #[clap(name = "powershell")]
  PowerShell,
  Cmd,
}

impl ShellKind {
  pub fn executable(self) -> &'static str {
    match self {
      ShellKind::PowerShell => "powershell.exe",
      ShellKind::Cmd => "cmd.exe",
    }
  }

  /// location relative to the system root
  fn install_path(self) -> &'static str {
    match self {
      ShellKind::PowerShell => "\\System32\\WindowsPowerShell\\v1.0\\powershell.exe",
      ShellKind::Cmd => "\\System32\\cmd.exe",
    }
  }
}

impl Display for ShellKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.executable())
  }
}

/// A located command host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
  pub kind: ShellKind,
  /// path in the WSL namespace
  pub path: PathBuf,
}

pub struct Locator<'a, S: System> {
  system: &'a S,
  config: &'a Config,
}

impl<'a, S: System> Locator<'a, S> {
  pub fn new(system: &'a S, config: &'a Config) -> Self {
    Self { system, config }
  }

  /// Find the shell on PATH, else at its default install location under
  /// the system root.
  pub fn locate(&self, kind: ShellKind) -> Result<Shell, TranslateError> {
    if let Some(path) = self.system.find(kind.executable()) {
      debug!("found {kind} in PATH: {}", path.display());
      return Ok(Shell { kind, path });
    }

    let root = self.config.system_root.trim_end_matches('\\');
    let default = format!("{root}{}", kind.install_path());
    debug!("{kind} not in PATH, trying {default}");
    let path = Translator::new(self.system).to_native(&default)?;
    Ok(Shell {
      kind,
      path: PathBuf::from(path),
    })
  }
}
