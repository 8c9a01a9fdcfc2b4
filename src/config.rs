use std::env;

/// Fallback used when `SystemRoot` is not forwarded into WSL.
pub const DEFAULT_SYSTEM_ROOT: &str = "C:\\Windows";

/// Runtime Config
///
/// Environment the launcher depends on, read once at startup.
///
/// Sources:
/// - `WSL_INTEROP` (interop socket, set by WSL when Windows interop is enabled)
/// - `SystemRoot` (Windows system directory)
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Interop socket path
  pub interop: Option<String>,
  /// Windows system root, e.g. `C:\Windows`
  pub system_root: String,
}

impl Config {
  pub fn from_env() -> Self {
    Self::from_vars(env::var("WSL_INTEROP").ok(), env::var("SystemRoot").ok())
  }

  pub fn from_vars(interop: Option<String>, system_root: Option<String>) -> Self {
    Self {
      interop,
      system_root: system_root
        .filter(|root| !root.is_empty())
        .unwrap_or_else(|| DEFAULT_SYSTEM_ROOT.to_owned()),
    }
  }

  /// whether Windows interop is available to this process
  pub fn is_wsl(&self) -> bool {
    matches!(&self.interop, Some(socket) if !socket.is_empty())
  }

  /// drive holding the system root, e.g. `C:\`
  pub fn drive_root(&self) -> String {
    let drive = match self.system_root.split_once('\\') {
      Some((drive, _)) => drive,
      None if self.system_root.ends_with(':') => self.system_root.as_str(),
      None => "",
    };
    if drive.is_empty() {
      "C:\\".to_owned()
    } else {
      format!("{drive}\\")
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      interop: None,
      system_root: DEFAULT_SYSTEM_ROOT.to_owned(),
    }
  }
}
