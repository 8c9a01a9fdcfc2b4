use log::{debug, info, warn};
use std::io::{self, Write};

use crate::{
  config::Config,
  error::Error,
  invocation::Invocation,
  shell::{Locator, Shell, ShellKind},
  system::{check_status, System},
  translate::{Target, Translator},
};

impl Shell {
  /// Ask the shell to open `target` with its default handler
  pub fn invocation(&self, target: &str) -> Invocation {
    match self.kind {
      ShellKind::PowerShell => Invocation::new(&self.path).arg("-Command").arg(format!(
        "Start-Process -FilePath '{}'",
        escape_single_quoted(target)
      )),
      ShellKind::Cmd => Invocation::new(&self.path)
        .args(["/C", "start", "\"\""])
        .arg(format!("\"{target}\"")),
    }
  }
}

/// Characters that close a PowerShell single-quoted string
const SINGLE_QUOTES: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// Double every quote character so `text` stays one string literal
fn escape_single_quoted(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    if SINGLE_QUOTES.contains(&c) {
      escaped.push(c);
    }
    escaped.push(c);
  }
  escaped
}

/// Options of a single run
#[derive(Debug, Clone, Copy)]
pub struct LaunchOptions {
  pub quiet: bool,
  pub dry_run: bool,
  pub shell: ShellKind,
}

pub struct Launcher<'a, S: System> {
  system: &'a S,
  config: &'a Config,
  options: LaunchOptions,
}

impl<'a, S: System> Launcher<'a, S> {
  pub fn new(system: &'a S, config: &'a Config, options: LaunchOptions) -> Self {
    Self {
      system,
      config,
      options,
    }
  }

  /// Open `input` on the Windows side.
  ///
  /// Program output goes to `out`, captured output of a failed launch to
  /// `err`.
  pub fn run(&self, input: &str, out: &mut impl Write, err: &mut impl Write) -> Result<(), Error> {
    if !self.config.is_wsl() {
      return Err(Error::Environment);
    }

    let translator = Translator::new(self.system);
    let target = Target::classify(input);
    debug!("target: {target:?}");
    let resolved = translator
      .resolve(&target)
      .map_err(|e| Error::translation(input, e))?;

    let kind = self.options.shell;
    let shell = Locator::new(self.system, self.config)
      .locate(kind)
      .map_err(|e| Error::locator(kind, e))?;

    let mut invocation = shell.invocation(&resolved);
    if self.options.dry_run {
      print(
        out,
        format!("Dry Run: Would execute command: {invocation}\n").as_bytes(),
      );
      return Ok(());
    }

    // A UNC working directory (\\wsl.localhost\...) makes the Windows side
    // fall back to its own default, so run from the drive root instead.
    let drive_root = self.config.drive_root();
    match translator.to_native(&drive_root) {
      Ok(dir) => invocation = invocation.current_dir(dir),
      Err(e) => warn!("could not translate {drive_root}, keeping current directory: {e}"),
    }

    info!("opening {resolved}");
    let output = self.system.output(&invocation);
    let captured = match &output {
      Ok(output) => [output.stdout.as_slice(), output.stderr.as_slice()].concat(),
      Err(_) => Vec::new(),
    };
    match check_status(output) {
      Ok(_) => {
        if !self.options.quiet && !captured.is_empty() {
          print(out, &captured);
        }
        Ok(())
      }
      Err(source) => {
        if !captured.is_empty() {
          let relayed = [b"Command output:\n".as_slice(), captured.as_slice(), b"\n".as_slice()].concat();
          print(err, &relayed);
        }
        Err(Error::Launch {
          target: resolved,
          source,
        })
      }
    }
  }
}

/// Write to a user facing stream. A closed stream is not worth failing for.
fn print(stream: &mut impl Write, bytes: &[u8]) {
  if let Err(e) = stream
    .write_all(bytes)
    .and_then(|_| stream.flush())
  {
    if e.kind() != io::ErrorKind::BrokenPipe {
      warn!("failed to write output: {e}");
    }
  }
}
