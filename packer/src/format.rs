//! Formatting helpers. Contains [Formatter] trait, its [Rustfmt]
//! implementation and [format_source] applying [FormatOptions].

use anyhow::{Context, Error, bail};
use std::{
    io::Write,
    process::{Command, Stdio},
};

/// Canonicalizes generated source text.
pub trait Formatter {
    /// Returns formatted `source` or error if it cannot be formatted (eg. is
    /// not valid source).
    fn format(
        &self,
        source: &str,
    ) -> Result<String, Error>;
}

/// [Formatter] running external `rustfmt` binary, reading source from stdin
/// and writing result to stdout.
#[derive(Debug)]
pub struct Rustfmt {
    /// Binary to run, `rustfmt` looked up in `PATH` by default.
    pub program: String,
    /// Passed as `--edition`.
    pub edition: String,
}
impl Default for Rustfmt {
    fn default() -> Self {
        Self {
            program: "rustfmt".to_owned(),
            edition: "2021".to_owned(),
        }
    }
}
impl Formatter for Rustfmt {
    fn format(
        &self,
        source: &str,
    ) -> Result<String, Error> {
        let mut child = Command::new(&self.program)
            .args(["--edition", &self.edition, "--emit", "stdout"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn {}", self.program))?;

        // rustfmt reads whole input before writing anything, so writing all
        // at once cannot deadlock
        let mut stdin = child.stdin.take().context("missing child stdin")?;
        stdin.write_all(source.as_bytes())?;
        drop(stdin);

        let output = child.wait_with_output()?;
        if !output.status.success() {
            bail!(
                "{} failed with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let source = String::from_utf8(output.stdout).context("formatted source is not utf-8")?;

        Ok(source)
    }
}

/// Formatting policy.
///
/// If not sure what to set here, use [Default].
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Run source through the formatter. If disabled, source is returned as
    /// rendered.
    pub enabled: bool,
    /// Attach unformatted source to the error when formatting fails, to help
    /// debugging.
    pub source_on_error: bool,
}
impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            source_on_error: true,
        }
    }
}

/// Applies `options` to `source` using `formatter`.
///
/// Formatting failure is always an error. Unformatted source is never
/// returned in place of the formatted one, unless formatting is disabled.
pub fn format_source(
    formatter: &dyn Formatter,
    source: String,
    options: &FormatOptions,
) -> Result<String, Error> {
    if !options.enabled {
        return Ok(source);
    }

    match formatter.format(&source) {
        Ok(formatted) => Ok(formatted),
        Err(error) if options.source_on_error => {
            Err(error.context(format!("format generated source:\n{}", source)))
        }
        Err(error) => Err(error.context("format generated source")),
    }
}
