//! One invocation of the tool, from raw arguments to written output.

use std::io::{self, Write};

use mo_config::Config;
use mo_console::TerminalControlSurface;
use mo_protocol::usage::{PROGRAM_NAME, render_usage};
use mo_protocol::{ArgumentError, SettingRecord};
use tracing::{debug, info};

use crate::applier::{ApplySummary, ConsoleApplier};
use crate::parser::ArgumentParser;
use crate::presets::resolve_presets;
use crate::sink::StreamSink;
use crate::status::StatusReport;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No arguments: the status block was shown.
    Status(StatusReport),
    /// The arguments parsed and the setting was applied.
    Applied {
        record: SettingRecord,
        summary: ApplySummary,
    },
    /// The arguments were rejected and usage was shown.
    Usage(ArgumentError),
}

impl RunOutcome {
    /// Returns whether the run counts as successful.
    ///
    /// Field-level failures while applying do not count against it; only
    /// the validity of the parsed setting does.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Status(_) => true,
            Self::Applied { record, .. } => record.is_error_free(),
            Self::Usage(_) => false,
        }
    }
}

/// Runs invocations against a surface.
#[derive(Debug, Clone, Default)]
pub struct App {
    config: Config,
}

impl App {
    /// Creates an app with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Handles one invocation.
    ///
    /// Field diagnostics and the status block go to `out`, platform
    /// warnings and argument errors to `err`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the status block or usage text fails.
    /// Diagnostic line write failures are logged, not returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_console::RecordingSurface;
    /// use mo_engine::App;
    ///
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    /// let outcome = App::default()
    ///     .run(["WC=32767"], &mut RecordingSurface::detached(), &mut out, &mut err)
    ///     .unwrap();
    ///
    /// assert!(outcome.is_success());
    /// assert_eq!(String::from_utf8(out).unwrap(), "err: maximum win col 245\n");
    /// ```
    pub fn run<I, A, S, O, E>(
        &self,
        args: I,
        surface: &mut S,
        mut out: O,
        mut err: E,
    ) -> io::Result<RunOutcome>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
        S: TerminalControlSurface + ?Sized,
        O: Write,
        E: Write,
    {
        let args: Vec<A> = args.into_iter().collect();
        let policy = self.config.column_policy;
        let fallback = &self.config.fallback;

        if args.is_empty() {
            debug!("no arguments, reporting status");
            let report = {
                let mut sink = StreamSink::new(&mut out, &mut err);
                StatusReport::query(&*surface, fallback, &mut sink)
            };
            writeln!(out, "{report}")?;
            return Ok(RunOutcome::Status(report));
        }

        let tiers = resolve_presets(&*surface, fallback);
        let record = match ArgumentParser::new(policy).parse(&args) {
            Ok(record) => record,
            Err(error) => {
                info!(%error, "arguments rejected");
                writeln!(err, "{PROGRAM_NAME}: {error}")?;
                write!(out, "{}", render_usage(PROGRAM_NAME, &tiers, policy))?;
                return Ok(RunOutcome::Usage(error));
            }
        };

        let applier = ConsoleApplier::new(tiers, policy, *fallback);
        let mut sink = StreamSink::new(&mut out, &mut err);
        let summary = applier.apply(&record, surface, &mut sink);
        Ok(RunOutcome::Applied { record, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_console::{RecordingSurface, Size};
    use mo_protocol::ColumnPolicy;

    fn run(app: &App, args: &[&str], surface: &mut RecordingSurface) -> (RunOutcome, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = app.run(args, surface, &mut out, &mut err).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn no_arguments_shows_status() {
        let mut surface = RecordingSurface::console(Size::new(100, 30), Size::new(100, 500));
        let (outcome, out, err) = run(&App::default(), &[], &mut surface);
        assert!(matches!(outcome, RunOutcome::Status(_)));
        assert!(outcome.is_success());
        assert!(out.starts_with("Console Status:\n"));
        assert!(out.ends_with("QuickEdit Mode: True, Insert Mode: True\n"));
        assert!(err.is_empty());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn bad_argument_shows_usage() {
        let mut surface = RecordingSurface::detached();
        let (outcome, out, err) = run(&App::default(), &["0", "WL=abc"], &mut surface);
        assert_eq!(
            outcome,
            RunOutcome::Usage(ArgumentError::InvalidArgumentValue("WL=abc".to_string()))
        );
        assert!(!outcome.is_success());
        assert_eq!(err, "mo: unknown argument value in `WL=abc`, see usage\n");
        assert!(out.contains("W:  78/29  B: 166/600 col/lin"));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn preset_applies_and_succeeds() {
        let mut surface = RecordingSurface::detached();
        let (outcome, out, err) = run(&App::default(), &["0"], &mut surface);
        assert!(outcome.is_success());
        insta::assert_snapshot!(out, @r"
        buf lin set 600
        buf col set 166
        win lin set 29
        win col set 78
        quick edit set True
        insert set True
        ");
        assert_eq!(err.lines().count(), 2);
    }

    #[test]
    fn basic_policy_rejects_column_command() {
        let app = App::new(Config {
            column_policy: ColumnPolicy::Basic,
            ..Config::default()
        });
        let (outcome, out, _) = run(&app, &["C=100"], &mut RecordingSurface::detached());
        assert_eq!(
            outcome,
            RunOutcome::Usage(ArgumentError::UnknownArgumentOption("C=100".to_string()))
        );
        assert!(out.contains("[[W|B]=n]"));
    }
}
