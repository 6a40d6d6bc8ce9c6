//! End-to-end runs of the mo engine against a recording surface.

use std::fs;

use mo_config::{Config, ConfigError};
use mo_console::{ModeFlags, RecordingSurface, Size, SurfaceCall};
use mo_engine::{App, FieldOutcome, RunOutcome};
use mo_protocol::{ArgumentError, ColumnPolicy, Field};
use tempfile::TempDir;

struct Run {
    outcome: RunOutcome,
    out: String,
    err: String,
}

fn run(app: &App, args: &[&str], surface: &mut RecordingSurface) -> Run {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = app.run(args, surface, &mut out, &mut err).unwrap();
    Run {
        outcome,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn console() -> RecordingSurface {
    RecordingSurface::console(Size::new(100, 30), Size::new(100, 500))
}

#[test]
fn preset_with_overrides_on_console() {
    let mut surface = console();
    let run = run(&App::default(), &["3", "b=2"], &mut surface);

    assert!(run.outcome.is_success());
    insta::assert_snapshot!(run.out, @r"
    buf lin set 10000
    buf col set 333
    win lin set 96
    win col set 245
    quick edit set True
    insert set True
    ");
    assert!(run.err.is_empty());
    assert_eq!(surface.window(), Some(Size::new(245, 96)));
    assert_eq!(surface.buffer(), Some(Size::new(333, 10000)));
}

#[test]
fn out_of_range_window_columns() {
    let mut surface = console();
    let run = run(&App::default(), &["WC=32767"], &mut surface);

    assert!(run.outcome.is_success());
    assert_eq!(run.out, "err: maximum win col 245\n");
    assert!(surface.calls().is_empty());
}

#[test]
fn later_arguments_override_earlier_ones() {
    let mut surface = console();
    let run = run(&App::default(), &["wc=90", "WC=80", "BC=80", "qe=t", "QE=F"], &mut surface);

    let RunOutcome::Applied { summary, .. } = &run.outcome else {
        panic!("expected an applied run, got {:?}", run.outcome);
    };
    assert_eq!(summary.outcome(Field::WindowColumns), Some(FieldOutcome::Applied(80)));
    assert_eq!(summary.outcome(Field::BufferColumns), Some(FieldOutcome::Applied(80)));
    insta::assert_snapshot!(run.out, @r"
    buf col set 80
    win col set 80
    quick edit set False
    ");
    assert_eq!(
        surface.calls(),
        &[
            SurfaceCall::SetWindowWidth(80),
            SurfaceCall::SetBufferWidth(80),
            SurfaceCall::SetInputMode(ModeFlags::from_bits_retain(0x01b7)),
        ]
    );
}

#[test]
fn usage_on_unknown_preset() {
    let mut surface = console();
    let run = run(&App::default(), &["4"], &mut surface);

    assert_eq!(
        run.outcome,
        RunOutcome::Usage(ArgumentError::UnknownArgument("4".to_string()))
    );
    assert!(!run.outcome.is_success());
    assert_eq!(run.err, "mo: unknown argument `4`, use 0-3\n");
    assert!(run.out.contains("[[W|B|C]=n]"));
    assert!(surface.calls().is_empty());
}

#[test]
fn status_without_console_uses_configured_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mo.json5");
    fs::write(
        &path,
        r#"
        {
            // Terminal without its own geometry
            fallback: {
                window_lines: 40,
                window_columns: 132,
            },
        }
        "#,
    )
    .unwrap();

    let app = App::new(Config::load_from(&path).unwrap());
    let run = run(&app, &[], &mut RecordingSurface::detached());

    assert!(matches!(run.outcome, RunOutcome::Status(_)));
    insta::assert_snapshot!(run.out.replace('\t', "    "), @r"
    Console Status:
    ---------------
        Window Size        = Lines:   40, Columns:  132
        Screen Buffer Size = Lines:  500, Columns:  100

    Edit Options:
    -------------
        QuickEdit Mode: Unknown, Insert Mode: Unknown
    ");
    assert_eq!(run.err, "platform warning: no console handle attached\n");
}

#[test]
fn basic_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"column_policy": "basic", "fallback": {"largest_width": 300}}"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.column_policy, ColumnPolicy::Basic);

    let app = App::new(config);
    let run_c = run(&app, &["c=100"], &mut RecordingSurface::detached());
    assert_eq!(
        run_c.outcome,
        RunOutcome::Usage(ArgumentError::UnknownArgumentOption("c=100".to_string()))
    );

    let run_preset = run(&app, &["0", "qe=f", "in=f"], &mut RecordingSurface::detached());
    assert!(run_preset.outcome.is_success());
    insta::assert_snapshot!(run_preset.out, @r"
    buf lin set 600
    buf col set 200
    win lin set 29
    win col set 95
    quick edit set False
    insert set False
    ");
}

#[test]
fn invalid_fallback_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mo.json5");
    fs::write(&path, "{ fallback: { buffer_lines: 0 } }").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidFallback {
            field: "buffer_lines"
        }
    ));
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(matches!(
        Config::load_from("/nonexistent/path/mo.json5"),
        Err(ConfigError::ReadFile { .. })
    ));
}
