//! Ordered application of a [`SettingRecord`] to a terminal surface.
//!
//! Fields are applied in a fixed order because later steps depend on
//! earlier ones:
//!
//! 1. buffer lines
//! 2. buffer columns (possibly deferred)
//! 3. window lines
//! 4. window columns
//! 5. deferred buffer columns retry
//! 6. quick edit
//! 7. insert
//!
//! A failure on one field never stops the next one. Diagnostics are
//! streamed to the sink as soon as each field is done.

use mo_config::FallbackGeometry;
use mo_console::{ModeFlags, ModeState, SurfaceError, TerminalControlSurface};
use mo_protocol::{
    ColumnPolicy, Diagnostic, Dimension, Field, PresetTable, SettingRecord, SettingValue,
};
use tracing::{debug, instrument};

use crate::sink::DiagnosticSink;

/// What happened to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The surface accepted the value.
    Applied(i32),
    /// The surface cannot perform the write here; reported as set.
    Unavailable(i32),
    /// The buffer columns write waits for the window columns step.
    Deferred(i32),
    /// The deferred buffer columns write failed.
    DeferredFailed(i32),
    /// The value is outside the tier bounds and was not written.
    OutOfRange(i32),
    /// The surface refused an in-range value.
    Rejected(i32),
    /// The mode bit was changed.
    ModeChanged,
    /// The mode bit already had the requested state.
    ModeUnchanged,
    /// The mode could not be read or written.
    ModeUnavailable,
}

/// Per-field outcomes of one [`ConsoleApplier::apply`] call, in processing
/// order.
///
/// A deferred buffer columns write appears twice: once as
/// [`FieldOutcome::Deferred`] and once with its retry result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    outcomes: Vec<(Field, FieldOutcome)>,
}

impl ApplySummary {
    fn record(&mut self, field: Field, outcome: FieldOutcome) {
        debug!(%field, ?outcome, "field processed");
        self.outcomes.push((field, outcome));
    }

    /// Returns all outcomes in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[(Field, FieldOutcome)] {
        &self.outcomes
    }

    /// Returns the final outcome of `field`, if it was processed.
    #[must_use]
    pub fn outcome(&self, field: Field) -> Option<FieldOutcome> {
        self.outcomes
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, outcome)| *outcome)
    }

    /// Returns whether no field was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Applies setting records under a fixed tier table and column policy.
#[derive(Debug, Clone)]
pub struct ConsoleApplier {
    tiers: PresetTable,
    policy: ColumnPolicy,
    fallback: FallbackGeometry,
}

impl ConsoleApplier {
    /// Creates an applier.
    #[must_use]
    pub fn new(tiers: PresetTable, policy: ColumnPolicy, fallback: FallbackGeometry) -> Self {
        Self {
            tiers,
            policy,
            fallback,
        }
    }

    /// Applies `record` to `surface`, emitting one diagnostic per processed
    /// field.
    ///
    /// The summary never judges overall success; callers decide that from
    /// the record's validity.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_config::FallbackGeometry;
    /// use mo_console::RecordingSurface;
    /// use mo_engine::ConsoleApplier;
    /// use mo_protocol::{ColumnPolicy, Diagnostic, Field, PresetTable, SettingRecord};
    ///
    /// let applier = ConsoleApplier::new(
    ///     PresetTable::default(),
    ///     ColumnPolicy::Constrained,
    ///     FallbackGeometry::default(),
    /// );
    /// let mut record = SettingRecord::new();
    /// record.assign(Field::WindowColumns, 32767);
    ///
    /// let mut lines: Vec<Diagnostic> = Vec::new();
    /// applier.apply(&record, &mut RecordingSurface::detached(), &mut lines);
    /// assert_eq!(lines[0].to_string(), "err: maximum win col 245");
    /// ```
    #[instrument(skip_all, fields(policy = %self.policy))]
    pub fn apply<S, K>(&self, record: &SettingRecord, surface: &mut S, sink: &mut K) -> ApplySummary
    where
        S: TerminalControlSurface + ?Sized,
        K: DiagnosticSink + ?Sized,
    {
        let mut summary = ApplySummary::default();
        let window_lines = record.encode(Field::WindowLines, &self.tiers);
        let window_columns = record.encode(Field::WindowColumns, &self.tiers);
        let buffer_lines = record.encode(Field::BufferLines, &self.tiers);
        let buffer_columns = record.encode(Field::BufferColumns, &self.tiers);

        if buffer_lines > 0 {
            let effective = if window_lines > 0 && buffer_lines < window_lines {
                window_lines
            } else {
                buffer_lines
            };
            let outcome = self.apply_buffer_lines(effective, surface, sink);
            summary.record(Field::BufferLines, outcome);
        }

        let mut deferred = None;
        if buffer_columns > 0 {
            let effective = if window_columns > 0 && window_columns > buffer_columns {
                window_columns
            } else {
                buffer_columns
            };
            let outcome = self.apply_buffer_columns(effective, window_columns > 0, surface, sink);
            if outcome == FieldOutcome::Deferred(effective) {
                deferred = Some(effective);
            }
            summary.record(Field::BufferColumns, outcome);
        }

        if window_lines > 0 {
            let outcome = self.apply_size(Field::WindowLines, window_lines, surface, sink);
            summary.record(Field::WindowLines, outcome);
        }

        if window_columns > 0 {
            let outcome = self.apply_size(Field::WindowColumns, window_columns, surface, sink);
            summary.record(Field::WindowColumns, outcome);
        }

        if let Some(value) = deferred {
            let outcome = match surface.set_buffer_width(as_u16(value)) {
                Ok(()) => FieldOutcome::Applied(value),
                // Unlike other retry failures, no line: there is no console to size.
                Err(err) if err.is_unavailable() => {
                    debug!(%err, value, "surface unavailable, deferred write skipped");
                    FieldOutcome::Unavailable(value)
                }
                Err(err) => {
                    debug!(%err, value, "deferred buffer columns write failed");
                    sink.emit(Diagnostic::DeferredFailed { value });
                    FieldOutcome::DeferredFailed(value)
                }
            };
            summary.record(Field::BufferColumns, outcome);
        }

        for (field, flag) in [
            (Field::QuickEdit, ModeFlags::QUICK_EDIT),
            (Field::Insert, ModeFlags::INSERT),
        ] {
            let requested = match record.get(field) {
                SettingValue::Enabled => true,
                SettingValue::Disabled => false,
                SettingValue::Unset => continue,
                other => {
                    debug!(%field, ?other, "toggle value is neither enabled nor disabled");
                    continue;
                }
            };
            let outcome = apply_toggle(flag, requested, surface, sink);
            sink.emit(Diagnostic::Toggle {
                field,
                enabled: requested,
            });
            summary.record(field, outcome);
        }

        summary
    }

    /// Checks `value` against the tier bounds of `field`, emitting the
    /// minimum/maximum diagnostic when it falls outside.
    fn check_bounds<K>(&self, field: Field, value: i32, lower: i32, sink: &mut K) -> bool
    where
        K: DiagnosticSink + ?Sized,
    {
        let Some(dimension) = field.dimension() else {
            return false;
        };
        let upper = self.tiers.maximum(dimension);
        if value < lower {
            sink.emit(Diagnostic::Minimum {
                field,
                bound: lower,
            });
            false
        } else if value > upper {
            sink.emit(Diagnostic::Maximum {
                field,
                bound: upper,
            });
            false
        } else {
            true
        }
    }

    fn apply_buffer_lines<S, K>(&self, value: i32, surface: &mut S, sink: &mut K) -> FieldOutcome
    where
        S: TerminalControlSurface + ?Sized,
        K: DiagnosticSink + ?Sized,
    {
        let field = Field::BufferLines;
        let lower = self.tiers.minimum(Dimension::BufferLines);
        if !self.check_bounds(field, value, lower, sink) {
            return FieldOutcome::OutOfRange(value);
        }
        if let Err(err) = surface.clear_to_origin() {
            debug!(%err, "clear to origin failed");
        }
        let result = surface.set_buffer_height(as_u16(value));
        settle(field, value, result, sink)
    }

    fn apply_buffer_columns<S, K>(
        &self,
        value: i32,
        window_columns_pending: bool,
        surface: &mut S,
        sink: &mut K,
    ) -> FieldOutcome
    where
        S: TerminalControlSurface + ?Sized,
        K: DiagnosticSink + ?Sized,
    {
        let field = Field::BufferColumns;
        if !self.policy.is_constrained() {
            let lower = self.tiers.minimum(Dimension::BufferColumns);
            if !self.check_bounds(field, value, lower, sink) {
                return FieldOutcome::OutOfRange(value);
            }
            let result = surface.set_buffer_width(as_u16(value));
            return settle(field, value, result, sink);
        }

        let lower = self.tiers.minimum(Dimension::WindowColumns);
        if !self.check_bounds(field, value, lower, sink) {
            return FieldOutcome::OutOfRange(value);
        }

        let current = surface.window_width().unwrap_or_else(|err| {
            debug!(%err, "window width unavailable, using fallback");
            self.fallback.window_columns
        });
        let current = i32::from(current);

        if value < current && window_columns_pending {
            debug!(value, current, "deferring buffer columns until window columns");
            sink.emit(Diagnostic::Set { field, value });
            return FieldOutcome::Deferred(value);
        }

        match surface.set_buffer_width(as_u16(value)) {
            Err(err) if !err.is_unavailable() && value < current => {
                debug!(%err, value, current, "buffer narrower than window");
                sink.emit(Diagnostic::MinimumEqualWindow { width: current });
                FieldOutcome::Rejected(value)
            }
            result => settle(field, value, result, sink),
        }
    }

    fn apply_size<S, K>(&self, field: Field, value: i32, surface: &mut S, sink: &mut K) -> FieldOutcome
    where
        S: TerminalControlSurface + ?Sized,
        K: DiagnosticSink + ?Sized,
    {
        let Some(dimension) = field.dimension() else {
            return FieldOutcome::OutOfRange(value);
        };
        let lower = self.tiers.minimum(dimension);
        if !self.check_bounds(field, value, lower, sink) {
            return FieldOutcome::OutOfRange(value);
        }
        let result = match field {
            Field::WindowLines => surface.set_window_height(as_u16(value)),
            _ => surface.set_window_width(as_u16(value)),
        };
        settle(field, value, result, sink)
    }
}

/// Turns a surface write result into a diagnostic and an outcome.
///
/// Unavailable surfaces are swallowed: the field still reads as set.
fn settle<K>(
    field: Field,
    value: i32,
    result: mo_console::Result<()>,
    sink: &mut K,
) -> FieldOutcome
where
    K: DiagnosticSink + ?Sized,
{
    match result {
        Ok(()) => {
            sink.emit(Diagnostic::Set { field, value });
            FieldOutcome::Applied(value)
        }
        Err(err) if err.is_unavailable() => {
            debug!(%field, %err, "surface unavailable, write skipped");
            sink.emit(Diagnostic::Set { field, value });
            FieldOutcome::Unavailable(value)
        }
        Err(err) => {
            debug!(%field, %err, "surface rejected write");
            sink.emit(Diagnostic::Rejected { field, value });
            FieldOutcome::Rejected(value)
        }
    }
}

/// Sets or clears one mode bit, always together with the extended flags
/// bit.
fn apply_toggle<S, K>(flag: ModeFlags, enable: bool, surface: &mut S, sink: &mut K) -> FieldOutcome
where
    S: TerminalControlSurface + ?Sized,
    K: DiagnosticSink + ?Sized,
{
    let mode = match surface.input_mode() {
        Ok(mode) => mode,
        Err(err) => {
            sink.emit(platform(&err));
            return FieldOutcome::ModeUnavailable;
        }
    };

    let state = mode.state_of(flag);
    let target = match (enable, state) {
        (true, ModeState::Enabled) | (false, ModeState::Disabled | ModeState::Unknown) => {
            return FieldOutcome::ModeUnchanged;
        }
        (true, _) => mode | flag | ModeFlags::EXTENDED_FLAGS,
        (false, ModeState::Enabled) => mode.difference(flag) | ModeFlags::EXTENDED_FLAGS,
    };

    match surface.set_input_mode(target) {
        Ok(()) => FieldOutcome::ModeChanged,
        Err(err) => {
            sink.emit(platform(&err));
            FieldOutcome::ModeUnavailable
        }
    }
}

fn platform(err: &SurfaceError) -> Diagnostic {
    Diagnostic::Platform(err.to_string())
}

/// Narrows a bounds-checked value. Tier bounds never exceed `u16::MAX`.
fn as_u16(value: i32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
