//! Argument parsing into a [`SettingRecord`].
//!
//! Arguments are processed left to right. A bare integer selects a preset
//! tier for every field, a `prefix=value` command assigns one or two
//! fields. Later arguments overwrite fields set by earlier ones.

use mo_protocol::command::parse_toggle;
use mo_protocol::{
    ArgumentError, ColumnPolicy, Command, Result, SettingRecord, TOGGLE_DISABLED, TOGGLE_ENABLED,
    Tier,
};
use tracing::debug;

/// What a single argument requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// A preset tier for every field.
    Preset(Tier),
    /// A command with its raw integer value.
    Command(Command, i32),
}

/// Parses argument lists under a [`ColumnPolicy`].
///
/// # Examples
///
/// ```
/// use mo_engine::ArgumentParser;
/// use mo_protocol::{ColumnPolicy, Field, PresetTable};
///
/// let parser = ArgumentParser::new(ColumnPolicy::Constrained);
/// let record = parser.parse(["0", "WC=100"]).unwrap();
///
/// let tiers = PresetTable::default();
/// assert_eq!(record.encode(Field::WindowColumns, &tiers), 100);
/// assert_eq!(record.encode(Field::WindowLines, &tiers), 29);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentParser {
    policy: ColumnPolicy,
}

impl ArgumentParser {
    /// Creates a parser for `policy`.
    #[must_use]
    pub fn new(policy: ColumnPolicy) -> Self {
        Self { policy }
    }

    /// Parses `args` into a setting record.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation, [`ArgumentError::NothingRequested`]
    /// for an empty list, or [`ArgumentError::InvalidSetting`] if the record
    /// ends up holding a negative value.
    pub fn parse<I, S>(&self, args: I) -> Result<SettingRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = SettingRecord::new();
        let mut preset_requested = false;
        let mut command_requested = false;

        for arg in args {
            match self.classify(arg.as_ref())? {
                Request::Preset(tier) => {
                    debug!(%tier, "preset requested");
                    record.assign_preset(tier);
                    preset_requested = true;
                }
                Request::Command(command, raw) => {
                    debug!(%command, raw, "command requested");
                    for &field in command.fields() {
                        record.assign(field, raw);
                    }
                    if !record.is_error_free() {
                        return Err(ArgumentError::InvalidSetting);
                    }
                    command_requested = true;
                }
            }
        }

        if !(preset_requested || command_requested) {
            return Err(ArgumentError::NothingRequested);
        }
        if !record.is_error_free() {
            return Err(ArgumentError::InvalidSetting);
        }
        Ok(record)
    }

    /// Classifies a single argument.
    ///
    /// # Errors
    ///
    /// - [`ArgumentError::UnknownArgument`] for an integer outside `0..=3`
    /// - [`ArgumentError::InvalidArgumentValue`] for a command whose value is
    ///   empty, unparsable or negative
    /// - [`ArgumentError::UnknownArgumentOption`] for anything else
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_engine::{ArgumentParser, parser::Request};
    /// use mo_protocol::{ArgumentError, ColumnPolicy, Command, Tier};
    ///
    /// let parser = ArgumentParser::new(ColumnPolicy::Constrained);
    /// assert_eq!(parser.classify("3"), Ok(Request::Preset(Tier::Max)));
    /// assert_eq!(parser.classify("qe=F"), Ok(Request::Command(Command::QuickEdit, 32767)));
    /// assert!(matches!(parser.classify("4"), Err(ArgumentError::UnknownArgument(_))));
    /// ```
    pub fn classify(&self, arg: &str) -> Result<Request> {
        if let Ok(number) = arg.trim().parse::<i64>() {
            return i32::try_from(number)
                .ok()
                .and_then(Tier::from_index)
                .map(Request::Preset)
                .ok_or_else(|| ArgumentError::UnknownArgument(arg.to_string()));
        }

        let (command, value) = Command::match_prefix(arg, self.policy)
            .ok_or_else(|| ArgumentError::UnknownArgumentOption(arg.to_string()))?;

        let raw = if command.takes_toggle() {
            parse_toggle(value).map(|on| if on { TOGGLE_ENABLED } else { TOGGLE_DISABLED })
        } else {
            value.trim().parse::<i32>().ok().filter(|v| *v >= 0)
        };

        raw.map(|raw| Request::Command(command, raw))
            .ok_or_else(|| ArgumentError::InvalidArgumentValue(arg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_protocol::{Field, PresetTable, SettingValue};

    fn parse(args: &[&str]) -> Result<SettingRecord> {
        ArgumentParser::new(ColumnPolicy::Constrained).parse(args)
    }

    #[test]
    fn preset_sets_all_fields() {
        let tiers = PresetTable::default();
        for tier in Tier::ALL {
            let arg = tier.index().to_string();
            let record = parse(&[arg.as_str()]).unwrap();
            assert_eq!(record.get(Field::WindowLines), SettingValue::Tier(tier));
            assert_eq!(record.get(Field::BufferColumns), SettingValue::Tier(tier));
            assert_eq!(record.get(Field::QuickEdit), SettingValue::Enabled);
            assert_eq!(record.get(Field::Insert), SettingValue::Enabled);
            assert_eq!(
                record.encode(Field::BufferLines, &tiers),
                tiers.get(mo_protocol::Dimension::BufferLines, tier)
            );
        }
    }

    #[test]
    fn integer_outside_preset_range() {
        for arg in ["4", "-1", "600", "99999999999"] {
            assert_eq!(
                parse(&[arg]),
                Err(ArgumentError::UnknownArgument(arg.to_string()))
            );
        }
    }

    #[test]
    fn unknown_option() {
        for arg in ["error", "X=1", "W", "=3"] {
            assert_eq!(
                parse(&["0", arg]),
                Err(ArgumentError::UnknownArgumentOption(arg.to_string()))
            );
        }
    }

    #[test]
    fn invalid_values() {
        for arg in ["W=error", "W=", "BC=-5", "WL=1.5", "QE=yes", "IN=1", "qe="] {
            assert_eq!(
                parse(&[arg]),
                Err(ArgumentError::InvalidArgumentValue(arg.to_string()))
            );
        }
    }

    #[test]
    fn toggle_words() {
        let record = parse(&["QE=t", "in=FALSE"]).unwrap();
        assert_eq!(record.get(Field::QuickEdit), SettingValue::Enabled);
        assert_eq!(record.get(Field::Insert), SettingValue::Disabled);
    }

    #[test]
    fn compound_then_single_override() {
        let record = parse(&["W=0", "WC=1"]).unwrap();
        assert_eq!(record.get(Field::WindowLines), SettingValue::Tier(Tier::Small));
        assert_eq!(record.get(Field::WindowColumns), SettingValue::Tier(Tier::Medium));
        assert!(!record.get(Field::BufferLines).is_set());
    }

    #[test]
    fn command_overrides_part_of_preset() {
        let record = parse(&["3", "b=2", "qe=f"]).unwrap();
        assert_eq!(record.get(Field::WindowLines), SettingValue::Tier(Tier::Max));
        assert_eq!(record.get(Field::BufferLines), SettingValue::Tier(Tier::Large));
        assert_eq!(record.get(Field::BufferColumns), SettingValue::Tier(Tier::Large));
        assert_eq!(record.get(Field::QuickEdit), SettingValue::Disabled);
        assert_eq!(record.get(Field::Insert), SettingValue::Enabled);
    }

    #[test]
    fn later_preset_overrides_earlier_command() {
        let record = parse(&["WC=100", "1"]).unwrap();
        assert_eq!(record.get(Field::WindowColumns), SettingValue::Tier(Tier::Medium));
    }

    #[test]
    fn column_command_depends_on_policy() {
        let record = parse(&["c=100"]).unwrap();
        assert_eq!(record.get(Field::BufferColumns), SettingValue::Explicit(100));
        assert_eq!(record.get(Field::WindowColumns), SettingValue::Explicit(100));

        let basic = ArgumentParser::new(ColumnPolicy::Basic);
        assert_eq!(
            basic.parse(["c=100"]),
            Err(ArgumentError::UnknownArgumentOption("c=100".to_string()))
        );
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(parse(&[]), Err(ArgumentError::NothingRequested));
    }

    #[test]
    fn explicit_sizes_pass_through() {
        let tiers = PresetTable::default();
        let record = parse(&["WL=40", "BL=9000"]).unwrap();
        assert_eq!(record.encode(Field::WindowLines, &tiers), 40);
        assert_eq!(record.encode(Field::BufferLines, &tiers), 9000);
        assert_eq!(record.encode(Field::WindowColumns, &tiers), 0);
    }
}
