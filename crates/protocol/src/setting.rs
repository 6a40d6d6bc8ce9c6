//! The setting record built from command-line arguments.
//!
//! A [`SettingRecord`] holds one [`SettingValue`] per [`Field`]. Values keep
//! track of *how* they were requested (tier selector, explicit size, toggle
//! state) and are only turned into the legacy integer encoding through
//! [`SettingRecord::encode`], which substitutes tier selectors with the
//! values of a [`PresetTable`].
//!
//! # Integer encoding
//!
//! | Value              | Size field          | Toggle field |
//! |--------------------|---------------------|--------------|
//! | `Unset`            | `0`                 | `0`          |
//! | `Tier(t)`          | tier value of `t`   | `1`          |
//! | `Explicit(n)`      | `n`                 | `n`          |
//! | `Enabled`          | `1`                 | `1`          |
//! | `Disabled`         | [`TOGGLE_DISABLED`] | [`TOGGLE_DISABLED`] |

use std::fmt;

use crate::preset::{Dimension, PresetTable, Tier};

/// Encoded value of a toggle that was requested as enabled.
pub const TOGGLE_ENABLED: i32 = 1;

/// Encoded value of a toggle that was requested as disabled.
pub const TOGGLE_DISABLED: i32 = i16::MAX as i32;

/// One of the six configurable quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WindowLines,
    WindowColumns,
    BufferLines,
    BufferColumns,
    QuickEdit,
    Insert,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Field; 6] = [
        Field::WindowLines,
        Field::WindowColumns,
        Field::BufferLines,
        Field::BufferColumns,
        Field::QuickEdit,
        Field::Insert,
    ];

    /// Returns the geometry dimension of a size field, `None` for toggles.
    #[must_use]
    pub fn dimension(self) -> Option<Dimension> {
        match self {
            Self::WindowLines => Some(Dimension::WindowLines),
            Self::WindowColumns => Some(Dimension::WindowColumns),
            Self::BufferLines => Some(Dimension::BufferLines),
            Self::BufferColumns => Some(Dimension::BufferColumns),
            Self::QuickEdit | Self::Insert => None,
        }
    }

    /// Returns whether this field is a true/false toggle.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        self.dimension().is_none()
    }

    /// Returns the short label used in diagnostic lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WindowLines => "win lin",
            Self::WindowColumns => "win col",
            Self::BufferLines => "buf lin",
            Self::BufferColumns => "buf col",
            Self::QuickEdit => "quick edit",
            Self::Insert => "insert",
        }
    }
}

impl From<Dimension> for Field {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::WindowLines => Self::WindowLines,
            Dimension::WindowColumns => Self::WindowColumns,
            Dimension::BufferLines => Self::BufferLines,
            Dimension::BufferColumns => Self::BufferColumns,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The requested value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingValue {
    /// Not requested in this invocation.
    #[default]
    Unset,
    /// A preset tier selector (`0..=3`).
    Tier(Tier),
    /// An explicit value passed through unchanged.
    Explicit(i32),
    /// Toggle requested on.
    Enabled,
    /// Toggle requested off.
    Disabled,
}

impl SettingValue {
    /// Interprets a raw integer assigned to a size field.
    ///
    /// `0..=3` selects a tier, anything else is an explicit size.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_protocol::{SettingValue, Tier};
    ///
    /// assert_eq!(SettingValue::size(1), SettingValue::Tier(Tier::Medium));
    /// assert_eq!(SettingValue::size(120), SettingValue::Explicit(120));
    /// ```
    #[must_use]
    pub fn size(raw: i32) -> Self {
        Tier::from_index(raw).map_or(Self::Explicit(raw), Self::Tier)
    }

    /// Interprets a raw integer assigned to a toggle field.
    ///
    /// `0..=3` means a preset asked for the mode, [`TOGGLE_DISABLED`] turns
    /// it off, anything else passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_protocol::{SettingValue, TOGGLE_DISABLED};
    ///
    /// assert_eq!(SettingValue::toggle(0), SettingValue::Enabled);
    /// assert_eq!(SettingValue::toggle(TOGGLE_DISABLED), SettingValue::Disabled);
    /// assert_eq!(SettingValue::toggle(9), SettingValue::Explicit(9));
    /// ```
    #[must_use]
    pub fn toggle(raw: i32) -> Self {
        match raw {
            0..=3 => Self::Enabled,
            TOGGLE_DISABLED => Self::Disabled,
            other => Self::Explicit(other),
        }
    }

    /// Returns whether the field was requested at all.
    #[must_use]
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

/// The six field values of one invocation.
///
/// # Examples
///
/// ```
/// use mo_protocol::{Field, PresetTable, SettingRecord, Tier};
///
/// let tiers = PresetTable::default();
/// let mut record = SettingRecord::new();
/// record.assign_preset(Tier::Small);
/// record.assign(Field::WindowColumns, 100);
///
/// assert_eq!(record.encode(Field::WindowLines, &tiers), 29);
/// assert_eq!(record.encode(Field::WindowColumns, &tiers), 100);
/// assert_eq!(record.encode(Field::QuickEdit, &tiers), 1);
/// assert!(record.is_error_free());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingRecord {
    window_lines: SettingValue,
    window_columns: SettingValue,
    buffer_lines: SettingValue,
    buffer_columns: SettingValue,
    quick_edit: SettingValue,
    insert: SettingValue,
}

impl SettingRecord {
    /// Creates a record with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value requested for `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> SettingValue {
        match field {
            Field::WindowLines => self.window_lines,
            Field::WindowColumns => self.window_columns,
            Field::BufferLines => self.buffer_lines,
            Field::BufferColumns => self.buffer_columns,
            Field::QuickEdit => self.quick_edit,
            Field::Insert => self.insert,
        }
    }

    /// Stores `value` for `field` as is.
    pub fn set(&mut self, field: Field, value: SettingValue) {
        let slot = match field {
            Field::WindowLines => &mut self.window_lines,
            Field::WindowColumns => &mut self.window_columns,
            Field::BufferLines => &mut self.buffer_lines,
            Field::BufferColumns => &mut self.buffer_columns,
            Field::QuickEdit => &mut self.quick_edit,
            Field::Insert => &mut self.insert,
        };
        *slot = value;
    }

    /// Assigns a raw integer to `field`, applying the tier substitution rule
    /// of size or toggle fields.
    pub fn assign(&mut self, field: Field, raw: i32) {
        let value = if field.is_toggle() {
            SettingValue::toggle(raw)
        } else {
            SettingValue::size(raw)
        };
        self.set(field, value);
    }

    /// Assigns `tier` to every field: sizes take the tier, toggles are
    /// enabled.
    pub fn assign_preset(&mut self, tier: Tier) {
        for field in Field::ALL {
            self.assign(field, tier.index() as i32);
        }
    }

    /// Returns the integer encoding of `field`, substituting tier
    /// selectors with their values in `tiers`.
    #[must_use]
    pub fn encode(&self, field: Field, tiers: &PresetTable) -> i32 {
        match (self.get(field), field.dimension()) {
            (SettingValue::Unset, _) => 0,
            (SettingValue::Tier(tier), Some(dimension)) => tiers.get(dimension, tier),
            (SettingValue::Tier(_) | SettingValue::Enabled, _) => TOGGLE_ENABLED,
            (SettingValue::Explicit(value), _) => value,
            (SettingValue::Disabled, _) => TOGGLE_DISABLED,
        }
    }

    /// Returns whether every field holds a non-negative value.
    ///
    /// Tier values are positive by construction, so only explicit values
    /// can break this.
    #[must_use]
    pub fn is_error_free(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| !matches!(self.get(field), SettingValue::Explicit(v) if v < 0))
    }

    /// Returns whether no field has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| !self.get(field).is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_unset() {
        let record = SettingRecord::new();
        assert!(record.is_empty());
        assert!(record.is_error_free());
        let tiers = PresetTable::default();
        for field in Field::ALL {
            assert_eq!(record.encode(field, &tiers), 0);
        }
    }

    #[test]
    fn size_tier_substitution() {
        let tiers = PresetTable::default();
        let mut record = SettingRecord::new();
        for tier in Tier::ALL {
            record.assign(Field::BufferColumns, tier.index() as i32);
            assert_eq!(
                record.encode(Field::BufferColumns, &tiers),
                tiers.get(Dimension::BufferColumns, tier)
            );
        }
        record.assign(Field::BufferColumns, 4);
        assert_eq!(record.encode(Field::BufferColumns, &tiers), 4);
    }

    #[test]
    fn toggle_encoding() {
        let tiers = PresetTable::default();
        let mut record = SettingRecord::new();

        record.assign(Field::QuickEdit, 3);
        assert_eq!(record.get(Field::QuickEdit), SettingValue::Enabled);
        assert_eq!(record.encode(Field::QuickEdit, &tiers), TOGGLE_ENABLED);

        record.assign(Field::QuickEdit, TOGGLE_DISABLED);
        assert_eq!(record.get(Field::QuickEdit), SettingValue::Disabled);
        assert_eq!(record.encode(Field::QuickEdit, &tiers), TOGGLE_DISABLED);
    }

    #[test]
    fn preset_assigns_every_field() {
        let tiers = PresetTable::default();
        let mut record = SettingRecord::new();
        record.assign_preset(Tier::Max);

        assert_eq!(record.encode(Field::WindowLines, &tiers), 96);
        assert_eq!(record.encode(Field::WindowColumns, &tiers), 245);
        assert_eq!(record.encode(Field::BufferLines, &tiers), 32766);
        assert_eq!(record.encode(Field::BufferColumns, &tiers), 32766);
        assert_eq!(record.get(Field::QuickEdit), SettingValue::Enabled);
        assert_eq!(record.get(Field::Insert), SettingValue::Enabled);
    }

    #[test]
    fn negative_explicit_value_is_an_error() {
        let mut record = SettingRecord::new();
        record.set(Field::WindowLines, SettingValue::Explicit(-1));
        assert!(!record.is_error_free());
    }

    #[test]
    fn field_dimension_and_labels() {
        assert_eq!(Field::BufferLines.dimension(), Some(Dimension::BufferLines));
        assert!(Field::Insert.is_toggle());
        assert!(!Field::WindowColumns.is_toggle());
        assert_eq!(Field::BufferColumns.to_string(), "buf col");
        assert_eq!(Field::from(Dimension::WindowLines), Field::WindowLines);
    }
}
