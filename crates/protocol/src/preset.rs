//! Preset tiers derived from the terminal's largest supported size.
//!
//! This module provides the [`PresetTable`] type, which holds four size
//! tiers (Small, Medium, Large, Max) for each of the four geometry
//! dimensions a console exposes.
//!
//! # Derivation
//!
//! Given the largest window width `W` and height `H` the terminal supports:
//!
//! | Dimension      | Tier 0       | Tier 1      | Tier 2         | Tier 3       |
//! |----------------|--------------|-------------|----------------|--------------|
//! | window lines   | `H/3 - 4`    | `H/2 - 4`   | `2H/3 - 4`     | `H - 4`      |
//! | window columns | `W/3 - 5`    | `W/2 - 5`   | `2W/3 - 5`     | `W - 5`      |
//! | buffer lines   | `600`        | `2400`      | `10000`        | `32766`      |
//! | buffer columns | `2W/3`       | `W`         | `4W/3`         | `32766`      |
//!
//! Window tiers never drop below 1 and no tier exceeds [`BUFFER_LIMIT`].

use std::fmt;

/// Largest value any console dimension accepts.
pub const BUFFER_LIMIT: i32 = i16::MAX as i32 - 1;

/// Largest window width used when the terminal cannot report one.
pub const FALLBACK_LARGEST_WIDTH: u16 = 250;

/// Largest window height used when the terminal cannot report one.
pub const FALLBACK_LARGEST_HEIGHT: u16 = 100;

/// Fixed buffer line tiers.
const BUFFER_LINE_TIERS: [i32; 4] = [600, 2400, 10000, BUFFER_LIMIT];

/// Lines subtracted from every window line tier.
const WINDOW_LINE_MARGIN: i32 = 4;

/// Columns subtracted from every window column tier.
const WINDOW_COLUMN_MARGIN: i32 = 5;

/// One of the four preconfigured size levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// About a third of the screen.
    Small,
    /// About half of the screen.
    Medium,
    /// About two thirds of the screen.
    Large,
    /// The whole screen.
    Max,
}

impl Tier {
    /// All tiers, smallest first.
    pub const ALL: [Tier; 4] = [Tier::Small, Tier::Medium, Tier::Large, Tier::Max];

    /// Returns the tier selected by `value`, if it is in `0..=3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mo_protocol::Tier;
    ///
    /// assert_eq!(Tier::from_index(2), Some(Tier::Large));
    /// assert_eq!(Tier::from_index(4), None);
    /// assert_eq!(Tier::from_index(-1), None);
    /// ```
    #[must_use]
    pub fn from_index(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Small),
            1 => Some(Self::Medium),
            2 => Some(Self::Large),
            3 => Some(Self::Max),
            _ => None,
        }
    }

    /// Returns the numeric selector of this tier.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::Max => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Max => "Max",
        };
        f.write_str(name)
    }
}

/// One of the four console geometry dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    WindowLines,
    WindowColumns,
    BufferLines,
    BufferColumns,
}

impl Dimension {
    /// All dimensions.
    pub const ALL: [Dimension; 4] = [
        Dimension::WindowLines,
        Dimension::WindowColumns,
        Dimension::BufferLines,
        Dimension::BufferColumns,
    ];
}

/// The tier values of every dimension, computed once per run.
///
/// # Examples
///
/// ```
/// use mo_protocol::{Dimension, PresetTable, Tier};
///
/// let table = PresetTable::from_largest(250, 100);
/// assert_eq!(table.get(Dimension::WindowColumns, Tier::Small), 78);
/// assert_eq!(table.get(Dimension::WindowLines, Tier::Small), 29);
/// assert_eq!(table.get(Dimension::BufferColumns, Tier::Small), 166);
/// assert_eq!(table.get(Dimension::BufferLines, Tier::Small), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTable {
    window_lines: [i32; 4],
    window_columns: [i32; 4],
    buffer_lines: [i32; 4],
    buffer_columns: [i32; 4],
}

impl PresetTable {
    /// Derives the tiers from the largest window size the terminal supports.
    ///
    /// A dimension reported as `0` is replaced with its fallback
    /// ([`FALLBACK_LARGEST_WIDTH`], [`FALLBACK_LARGEST_HEIGHT`]).
    #[must_use]
    pub fn from_largest(width: u16, height: u16) -> Self {
        let width = i32::from(if width == 0 { FALLBACK_LARGEST_WIDTH } else { width });
        let height = i32::from(if height == 0 { FALLBACK_LARGEST_HEIGHT } else { height });

        let window = |value: i32, margin: i32| (value - margin).clamp(1, BUFFER_LIMIT);
        let buffer = |value: i32| value.clamp(1, BUFFER_LIMIT);

        Self {
            window_lines: [
                window(height / 3, WINDOW_LINE_MARGIN),
                window(height / 2, WINDOW_LINE_MARGIN),
                window(height * 2 / 3, WINDOW_LINE_MARGIN),
                window(height, WINDOW_LINE_MARGIN),
            ],
            window_columns: [
                window(width / 3, WINDOW_COLUMN_MARGIN),
                window(width / 2, WINDOW_COLUMN_MARGIN),
                window(width * 2 / 3, WINDOW_COLUMN_MARGIN),
                window(width, WINDOW_COLUMN_MARGIN),
            ],
            buffer_lines: BUFFER_LINE_TIERS,
            buffer_columns: [
                buffer(width * 2 / 3),
                buffer(width),
                buffer(width * 4 / 3),
                BUFFER_LIMIT,
            ],
        }
    }

    /// Returns the value of `dimension` at `tier`.
    #[must_use]
    pub fn get(&self, dimension: Dimension, tier: Tier) -> i32 {
        self.tiers(dimension)[tier.index()]
    }

    /// Returns all four tier values of `dimension`, smallest first.
    #[must_use]
    pub fn tiers(&self, dimension: Dimension) -> [i32; 4] {
        match dimension {
            Dimension::WindowLines => self.window_lines,
            Dimension::WindowColumns => self.window_columns,
            Dimension::BufferLines => self.buffer_lines,
            Dimension::BufferColumns => self.buffer_columns,
        }
    }

    /// Returns the tier-0 value of `dimension`, its lower bound.
    #[must_use]
    pub fn minimum(&self, dimension: Dimension) -> i32 {
        self.get(dimension, Tier::Small)
    }

    /// Returns the tier-3 value of `dimension`, its upper bound.
    #[must_use]
    pub fn maximum(&self, dimension: Dimension) -> i32 {
        self.get(dimension, Tier::Max)
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::from_largest(FALLBACK_LARGEST_WIDTH, FALLBACK_LARGEST_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_size_tiers() {
        let table = PresetTable::default();
        assert_eq!(table.tiers(Dimension::WindowLines), [29, 46, 62, 96]);
        assert_eq!(table.tiers(Dimension::WindowColumns), [78, 120, 161, 245]);
        assert_eq!(table.tiers(Dimension::BufferLines), [600, 2400, 10000, 32766]);
        assert_eq!(table.tiers(Dimension::BufferColumns), [166, 250, 333, 32766]);
    }

    #[test]
    fn zero_size_uses_fallback() {
        assert_eq!(PresetTable::from_largest(0, 0), PresetTable::default());
        assert_eq!(
            PresetTable::from_largest(0, 100),
            PresetTable::from_largest(250, 100)
        );
    }

    #[test]
    fn large_screen_tiers() {
        let table = PresetTable::from_largest(480, 150);
        assert_eq!(table.tiers(Dimension::WindowLines), [46, 71, 96, 146]);
        assert_eq!(table.tiers(Dimension::WindowColumns), [155, 235, 315, 475]);
        assert_eq!(table.tiers(Dimension::BufferColumns), [320, 480, 640, 32766]);
    }

    #[test]
    fn tiny_screen_window_tiers_stay_positive() {
        let table = PresetTable::from_largest(6, 6);
        assert_eq!(table.tiers(Dimension::WindowLines), [1, 1, 1, 2]);
        assert_eq!(table.tiers(Dimension::WindowColumns), [1, 1, 1, 1]);
    }

    #[test]
    fn bounds_are_first_and_last_tier() {
        let table = PresetTable::default();
        assert_eq!(table.minimum(Dimension::BufferLines), 600);
        assert_eq!(table.maximum(Dimension::BufferLines), BUFFER_LIMIT);
        assert_eq!(table.minimum(Dimension::WindowColumns), 78);
        assert_eq!(table.maximum(Dimension::WindowColumns), 245);
    }

    #[test]
    fn tier_from_index() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(Tier::from_index(i as i32), Some(*tier));
            assert_eq!(tier.index(), i);
        }
        assert_eq!(Tier::from_index(4), None);
    }
}
