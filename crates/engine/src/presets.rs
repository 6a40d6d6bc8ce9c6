//! Preset resolution against a live surface.

use mo_config::FallbackGeometry;
use mo_console::TerminalControlSurface;
use mo_protocol::PresetTable;
use tracing::debug;

/// Derives the preset tiers from the largest window size `surface`
/// supports, falling back to `fallback` when it cannot tell.
///
/// # Examples
///
/// ```
/// use mo_config::FallbackGeometry;
/// use mo_console::RecordingSurface;
/// use mo_engine::resolve_presets;
/// use mo_protocol::{Dimension, Tier};
///
/// let tiers = resolve_presets(&RecordingSurface::detached(), &FallbackGeometry::default());
/// assert_eq!(tiers.get(Dimension::WindowColumns, Tier::Small), 78);
/// ```
pub fn resolve_presets<S>(surface: &S, fallback: &FallbackGeometry) -> PresetTable
where
    S: TerminalControlSurface + ?Sized,
{
    let (width, height) = match surface.largest_window_size() {
        Ok(size) => (
            if size.width == 0 { fallback.largest_width } else { size.width },
            if size.height == 0 { fallback.largest_height } else { size.height },
        ),
        Err(err) => {
            debug!(%err, "largest window size unavailable, using fallback");
            (fallback.largest_width, fallback.largest_height)
        }
    };
    debug!(width, height, "resolving preset tiers");
    PresetTable::from_largest(width, height)
}
