//! Usage text, rendered against the live preset tiers.

use std::fmt::Write as _;

use crate::policy::ColumnPolicy;
use crate::preset::{Dimension, PresetTable, Tier};

/// Name the usage text refers to the program by.
pub const PROGRAM_NAME: &str = "mo";

/// Renders the usage text for `program`.
///
/// Preset lines show the window and buffer `columns/lines` of each tier.
/// The `C=` command is only listed under [`ColumnPolicy::Constrained`].
///
/// # Examples
///
/// ```
/// use mo_protocol::{ColumnPolicy, PresetTable, usage::render_usage};
///
/// let text = render_usage("mo", &PresetTable::default(), ColumnPolicy::Constrained);
/// assert!(text.contains("W:  78/29  B: 166/600 col/lin"));
/// assert!(text.contains("C=n"));
/// ```
#[must_use]
pub fn render_usage(program: &str, tiers: &PresetTable, policy: ColumnPolicy) -> String {
    let compound = if policy.is_constrained() { "W|B|C" } else { "W|B" };
    let mut text = String::new();

    text.push_str("Set Console Window & Buffer sizes, QuickEdit, other options from command line.\n\n");
    let _ = writeln!(
        text,
        "{program} [0|1|2|3] [[{compound}]=n] [[WC|BC]=n] [[WL|BL]=n] [QE=[true|false]] \n\t[IN=[true|false]]"
    );
    text.push('\n');
    text.push_str("              No argument will display Console status.\n");

    let descriptions = [
        "Small  window ~1/3 screen.",
        "Medium window ~1/2 screen.",
        "Large  window ~2/3 screen.",
        "Max    window ~max screen.",
    ];
    for (tier, description) in Tier::ALL.into_iter().zip(descriptions) {
        let _ = writeln!(
            text,
            "  {:<12}{description} W: {:>3}/{:<3} B: {:>3}/{:<3} col/lin",
            tier.index(),
            tiers.get(Dimension::WindowColumns, tier),
            tiers.get(Dimension::WindowLines, tier),
            tiers.get(Dimension::BufferColumns, tier),
            tiers.get(Dimension::BufferLines, tier),
        );
    }
    text.push_str("              Preset 0|1|2|3 also sets QE=True, IN=True\n\n");

    let mut commands = vec![
        ("W=n", "Window=n, where n=specify|0|1|2|3 (Small, Medium, Large, Max)"),
        ("B=n", "Buffer=n, where n=specify|0|1|2|3 (Small, Medium, Large, Max)"),
    ];
    if policy.is_constrained() {
        commands.push(("C=n", "Column=n, where n=specify|0|1|2|3 (Small, Medium, Large, Max)"));
    }
    commands.extend([
        ("WC=n", "Window Columns=n, where n=specify|0|1|2|3"),
        ("BC=n", "Buffer Columns=n, where n=specify|0|1|2|3"),
        ("WL=n", "Window Lines=n, where n=specify|0|1|2|3"),
        ("BL=n", "Buffer Lines=n, where n=specify|0|1|2|3"),
        ("QE=true", "QuickEdit Mode set true"),
        ("QE=false", "QuickEdit Mode set false"),
        ("IN=true", "Insert Mode set true"),
        ("IN=false", "Insert Mode set false"),
    ]);
    for (command, description) in commands {
        let _ = writeln!(text, "  {command:<12}{description}");
    }

    text.push('\n');
    text.push_str("Command line (CLI) arguments are processed in order. This allows general\n");
    text.push_str("options, such as presets, to be overridden with subsequent details.\n");
    text.push_str("Override QE and IN with preset 0|1|2|3 using QE=false, IN=false. The\n");
    text.push_str("actual buffer maximum size might be limited to less than 10000.\n");
    text.push_str("Preset sizes are based on screen resolution.\n\n");
    let _ = write!(
        text,
        "Simple and quick usage examples include: \"{program}\", \"{program} 1\", \"{program} 3 b=2\",\n\"{program} 2 qe=f in=f\""
    );
    if policy.is_constrained() {
        let _ = write!(text, ", \"{program} 1 c=100\"");
    }
    text.push('\n');
    text
}
