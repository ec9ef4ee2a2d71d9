//! The compiled-in theme set.

use console::Style;

use super::theme::Theme;

/// Builds the ten builtin themes, in display order.
///
/// Every theme defines the same palette names the selector template
/// styles with: `label`, `option`, `selected`, and `marker`.
pub(crate) fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::new("dark", "Dark")
            .add("label", Style::new().dim())
            .add("option", Style::new().white())
            .add("selected", Style::new().cyan().bold())
            .add("marker", Style::new().cyan()),
        Theme::new("light", "Light")
            .add("label", Style::new().dim())
            .add("option", Style::new().black())
            .add("selected", Style::new().blue().bold())
            .add("marker", Style::new().blue()),
        Theme::new("solar", "Solar")
            .add("label", Style::new().yellow().dim())
            .add("option", Style::new().white())
            .add("selected", Style::new().yellow().bold())
            .add("marker", Style::new().yellow()),
        Theme::new("sunset", "Sunset")
            .add("label", Style::new().red().dim())
            .add("option", Style::new().magenta())
            .add("selected", Style::new().red().bold())
            .add("marker", Style::new().red()),
        Theme::new("ocean", "Ocean")
            .add("label", Style::new().cyan().dim())
            .add("option", Style::new().blue())
            .add("selected", Style::new().cyan().bold())
            .add("marker", Style::new().blue()),
        Theme::new("violet", "Violet")
            .add("label", Style::new().magenta().dim())
            .add("option", Style::new().white())
            .add("selected", Style::new().magenta().bold())
            .add("marker", Style::new().magenta()),
        Theme::new("mint", "Mint")
            .add("label", Style::new().green().dim())
            .add("option", Style::new().white())
            .add("selected", Style::new().green().bold())
            .add("marker", Style::new().green()),
        Theme::new("mono", "Mono")
            .add("label", Style::new().dim())
            .add("option", Style::new().dim())
            .add("selected", Style::new().bold())
            .add("marker", Style::new()),
        Theme::new("sunrise", "Sunrise")
            .add("label", Style::new().yellow().dim())
            .add("option", Style::new().yellow())
            .add("selected", Style::new().red().bold())
            .add("marker", Style::new().yellow()),
        Theme::new("retro", "Retro")
            .add("label", Style::new().green().dim())
            .add("option", Style::new().green().dim())
            .add("selected", Style::new().green().bold())
            .add("marker", Style::new().green()),
    ]
}
