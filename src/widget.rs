//! The selection control inserted into the host's header.

use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::{LineRenderer, OutputMode};
use crate::theme::{Theme, ThemeRegistry};

/// Fixed descriptive label carried by the control.
pub const WIDGET_LABEL: &str = "Choose site theme";

/// One line: the caption, then every option in registry order with the
/// displayed value marked.
const SELECTOR_TEMPLATE: &str = r#"{{ caption | style("label") }} {% for opt in options %}{% if opt.selected %}{{ "▸" | style("marker") }}{{ opt.label | style("selected") }}{% else %}{{ opt.label | style("option") }}{% endif %}{% if not loop.last %}  {% endif %}{% endfor %}"#;

#[derive(Serialize)]
struct OptionRow {
    label: String,
    selected: bool,
}

#[derive(Serialize)]
struct SelectorData<'a> {
    caption: &'a str,
    options: Vec<OptionRow>,
}

/// One selectable entry: the canonical id plus its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub id: String,
    pub label: String,
}

/// The selection control.
///
/// Holds every registry entry in display order plus the currently
/// displayed value. The displayed value only ever changes to a member id;
/// anything else is ignored.
#[derive(Debug, Clone)]
pub struct Selector {
    options: Vec<SelectorOption>,
    value: String,
}

impl Selector {
    pub(crate) fn from_registry(registry: &ThemeRegistry) -> Self {
        let options: Vec<SelectorOption> = registry
            .iter()
            .map(|t| SelectorOption {
                id: t.id().to_string(),
                label: t.label().to_string(),
            })
            .collect();
        let value = options.first().map(|o| o.id.clone()).unwrap_or_default();
        Self { options, value }
    }

    /// The fixed descriptive label.
    pub fn label(&self) -> &'static str {
        WIDGET_LABEL
    }

    /// All entries, in display order.
    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    /// The currently displayed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, id: &str) {
        if self.options.iter().any(|o| o.id == id) {
            self.value = id.to_string();
        }
    }

    /// Renders the control as one styled line using `theme`'s palette.
    ///
    /// `entry_width` caps each label's display width, truncating with `…`
    /// for narrow headers.
    ///
    /// # Errors
    ///
    /// Returns a template error; the builtin template cannot fail.
    pub fn render(
        &self,
        theme: &Theme,
        mode: OutputMode,
        entry_width: Option<usize>,
    ) -> Result<String, minijinja::Error> {
        let mut renderer = LineRenderer::new(theme, mode);
        renderer.add_template("selector", SELECTOR_TEMPLATE)?;

        let options = self
            .options
            .iter()
            .map(|o| OptionRow {
                label: match entry_width {
                    Some(width) => fit_width(&o.label, width),
                    None => o.label.clone(),
                },
                selected: o.id == self.value,
            })
            .collect();

        renderer.render(
            "selector",
            &SelectorData {
                caption: WIDGET_LABEL,
                options,
            },
        )
    }
}

/// Fits a label into `max_width` terminal columns, truncating with `…`.
fn fit_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > budget {
            break;
        }
        out.push(ch);
        used += width;
    }
    out.push('…');
    out
}
