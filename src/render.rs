//! Styled one-line rendering for the widget.

use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::theme::Theme;

/// How rendered output is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Defer to terminal color detection.
    #[default]
    Auto,
    /// Always emit styling.
    Term,
    /// Never emit styling.
    Text,
}

impl OutputMode {
    pub(crate) fn should_use_color(self) -> bool {
        match self {
            OutputMode::Term => true,
            OutputMode::Text => false,
            OutputMode::Auto => console::colors_enabled(),
        }
    }
}

/// Renders widget templates against one theme's palette.
///
/// Templates style text through the `style` filter, which resolves names
/// in the theme's palette. Unknown names pass the text through unstyled,
/// matching the crate's silent-fallback behavior.
pub(crate) struct LineRenderer {
    env: Environment<'static>,
}

impl LineRenderer {
    pub(crate) fn new(theme: &Theme, mode: OutputMode) -> Self {
        let mut env = Environment::new();
        let palette = theme.palette().clone();
        let use_color = mode.should_use_color();

        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match palette.get(&name) {
                Some(style) if use_color => style
                    .clone()
                    .force_styling(true)
                    .apply_to(&text)
                    .to_string(),
                _ => text,
            }
        });

        Self { env }
    }

    pub(crate) fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub(crate) fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;
    use serde::Serialize;

    #[derive(Serialize)]
    struct LineData {
        message: String,
    }

    fn theme() -> Theme {
        Theme::new("dark", "Dark").add("tone", Style::new().cyan())
    }

    #[test]
    fn test_render_text_mode_strips_styling() {
        let mut renderer = LineRenderer::new(&theme(), OutputMode::Text);
        renderer
            .add_template("line", r#"{{ message | style("tone") }}"#)
            .unwrap();

        let out = renderer
            .render(
                "line",
                &LineData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_render_term_mode_emits_styling() {
        let mut renderer = LineRenderer::new(&theme(), OutputMode::Term);
        renderer
            .add_template("line", r#"{{ message | style("tone") }}"#)
            .unwrap();

        let out = renderer
            .render(
                "line",
                &LineData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert!(out.contains("\x1b[36"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_unknown_style_passes_through() {
        let mut renderer = LineRenderer::new(&theme(), OutputMode::Term);
        renderer
            .add_template("line", r#"{{ message | style("missing") }}"#)
            .unwrap();

        let out = renderer
            .render(
                "line",
                &LineData {
                    message: "hi".into(),
                },
            )
            .unwrap();
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = LineRenderer::new(&theme(), OutputMode::Text);
        let result = renderer.render(
            "nonexistent",
            &LineData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
    }
}
