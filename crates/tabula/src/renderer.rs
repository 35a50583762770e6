#![forbid(unsafe_code)]

//! Output settings and the top-level renderer.

use std::sync::Arc;

use tabula_style::{ColorProfile, Theme};
use tabula_text::{DEFAULT_TAB_WIDTH, Lines, render_ansi};
use tabula_widgets::{RenderContext, Widget};

/// Default output width, one less than a classic 80-column terminal.
pub const DEFAULT_WIDTH: usize = 79;

/// How widgets are laid out and encoded.
///
/// ```
/// use tabula::{ColorProfile, RenderConfig};
///
/// let config = RenderConfig::default().width(40).color_profile(ColorProfile::Ansi256);
/// assert_eq!(config.width, 40);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width in cells that top-level widgets are rendered at.
    pub width: usize,
    pub theme: Arc<Theme>,
    /// Colors are downgraded to this profile when encoding.
    pub color_profile: ColorProfile,
    /// Emit OSC 8 hyperlinks.
    pub hyperlinks: bool,
    pub tab_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            theme: Arc::new(Theme::default()),
            color_profile: ColorProfile::TrueColor,
            hyperlinks: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<Arc<Theme>>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn color_profile(mut self, profile: ColorProfile) -> Self {
        self.color_profile = profile;
        self
    }

    #[must_use]
    pub fn hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// The context handed to widgets during a render pass.
    pub fn context(&self) -> RenderContext {
        RenderContext::new(Arc::clone(&self.theme)).with_tab_width(self.tab_width)
    }
}

/// Renders widgets to strings of ANSI-encoded text.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    cx: RenderContext,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let cx = config.context();
        Self { config, cx }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lay out `widget` at the configured width.
    pub fn render_lines(&self, widget: &dyn Widget) -> Lines {
        widget.render(&self.cx, self.config.width)
    }

    /// Lay out and encode `widget`. Lines are joined with `\n` and every line
    /// ends in the default style.
    pub fn render(&self, widget: &dyn Widget) -> String {
        render_ansi(
            &self.render_lines(widget),
            self.config.color_profile,
            self.config.hyperlinks,
        )
    }

    /// Lay out `widget` and drop all styling.
    pub fn render_plain(&self, widget: &dyn Widget) -> String {
        self.render_lines(widget).to_plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_style::{Ansi16, Rgb, TextStyle};
    use tabula_widgets::{HorizontalRule, Text};

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 79);
        assert_eq!(config.color_profile, ColorProfile::TrueColor);
        assert!(config.hyperlinks);
        assert_eq!(config.tab_width, 8);
    }

    #[test]
    fn renders_at_configured_width() {
        let renderer = Renderer::new(RenderConfig::default().width(5));
        assert_eq!(renderer.render_plain(&HorizontalRule::new()), "─────");
        assert_eq!(renderer.render_lines(&HorizontalRule::new()).width(), 5);
    }

    #[test]
    fn theme_drives_widget_defaults() {
        let renderer = Renderer::new(RenderConfig::default().width(3).theme(Theme::plain_ascii()));
        assert_eq!(renderer.render(&HorizontalRule::new()), "---");
    }

    #[test]
    fn styles_are_encoded() {
        let renderer = Renderer::default();
        let text = Text::styled("hi", TextStyle::new().fg(Ansi16::Red));
        assert_eq!(renderer.render(&text), "\x1b[31mhi\x1b[39m");
    }

    #[test]
    fn colors_follow_the_profile() {
        let text = Text::styled("x", TextStyle::new().fg(Rgb::new(255, 0, 0)));
        let mono = Renderer::new(RenderConfig::default().color_profile(ColorProfile::Mono));
        assert_eq!(mono.render(&text), "x");
        let truecolor = Renderer::default();
        assert_eq!(truecolor.render(&text), "\x1b[38;2;255;0;0mx\x1b[39m");
    }

    #[test]
    fn hyperlinks_can_be_disabled() {
        let text = Text::styled("link", TextStyle::new().hyperlink("https://example.com"));
        let renderer = Renderer::new(RenderConfig::default().hyperlinks(false));
        assert_eq!(renderer.render(&text), "link");
        assert!(Renderer::default().render(&text).contains("https://example.com"));
    }

    #[test]
    fn tab_width_reaches_widgets() {
        let renderer = Renderer::new(RenderConfig::default().tab_width(4));
        assert_eq!(renderer.render_plain(&Text::new("a\tb")), "a   b");
    }
}
