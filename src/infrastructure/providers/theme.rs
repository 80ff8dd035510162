use crate::domain::ports::theme_probe::ThemeProbe;

/// Colour-scheme signal fixed at startup, for hosts without a live query
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticThemeProbe {
    prefers_dark: bool,
}

impl StaticThemeProbe {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl ThemeProbe for StaticThemeProbe {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
