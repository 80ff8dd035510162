/// Host colour-scheme query, consulted when no dark-mode preference is stored
pub trait ThemeProbe: Send + Sync {
    fn prefers_dark(&self) -> bool;
}
