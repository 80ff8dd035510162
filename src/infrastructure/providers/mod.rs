pub mod faults;
pub mod theme;

pub use faults::{NoFaults, ScriptedFaults};
pub use theme::StaticThemeProbe;
