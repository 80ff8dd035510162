pub mod event_bus;
pub mod fault_injector;
pub mod preference_store;
pub mod theme_probe;
pub mod time_service;
