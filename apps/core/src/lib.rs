pub mod config;
pub mod contract;
pub mod crawler;
pub mod hotkey;
pub mod index;
pub mod launcher;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod search;
pub mod sources;
pub mod transport;
