pub mod analysis;
pub mod api;
pub mod conditions;
pub mod config;
pub mod error;
pub mod render;
pub mod road;
pub mod scoring;
pub mod state;
