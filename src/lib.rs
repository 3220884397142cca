// Library surface mirrors the binary so integration tests can reach
// the renderer and config machinery via `juliaset::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
