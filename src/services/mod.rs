pub mod addons;
pub mod config;
pub mod fs_utils;
pub mod game;
pub mod host;
