//! Game registration for World of Warcraft retail and classic: where the
//! game is installed, where add-ons go and how the add-on folder is prepared.

pub mod descriptors;
pub mod discovery;
pub mod setup;

pub use descriptors::{executable, mod_path, GameDescriptor, GameDetails};
pub use discovery::{discover, find_game, Discovery};
pub use setup::{prepare_for_modding, prepare_game};

#[cfg(test)]
#[path = "tests/descriptors_tests.rs"]
mod descriptors_tests;

#[cfg(test)]
#[path = "tests/discovery_tests.rs"]
mod discovery_tests;

#[cfg(test)]
#[path = "tests/setup_tests.rs"]
mod setup_tests;
