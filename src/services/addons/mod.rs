//! Add-on archive handling: deciding whether an archive holds World of
//! Warcraft add-ons and turning its file list into copy instructions.

mod archive;
mod classifier;
mod packager;
mod types;

// Re-export public API
pub use archive::{list_archive_files, plan_archive_install};
pub use classifier::{classify, is_marker_file};
pub use packager::{destination_for, group_addons, install, package};
pub use types::{
    AddonUnit, ClassifyResult, InstallInstruction, InstallResult, InstructionType, MOD_FILE_EXT,
};

#[cfg(test)]
#[path = "tests/packager_tests.rs"]
mod packager_tests;

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod classifier_tests;

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod archive_tests;
