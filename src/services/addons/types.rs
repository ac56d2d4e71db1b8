use serde::{Deserialize, Serialize};

/// Every World of Warcraft add-on ships a table-of-contents file.
pub const MOD_FILE_EXT: &str = ".toc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionType {
    Copy,
}

/// A single directive for the host's install pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallInstruction {
    #[serde(rename = "type")]
    pub kind: InstructionType,
    pub source: String,
    pub destination: String,
}

impl InstallInstruction {
    pub fn copy(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            kind: InstructionType::Copy,
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// One add-on found inside an archive, anchored by its `.toc` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonUnit {
    pub marker_file: String,
    /// Directory containing `marker_file`; `"."` when it sits at the archive root.
    pub root_folder: String,
    pub files: Vec<String>,
}

/// Answer to the host's "can this installer handle the archive" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResult {
    pub supported: bool,
    pub required_files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResult {
    pub instructions: Vec<InstallInstruction>,
}
