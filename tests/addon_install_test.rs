mod common;

use common::RecordingContext;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use wowaddons_lib::services::addons::{list_archive_files, plan_archive_install};

fn create_zip(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for entry in entries {
        if entry.ends_with('/') {
            writer.add_directory(entry.to_string(), options).unwrap();
        } else {
            writer.start_file(entry.to_string(), options).unwrap();
            writer.write_all(b"-- addon file").unwrap();
        }
    }
    writer.finish().unwrap();
    zip_path
}

// Archive on disk -> registered installer test/install -> copy instructions
#[test]
fn registered_installer_handles_multi_addon_archive() {
    let ext_dir = tempdir().unwrap();
    let work = tempdir().unwrap();
    let mut context = RecordingContext::new();
    wowaddons_lib::init(&mut context, ext_dir.path()).unwrap();
    let installer = &context.installers[0];

    let zip_path = create_zip(
        work.path(),
        "DBM-Suite.zip",
        &[
            "DBM-Suite/",
            "DBM-Suite/DBM-Core/",
            "DBM-Suite/DBM-Core/DBM-Core.toc",
            "DBM-Suite/DBM-Core/DBM-Core.lua",
            "DBM-Suite/DBM-StatusBarTimers/",
            "DBM-Suite/DBM-StatusBarTimers/DBM-StatusBarTimers.toc",
            "DBM-Suite/DBM-StatusBarTimers/Textures/bar.tga",
            "DBM-Suite/LICENSE.txt",
        ],
    );
    let files = list_archive_files(&zip_path).unwrap();

    assert!(installer.test(&files, "worldofwarcraft").supported);
    assert!(!installer.test(&files, "cyberpunk2077").supported);

    let result = installer.install(&files);
    let copies: Vec<_> = result
        .instructions
        .iter()
        .map(|i| (i.source.as_str(), i.destination.as_str()))
        .collect();

    assert_eq!(
        copies,
        vec![
            ("DBM-Suite/DBM-Core/DBM-Core.toc", "DBM-Core/DBM-Core.toc"),
            ("DBM-Suite/DBM-Core/DBM-Core.lua", "DBM-Core/DBM-Core.lua"),
            (
                "DBM-Suite/DBM-StatusBarTimers/DBM-StatusBarTimers.toc",
                "DBM-StatusBarTimers/DBM-StatusBarTimers.toc"
            ),
            (
                "DBM-Suite/DBM-StatusBarTimers/Textures/bar.tga",
                "DBM-StatusBarTimers/Textures/bar.tga"
            ),
        ]
    );
}

#[test]
fn archive_without_toc_is_not_planned() {
    let work = tempdir().unwrap();
    let zip_path = create_zip(
        work.path(),
        "textures.zip",
        &["Textures/", "Textures/bar.tga"],
    );

    let result = plan_archive_install(&zip_path, "worldofwarcraftclassic").unwrap();
    assert!(result.instructions.is_empty());
}

#[test]
fn install_result_matches_host_json() {
    let work = tempdir().unwrap();
    let zip_path = create_zip(work.path(), "a.zip", &["AddonA/AddonA.toc"]);

    let result = plan_archive_install(&zip_path, "worldofwarcraft").unwrap();
    let json = serde_json::to_string(&result).unwrap();

    assert_eq!(
        json,
        r#"{"instructions":[{"type":"copy","source":"AddonA/AddonA.toc","destination":"AddonA/AddonA.toc"}]}"#
    );
}
