use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>Kind</key>
    <string>file</string>
    <key>Description</key>
    <string>A plain source file.</string>
    <key>Options</key>
    <array>
        <dict>
            <key>Identifier</key>
            <string>productName</string>
            <key>Default</key>
            <string>App</string>
        </dict>
        <dict>
            <key>Name</key>
            <string>Orphan</string>
            <key>Default</key>
            <string>x</string>
        </dict>
    </array>
</dict>
</plist>
"#;

fn write_config(dir: &Path, templates_root: &Path) -> std::path::PathBuf {
    let cfg_path = dir.join("config.toml");
    fs::write(
        &cfg_path,
        format!(
            "version = 1\nprofile = \"default\"\n\n[profiles.default]\ntemplates_root = \"{}\"\n",
            templates_root.display()
        ),
    )
    .unwrap();
    cfg_path
}

fn write_bundle(root: &Path, rel: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("TemplateInfo.plist"), PLIST).unwrap();
    fs::write(dir.join("___FILEBASENAME___.txt"), "// ___FILENAME___\n").unwrap();
}

#[test]
fn list_prints_sorted_logical_names() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("templates");
    write_bundle(&root, "Source/Code File.xctemplate");
    write_bundle(&root, "App.xctemplate");
    let cfg = write_config(tmp.path(), &root);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stn"));
    cmd.args(["--config", cfg.to_str().unwrap(), "list"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("App"))
        .stdout(predicate::str::contains("Source/Code File"))
        .stdout(predicate::str::contains("-- 2 bundles --"));
}

#[test]
fn show_prints_metadata_and_option_filtering() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("templates");
    write_bundle(&root, "App.xctemplate");
    let cfg = write_config(tmp.path(), &root);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stn"));
    cmd.args(["--config", cfg.to_str().unwrap(), "show", "--template", "App"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kind: file"))
        .stdout(predicate::str::contains("description: A plain source file."))
        .stdout(predicate::str::contains("productName = App"))
        .stdout(predicate::str::contains("skipped: option entry has no identifier"))
        .stdout(predicate::str::contains("___FILEBASENAME___.txt"));
}

#[test]
fn show_unknown_bundle_fails() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("templates");
    write_bundle(&root, "App.xctemplate");
    let cfg = write_config(tmp.path(), &root);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stn"));
    cmd.args(["--config", cfg.to_str().unwrap(), "show", "--template", "Nope"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL stn show"));
}
