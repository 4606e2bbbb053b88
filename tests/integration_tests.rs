use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treeclone::config::CloneOptions;
use treeclone::data::CloneMode;
use treeclone::output::{MANIFEST_NAME, write_manifest, write_placeholders};
use treeclone::walk::clone_tree;

/// Checks a `YYYY-MM-DD HH:MM:SS` timestamp.
fn assert_timestamp(value: &str) {
    assert_eq!(value.len(), 19, "bad timestamp: {:?}", value);
    for (i, c) in value.chars().enumerate() {
        match i {
            4 | 7 => assert_eq!(c, '-', "bad timestamp: {:?}", value),
            10 => assert_eq!(c, ' ', "bad timestamp: {:?}", value),
            13 | 16 => assert_eq!(c, ':', "bad timestamp: {:?}", value),
            _ => assert!(c.is_ascii_digit(), "bad timestamp: {:?}", value),
        }
    }
}

/// Splits `<mtime> (created <ctime>)` and checks both halves.
fn assert_time_pair(value: &str) {
    let (mtime, rest) = value.split_once(" (created ").expect("missing created part");
    assert_timestamp(mtime);
    assert_timestamp(rest.strip_suffix(')').expect("missing closing paren"));
}

fn build_tree(root: &Path) {
    // root/
    // ├── a/
    // │   └── x.txt
    // └── b/
    fs::create_dir_all(root.join("a")).expect("Failed to create a");
    fs::create_dir_all(root.join("b")).expect("Failed to create b");
    fs::write(root.join("a/x.txt"), "hello world\n").expect("Failed to write x.txt");
}

#[test]
fn test_manifest_mode_end_to_end() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    build_tree(src.path());

    let options = CloneOptions::new(CloneMode::Manifest, false, true);
    let summary = clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    let manifest = dst.path().join("a").join(MANIFEST_NAME);
    assert_eq!(fs::read_to_string(&manifest).unwrap(), "x.txt\n");

    assert!(dst.path().join("b").is_dir());
    assert!(!dst.path().join("b").join(MANIFEST_NAME).exists());
    // the root itself holds no files
    assert!(!dst.path().join(MANIFEST_NAME).exists());
    assert!(!dst.path().join("a/x.txt").exists());

    assert_eq!(summary.dirs_created, 3);
    assert_eq!(summary.files, 1);
    assert_eq!(summary.dirs_ignored, 0);
}

#[test]
fn test_manifest_mode_with_stats() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    build_tree(src.path());

    let options = CloneOptions::new(CloneMode::Manifest, true, true);
    let summary = clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    let content = fs::read_to_string(dst.path().join("a").join(MANIFEST_NAME)).unwrap();
    let line = content.strip_suffix('\n').expect("line should end with newline");
    let rest = line
        .strip_prefix("x.txt  [document (txt); 12 B; ")
        .expect("unexpected descriptor prefix");
    assert_time_pair(rest.strip_suffix(']').expect("missing closing bracket"));

    assert_eq!(summary.bytes, 12);
    assert_eq!(summary.degraded, 0);
}

#[test]
fn test_placeholder_mode_end_to_end() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    build_tree(src.path());
    fs::write(src.path().join("top.zip"), vec![0u8; 3000]).unwrap();

    let options = CloneOptions::new(CloneMode::Placeholders, false, true);
    let summary = clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    assert_eq!(fs::metadata(dst.path().join("a/x.txt")).unwrap().len(), 0);
    assert_eq!(fs::metadata(dst.path().join("top.zip")).unwrap().len(), 0);
    assert!(dst.path().join("b").is_dir());
    assert!(!dst.path().join("a").join(MANIFEST_NAME).exists());
    assert_eq!(summary.files, 2);
}

#[test]
fn test_placeholder_with_stats_holds_fragment_only() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    fs::write(src.path().join("a.txt"), "hello world\n").unwrap();

    let tally = write_placeholders(dst.path(), src.path(), &["a.txt"], true).unwrap();
    assert_eq!(tally.files, 1);
    assert_eq!(tally.bytes, 12);

    let content = fs::read_to_string(dst.path().join("a.txt")).unwrap();
    let fragment = content.strip_suffix('\n').expect("content should end with newline");
    assert!(!fragment.contains('['));
    assert!(!fragment.contains("a.txt"));
    let times = fragment
        .strip_prefix("document (txt); 12 B; ")
        .expect("unexpected fragment prefix");
    assert_time_pair(times);
}

#[test]
fn test_manifest_with_single_bare_name() {
    let dst = TempDir::new().expect("Failed to create temp dir");
    write_manifest(dst.path(), Path::new("/nowhere"), &["a.txt"], false).unwrap();
    assert_eq!(
        fs::read_to_string(dst.path().join(MANIFEST_NAME)).unwrap(),
        "a.txt\n"
    );
}

#[test]
fn test_manifest_records_unreadable_files() {
    let dst = TempDir::new().expect("Failed to create temp dir");
    let src = Path::new("/nowhere/at/all");
    let tally = write_manifest(dst.path(), src, &["lost.doc"], true).unwrap();

    assert_eq!(tally.degraded, 1);
    assert_eq!(
        fs::read_to_string(dst.path().join(MANIFEST_NAME)).unwrap(),
        format!("BAD NAMED FILE: {}\n", src.join("lost.doc").display())
    );
}

#[test]
fn test_ignored_directories_are_pruned() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");

    // src/
    // ├── Windows/
    // │   └── System32/
    // │       └── kernel.dll
    // ├── Program Files/
    // └── docs/
    //     └── readme.txt
    fs::create_dir_all(src.path().join("Windows/System32")).unwrap();
    fs::create_dir_all(src.path().join("Program Files")).unwrap();
    fs::create_dir_all(src.path().join("docs")).unwrap();
    fs::write(src.path().join("Windows/System32/kernel.dll"), "mz").unwrap();
    fs::write(src.path().join("docs/readme.txt"), "read me").unwrap();

    let options = CloneOptions::new(CloneMode::Manifest, false, true);
    let summary = clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    assert!(!dst.path().join("Windows").exists());
    assert!(!dst.path().join("Program Files").exists());
    assert!(dst.path().join("docs").join(MANIFEST_NAME).is_file());

    // the pruned subtree is never visited, so System32 is not counted
    assert_eq!(summary.dirs_ignored, 2);
    assert_eq!(summary.dirs_created, 2);
}

#[test]
fn test_custom_ignore_list() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(src.path().join("Node_Modules/pkg")).unwrap();
    fs::create_dir_all(src.path().join("windows")).unwrap();

    let options =
        CloneOptions::new(CloneMode::Manifest, false, true).with_ignore(["node_modules"]);
    clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    assert!(!dst.path().join("Node_Modules").exists());
    assert!(dst.path().join("windows").is_dir());
}

#[test]
fn test_rerun_over_existing_destination() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    build_tree(src.path());
    let options = CloneOptions::new(CloneMode::Manifest, false, true);

    clone_tree(src.path(), dst.path(), &options).expect("first clone should succeed");
    fs::write(src.path().join("a/y.txt"), "second").unwrap();
    clone_tree(src.path(), dst.path(), &options).expect("second clone should succeed");

    let content = fs::read_to_string(dst.path().join("a").join(MANIFEST_NAME)).unwrap();
    let mut lines: Vec<_> = content.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["x.txt", "y.txt"]);
}

#[test]
fn test_destination_created_when_missing() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    build_tree(src.path());
    let target = dst.path().join("deep/new/root");

    let options = CloneOptions::new(CloneMode::Manifest, false, true);
    clone_tree(src.path(), &target, &options).expect("clone should succeed");

    assert!(target.join("a").join(MANIFEST_NAME).is_file());
    assert!(target.join("b").is_dir());
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_bad_named() {
    let src = TempDir::new().expect("Failed to create temp dir");
    let dst = TempDir::new().expect("Failed to create temp dir");
    let link = src.path().join("dangling.txt");
    std::os::unix::fs::symlink(src.path().join("gone.txt"), &link).unwrap();

    let options = CloneOptions::new(CloneMode::Manifest, true, true);
    let summary = clone_tree(src.path(), dst.path(), &options).expect("clone should succeed");

    let content = fs::read_to_string(dst.path().join(MANIFEST_NAME)).unwrap();
    assert_eq!(content, format!("BAD NAMED FILE: {}\n", link.display()));
    assert_eq!(summary.degraded, 1);
}
