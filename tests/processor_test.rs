mod common;

use std::fs;
use std::path::Path;

use restructure::{
    constants::TARGET_DIRS,
    copier::{exec_permissions, ExecPermissions},
    error::{Error, Result},
    processor::Restructurer,
    renderer::MiniJinjaRenderer,
    report::Report,
    template::{GENERIC, SSDLC},
};
use tempfile::TempDir;

const COMPANION: &str = "#!/bin/bash
set -e
mkdir -p templates/ssdlc templates/generic
cat > templates/ssdlc/ssdlc-template.adoc << 'EOF'
= SSDLC Document
:toc: left

== Threat Model
EOF

cat > templates/generic/generic-template.adoc << 'EOF'
= Generic Document

== Introduction
EOF
echo done
";

fn restructure(root: &Path) -> Result<Report> {
    let engine = MiniJinjaRenderer::new();
    Restructurer::new(root, &engine).run()
}

#[test_log::test]
fn test_complete_layout_without_companion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);

    let report = restructure(root).unwrap();

    assert_eq!(report.directories.len(), TARGET_DIRS.len());
    assert_eq!(report.copied.len(), 6 + common::THEME_FILES);
    assert_eq!(report.generated.len(), 7);
    assert_eq!(
        report.placeholders,
        vec![SSDLC.document_path(), GENERIC.document_path()]
    );

    for dir in TARGET_DIRS {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }
    for path in report.copied.iter().chain(&report.generated) {
        let metadata = fs::metadata(root.join(path)).unwrap();
        assert!(metadata.is_file(), "{} is not a file", path.display());
        assert!(metadata.len() > 0, "{} is empty", path.display());
    }

    let expected = [
        "framework/scripts/compile.sh",
        "framework/scripts/verify.sh",
        "framework/themes/html/ecss-default.css",
        "framework/themes/html/print.css",
        "framework/themes/pdf/ecss-default-theme.yml",
        "framework/themes/README.md",
        "framework/Dockerfile",
        "framework/docker-compose.yml",
        "templates/icd/icd-template.adoc",
        "framework/Makefile.include",
        "templates/icd/Makefile",
        "templates/ssdlc/Makefile",
        "templates/generic/Makefile",
        "templates/ssdlc/ssdlc-template.adoc",
        "templates/generic/generic-template.adoc",
        "Makefile.new",
    ];
    for path in expected {
        assert!(root.join(path).is_file(), "missing {path}");
    }
}

#[test]
fn test_theme_copy_is_shallow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);

    restructure(root).unwrap();

    assert!(!root.join("framework/themes/html/fonts").exists());
    assert!(!root.join("framework/themes/html/mono.css").exists());
}

#[cfg(unix)]
#[test]
fn test_scripts_become_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    for script in ["scripts/compile.sh", "scripts/verify.sh"] {
        fs::set_permissions(root.join(script), fs::Permissions::from_mode(0o644)).unwrap();
    }

    restructure(root).unwrap();

    for script in ["framework/scripts/compile.sh", "framework/scripts/verify.sh"] {
        assert_eq!(exec_permissions(root.join(script)).unwrap(), ExecPermissions::ALL);
    }
    // Originals are left as they were.
    assert_eq!(
        exec_permissions(root.join("scripts/compile.sh")).unwrap(),
        ExecPermissions::NONE
    );
}

#[test]
fn test_placeholder_content_without_companion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);

    restructure(root).unwrap();

    let ssdlc = fs::read_to_string(root.join(SSDLC.document_path())).unwrap();
    assert!(ssdlc.starts_with("= Secure Software Development Lifecycle (SSDLC) Document\n"));
    assert!(ssdlc.contains("[See restructure.sh for full SSDLC template content]"));

    let generic = fs::read_to_string(root.join(GENERIC.document_path())).unwrap();
    assert!(generic.starts_with("= Generic Document Template\n"));
    assert!(generic.contains("[See restructure.sh for full generic template content]"));
}

#[test_log::test]
fn test_placeholder_content_when_marker_missing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    common::write(root, "restructure.sh", "#!/bin/bash\necho nothing to see\n");

    let report = restructure(root).unwrap();

    assert_eq!(report.placeholders.len(), 2);
}

#[test]
fn test_content_extracted_from_companion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    common::write(root, "restructure.sh", COMPANION);

    let report = restructure(root).unwrap();

    assert!(report.placeholders.is_empty());
    assert_eq!(
        fs::read_to_string(root.join(SSDLC.document_path())).unwrap(),
        "= SSDLC Document\n:toc: left\n\n== Threat Model"
    );
    assert_eq!(
        fs::read_to_string(root.join(GENERIC.document_path())).unwrap(),
        "= Generic Document\n\n== Introduction"
    );
}

#[test]
fn test_second_run_is_identical() {
    let once = TempDir::new().unwrap();
    let twice = TempDir::new().unwrap();
    for dir in [&once, &twice] {
        common::source_tree(dir.path());
        common::write(dir.path(), "restructure.sh", COMPANION);
    }

    restructure(once.path()).unwrap();
    let first = restructure(twice.path()).unwrap();
    let second = restructure(twice.path()).unwrap();

    assert_eq!(first, second);
    assert!(!dir_diff::is_different(once.path(), twice.path()).unwrap());
}

#[test]
fn test_missing_script_aborts_after_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    fs::remove_file(root.join("scripts/compile.sh")).unwrap();

    match restructure(root) {
        Err(Error::MissingSource { path }) => {
            assert_eq!(path, root.join("scripts/compile.sh"))
        }
        other => panic!("Expected MissingSource, got {other:?}"),
    }

    for dir in TARGET_DIRS {
        assert!(root.join(dir).is_dir());
    }
    assert_eq!(fs::read_dir(root.join("framework/scripts")).unwrap().count(), 0);
    assert_eq!(fs::read_dir(root.join("templates/icd")).unwrap().count(), 0);
    assert!(!root.join("framework/Makefile.include").exists());
    assert!(!root.join("Makefile.new").exists());
}

#[test]
fn test_missing_theme_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    fs::remove_dir_all(root.join("themes/pdf")).unwrap();

    match restructure(root) {
        Err(Error::MissingSource { path }) => assert_eq!(path, root.join("themes/pdf")),
        other => panic!("Expected MissingSource, got {other:?}"),
    }
}

#[test]
fn test_theme_source_that_is_a_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    fs::remove_dir_all(root.join("themes/pdf")).unwrap();
    common::write(root, "themes/pdf", "not a directory\n");

    match restructure(root) {
        Err(Error::NotADirectory { path }) => assert_eq!(path, root.join("themes/pdf")),
        other => panic!("Expected NotADirectory, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_rerun_with_read_only_scripts() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    for script in ["scripts/compile.sh", "scripts/verify.sh"] {
        fs::set_permissions(root.join(script), fs::Permissions::from_mode(0o444)).unwrap();
    }

    let first = restructure(root).unwrap();
    let second = restructure(root).unwrap();

    assert_eq!(first, second);
    for script in ["framework/scripts/compile.sh", "framework/scripts/verify.sh"] {
        assert_eq!(exec_permissions(root.join(script)).unwrap(), ExecPermissions::ALL);
    }
}

#[test]
fn test_generated_makefiles_match_reference_text() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);

    restructure(root).unwrap();

    let expected = [
        ("framework/Makefile.include", include_str!("golden/Makefile.include")),
        ("Makefile.new", include_str!("golden/Makefile.new")),
        ("templates/icd/Makefile", include_str!("golden/icd.Makefile")),
        ("templates/ssdlc/Makefile", include_str!("golden/ssdlc.Makefile")),
        ("templates/generic/Makefile", include_str!("golden/generic.Makefile")),
    ];
    for (path, content) in expected {
        assert_eq!(fs::read_to_string(root.join(path)).unwrap(), content, "{path} differs");
    }
}

#[test]
fn test_directory_in_place_of_generated_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    common::source_tree(root);
    fs::create_dir_all(root.join("Makefile.new")).unwrap();

    match restructure(root) {
        Err(Error::Io { path, .. }) => assert_eq!(path, root.join("Makefile.new")),
        other => panic!("Expected Io error, got {other:?}"),
    }
    // Earlier steps remain on disk.
    assert!(root.join("framework/Makefile.include").is_file());
}
