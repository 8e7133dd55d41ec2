#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write<P: AsRef<Path>>(root: P, relative: &str, content: &str) {
    let path = root.as_ref().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Builds a minimal complete source layout with two HTML theme files, one
/// PDF theme file and a nested theme directory that must not be copied.
pub fn source_tree<P: AsRef<Path>>(root: P) {
    let root = root.as_ref();
    write(root, "scripts/compile.sh", "#!/bin/sh\necho compile\n");
    write(root, "scripts/verify.sh", "#!/bin/sh\necho verify\n");
    write(root, "themes/html/ecss-default.css", "body { margin: 0; }\n");
    write(root, "themes/html/print.css", "@media print {}\n");
    write(root, "themes/html/fonts/mono.css", "/* nested */\n");
    write(root, "themes/pdf/ecss-default-theme.yml", "base:\n  font_size: 10\n");
    write(root, "themes/README.md", "# Themes\n");
    write(root, "Dockerfile", "FROM asciidoctor/docker-asciidoctor\n");
    write(root, "docker-compose.yml", "services: {}\n");
    write(root, "icd-template.adoc", "= Interface Control Document\n");
}

/// Number of direct theme files created by [`source_tree`].
pub const THEME_FILES: usize = 3;
