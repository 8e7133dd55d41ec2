//! Fixed paths and markers used by a restructuring run.
//! Every path is relative to the repository root.

/// Directories created before anything is copied
pub const TARGET_DIRS: [&str; 6] = [
    "framework/scripts",
    "framework/themes/html",
    "framework/themes/pdf",
    "templates/icd",
    "templates/ssdlc",
    "templates/generic",
];

pub const FRAMEWORK_DIR: &str = "framework";
pub const SCRIPTS_DIR: &str = "framework/scripts";
pub const THEMES_DIR: &str = "framework/themes";

/// Build helper scripts, made executable once copied
pub const BUILD_SCRIPTS: [&str; 2] = ["scripts/compile.sh", "scripts/verify.sh"];

/// (source, destination) pairs for shallow theme copies
pub const THEME_DIRS: [(&str, &str); 2] = [
    ("themes/html", "framework/themes/html"),
    ("themes/pdf", "framework/themes/pdf"),
];

pub const THEME_README: &str = "themes/README.md";

pub const DOCKER_FILES: [&str; 2] = ["Dockerfile", "docker-compose.yml"];

/// Location of generated Makefiles
pub const FRAMEWORK_MAKEFILE: &str = "framework/Makefile.include";
pub const TEMPLATE_MAKEFILE: &str = "Makefile";
pub const ROOT_MAKEFILE: &str = "Makefile.new";

pub const TEMPLATES_DIR: &str = "templates";

/// Shell script holding heredoc bodies for the extracted templates
pub const COMPANION_SCRIPT: &str = "restructure.sh";

/// Terminates a heredoc body
pub const HEREDOC_END: &str = "\nEOF\n";
