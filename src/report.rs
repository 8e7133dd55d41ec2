//! Console reporting: banner, step headings and the closing summary.

use log::debug;
use std::path::PathBuf;

const RULE: &str = "========================================";

/// Everything a run created, as paths relative to the repository root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Directories ensured by the first step
    pub directories: Vec<PathBuf>,
    /// Files copied from the existing layout
    pub copied: Vec<PathBuf>,
    /// Files written from generated text
    pub generated: Vec<PathBuf>,
    /// Generated documents that fell back to placeholder content
    pub placeholders: Vec<PathBuf>,
}

pub fn print_banner() {
    println!("{RULE}");
    println!("Repository Restructuring Script");
    println!("{RULE}");
    println!();
}

/// Prints the heading that precedes a step's progress lines.
pub fn print_step(heading: &str) {
    println!("\n{heading}");
}

pub fn print_summary(report: &Report) {
    debug!(
        "{} directories, {} files copied, {} files generated",
        report.directories.len(),
        report.copied.len(),
        report.generated.len()
    );

    println!();
    println!("{RULE}");
    println!("Restructuring complete!");
    println!("{RULE}");
    println!();
    println!("Summary:");
    println!("  - Created framework/ directory with scripts, themes, and Docker files");
    println!("  - Created templates/icd/ with ICD template");
    println!("  - Created templates/ssdlc/ with SSDLC template");
    println!("  - Created templates/generic/ with generic template");
    println!("  - Created Makefile.new (review and rename to Makefile if desired)");
    for placeholder in &report.placeholders {
        println!("  - Placeholder content written to {}", placeholder.display());
    }
    println!();
    println!("Next steps:");
    println!("  1. Review Makefile.new and rename to Makefile if you want to replace the old one");
    println!("  2. Test building: cd templates/icd && make all");
    println!("  3. Verify outputs in build/ directory");
    println!("  4. Update any CI/CD scripts to use new paths");
    println!(
        "  5. Consider removing old directories: scripts/, themes/, and icd-template.adoc from root"
    );
    println!();
}
