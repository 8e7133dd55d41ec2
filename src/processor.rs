//! Restructuring orchestration.
//! Runs every step in a fixed order against a repository root and collects
//! what was created into a [`Report`]. The first failing step aborts the run;
//! files written before it stay on disk.

use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    constants::{
        BUILD_SCRIPTS, COMPANION_SCRIPT, DOCKER_FILES, FRAMEWORK_DIR, FRAMEWORK_MAKEFILE,
        ROOT_MAKEFILE, SCRIPTS_DIR, TARGET_DIRS, TEMPLATE_MAKEFILE, THEMES_DIR, THEME_DIRS,
        THEME_README,
    },
    copier::{copy_dir_files, copy_file, make_executable, ExecPermissions},
    error::Result,
    extractor::extract_or_placeholder,
    generator::{self, template_makefile, write_text},
    layout::create_directories,
    renderer::TemplateRenderer,
    report::{print_step, Report},
    template::{DocumentSource, DocumentTemplate, ICD, TEMPLATES},
};

/// Migrates a document repository rooted at `root` into the
/// `framework/` + `templates/` layout.
pub struct Restructurer<'a> {
    root: PathBuf,
    engine: &'a dyn TemplateRenderer,
    report: Report,
}

impl<'a> Restructurer<'a> {
    pub fn new<P: AsRef<Path>>(root: P, engine: &'a dyn TemplateRenderer) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            engine,
            report: Report::default(),
        }
    }

    /// Runs all steps and returns what was created.
    ///
    /// # Flow
    /// 1. Creates the target directories
    /// 2. Copies the build scripts and marks them executable
    /// 3. Copies theme files
    /// 4. Copies Docker configuration
    /// 5. Copies the ICD template
    /// 6. Writes the shared `Makefile.include`
    /// 7. Writes the per-template Makefiles
    /// 8. Writes the extracted (or placeholder) template documents
    /// 9. Writes the root `Makefile.new`
    pub fn run(mut self) -> Result<Report> {
        debug!("Restructuring repository at {}", self.root.display());

        self.create_directories()?;
        self.copy_scripts()?;
        self.copy_themes()?;
        self.copy_docker_files()?;
        self.copy_icd_template()?;
        self.create_framework_makefile()?;
        self.create_template_makefiles()?;
        self.create_template_documents()?;
        self.create_root_makefile()?;

        Ok(self.report)
    }

    fn create_directories(&mut self) -> Result<()> {
        println!("Creating directory structure...");
        self.report.directories = create_directories(&self.root, &TARGET_DIRS)?;
        Ok(())
    }

    fn copy_scripts(&mut self) -> Result<()> {
        print_step("Copying scripts...");
        let mut names = Vec::with_capacity(BUILD_SCRIPTS.len());
        for script in BUILD_SCRIPTS {
            let target = self.copy(script, SCRIPTS_DIR)?;
            make_executable(&target, ExecPermissions::ALL)?;
            names.push(file_name(&target));
        }
        println!("  Copied and made executable: {}", names.join(", "));
        Ok(())
    }

    fn copy_themes(&mut self) -> Result<()> {
        print_step("Copying themes...");
        for (source, dest) in THEME_DIRS {
            let copied = copy_dir_files(self.root.join(source), self.root.join(dest))?;
            for target in copied {
                let relative = self.relative(&target);
                self.report.copied.push(relative);
            }
        }
        self.copy(THEME_README, THEMES_DIR)?;
        println!("  Copied HTML and PDF themes");
        Ok(())
    }

    fn copy_docker_files(&mut self) -> Result<()> {
        print_step("Copying Docker configuration...");
        for file in DOCKER_FILES {
            self.copy(file, FRAMEWORK_DIR)?;
        }
        println!("  Copied: {}", DOCKER_FILES.join(", "));
        Ok(())
    }

    fn copy_icd_template(&mut self) -> Result<()> {
        print_step("Copying ICD template...");
        let document = ICD.document_file();
        self.copy(&document, ICD.dir())?;
        println!("  Copied: {document}");
        Ok(())
    }

    fn create_framework_makefile(&mut self) -> Result<()> {
        print_step(&format!("Creating {FRAMEWORK_MAKEFILE}..."));
        self.write(FRAMEWORK_MAKEFILE, generator::FRAMEWORK_MAKEFILE)?;
        println!("  Created: {FRAMEWORK_MAKEFILE}");
        Ok(())
    }

    fn create_template_makefiles(&mut self) -> Result<()> {
        for template in TEMPLATES {
            let path = template.dir().join(TEMPLATE_MAKEFILE);
            print_step(&format!("Creating {}...", path.display()));
            let content = template_makefile(self.engine, &template)?;
            self.write(&path, &content)?;
            println!("  Created: {}", path.display());
        }
        Ok(())
    }

    fn create_template_documents(&mut self) -> Result<()> {
        let companion = self.root.join(COMPANION_SCRIPT);
        for template in TEMPLATES {
            let DocumentSource::Extracted { placeholder } = template.source else {
                continue;
            };
            self.create_template_document(&template, &companion, placeholder)?;
        }
        Ok(())
    }

    fn create_template_document(
        &mut self,
        template: &DocumentTemplate,
        companion: &Path,
        placeholder: &str,
    ) -> Result<()> {
        let path = template.document_path();
        print_step(&format!("Creating {}...", path.display()));

        let extraction = extract_or_placeholder(companion, &template.heredoc_marker(), placeholder);
        self.write(&path, extraction.content())?;
        if extraction.is_placeholder() {
            println!("  Created: {} (placeholder)", path.display());
            self.report.placeholders.push(path);
        } else {
            println!("  Created: {}", path.display());
        }
        Ok(())
    }

    fn create_root_makefile(&mut self) -> Result<()> {
        print_step(&format!("Creating root {ROOT_MAKEFILE}..."));
        self.write(ROOT_MAKEFILE, generator::ROOT_MAKEFILE)?;
        println!("  Created: {ROOT_MAKEFILE}");
        Ok(())
    }

    /// Copies a root-relative file into a root-relative directory.
    fn copy<S: AsRef<Path>, D: AsRef<Path>>(&mut self, source: S, dest_dir: D) -> Result<PathBuf> {
        let target = copy_file(self.root.join(source), self.root.join(dest_dir))?;
        let relative = self.relative(&target);
        self.report.copied.push(relative);
        Ok(target)
    }

    /// Writes generated text to a root-relative path.
    fn write<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<()> {
        write_text(self.root.join(path.as_ref()), content)?;
        self.report.generated.push(path.as_ref().to_path_buf());
        Ok(())
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
