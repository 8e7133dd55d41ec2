//! Document templates produced by a restructuring run.

use serde::Serialize;
use std::path::PathBuf;

use crate::constants::TEMPLATES_DIR;

/// Where a template's AsciiDoc document comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSource {
    /// Copied verbatim from a file in the repository root
    Copied,
    /// Extracted from a heredoc in the companion script, or `placeholder`
    Extracted { placeholder: &'static str },
}

/// A document template: its directory name, the label its build rules
/// print, and how its document body is obtained.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DocumentTemplate {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    pub source: DocumentSource,
}

pub const ICD: DocumentTemplate = DocumentTemplate {
    name: "icd",
    label: "ICD",
    source: DocumentSource::Copied,
};

pub const SSDLC: DocumentTemplate = DocumentTemplate {
    name: "ssdlc",
    label: "SSDLC",
    source: DocumentSource::Extracted {
        placeholder: include_str!("assets/ssdlc-placeholder.adoc"),
    },
};

pub const GENERIC: DocumentTemplate = DocumentTemplate {
    name: "generic",
    label: "generic",
    source: DocumentSource::Extracted {
        placeholder: include_str!("assets/generic-placeholder.adoc"),
    },
};

/// All templates, in build order.
pub const TEMPLATES: [DocumentTemplate; 3] = [ICD, SSDLC, GENERIC];

impl DocumentTemplate {
    /// `templates/<name>`
    pub fn dir(&self) -> PathBuf {
        PathBuf::from(TEMPLATES_DIR).join(self.name)
    }

    /// `<name>-template.adoc`
    pub fn document_file(&self) -> String {
        format!("{}-template.adoc", self.name)
    }

    /// `templates/<name>/<name>-template.adoc`
    pub fn document_path(&self) -> PathBuf {
        self.dir().join(self.document_file())
    }

    /// The heredoc line in the companion script that writes this document.
    pub fn heredoc_marker(&self) -> String {
        format!(
            "cat > {}/{}/{} << 'EOF'",
            TEMPLATES_DIR,
            self.name,
            self.document_file()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(SSDLC.dir(), PathBuf::from("templates/ssdlc"));
        assert_eq!(ICD.document_file(), "icd-template.adoc");
        assert_eq!(
            GENERIC.document_path(),
            PathBuf::from("templates/generic/generic-template.adoc")
        );
    }

    #[test]
    fn test_heredoc_marker() {
        assert_eq!(
            SSDLC.heredoc_marker(),
            "cat > templates/ssdlc/ssdlc-template.adoc << 'EOF'"
        );
    }

    #[test]
    fn test_serialized_context_skips_source() {
        let value = serde_json::to_value(SSDLC).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "ssdlc", "label": "SSDLC" }));
    }
}
