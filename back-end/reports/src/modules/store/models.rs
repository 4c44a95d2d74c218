//! Entity records stored in a [`Store`](super::Store).

use serde::{Deserialize, Serialize};

pub type ReportId = u64;
pub type DocumentId = u64;
pub type PageId = u64;

/// Top-level entity. Owns zero or more documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,

    #[serde(default)]
    pub title: Option<String>,
}

impl Report {
    /// Create an untitled report.
    pub fn new(id: ReportId) -> Self {
        Self { id, title: None }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A file attached to exactly one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub report_id: ReportId,

    #[serde(default)]
    pub name: Option<String>,

    pub filetype: String,
}

impl Document {
    /// Create an unnamed document belonging to `report_id`.
    pub fn new(id: DocumentId, report_id: ReportId, filetype: impl Into<String>) -> Self {
        Self {
            id,
            report_id,
            name: None,
            filetype: filetype.into(),
        }
    }

    /// Set the document name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A page of text belonging to exactly one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub document_id: DocumentId,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub footnote: Option<String>,
}

impl Page {
    /// Create an empty page belonging to `document_id`.
    pub fn new(id: PageId, document_id: DocumentId) -> Self {
        Self {
            id,
            document_id,
            body: None,
            footnote: None,
        }
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the footnote text.
    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }
}
