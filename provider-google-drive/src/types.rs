//! Request and response types for the Drive receive path
//!
//! Data structures for the `files.list`, `files.export` and `files.get`
//! calls, plus the download/receive requests callers build.

use serde::Deserialize;
use std::path::PathBuf;

/// Fields requested from `files.list` when resolving a name
pub const LIST_FIELDS: &str = "files(id, name)";

/// Candidates requested from `files.list` when resolving a name
pub const LIST_PAGE_SIZE: u32 = 10;

/// Download a known file to a local path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Remote file ID
    pub file_id: String,

    /// Local destination path
    pub dest_file_name: PathBuf,

    /// Target format for `files.export`; empty downloads the raw content
    pub dest_mime_type: String,
}

/// Receive a file, resolving its ID by name when `file_id` is empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiveRequest {
    /// Remote file ID; empty means "look it up"
    pub file_id: String,

    /// Folder searched when `file_id` is empty
    pub parent_id: String,

    /// Exact file name searched when `file_id` is empty
    pub src_file_name: String,

    /// Local destination path
    pub dest_file_name: PathBuf,

    /// Target format for `files.export`; empty downloads the raw content
    pub dest_mime_type: String,
}

impl ReceiveRequest {
    /// Download request for an already resolved ID
    pub fn to_download(&self, file_id: impl Into<String>) -> DownloadRequest {
        DownloadRequest {
            file_id: file_id.into(),
            dest_file_name: self.dest_file_name.clone(),
            dest_mime_type: self.dest_mime_type.clone(),
        }
    }
}

/// Google Drive API file resource, restricted to the listed fields
///
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    #[serde(default)]
    pub name: String,
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    /// Matching files, in the order the API returned them
    #[serde(default)]
    pub files: Vec<DriveFile>,

    /// Token for next page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Parameters for `files.list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Drive query-language expression
    pub q: String,

    /// Partial-response field selector
    pub fields: String,

    /// Maximum results per page
    pub page_size: u32,
}

impl ListParams {
    /// Query for files named `file_name` directly under `parent_id`
    pub fn by_parent_and_name(parent_id: &str, file_name: &str) -> Self {
        Self {
            q: format!(
                "'{}' in parents and name = '{}'",
                escape_query_literal(parent_id),
                escape_query_literal(file_name)
            ),
            fields: LIST_FIELDS.to_string(),
            page_size: LIST_PAGE_SIZE,
        }
    }
}

/// Parameters for `files.export`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    pub file_id: String,

    /// Target MIME type of the conversion
    pub mime_type: String,
}

impl ExportParams {
    pub fn new(file_id: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Response representation selected by `alt`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alt {
    /// Raw file content
    Media,
}

impl Alt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alt::Media => "media",
        }
    }
}

/// Parameters for `files.get`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetParams {
    pub file_id: String,
    pub alt: Alt,
}

impl GetParams {
    /// Raw content download of `file_id`
    pub fn media(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            alt: Alt::Media,
        }
    }
}

/// Escape a value for use inside a single-quoted Drive query literal
fn escape_query_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_for_name_lookup() {
        let params = ListParams::by_parent_and_name("parent-id", "src-file-name");

        assert_eq!(
            params,
            ListParams {
                q: "'parent-id' in parents and name = 'src-file-name'".to_string(),
                fields: "files(id, name)".to_string(),
                page_size: 10,
            }
        );
    }

    #[test]
    fn test_list_params_escape_quotes() {
        let params = ListParams::by_parent_and_name("root", "Bob's \\notes");
        assert_eq!(
            params.q,
            "'root' in parents and name = 'Bob\\'s \\\\notes'"
        );
    }

    #[test]
    fn test_deserialize_file_list() {
        let json = r#"{
            "files": [
                { "id": "file1", "name": "report" },
                { "id": "file2", "name": "report" }
            ]
        }"#;

        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].id, "file1");
        assert_eq!(list.next_page_token, None);
    }

    #[test]
    fn test_deserialize_empty_file_list() {
        let list: FileList = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
    }

    #[test]
    fn test_receive_request_to_download() {
        let request = ReceiveRequest {
            file_id: String::new(),
            parent_id: "parent".to_string(),
            src_file_name: "doc".to_string(),
            dest_file_name: PathBuf::from("out/doc.pdf"),
            dest_mime_type: "application/pdf".to_string(),
        };

        assert_eq!(
            request.to_download("resolved"),
            DownloadRequest {
                file_id: "resolved".to_string(),
                dest_file_name: PathBuf::from("out/doc.pdf"),
                dest_mime_type: "application/pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_get_params_media() {
        let params = GetParams::media("abc");
        assert_eq!(params.alt, Alt::Media);
        assert_eq!(params.alt.as_str(), "media");
    }
}
