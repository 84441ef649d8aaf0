use std::fs;
use std::path::{Path, PathBuf};

use mailparse::{parse_mail, ParsedMail};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("only .eml files or directories containing them are supported: {}", .0.display())]
    Unsupported(PathBuf),
    #[error("no .eml files under {}", .0.display())]
    NoMessages(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse MIME in {}: {}", .path.display(), .reason)]
    Mime { path: PathBuf, reason: String },
    #[error("message has no decodable text part: {}", .0.display())]
    NoTextBody(PathBuf),
}

fn is_eml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("eml"))
        .unwrap_or(false)
}

/// Accepts a single `.eml` file or a directory and returns the message files
/// to process, sorted for stable ordering.
pub fn collect_eml_files(input_path: &Path) -> Result<Vec<PathBuf>, MessageError> {
    if !input_path.exists() {
        return Err(MessageError::NotFound(input_path.to_path_buf()));
    }
    if input_path.is_file() {
        if !is_eml(input_path) {
            return Err(MessageError::Unsupported(input_path.to_path_buf()));
        }
        return Ok(vec![input_path.to_path_buf()]);
    }
    if !input_path.is_dir() {
        return Err(MessageError::Unsupported(input_path.to_path_buf()));
    }

    let mut files = WalkDir::new(input_path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_eml(p))
        .collect::<Vec<_>>();
    files.sort();
    if files.is_empty() {
        return Err(MessageError::NoMessages(input_path.to_path_buf()));
    }
    Ok(files)
}

fn body_with_mime(mail: &ParsedMail, wanted: &str) -> Option<String> {
    if mail.ctype.mimetype.eq_ignore_ascii_case(wanted) {
        if let Ok(body) = mail.get_body() {
            return Some(body);
        }
    }
    for part in &mail.subparts {
        if let Some(body) = body_with_mime(part, wanted) {
            return Some(body);
        }
    }
    None
}

/// Decodes one stored message into plain text. These receipts are forwarded
/// as plain text, so `text/plain` is preferred; `text/html` is only a last
/// resort before failing.
pub fn read_message_text(path: &Path) -> Result<String, MessageError> {
    let bytes = fs::read(path).map_err(|source| MessageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mail = parse_mail(&bytes).map_err(|e| MessageError::Mime {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    body_with_mime(&mail, "text/plain")
        .or_else(|| body_with_mime(&mail, "text/html"))
        .ok_or_else(|| MessageError::NoTextBody(path.to_path_buf()))
}
