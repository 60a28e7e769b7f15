//! File input and output
//!
//! The engine never touches the filesystem; these helpers read the whole
//! document up front and write the finished summary in one go. Failures carry
//! the offending path and are never retried.

use crate::errors::{Result, TextRankError};
use crate::types::TextRankConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header above a plain summary
pub const SUMMARY_HEADER: &str = "Summary:";

/// Header above a prompt-formatted summary
pub const FORMATTED_SUMMARY_HEADER: &str = "Compressed and Formatted Summary:";

/// Read a UTF-8 document into memory
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| TextRankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| TextRankError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON run configuration
pub fn load_config(path: &Path) -> Result<TextRankConfig> {
    let json = read_document(path)?;
    TextRankConfig::from_json(&json).map_err(|source| TextRankError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain summary: header, blank line, one sentence per line
pub fn render_summary<S: AsRef<str>>(sentences: &[S]) -> String {
    let mut rendered = format!("{SUMMARY_HEADER}\n\n");
    for sentence in sentences {
        rendered.push_str(sentence.as_ref());
        rendered.push('\n');
    }
    rendered
}

/// Prompt-formatted summary: header, blank line, then the prompts separated
/// by blank lines. No newline follows the last prompt.
pub fn render_formatted_summary<S: AsRef<str>>(prompts: &[S]) -> String {
    let body: Vec<&str> = prompts.iter().map(|p| p.as_ref()).collect();
    format!("{FORMATTED_SUMMARY_HEADER}\n\n{}", body.join("\n\n"))
}

/// Write `contents` to `path`, or to stdout when `path` is `None`
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, contents).map_err(|source| TextRankError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(contents.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|source| TextRankError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
        }
    }
}
