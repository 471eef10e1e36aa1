//! Paragraph reader for `.docx` documents.
//!
//! # Invariants
//! - Paragraphs come out in document order, text verbatim.
//! - Only direct children of `w:body` count. Table cells, content controls
//!   and text boxes are left out.
//! - Paragraph text is read from its direct runs and hyperlink runs only.
//! - Run-level tabs become `\t` and line breaks `\n`; page and column
//!   breaks add nothing; non-breaking hyphens become `-`.

use log::info;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const DOCUMENT_PART: &str = "word/document.xml";

const BODY: &[u8] = b"w:body";
const PARAGRAPH: &[u8] = b"w:p";
const HYPERLINK: &[u8] = b"w:hyperlink";
const RUN: &[u8] = b"w:r";
const TEXT: &[u8] = b"w:t";

/// Document read failure.
#[derive(Debug)]
pub enum DocumentError {
    /// File could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File is not a readable zip container or lacks the document part.
    Container(zip::result::ZipError),
    /// Document part is not well-formed XML.
    Xml(String),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Container(err) => write!(f, "not a readable document: {err}"),
            Self::Xml(message) => write!(f, "malformed document body: {message}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Container(err) => Some(err),
            Self::Xml(_) => None,
        }
    }
}

impl From<zip::result::ZipError> for DocumentError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Container(value)
    }
}

/// Reads every body paragraph of the document at `path`.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let io_error = |source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)?
        .read_to_string(&mut xml)
        .map_err(io_error)?;

    let paragraphs = parse_document_xml(&xml)?;
    info!(
        "event=document_load module=reference status=ok paragraphs={}",
        paragraphs.len()
    );
    Ok(paragraphs)
}

/// Extracts body paragraph texts from a WordprocessingML document part.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(tag) => {
                let name = tag.name().as_ref().to_vec();
                if name == PARAGRAPH && is_body(&open) {
                    current = Some(String::new());
                } else if let Some(text) = current.as_mut() {
                    if is_body_run(&open) {
                        push_run_content(&tag, text);
                    }
                }
                open.push(name);
            }
            Event::Empty(tag) => {
                if tag.name().as_ref() == PARAGRAPH && is_body(&open) {
                    paragraphs.push(String::new());
                } else if let Some(text) = current.as_mut() {
                    if is_body_run(&open) {
                        push_run_content(&tag, text);
                    }
                }
            }
            Event::Text(raw) => {
                if let (Some(text), Some((last, parents))) = (current.as_mut(), open.split_last())
                {
                    if last.as_slice() == TEXT && is_body_run(parents) {
                        text.push_str(&raw.unescape().map_err(xml_error)?);
                    }
                }
            }
            Event::End(_) => {
                let closed = open.pop();
                if closed.as_deref() == Some(PARAGRAPH) && is_body(&open) {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn xml_error(err: impl Display) -> DocumentError {
    DocumentError::Xml(err.to_string())
}

fn is_body(open: &[Vec<u8>]) -> bool {
    open.last().is_some_and(|name| name.as_slice() == BODY)
}

/// `open` ends in a run of a body paragraph, directly or inside a hyperlink.
fn is_body_run(open: &[Vec<u8>]) -> bool {
    let Some((run, parents)) = open.split_last() else {
        return false;
    };
    if run.as_slice() != RUN {
        return false;
    }
    let parents = match parents.split_last() {
        Some((link, rest)) if link.as_slice() == HYPERLINK => rest,
        _ => parents,
    };
    matches!(
        parents.split_last(),
        Some((paragraph, rest)) if paragraph.as_slice() == PARAGRAPH && is_body(rest)
    )
}

fn push_run_content(tag: &BytesStart<'_>, text: &mut String) {
    match tag.name().as_ref() {
        b"w:tab" | b"w:ptab" => text.push('\t'),
        b"w:cr" => text.push('\n'),
        b"w:br" if is_line_break(tag) => text.push('\n'),
        b"w:noBreakHyphen" => text.push('-'),
        _ => {}
    }
}

fn is_line_break(tag: &BytesStart<'_>) -> bool {
    match tag.try_get_attribute("w:type") {
        Ok(Some(kind)) => kind.value.as_ref() == b"textWrapping",
        _ => true,
    }
}
