//! Contact store over an ISO-8859-1 delimited file.
//!
//! # Responsibility
//! - Load the full contact table, synthesizing the checkbox column.
//! - Write the full table back in the same encoding and column order.
//!
//! # Invariants
//! - Every byte decodes to the code point of the same value (ISO-8859-1).
//! - The header must contain `display_name`.
//! - Column order read from the file is the column order written back.

use crate::model::contact::{Contact, ContactTable, CHECKBOX_COLUMN, DISPLAY_NAME_COLUMN};
use crate::repo::{RepoError, RepoResult};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Load/save contract for the contact table.
pub trait ContactRepository {
    /// Reads the whole table.
    fn load(&self) -> RepoResult<ContactTable>;
    /// Overwrites the backing store with `table`.
    fn save(&self, table: &ContactTable) -> RepoResult<()>;
}

/// CSV-backed contact store.
#[derive(Debug, Clone)]
pub struct CsvContactRepository {
    path: PathBuf,
}

impl CsvContactRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactRepository for CsvContactRepository {
    fn load(&self) -> RepoResult<ContactTable> {
        let started_at = Instant::now();
        let result = std::fs::read(&self.path)
            .map_err(|source| RepoError::Io {
                path: self.path.clone(),
                source,
            })
            .and_then(|bytes| parse_table(&decode_latin1(&bytes)));

        match &result {
            Ok(table) => info!(
                "event=contacts_load module=repo status=ok rows={} columns={} duration_ms={}",
                table.len(),
                table.columns().len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=contacts_load module=repo status=error path={} error={}",
                self.path.display(),
                err
            ),
        }
        result
    }

    fn save(&self, table: &ContactTable) -> RepoResult<()> {
        let started_at = Instant::now();
        let bytes = render_table(table).and_then(|text| encode_latin1(&text));
        let result = bytes.and_then(|bytes| {
            std::fs::write(&self.path, bytes).map_err(|source| RepoError::Io {
                path: self.path.clone(),
                source,
            })
        });

        match &result {
            Ok(()) => info!(
                "event=contacts_save module=repo status=ok rows={} duration_ms={}",
                table.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=contacts_save module=repo status=error path={} error={}",
                self.path.display(),
                err
            ),
        }
        result
    }
}

fn parse_table(text: &str) -> RepoResult<ContactTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let name_index = columns
        .iter()
        .position(|column| column == DISPLAY_NAME_COLUMN)
        .ok_or(RepoError::MissingColumn(DISPLAY_NAME_COLUMN))?;
    let checkbox_index = columns.iter().position(|column| column == CHECKBOX_COLUMN);

    let mut contacts = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > columns.len() {
            return Err(RepoError::InvalidData(format!(
                "row {} has {} fields, header has {}",
                row + 1,
                record.len(),
                columns.len()
            )));
        }

        let field = |index: usize| record.get(index).unwrap_or("").to_string();
        let mut contact = Contact::new(field(name_index));
        contact.selected = checkbox_index
            .map(|index| parse_checkbox(&field(index)))
            .unwrap_or(false);
        for (index, column) in columns.iter().enumerate() {
            if index == name_index || Some(index) == checkbox_index {
                continue;
            }
            contact.attributes.insert(column.clone(), field(index));
        }
        contacts.push(contact);
    }

    Ok(ContactTable::new(columns, contacts))
}

fn render_table(table: &ContactTable) -> RepoResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for contact in table.contacts() {
        let row = table.columns().iter().map(|column| match column.as_str() {
            DISPLAY_NAME_COLUMN => contact.display_name.as_str(),
            CHECKBOX_COLUMN => render_checkbox(contact.selected),
            other => contact.attribute(other).unwrap_or(""),
        });
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| RepoError::InvalidData(format!("failed to flush rows: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|err| RepoError::InvalidData(format!("rendered rows are not text: {err}")))
}

fn parse_checkbox(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn render_checkbox(selected: bool) -> &'static str {
    if selected {
        "True"
    } else {
        "False"
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

fn encode_latin1(text: &str) -> RepoResult<Vec<u8>> {
    text.chars()
        .map(|character| {
            u8::try_from(u32::from(character)).map_err(|_| RepoError::Unencodable(character))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_latin1, encode_latin1, parse_checkbox, parse_table, render_table};
    use crate::repo::RepoError;

    #[test]
    fn latin1_maps_high_bytes_to_same_code_points() {
        let text = decode_latin1(&[b'J', 0xE9, b'r', 0xF4, b'm', b'e']);
        assert_eq!(text, "Jérôme");
        assert_eq!(encode_latin1(&text).unwrap(), vec![b'J', 0xE9, b'r', 0xF4, b'm', b'e']);
    }

    #[test]
    fn encode_rejects_characters_outside_latin1() {
        let err = encode_latin1("Zoë €").unwrap_err();
        assert!(matches!(err, RepoError::Unencodable('€')));
    }

    #[test]
    fn checkbox_parsing_is_lenient() {
        assert!(parse_checkbox("True"));
        assert!(parse_checkbox(" 1 "));
        assert!(!parse_checkbox("False"));
        assert!(!parse_checkbox(""));
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_rejected() {
        let table = parse_table("display_name,phone,note\nAlice +vip,555\n").unwrap();
        assert_eq!(table.contacts()[0].attribute("note"), Some(""));

        let err = parse_table("display_name\nAlice,extra\n").unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }

    #[test]
    fn render_keeps_column_order_and_writes_checkbox() {
        let table = parse_table("phone,display_name\n555,Alice\n").unwrap();
        let text = render_table(&table).unwrap();
        assert_eq!(text, "phone,display_name,checkbox\n555,Alice,False\n");
    }
}
