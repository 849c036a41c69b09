use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::SecondsFormat;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::models::Client;

/// Header row of the export, in column order.
pub const COLUMNS: [&str; 6] = ["id", "name", "email", "phone", "message", "created_at"];

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Text(String),
    Blank,
}

#[derive(Debug)]
pub enum ExportError {
    /// The target file is held open by another process.
    Locked(std::io::Error),
    Failed(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Locked(err) => write!(f, "Export file is locked: {err}"),
            ExportError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<XlsxError> for ExportError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::IoError(io) => io.into(),
            other => ExportError::Failed(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::PermissionDenied {
            ExportError::Locked(err)
        } else {
            ExportError::Failed(err.to_string())
        }
    }
}

/// Flatten clients into sheet rows: the header first, then one row per client.
pub fn sheet_rows(clients: &[Client]) -> Vec<Vec<CellValue>> {
    let header: Vec<CellValue> = COLUMNS
        .iter()
        .map(|c| CellValue::Text((*c).to_string()))
        .collect();

    let mut rows = Vec::with_capacity(clients.len() + 1);
    rows.push(header);
    for client in clients {
        rows.push(vec![
            CellValue::Integer(client.id),
            CellValue::Text(client.name.clone()),
            CellValue::Text(client.email.clone()),
            CellValue::Text(client.phone.clone()),
            client
                .message
                .clone()
                .map(CellValue::Text)
                .unwrap_or(CellValue::Blank),
            CellValue::Text(client.created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
        ]);
    }
    rows
}

/// Build a single-sheet workbook in memory.
pub fn render_workbook(clients: &[Client]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("clients")?;

    for (r, row) in sheet_rows(clients).into_iter().enumerate() {
        let r = r as u32;
        for (c, cell) in row.into_iter().enumerate() {
            let c = c as u16;
            match cell {
                CellValue::Text(text) if r == 0 => {
                    worksheet.write_string_with_format(r, c, &text, &bold)?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(r, c, &text)?;
                }
                CellValue::Integer(n) => {
                    worksheet.write_number(r, c, n as f64)?;
                }
                CellValue::Blank => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Replace the file at `path` with `bytes`.
///
/// The target is opened for writing first so a file held open elsewhere or
/// marked read-only surfaces as `Locked`. The content then goes through a
/// sibling temp file and a rename, so readers never see a partial workbook.
pub fn save_export(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    OpenOptions::new().write(true).create(true).open(path)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| ExportError::from(e.error))?;
    Ok(())
}

/// Render the workbook, store it at `path` and return the bytes written.
/// Blocking; run it off the async runtime.
pub fn write_workbook(clients: &[Client], path: &Path) -> Result<Vec<u8>, ExportError> {
    let bytes = render_workbook(clients)?;
    save_export(&bytes, path)?;
    Ok(bytes)
}
