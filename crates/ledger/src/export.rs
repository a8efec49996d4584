//! Export encoders for the guest ledger.
//!
//! Both encoders are pure functions of the snapshot they are handed: the
//! same guests in the same order produce the same bytes. Rows are written
//! in the order given; callers typically pass the newest-first snapshot
//! from [`Ledger::guests`].
//!
//! Headers and cell labels use the ledger's home locale (ko-KR) and are
//! not localized per viewer.
//!
//! [`Ledger::guests`]: crate::Ledger::guests

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use csv::{QuoteStyle, WriterBuilder};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

use crate::guests::Guest;

/// Column headers in home-locale labels:
/// side, name, amount, relationship, tickets, memo, registered-at.
const HEADERS: [&str; 7] = ["구분", "이름", "금액", "관계", "식권", "메모", "등록일시"];

/// Timezone timestamps are rendered in for exports.
const HOME_TZ: Tz = chrono_tz::Asia::Seoul;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

const SHEET_NAME: &str = "Wedding Gift List";

const FILENAME_STEM: &str = "wedding-gift-list";

/// Errors surfaced by the encoders. These are encoding-library failures
/// only; business validation already happened at insert time.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("failed to finalize csv buffer: {0}")]
    CsvFinalize(String),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// The two export targets the ledger can be serialized to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Attachment filename for an export generated at the given instant
    /// (ISO date of the UTC instant).
    pub fn filename(self, generated_at: DateTime<Utc>) -> String {
        format!(
            "{FILENAME_STEM}_{}.{}",
            generated_at.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

/// Encodes a snapshot as BOM-prefixed UTF-8 CSV.
///
/// Every field is quoted, embedded quotes doubled. The memo column renders
/// absent memos as the empty string.
pub fn csv_bytes(guests: &[Guest]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(HEADERS)?;
    for guest in guests {
        writer.write_record([
            guest.side.label(),
            guest.name.as_str(),
            guest.amount.to_string().as_str(),
            guest.relationship.label(),
            guest.tickets.to_string().as_str(),
            guest.memo.as_deref().unwrap_or(""),
            home_timestamp(guest.registered_at).as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::CsvFinalize(err.to_string()))
}

/// Encodes a snapshot as a single-sheet XLSX workbook.
///
/// `amount` and `tickets` are written as numeric cells, everything else as
/// text. Header content is identical to the CSV header.
pub fn xlsx_bytes(guests: &[Guest]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write(0, col as u16, *title)?;
    }
    for (index, guest) in guests.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write(row, 0, guest.side.label())?;
        sheet.write(row, 1, guest.name.as_str())?;
        sheet.write(row, 2, guest.amount)?;
        sheet.write(row, 3, guest.relationship.label())?;
        sheet.write(row, 4, guest.tickets)?;
        sheet.write(row, 5, guest.memo.as_deref().unwrap_or(""))?;
        sheet.write(row, 6, home_timestamp(guest.registered_at))?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Renders an instant the way the home locale displays it, e.g.
/// `2025. 8. 7. 오후 1:02:03`.
fn home_timestamp(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&HOME_TZ);
    let (is_pm, hour) = local.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!(
        "{}. {}. {}. {meridiem} {hour}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.minute(),
        local.second()
    )
}
