//! Reading and writing headerless delimited barcode files.
//!
//! Barcode lists are comma-delimited text with one record per line. The fields of a record are
//! joined back into a single barcode on read, and quoted fields are unquoted. Files ending in
//! `.gz` are transparently (de)compressed by [`fgoxide::io::Io`].

use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fgoxide::io::Io;

/// Buffer size used for barcode file I/O.
pub const BUFFER_SIZE: usize = 64 * 1024;

/// Field delimiter for read and written records.
pub const DELIMITER: u8 = b',';

fn fgio() -> Io {
    Io::new(5, BUFFER_SIZE)
}

/// Reads barcodes from `path`, joining the fields of each row and skipping blank rows.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_barcodes(path: &Path) -> Result<Vec<String>> {
    let reader = fgio()
        .new_reader(path)
        .with_context(|| format!("Failed to open barcode file: {}", path.display()))?;
    read_barcodes_from(reader)
        .with_context(|| format!("Failed to read barcode file: {}", path.display()))
}

/// Reads barcodes from any reader; see [`read_barcodes`].
///
/// Leading and trailing whitespace is trimmed from each field. Whitespace inside a field is kept.
///
/// # Errors
///
/// Returns an error if a record cannot be read or is not valid UTF-8.
pub fn read_barcodes_from<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut barcodes = Vec::new();
    for (index, record) in records.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse record {}", index + 1))?;
        let barcode: String = record.iter().collect();
        if !barcode.is_empty() {
            barcodes.push(barcode);
        }
    }
    Ok(barcodes)
}

/// Opens `path` for writing, or standard output when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let writer = fgio()
                .new_writer(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(writer))
        }
        None => Ok(Box::new(BufWriter::with_capacity(BUFFER_SIZE, std::io::stdout().lock()))),
    }
}

/// Writes one delimited record per item, with no header row.
///
/// Fields containing the delimiter, quotes or line breaks are quoted.
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_records<W, R, F>(writer: &mut W, records: R) -> Result<u64>
where
    W: Write + ?Sized,
    R: IntoIterator<Item = Vec<F>>,
    F: AsRef<str>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut *writer);

    let mut count = 0;
    for record in records {
        csv_writer.write_record(record.iter().map(|field| field.as_ref().as_bytes()))?;
        count += 1;
    }
    csv_writer.flush().context("Failed to flush output")?;
    drop(csv_writer);
    writer.flush().context("Failed to flush output")?;
    Ok(count)
}

/// Writes barcodes, optionally paired with their reverse complements.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_barcodes<W: Write + ?Sized>(
    writer: &mut W,
    barcodes: &[String],
    complements: Option<&[String]>,
) -> Result<u64> {
    match complements {
        Some(complements) => write_records(
            writer,
            barcodes.iter().zip(complements).map(|(b, c)| vec![b.as_str(), c.as_str()]),
        ),
        None => write_records(writer, barcodes.iter().map(|b| vec![b.as_str()])),
    }
}
