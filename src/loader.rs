//! CSV loading of polylines.
//!
//! Each row of the input file becomes one [`Polyline`], every field parsed
//! as a floating-point number and multiplied by the zoom factor. Parsing is
//! all-or-nothing: the first bad field fails the whole load.

use crate::error::{PlotError, Result};
use crate::polyline::{LineSet, Polyline};
use crate::zoom::ZoomFactor;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads polylines from comma-separated text.
///
/// The input has no header row. Rows may have any number of fields,
/// quoted fields follow the usual CSV rules and whitespace around a
/// number is ignored.
///
/// # Blank Rows
///
/// A blank line yields an empty polyline so that the returned set has one
/// entry per row of the file. A single trailing newline ends the last row
/// and does not count as a blank row.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineLoader {
    zoom: ZoomFactor,
}

impl LineLoader {
    /// Creates a loader that scales every value by `zoom`.
    pub fn new(zoom: ZoomFactor) -> Self {
        LineLoader { zoom }
    }

    /// Opens and loads the file at `path`.
    ///
    /// Failing to open or read the file is a [`PlotError::FileAccess`]. The
    /// file is closed before parsing starts, whatever the outcome.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LineSet> {
        let path = path.as_ref();
        let data = {
            let file = File::open(path).map_err(|source| PlotError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            let mut data = Vec::new();
            BufReader::new(file)
                .read_to_end(&mut data)
                .map_err(|source| PlotError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
            data
        };

        let lines = self.parse(&data)?;
        info!(
            "Loaded {} polylines from {} (zoom {})",
            lines.len(),
            path.display(),
            self.zoom
        );
        Ok(lines)
    }

    /// Loads polylines from any reader.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<LineSet> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse(&data)
    }

    /// Parses raw CSV bytes.
    ///
    /// The csv reader silently skips blank lines, so the bytes consumed by
    /// each read are inspected to put the skipped rows back.
    fn parse(&self, data: &[u8]) -> Result<LineSet> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data);

        let mut lines = LineSet::new();
        let mut record = StringRecord::new();
        let mut consumed = 0;
        let mut ended_with_cr = false;

        loop {
            let more = csv_reader.read_record(&mut record)?;
            let end = (csv_reader.position().byte() as usize).min(data.len());
            let span = &data[consumed..end];

            for _ in 0..count_blank_lines(span, ended_with_cr) {
                debug!("Row {}: blank", lines.len() + 1);
                lines.push(Polyline::default());
            }

            if !more {
                break;
            }

            ended_with_cr = span.last() == Some(&b'\r');
            consumed = end;

            let row = lines.len() + 1;
            let polyline = self.parse_record(&record, row)?;
            debug!("Row {}: {} values", row, polyline.len());
            lines.push(polyline);
        }

        Ok(lines)
    }

    /// Converts one record, scaling each field. `row` is 1-based.
    fn parse_record(&self, record: &StringRecord, row: usize) -> Result<Polyline> {
        record
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                field
                    .parse::<f64>()
                    .map(|value| self.zoom.apply(value))
                    .map_err(|source| PlotError::InvalidNumber {
                        row,
                        field: idx + 1,
                        value: field.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Polyline::new)
    }
}

/// Counts the line terminators at the start of `span`.
///
/// A record never starts with a terminator, so any leading ones belong to
/// blank lines the csv reader skipped. When the previous read stopped right
/// after a `\r`, a leading `\n` completes that `\r\n` and is not a line.
fn count_blank_lines(span: &[u8], ended_with_cr: bool) -> usize {
    let mut idx = if ended_with_cr && span.first() == Some(&b'\n') {
        1
    } else {
        0
    };
    let mut count = 0;

    while idx < span.len() {
        match span[idx] {
            b'\n' => idx += 1,
            b'\r' if span.get(idx + 1) == Some(&b'\n') => idx += 2,
            b'\r' => idx += 1,
            _ => break,
        }
        count += 1;
    }

    count
}
