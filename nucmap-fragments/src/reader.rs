//! Record sources.
//!
//! Decoding alignment files is the decoder's job; the pipeline only needs a
//! whole file's worth of [`AlignmentRecord`]s. [`TsvRecordReader`] reads a plain
//! tab-separated table of already decoded records, one per line:
//!
//! ```text
//! name  ref  strand  pos  width  flag  mate_ref  mate_pos
//! ```
//!
//! Lines starting with `#` are skipped. A `=` mate reference means "same
//! reference", and `*` or `.` as strand means no strand.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use nucmap_core::Strand;
use nucmap_core::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin};

use crate::errors::{FragmentError, Result};
use crate::record::AlignmentRecord;

const N_COLUMNS: usize = 8;

/// path that reads the record table from stdin
pub const STDIN_PATH: &str = "-";

///
/// Anything that can hand over all alignment records of one input at once.
///
pub trait RecordSource {
    fn read_records(&mut self) -> Result<Vec<AlignmentRecord>>;
}

impl RecordSource for Vec<AlignmentRecord> {
    fn read_records(&mut self) -> Result<Vec<AlignmentRecord>> {
        Ok(std::mem::take(self))
    }
}

pub struct TsvRecordReader {
    path: PathBuf,
}

impl TsvRecordReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        TsvRecordReader {
            path: path.as_ref().to_path_buf(),
        }
    }
}

fn decoding_error(line_num: usize, msg: String) -> FragmentError {
    FragmentError::InputDecoding(format!("line {}: {}", line_num, msg).into())
}

///
/// Parse one line of the record table.
///
pub fn parse_record_line(line: &str, line_num: usize) -> Result<AlignmentRecord> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() != N_COLUMNS {
        return Err(decoding_error(
            line_num,
            format!("expected {} columns, found {}", N_COLUMNS, parts.len()),
        ));
    }

    let number = |idx: usize, column: &str| -> Result<u32> {
        parts[idx].parse::<u32>().map_err(|e| {
            decoding_error(line_num, format!("invalid {} '{}': {}", column, parts[idx], e))
        })
    };

    let strand = Strand::parse_optional(parts[2])
        .map_err(|e| FragmentError::InputDecoding(Box::new(e)))?;
    let flag = parts[5]
        .parse::<u16>()
        .map_err(|e| decoding_error(line_num, format!("invalid flag '{}': {}", parts[5], e)))?;

    Ok(AlignmentRecord {
        name: parts[0].to_string(),
        chr: parts[1].to_string(),
        strand,
        pos: number(3, "position")?,
        width: number(4, "width")?,
        flag,
        mate_chr: Some(parts[6].to_string()).filter(|s| s != "*"),
        mate_pos: number(7, "mate position")?,
    })
}

impl RecordSource for TsvRecordReader {
    fn read_records(&mut self) -> Result<Vec<AlignmentRecord>> {
        let reader = match self.path.as_os_str() == STDIN_PATH {
            true => get_dynamic_reader_w_stdin(STDIN_PATH),
            false => get_dynamic_reader(&self.path),
        }
        .map_err(|e| FragmentError::InputDecoding(e.into()))?;

        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            // invalid UTF-8 and corrupt gzip streams both surface here
            let line = line.map_err(|e| decoding_error(idx + 1, e.to_string()))?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            records.push(parse_record_line(&line, idx + 1)?);
        }

        log::info!("Read {} records from {:?}", records.len(), self.path);

        Ok(records)
    }
}
