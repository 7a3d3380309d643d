use super::codec::{RowReader, TitleWidth, byte_reader};
use super::reader::{Layout, classify_header};
use crate::errors::WriteError;
use crate::models::row::{FIXED_COLUMNS, Row, header};
use clap::ValueEnum;
use csv::ByteRecord;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// What to do when an append needs more title columns than the header declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Rewrite the file with a wider header, padding every existing row.
    #[default]
    Widen,
    /// Treat the existing header width as a hard ceiling and refuse the append.
    Strict,
}

/// Appends rows to a CSV log, keeping every row as wide as the header.
pub struct LogWriter {
    path: PathBuf,
    policy: HeaderPolicy,
}

impl LogWriter {
    pub fn new(path: impl Into<PathBuf>, policy: HeaderPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    /// Append `rows`, writing the header first if the file is new or empty.
    ///
    /// On `Ok` the rows have been flushed and fsynced. On `Err` the caller
    /// must assume nothing from this call was persisted.
    pub fn append(&self, rows: &[Row]) -> Result<(), WriteError> {
        if rows.is_empty() {
            return Ok(());
        }
        if let Some(r) = rows.iter().find(|r| r.titles.is_empty()) {
            return Err(WriteError::InvalidRow(format!(
                "row {} - {} has no title",
                r.start, r.end
            )));
        }

        let mut needed = TitleWidth::default();
        rows.iter().for_each(|r| needed.observe(r.depth()));
        let required = needed.get();

        let existing = self.inspect()?;
        let mut needs_newline = existing.is_some_and(|e| e.needs_newline);
        let width = match existing.map(|e| e.width) {
            None => required,
            Some(w) if w >= required => w,
            Some(w) => match self.policy {
                HeaderPolicy::Strict => {
                    return Err(WriteError::ChainTooDeep {
                        path: self.path.clone(),
                        required,
                        width: w,
                    });
                }
                HeaderPolicy::Widen => {
                    self.widen(required)?;
                    // The rewrite ends every record with a terminator.
                    needs_newline = false;
                    required
                }
            },
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| WriteError::Open {
                path: self.path.clone(),
                source,
            })?;

        if needs_newline {
            file.write_all(b"\n")
                .map_err(|source| self.encode_err(source.into()))?;
        }

        {
            let mut wtr = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(&mut file);

            if existing.is_none() {
                wtr.write_record(header(width))
                    .map_err(|source| self.encode_err(source))?;
            }

            for row in rows {
                // `width >= required`, so every row fits.
                let fields = row.to_fields(width).ok_or_else(|| {
                    WriteError::InvalidRow(format!("row deeper than {width} titles"))
                })?;
                wtr.write_record(&fields)
                    .map_err(|source| self.encode_err(source))?;
            }

            wtr.flush().map_err(|source| WriteError::Flush {
                path: self.path.clone(),
                source,
            })?;
        }

        file.sync_all().map_err(|source| WriteError::Sync {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    /// Header width and tail state of the existing log, or `None` for a new/empty file.
    fn inspect(&self) -> Result<Option<Existing>, WriteError> {
        let open_err = |source: std::io::Error| WriteError::Open {
            path: self.path.clone(),
            source,
        };

        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(open_err(source)),
        };

        let len = file.metadata().map_err(open_err)?.len();
        if len == 0 {
            return Ok(None);
        }

        // A hand-edited log may lack the final line terminator.
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(open_err)?;
        file.read_exact(&mut last).map_err(open_err)?;
        file.rewind().map_err(open_err)?;
        let needs_newline = last[0] != b'\n';

        let first = RowReader::new(BufReader::new(file)).next();
        let fields = match first {
            None => return Ok(None),
            Some(Ok(row)) => row.fields,
            Some(Err(e)) => return Err(self.header_err(e.to_string())),
        };

        match classify_header(&fields) {
            Some(Layout::Hierarchical { titles }) => Ok(Some(Existing {
                width: titles,
                needs_newline,
            })),
            Some(Layout::Legacy) => Err(self.header_err(
                "legacy single-title log is read-only; start a new file".to_string(),
            )),
            None => Err(self.header_err(format!(
                "expected start_time,end_time,... but found '{}'",
                fields.join(",")
            ))),
        }
    }

    /// Rewrite the log with `width` title columns through a sibling temp file.
    fn widen(&self, width: usize) -> Result<(), WriteError> {
        let rewrite_err = |reason: String| WriteError::Rewrite {
            path: self.path.clone(),
            reason,
        };

        let src = File::open(&self.path).map_err(|e| rewrite_err(e.to_string()))?;
        let tmp_path = tmp_path_for(&self.path);
        let tmp = File::create(&tmp_path).map_err(|e| rewrite_err(e.to_string()))?;

        let result = (|| -> Result<(), WriteError> {
            let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(&tmp);
            let mut rdr = byte_reader(BufReader::new(src));
            let mut record = ByteRecord::new();

            // Header line is replaced. Data rows are only padded and are
            // carried over byte for byte, even those the reader would skip.
            if rdr
                .read_byte_record(&mut record)
                .map_err(|e| rewrite_err(e.to_string()))?
            {
                wtr.write_record(header(width))
                    .map_err(|e| rewrite_err(e.to_string()))?;
            }
            while rdr
                .read_byte_record(&mut record)
                .map_err(|e| rewrite_err(e.to_string()))?
            {
                while record.len() < FIXED_COLUMNS + width {
                    record.push_field(b"");
                }
                wtr.write_byte_record(&record)
                    .map_err(|e| rewrite_err(e.to_string()))?;
            }
            wtr.flush().map_err(|e| rewrite_err(e.to_string()))?;
            drop(wtr);

            (&tmp).flush().map_err(|e| rewrite_err(e.to_string()))?;
            tmp.sync_all().map_err(|e| rewrite_err(e.to_string()))?;
            fs::rename(&tmp_path, &self.path).map_err(|e| rewrite_err(e.to_string()))?;
            sync_parent_dir(&self.path).map_err(|e| rewrite_err(e.to_string()))
        })();

        if result.is_err() {
            fs::remove_file(&tmp_path).ok();
        }
        result
    }

    fn encode_err(&self, source: csv::Error) -> WriteError {
        WriteError::Encode {
            path: self.path.clone(),
            source,
        }
    }

    fn header_err(&self, reason: String) -> WriteError {
        WriteError::Header {
            path: self.path.clone(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Existing {
    width: usize,
    needs_newline: bool,
}

/// Persist the directory entry written by a rename.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".widen.tmp");
    path.with_file_name(name)
}
