//! Reading and writing annotation files.
//!
//! The format is line oriented. The first line is a header
//! `% bbGt version=<v>`, followed by one object per line:
//!
//! ```text
//! <label> <l> <t> <w> <h> <occluded> <vl> <vt> <vw> <vh> <ignore>
//! ```
//!
//! Versions 0 and 1 lack the trailing `ignore` field. Files without a
//! header are read as version 0.
//!
//! Labels are a single token: no whitespace, and no leading `%`, which marks
//! a comment line. Geometry is held as `f32`, so integer fields are exact only
//! up to 2^24 (16777216); larger values are rounded to the nearest `f32`.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use regex::Regex;
use crate::common::{Annotation, BbBox, GtRow};
use crate::data::{GtConfig, LabelFilter};
use crate::error::BbGtError;
use crate::ground_truth::to_gt;
use crate::{utils, Result};

pub use crate::common::create;

/// Version written by [`save`].
pub const FORMAT_VERSION: u32 = 2;

const COMMENT_MARKER: char = '%';

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^%\s*bbGt\s+version=(\d+)\s*$").expect("valid header regex"))
}

/// Writes `records` to `path`, replacing any existing file, and hands them back.
pub fn save<'a, P: AsRef<Path>>(records: &'a [Annotation], path: P) -> Result<&'a [Annotation]> {
    let path = path.as_ref();
    if let Some(rec) = records.iter().find(|r| !is_writable_label(&r.label)) {
        return Err(BbGtError::InvalidArgument(format!(
            "label {:?} cannot be stored: labels must not contain whitespace or start with '{}'",
            rec.label, COMMENT_MARKER
        )));
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);

    writeln!(writer, "{} bbGt version={}", COMMENT_MARKER, FORMAT_VERSION)?;
    for rec in records {
        let (l, t, w, h) = rec.bb.as_xy_wh_i32();
        let (vl, vt, vw, vh) = rec.visible_bb.as_xy_wh_i32();
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {} {} {} {}",
            rec.label, l, t, w, h, rec.occluded as u8, vl, vt, vw, vh, rec.ignore as u8
        )?;
    }
    writer.flush()?;

    log::debug!("Saved {} annotations to {}", records.len(), path.display());
    Ok(records)
}

/// Reads the annotations stored at `path`, in file order.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Annotation>> {
    let path = path.as_ref();
    let lines = utils::file_to_vec(path)?;

    let version = match lines.first() {
        Some(first) if first.starts_with(COMMENT_MARKER) => parse_version(first),
        _ => 0,
    };
    let n_fields = match version {
        0 | 1 => 10,
        2 => 11,
        v => return Err(BbGtError::UnsupportedVersion(v)),
    };

    let mut records = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(COMMENT_MARKER) || line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, n_fields, i + 1)?);
    }

    log::debug!("Loaded {} annotations (version {}) from {}", records.len(), version, path.display());
    Ok(records)
}

/// Loads every `.txt` annotation file in `dir`, sorted by file name, and
/// converts each into ground-truth rows.
pub fn load_all<P: AsRef<Path>>(
    dir: P,
    labels: &LabelFilter,
    config: &GtConfig,
) -> Result<Vec<(PathBuf, Vec<GtRow>)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BbGtError::NotFound(dir.to_path_buf()));
    }

    let mut files = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?;
    files.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"));
    files.sort();

    let mut all = Vec::with_capacity(files.len());
    for file in files {
        let records = load(&file)?;
        let (rows, _) = to_gt(&records, labels, config)?;
        all.push((file, rows));
    }

    log::debug!("Loaded {} annotation files from {}", all.len(), dir.display());
    Ok(all)
}

fn is_writable_label(label: &str) -> bool {
    !label.starts_with(COMMENT_MARKER) && !label.contains(char::is_whitespace)
}

fn parse_version(header: &str) -> u32 {
    match header_regex()
        .captures(header.trim_end())
        .and_then(|c| c[1].parse::<u32>().ok())
    {
        Some(v) => v,
        None => {
            log::warn!("Unrecognized annotation header {:?}, assuming version 0", header);
            0
        }
    }
}

fn parse_line(line: &str, n_fields: usize, line_no: usize) -> Result<Annotation> {
    let parse_err = |message: String| BbGtError::Parse { line: line_no, message };

    // An empty label leaves the line starting with the field separator.
    let mut tokens = line.split_whitespace();
    let label = if line.starts_with(char::is_whitespace) {
        ""
    } else {
        tokens.next().unwrap_or_default()
    };

    let values = tokens
        .map(|t| t.parse::<f32>().map_err(|e| parse_err(format!("{:?}: {}", t, e))))
        .collect::<Result<Vec<f32>>>()?;
    if values.len() != n_fields - 1 {
        return Err(parse_err(format!(
            "expected {} fields, found {}", n_fields, values.len() + 1
        )));
    }

    Ok(Annotation {
        label: label.to_string(),
        bb: BbBox::new(values[0], values[1], values[2], values[3]),
        occluded: values[4] != 0.,
        visible_bb: BbBox::new(values[5], values[6], values[7], values[8]),
        ignore: values.get(9).is_some_and(|&x| x != 0.),
    })
}
