use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use serde::de::DeserializeOwned;
use crate::error::BbGtError;
use crate::Result;

/// Reads every line of `path`, failing with `NotFound` when the file is missing.
pub(crate) fn file_to_vec(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(BbGtError::NotFound(path.to_path_buf()));
    }
    let file_in = fs::File::open(path)?;
    let file_reader = BufReader::new(file_in);
    Ok(file_reader.lines().collect::<io::Result<Vec<String>>>()?)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(BbGtError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
