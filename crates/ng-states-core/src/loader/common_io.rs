// crates/ng-states-core/src/loader/common_io.rs
use crate::error::{Result, StatesError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        StatesError::Io(io::Error::new(
            e.kind(),
            format!("Dataset not found at {}: {}", path.display(), e),
        ))
    })?;

    Ok(Box::new(BufReader::new(file)))
}
