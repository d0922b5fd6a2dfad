//! Reading username lists, one username per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based.
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Collects the non-blank lines of `reader`, trimmed of surrounding whitespace.
pub fn read_usernames<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    let mut usernames = Vec::new();
    let mut blank = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SourceError::Read { line: i + 1, source })?;
        let name = line.trim();
        if name.is_empty() {
            blank += 1;
            continue;
        }
        usernames.push(name.to_owned());
    }

    debug!(count = usernames.len(), blank, "read usernames");
    Ok(usernames)
}

pub fn load_usernames(path: &Path) -> Result<Vec<String>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "loading usernames");
    read_usernames(BufReader::new(file))
}
