use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::debug;

use crate::errors::errors::{AuthinfoError, ResultCode};

pub const AUTHINFO: &str = "authinfo";
pub const NETRC: &str = "netrc";

/// System configuration directory searched after the home directory.
pub const DEFAULT_SYSCONF_DIR: &str = match option_env!("AUTHINFO_SYSCONF_DIR") {
    Some(dir) => dir,
    None => "/etc",
};

/// Default read capacity. Files of this size or larger are rejected.
pub const DEFAULT_MAX_FILE_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    pub home: Option<PathBuf>,
    pub sysconf_dir: PathBuf,
}

impl SearchPaths {
    pub fn new(home: Option<PathBuf>, sysconf_dir: impl Into<PathBuf>) -> Self {
        SearchPaths {
            home,
            sysconf_dir: sysconf_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        SearchPaths::new(home, DEFAULT_SYSCONF_DIR)
    }

    /// Candidate paths in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(4);

        if let Some(home) = &self.home {
            candidates.push(home.join(format!(".{}", AUTHINFO)));
            candidates.push(home.join(format!(".{}", NETRC)));
        }
        candidates.push(self.sysconf_dir.join(AUTHINFO));
        candidates.push(self.sysconf_dir.join(NETRC));

        candidates
    }
}

impl Default for SearchPaths {
    fn default() -> Self {
        SearchPaths::from_env()
    }
}

/// Checks that `path` can be opened for reading.
pub fn probe(path: &Path) -> Result<(), AuthinfoError> {
    let result = File::open(path).map(drop).map_err(AuthinfoError::from);

    debug!(
        "Probed {}: {}",
        path.display(),
        match &result {
            Ok(()) => ResultCode::Ok.message(),
            Err(error) => error.code().message(),
        }
    );

    result
}

/// Returns the first readable candidate. A candidate that exists but cannot
/// be read ends the search with its error.
pub fn find_file(paths: &SearchPaths) -> Result<PathBuf, AuthinfoError> {
    for candidate in paths.candidates() {
        match probe(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(AuthinfoError::NotFound) => continue,
            Err(error) => return Err(error),
        }
    }

    Err(AuthinfoError::NotFound)
}

/// Reads the whole file. `capacity` counts a terminator byte, so the file
/// must be strictly smaller than it.
pub fn read_file(path: &Path, capacity: usize) -> Result<Vec<u8>, AuthinfoError> {
    if capacity == 0 {
        return Err(AuthinfoError::TooBig { limit: capacity });
    }

    let file = File::open(path).map_err(|error| {
        debug!("Could not open authinfo file {}: {}", path.display(), error);
        AuthinfoError::from(error)
    })?;

    let mut buffer = Vec::new();
    file.take(capacity as u64)
        .read_to_end(&mut buffer)
        .map_err(|error| {
            debug!("Could not read authinfo file {}: {}", path.display(), error);
            AuthinfoError::from(error)
        })?;

    if buffer.len() >= capacity {
        return Err(AuthinfoError::TooBig { limit: capacity });
    }

    debug!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

/// Finds the credentials file and reads it.
pub fn load(paths: &SearchPaths, capacity: usize) -> Result<(PathBuf, Vec<u8>), AuthinfoError> {
    let path = find_file(paths)?;
    let text = read_file(&path, capacity)?;
    Ok((path, text))
}
