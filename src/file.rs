//! Loading of JSON configuration from disk.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads a JSON-encoded value from `path`. Failures carry the path in their message; malformed
/// or mistyped content surfaces as [io::ErrorKind::InvalidData].
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let file = File::open(path).map_err(|err| annotate(path, err))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|err| annotate(path, err.into()))
}

fn annotate(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}

pub trait ReadJsonFile: Sized {
    fn read_json_file(path: impl AsRef<Path>) -> Result<Self, io::Error>;
}

impl<D: DeserializeOwned> ReadJsonFile for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        read_json(path)
    }
}
