// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use freeze_scope_shared_kernel::{InfraResult, InfrastructureError};

/// Reads documents from disk, mapping I/O failures to [`InfrastructureError::FileRead`].
pub struct FileReader;

impl FileReader {
    pub fn open(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open(path)?;
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_name_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.yaml");

        let err = FileReader::read_to_string(&path).expect_err("file is missing");

        assert!(matches!(&err, InfrastructureError::FileRead { path: p, .. } if p == &path));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
