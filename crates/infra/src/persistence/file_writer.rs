// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use freeze_scope_shared_kernel::{InfraResult, InfrastructureError};

/// Writes documents to disk.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let wrap = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Same directory as the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp).map_err(wrap)?;
        let mut w = BufWriter::new(file);
        w.write_all(data).map_err(wrap)?;
        w.flush().map_err(wrap)?;
        let _ = w.get_ref().sync_all();

        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(wrap(source));
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
