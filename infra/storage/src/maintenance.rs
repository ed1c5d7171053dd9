use crate::file::TMP_MARKER;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Removes temp files left behind by writes that never reached their rename.
///
/// Best effort: failures are logged and the store still opens.
pub(crate) fn purge_tmp(root: &Path) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %root.display(), error = %err, "Temp file scan failed");
            return;
        },
    };

    let mut removed = 0usize;
    let mut failed = 0usize;

    for entry in entries.flatten() {
        let is_tmp = entry.file_type().is_ok_and(|t| t.is_file())
            && entry.file_name().to_str().is_some_and(|name| name.contains(TMP_MARKER));
        if !is_tmp {
            continue;
        }
        match fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(err) => {
                warn!(p = %entry.path().display(), err = %err, "IO fail");
                failed += 1;
            },
        }
    }

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}
