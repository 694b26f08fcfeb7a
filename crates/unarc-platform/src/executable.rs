use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Check that `path` is an existing regular file the current user may execute.
///
/// On non-Unix platforms there is no execute bit, so only existence and
/// file-ness are checked.
pub fn ensure_executable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(Error::NotExecutable {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}
