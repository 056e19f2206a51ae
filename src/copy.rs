//! Single-file copy
//!
//! Streams the source into the destination with compio's positional
//! `read_at`/`write_at`, reusing one buffer for the whole file, then copies
//! the source permission bits onto the destination through its file
//! descriptor (so the umask applied at creation does not leak through).
//!
//! An existing destination is truncated and overwritten. Unlike
//! [`crate::entry::create_file`], there is no occupancy check.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fsh::copy::copy_file;
//! use std::path::Path;
//!
//! #[compio::main]
//! async fn main() -> fsh::Result<()> {
//!     let bytes = copy_file(Path::new("source.txt"), Path::new("destination.txt")).await?;
//!     println!("copied {bytes} bytes");
//!     Ok(())
//! }
//! ```

use crate::error::{Result, ShellError};
use compio::fs::File;
use compio::io::{AsyncReadAt, AsyncWriteAt};
use std::io::ErrorKind;
use std::path::Path;

/// I/O buffer size (in bytes) used for chunked read/write operations.
const BUFFER_SIZE: usize = 64 * 1024; // 64KB buffer

/// Copy the file at `src` to `dst`, returning the number of bytes copied
///
/// # Errors
///
/// Returns `ShellError::Io` if:
/// - Source file cannot be opened, or is a directory
/// - Destination file cannot be created or written
/// - Permissions cannot be applied to the destination
pub async fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let src_file = File::open(src).await.map_err(|e| ShellError::io(src, e))?;

    let src_metadata = src_file
        .metadata()
        .await
        .map_err(|e| ShellError::io(src, e))?;
    if src_metadata.is_dir() {
        return Err(ShellError::io(
            src,
            std::io::Error::new(ErrorKind::IsADirectory, "source is a directory"),
        ));
    }

    let mut dst_file = File::create(dst).await.map_err(|e| ShellError::io(dst, e))?;

    // One allocation for the whole copy; ownership moves into each read/write and back
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut offset = 0u64;

    loop {
        let read_result = src_file.read_at(buffer, offset).await;
        let bytes_read = read_result.0.map_err(|e| ShellError::io(src, e))?;
        buffer = read_result.1;

        if bytes_read == 0 {
            break;
        }

        // Only write what was read
        buffer.truncate(bytes_read);

        let write_result = dst_file.write_at(buffer, offset).await;
        let bytes_written = write_result.0.map_err(|e| ShellError::io(dst, e))?;
        buffer = write_result.1;
        buffer.resize(BUFFER_SIZE, 0);

        if bytes_written != bytes_read {
            return Err(ShellError::io(
                dst,
                std::io::Error::new(
                    ErrorKind::WriteZero,
                    format!("write size mismatch: expected {bytes_read}, got {bytes_written}"),
                ),
            ));
        }

        offset += bytes_written as u64;
    }

    // fchmod on the open descriptor
    dst_file
        .set_permissions(src_metadata.permissions())
        .await
        .map_err(|e| ShellError::io(dst, e))?;

    tracing::debug!(
        "Copied {} bytes from {} to {}",
        offset,
        src.display(),
        dst.display()
    );
    Ok(offset)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn patterned_bytes(size: usize) -> Vec<u8> {
        (0..size).map(|i| (i % 251) as u8).collect()
    }

    #[compio::test]
    async fn test_copy_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src.txt");
        let dst = temp_dir.path().join("dst.txt");
        fs::write(&src, "Hello, shell!").unwrap();

        let copied = copy_file(&src, &dst).await.unwrap();

        assert_eq!(copied, 13);
        assert_eq!(fs::read(&dst).unwrap(), b"Hello, shell!");
    }

    #[compio::test]
    async fn test_copy_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("empty");
        let dst = temp_dir.path().join("empty.copy");
        fs::write(&src, "").unwrap();

        assert_eq!(copy_file(&src, &dst).await.unwrap(), 0);
        assert_eq!(fs::metadata(&dst).unwrap().len(), 0);
    }

    #[compio::test]
    async fn test_copy_spans_multiple_buffers() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("large.bin");
        let dst = temp_dir.path().join("large.copy");
        let data = patterned_bytes(BUFFER_SIZE * 3 + 17);
        fs::write(&src, &data).unwrap();

        let copied = copy_file(&src, &dst).await.unwrap();

        assert_eq!(copied, data.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), data);
    }

    #[compio::test]
    async fn test_copy_overwrites_and_truncates_destination() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("short.txt");
        let dst = temp_dir.path().join("long.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "much longer previous content").unwrap();

        copy_file(&src, &dst).await.unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[cfg(unix)]
    #[compio::test]
    async fn test_copy_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("script.sh");
        let dst = temp_dir.path().join("script.copy");
        fs::write(&src, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o751)).unwrap();

        copy_file(&src, &dst).await.unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode, 0o751);
    }

    #[compio::test]
    async fn test_copy_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dst = temp_dir.path().join("dst");

        let result = copy_file(&temp_dir.path().join("missing"), &dst).await;

        assert!(matches!(result, Err(ShellError::Io { .. })));
        assert!(!dst.exists());
    }

    #[compio::test]
    async fn test_copy_directory_source_fails_without_creating_destination() {
        let temp_dir = TempDir::new().unwrap();
        let dst = temp_dir.path().join("dst");

        let result = copy_file(temp_dir.path(), &dst).await;

        assert!(matches!(result, Err(ShellError::Io { .. })));
        assert!(!dst.exists());
    }

    #[compio::test]
    async fn test_copy_into_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src.txt");
        fs::write(&src, "x").unwrap();

        let result = copy_file(&src, &temp_dir.path().join("no/such/dir/dst.txt")).await;
        assert!(matches!(result, Err(ShellError::Io { .. })));
    }
}
