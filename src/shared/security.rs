use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a CSV file read from the data directory (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum length of a stored attachment file name, in bytes
const MAX_FILE_NAME_LENGTH: usize = 200;

/// Longest extension kept when a file name is truncated
const MAX_EXTENSION_LENGTH: usize = 16;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Turns an attachment name chosen by a ticket author into a safe, flat file name.
///
/// Spaces become underscores, path separators and characters that are awkward
/// on common filesystems become `-`, and leading dots are stripped so the
/// result can never name a parent directory or a hidden file.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim_start_matches('.');
    let mut sanitized = if trimmed.is_empty() {
        "attachment".to_string()
    } else {
        trimmed.to_string()
    };

    if sanitized.len() > MAX_FILE_NAME_LENGTH {
        // Keep the extension so the file is still picked up as CSV.
        let extension = Path::new(&sanitized)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .filter(|e| e.len() <= MAX_EXTENSION_LENGTH)
            .unwrap_or_default();
        let mut cut = MAX_FILE_NAME_LENGTH.saturating_sub(extension.len());
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized = format!("{}{}", &sanitized[..cut], extension);
    }

    sanitized
}
