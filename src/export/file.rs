//! File saving for exported images.

use super::types::{ExportError, ExportFormat};
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Expands the chrono specifiers in `template` and appends the format's extension.
pub fn generate_filename(template: &str, format: ExportFormat) -> String {
    let stem = Local::now().format(template).to_string();
    format!("{stem}.{}", format.extension())
}

/// Creates the save directory (and parents) when missing.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.is_dir() {
        log::info!("Creating export directory {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Writes exported bytes into the configured save directory.
///
/// The filename comes from `config.filename_template` plus the format
/// extension. On unix the file is readable by its owner only.
///
/// # Returns
/// Path to the saved file
pub fn save_export(
    image_data: &[u8],
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let directory = expand_tilde(&config.save_directory);
    ensure_directory_exists(&directory)?;
    let file_path = directory.join(generate_filename(&config.filename_template, format));
    write_export(image_data, &file_path)?;
    Ok(file_path)
}

/// Writes exported bytes to an explicit path.
pub fn write_export(image_data: &[u8], file_path: &Path) -> Result<(), ExportError> {
    fs::write(file_path, image_data)?;
    log::info!("Wrote {} bytes to {}", image_data.len(), file_path.display());

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(file_path, Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
