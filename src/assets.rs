use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::{ico, png};

pub const ICO_NAME: &str = "icon.ico";
pub const PNG_NAME: &str = "icon.png";

#[derive(Debug)]
pub struct WrittenIcons {
    pub ico: PathBuf,
    pub png: PathBuf,
}

impl WrittenIcons {
    /// The one line printed once both files are on disk.
    pub fn confirmation(&self) -> String {
        format!("Created {} and {}", self.ico.display(), self.png.display())
    }
}

/// Writes `icon.ico` and `icon.png` into `dir`, creating it if needed and
/// replacing any previous files.
pub fn write_icons(dir: &Path, canvas: &Canvas) -> Result<WrittenIcons> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let ico_path = dir.join(ICO_NAME);
    write_file(&ico_path, &ico::encode(canvas))?;

    let png_path = dir.join(PNG_NAME);
    write_file(&png_path, &png::encode(canvas)?)?;

    Ok(WrittenIcons {
        ico: ico_path,
        png: png_path,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;

    fn canvas() -> Canvas {
        Canvas {
            width: 32,
            height: 32,
            color: Rgba::new(0xFB, 0x5B, 0x6B, 0xFF),
        }
    }

    #[test]
    fn creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src-tauri").join("icons");

        let written = write_icons(&out, &canvas()).unwrap();
        assert_eq!(written.ico, out.join("icon.ico"));
        assert_eq!(written.png, out.join("icon.png"));
        assert_eq!(std::fs::read(&written.ico).unwrap().len(), 4286);
        assert!(std::fs::read(&written.png).unwrap().starts_with(&png::SIGNATURE));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_icons(dir.path(), &canvas()).unwrap();
        let ico = std::fs::read(&first.ico).unwrap();
        let png = std::fs::read(&first.png).unwrap();

        let second = write_icons(dir.path(), &canvas()).unwrap();
        assert_eq!(std::fs::read(&second.ico).unwrap(), ico);
        assert_eq!(std::fs::read(&second.png).unwrap(), png);
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ICO_NAME), b"stale").unwrap();
        std::fs::write(dir.path().join(PNG_NAME), b"stale").unwrap();

        let written = write_icons(dir.path(), &canvas()).unwrap();
        assert_eq!(std::fs::read(&written.ico).unwrap(), ico::encode(&canvas()));
        assert_eq!(
            std::fs::read(&written.png).unwrap(),
            png::encode(&canvas()).unwrap()
        );
    }

    #[test]
    fn confirmation_names_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_icons(dir.path(), &canvas()).unwrap();
        assert_eq!(
            written.confirmation(),
            format!(
                "Created {} and {}",
                dir.path().join("icon.ico").display(),
                dir.path().join("icon.png").display()
            )
        );
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("icons");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = write_icons(&blocker, &canvas()).unwrap_err();
        assert!(err.to_string().contains("icons"));
    }
}
