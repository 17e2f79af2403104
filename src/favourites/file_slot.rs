use super::slot::PersistenceSlot;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Slot backed by `<dir>/<key>.json`.
pub struct FileSlot {
    key: String,
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            dir: dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(Error::Io)?;
    }
    Ok(())
}

impl PersistenceSlot for FileSlot {
    fn name(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<String>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(Error::Io)?;
        Ok(Some(content))
    }

    fn write(&self, value: &str) -> Result<()> {
        ensure_dir(&self.dir)?;

        // Write to a sibling temp file then rename over the target.
        let tmp = self.dir.join(format!(".{}-{}.tmp", self.key, process::id()));
        fs::write(&tmp, value).map_err(Error::Io)?;
        if let Err(e) = fs::rename(&tmp, self.path()) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path(), "propertyFavourites");
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"), "favs");

        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("favs.json").exists());

        for entry in fs::read_dir(dir.path().join("nested")).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let target = dir.path().join("favs.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        let slot = FileSlot::new(dir.path(), "favs");
        assert!(slot.write("[]").is_err());

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "Found leftover tmp files: {:?}", leftovers);
    }
}
