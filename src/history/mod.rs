// src/history/mod.rs

use crate::domain::snapshot::ProductSnapshot;
use crate::errors::StoreError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// How many snapshot files survive a cleanup. The differ needs the
/// newest (current) and second-newest (baseline), nothing older.
const KEEP_RECENT: usize = 2;

/// Timestamped CSV snapshot files in one directory. File names embed
/// the creation time down to milliseconds so they sort lexicographically
/// by recency and stay distinct across back-to-back refresh cycles.
pub struct SnapshotHistory {
    dir: PathBuf,
}

impl SnapshotHistory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes one snapshot file and returns its path.
    pub fn save(&self, rows: &[ProductSnapshot]) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io(e.to_string()))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S%.3f");
        let mut path = self.dir.join(format!("products_{timestamp}.csv"));

        // Two cycles inside the same millisecond would collide on the
        // name and the second would overwrite the diff baseline. The
        // `_NN` suffix keeps the name unique and, because `_` sorts
        // after `.`, still lexicographically newer than the original.
        let mut seq = 1;
        while path.exists() {
            path = self.dir.join(format!("products_{timestamp}_{seq:02}.csv"));
            seq += 1;
        }

        let mut writer = csv::Writer::from_path(&path).map_err(|e| StoreError::Csv(e.to_string()))?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| StoreError::Csv(e.to_string()))?;
        }
        writer.flush().map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(path)
    }

    /// Loads the most recent snapshot, or `None` when no baseline exists
    /// yet (first run).
    pub fn latest(&self) -> Result<Option<Vec<ProductSnapshot>>, StoreError> {
        match self.files_newest_first()?.first() {
            Some(path) => Ok(Some(load_snapshot(path)?)),
            None => Ok(None),
        }
    }

    /// Reclaims old snapshot files, returning how many were deleted.
    ///
    /// The 7-day age window from the operational policy can never outrank
    /// recency for the two newest files (those are always kept for the
    /// next diff), and everything beyond them is reclaimed immediately,
    /// so retention reduces to keeping the newest two.
    pub fn cleanup(&self) -> Result<usize, StoreError> {
        let files = self.files_newest_first()?;
        let mut deleted = 0;

        for path in files.iter().skip(KEEP_RECENT) {
            fs::remove_file(path).map_err(|e| StoreError::Io(e.to_string()))?;
            eprintln!("🗑️ Deleted old history file: {}", path.display());
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Snapshot file paths, newest first. The timestamp in the name is
    /// the ordering key.
    fn files_newest_first(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::Io(e.to_string()))?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("csv") {
                files.push(path);
            }
        }

        files.sort();
        files.reverse();
        Ok(files)
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<ProductSnapshot>, StoreError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| StoreError::Csv(e.to_string()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| StoreError::Csv(e.to_string()))?);
    }
    Ok(rows)
}
