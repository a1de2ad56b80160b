// File: ./src/storage.rs
// Reads leave records handed over by the data-fetching layer and turns them
// into layout input.
//
// The backend payload is either a bare JSON array of records or an object
// wrapping it as `{ "leaves": [...] }`. Records that fail range validation
// are reported, never dropped.
use crate::context::AppContext;
use crate::model::{LeaveEvent, LeaveRecord, LeaveStatus};
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LEAVES_FILENAME: &str = "leaves.json";

#[derive(Deserialize)]
#[serde(untagged)]
enum LeavePayload {
    Bare(Vec<LeaveRecord>),
    Wrapped { leaves: Vec<LeaveRecord> },
}

impl LeavePayload {
    fn into_records(self) -> Vec<LeaveRecord> {
        match self {
            Self::Bare(records) => records,
            Self::Wrapped { leaves } => leaves,
        }
    }
}

pub struct LeaveStore;

impl LeaveStore {
    /// Default location of the leave export inside the data directory.
    pub fn default_path(ctx: &dyn AppContext) -> Result<PathBuf> {
        Ok(ctx.get_data_dir()?.join(LEAVES_FILENAME))
    }

    /// Parse a backend payload from a string.
    pub fn parse(json: &str) -> Result<Vec<LeaveRecord>> {
        let payload: LeavePayload =
            serde_json::from_str(json).context("Failed to parse leave records")?;
        Ok(payload.into_records())
    }

    /// Load leave records from `path`.
    pub fn load_from_path(path: &Path) -> Result<Vec<LeaveRecord>> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Leave file not found: '{}'",
                path.display()
            ));
        }
        let json = Self::with_lock(path, || Ok(fs::read_to_string(path)?))
            .with_context(|| format!("Failed to read leave file '{}'", path.display()))?;
        let records = Self::parse(&json)
            .with_context(|| format!("Invalid leave file '{}'", path.display()))?;
        log::info!("Loaded {} leave records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Converts records into layout events, skipping statuses in `hidden`.
    ///
    /// Fails on the first record whose end date precedes its start date.
    pub fn to_events(records: Vec<LeaveRecord>, hidden: &[LeaveStatus]) -> Result<Vec<LeaveEvent>> {
        let mut events = Vec::with_capacity(records.len());
        let mut skipped = 0usize;
        for record in records {
            if hidden.contains(&record.status) {
                skipped += 1;
                continue;
            }
            let event = LeaveEvent::from(record);
            event.validate()?;
            events.push(event);
        }
        if skipped > 0 {
            log::debug!("Skipped {} leave records with hidden statuses", skipped);
        }
        Ok(events)
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock next to `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}
