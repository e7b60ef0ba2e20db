use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity of a selected file for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Pending,
    Passed,
    Failed { reason: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl PickedFile {
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Ok(Self {
            name,
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedItem {
    pub id: FileId,
    pub name: String,
    pub path: PathBuf,
}

/// Ordered list of files the user picked. Empty is a valid state.
#[derive(Debug, Default)]
pub struct SelectionStore {
    files: Vec<SelectedFile>,
    next_id: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn replace(&mut self, picked: Vec<PickedFile>) {
        self.files = picked
            .into_iter()
            .map(|file| {
                let id = FileId(self.next_id);
                self.next_id += 1;
                SelectedFile {
                    id,
                    name: file.name,
                    size: file.size,
                    path: file.path,
                    status: FileStatus::Pending,
                }
            })
            .collect();
        debug!(count = self.files.len(), "selection replaced");
    }

    pub fn remove_at(&mut self, index: usize) -> Option<SelectedFile> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        debug!(index, name = %removed.name, "file removed from selection");
        Some(removed)
    }

    pub fn snapshot(&self) -> Vec<SubmittedItem> {
        self.files
            .iter()
            .map(|file| SubmittedItem {
                id: file.id,
                name: file.name.clone(),
                path: file.path.clone(),
            })
            .collect()
    }

    /// Applies statuses by id and returns how many rows changed. Ids no
    /// longer in the selection are ignored.
    pub fn apply_statuses<I>(&mut self, outcomes: I) -> usize
    where
        I: IntoIterator<Item = (FileId, FileStatus)>,
    {
        let mut applied = 0;
        for (id, status) in outcomes {
            if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
                file.status = status;
                applied += 1;
            }
        }
        applied
    }
}
