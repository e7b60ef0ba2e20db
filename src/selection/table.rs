use super::store::{FileStatus, SelectionStore};
use crate::utils::file_size::FileSizeUtils;
use crate::utils::labels;

/// One frame's worth of file table, rebuilt from the store every time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub validate_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Empty {
        message: &'static str,
    },
    File {
        index: usize,
        name: String,
        size: String,
        status: String,
        tone: StatusTone,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Failure,
}

impl From<&FileStatus> for StatusTone {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Pending => StatusTone::Neutral,
            FileStatus::Passed => StatusTone::Success,
            FileStatus::Failed { .. } => StatusTone::Failure,
        }
    }
}

pub fn status_label(status: &FileStatus) -> String {
    match status {
        FileStatus::Pending => labels::STATUS_PENDING.to_string(),
        FileStatus::Passed => labels::STATUS_PASSED.to_string(),
        FileStatus::Failed {
            reason: Some(reason),
        } => reason.clone(),
        FileStatus::Failed { reason: None } => labels::STATUS_FAILED.to_string(),
    }
}

impl TableView {
    pub fn project(store: &SelectionStore) -> Self {
        if store.is_empty() {
            return Self {
                rows: vec![TableRow::Empty {
                    message: labels::EMPTY_TABLE_PROMPT,
                }],
                validate_enabled: false,
            };
        }

        let rows = store
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| TableRow::File {
                index,
                name: file.name.clone(),
                size: FileSizeUtils::format_kb(file.size),
                status: status_label(&file.status),
                tone: StatusTone::from(&file.status),
            })
            .collect();

        Self {
            rows,
            validate_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::store::PickedFile;
    use std::path::PathBuf;

    fn store_with(files: &[(&str, u64)]) -> SelectionStore {
        let mut store = SelectionStore::new();
        store.replace(
            files
                .iter()
                .map(|(name, size)| PickedFile {
                    name: name.to_string(),
                    size: *size,
                    path: PathBuf::from(name),
                })
                .collect(),
        );
        store
    }

    #[test]
    fn empty_selection_renders_single_prompt_row() {
        let view = TableView::project(&SelectionStore::new());
        assert_eq!(
            view.rows,
            vec![TableRow::Empty {
                message: labels::EMPTY_TABLE_PROMPT
            }]
        );
        assert!(!view.validate_enabled);
    }

    #[test]
    fn one_row_per_file_with_pending_status() {
        let view = TableView::project(&store_with(&[("a.txt", 1024), ("b.txt", 2048)]));

        assert!(view.validate_enabled);
        assert_eq!(
            view.rows,
            vec![
                TableRow::File {
                    index: 0,
                    name: "a.txt".to_string(),
                    size: "1.0 KB".to_string(),
                    status: "Pending".to_string(),
                    tone: StatusTone::Neutral,
                },
                TableRow::File {
                    index: 1,
                    name: "b.txt".to_string(),
                    size: "2.0 KB".to_string(),
                    status: "Pending".to_string(),
                    tone: StatusTone::Neutral,
                },
            ]
        );
    }

    #[test]
    fn merged_statuses_survive_row_deletion() {
        let mut store = store_with(&[("a.txt", 1024), ("b.txt", 2048), ("c.txt", 512)]);
        let snapshot = store.snapshot();
        store.apply_statuses(vec![
            (snapshot[1].id, FileStatus::Passed),
            (
                snapshot[2].id,
                FileStatus::Failed {
                    reason: Some("too large".to_string()),
                },
            ),
        ]);

        store.remove_at(0);
        let statuses: Vec<(String, StatusTone)> = TableView::project(&store)
            .rows
            .into_iter()
            .filter_map(|row| match row {
                TableRow::File { status, tone, .. } => Some((status, tone)),
                TableRow::Empty { .. } => None,
            })
            .collect();

        assert_eq!(
            statuses,
            vec![
                (labels::STATUS_PASSED.to_string(), StatusTone::Success),
                ("too large".to_string(), StatusTone::Failure),
            ]
        );
    }

    #[test]
    fn failure_reason_replaces_generic_label() {
        assert_eq!(
            status_label(&FileStatus::Failed {
                reason: Some("format invalid".to_string())
            }),
            "format invalid"
        );
        assert_eq!(
            status_label(&FileStatus::Failed { reason: None }),
            labels::STATUS_FAILED
        );
        assert_eq!(status_label(&FileStatus::Passed), labels::STATUS_PASSED);
    }
}
