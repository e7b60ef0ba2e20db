mod store;
mod table;

pub use store::{FileId, FileStatus, PickedFile, SelectionStore, SubmittedItem};
pub use table::{status_label, StatusTone, TableRow, TableView};
