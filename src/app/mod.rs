mod actions;
mod state;
mod ui;
mod validation;

use crate::config::AppConfig;
use crate::error::{ClientError, Result};
use crate::selection::{PickedFile, SelectionStore};
use crate::upload::{ApiClient, DepartmentOption, FileProcessor};
use crate::utils::labels;
use actions::{ActionDispatcher, CLEAR_SELECTION, REFRESH_DEPARTMENTS};
use eframe::{egui, App};
use state::AppState;
use std::future::Future;
use std::path::PathBuf;
use std::sync::mpsc::{self, Sender, TryRecvError};
use tracing::{error, info, warn};
use validation::{ValidationController, ValidationOutcome};

pub struct BatchValidator {
    config: AppConfig,
    client: ApiClient,
    selection: SelectionStore,
    validation: ValidationController,
    state: AppState,
    actions: ActionDispatcher<BatchValidator>,
    ctx: egui::Context,
}

/// Runs `task` on its own thread and runtime, then wakes the UI.
fn spawn_background<T, F>(ctx: &egui::Context, sender: Sender<Result<T>>, task: F)
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let outcome = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt.block_on(task),
            Err(e) => Err(ClientError::Runtime(e)),
        };
        sender.send(outcome).unwrap_or_default();
        ctx.request_repaint();
    });
}

impl BatchValidator {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        info!("Initializing batch validator");
        let mut app = Self::with_config(config);
        app.ctx = cc.egui_ctx.clone();
        app.load_departments();
        app
    }

    pub fn with_config(config: AppConfig) -> Self {
        let actions = ActionDispatcher::new()
            .register(REFRESH_DEPARTMENTS, Self::load_departments as fn(&mut Self))
            .register(CLEAR_SELECTION, Self::clear_selection as fn(&mut Self));

        Self {
            client: ApiClient::new(config.api.clone()),
            config,
            selection: SelectionStore::new(),
            validation: ValidationController::default(),
            state: AppState::default(),
            actions,
            ctx: egui::Context::default(),
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn validate_enabled(&self) -> bool {
        self.validation.trigger_enabled(&self.selection)
    }

    pub fn load_departments(&mut self) {
        if self.state.is_loading_departments() {
            return;
        }
        let (sender, receiver) = mpsc::channel();
        self.state.directory_receiver = Some(receiver);

        let client = self.client.clone();
        spawn_background(&self.ctx, sender, async move {
            client.fetch_departments().await
        });
    }

    pub fn apply_departments(&mut self, result: Result<Vec<DepartmentOption>>) {
        match result {
            Ok(items) => self.state.dropdown.populate(&items),
            Err(e) => warn!("Failed to load departments: {}", e),
        }
    }

    fn selection_locked(&self, operation: &str) -> bool {
        if self.validation.is_submitting() {
            warn!(operation, "selection is locked while validation is in flight");
            return true;
        }
        false
    }

    /// Opens the native picker. Cancelling keeps the current selection.
    pub fn trigger_picker(&mut self) {
        if self.selection_locked("pick files") {
            return;
        }

        let picker = &self.config.picker;
        let mut dialog = rfd::FileDialog::new();
        if !picker.extensions.is_empty() {
            dialog = dialog.add_filter(picker.filter_name.as_str(), picker.extensions.as_slice());
        }
        if let Some(paths) = dialog.pick_files() {
            self.on_files_chosen(paths);
        }
    }

    /// Replaces the selection with `paths`; never appends.
    pub fn on_files_chosen(&mut self, paths: Vec<PathBuf>) -> bool {
        if self.selection_locked("replace selection") {
            return false;
        }

        let picked = paths
            .iter()
            .filter_map(|path| match PickedFile::from_path(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!(path = %path.display(), "Skipping unreadable file: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>();

        info!(count = picked.len(), "files chosen");
        self.selection.replace(picked);
        true
    }

    pub fn remove_file(&mut self, index: usize) -> bool {
        if self.selection_locked("remove file") {
            return false;
        }
        self.selection.remove_at(index).is_some()
    }

    pub fn clear_selection(&mut self) {
        if self.selection_locked("clear selection") {
            return;
        }
        self.selection.replace(Vec::new());
    }

    pub fn start_validation(&mut self) -> bool {
        let Some((items, sender)) = self.validation.begin(&self.selection) else {
            return false;
        };

        let processor = FileProcessor::new(self.client.clone());
        spawn_background(&self.ctx, sender, async move {
            processor.process_files(items).await
        });
        true
    }

    pub fn finish_validation(&mut self, outcome: ValidationOutcome) {
        match outcome {
            Ok(outcomes) => {
                let applied = self.selection.apply_statuses(outcomes);
                info!(applied, "validation results merged");
            }
            Err(e) => {
                error!("Validation failed: {}", e);
                self.state.alert = Some(labels::VALIDATION_FAILED_ALERT.to_string());
            }
        }
    }

    pub fn run_bottom_action(&mut self, action: &str) {
        if let Some(handler) = self.actions.dispatch(action) {
            handler(self);
        }
    }

    pub fn update_state(&mut self) {
        if let Some(receiver) = &self.state.directory_receiver {
            let result = match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(ClientError::WorkerGone)),
            };
            if let Some(result) = result {
                self.state.directory_receiver = None;
                self.apply_departments(result);
            }
        }

        if let Some(outcome) = self.validation.poll() {
            self.finish_validation(outcome);
        }
    }
}

impl App for BatchValidator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state();
        self.render(ctx);
    }
}
