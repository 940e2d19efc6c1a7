use crate::error::AppError;
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Arc;

/// Owns the one pretrained session for the lifetime of the process.
///
/// The session is loaded once at startup. If loading fails the slot stays
/// `None`, the failure message is kept in `error`, and classification is
/// disabled for the rest of the run.
#[derive(Clone)]
pub struct ModelManager {
    pub model_path: PathBuf,
    pub model: Arc<std::sync::Mutex<Option<Session>>>,
    pub loading: Arc<tokio::sync::Mutex<bool>>,
    pub error: Arc<tokio::sync::Mutex<Option<String>>>,
}

impl ModelManager {
    pub fn new(model_path: PathBuf) -> Self {
        Self {
            model_path,
            model: Arc::new(std::sync::Mutex::new(None)),
            loading: Arc::new(tokio::sync::Mutex::new(false)),
            error: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    pub fn model_file_exists(&self) -> bool {
        self.model_path.exists()
    }

    pub fn is_ready(&self) -> bool {
        self.model.lock().unwrap().is_some()
    }

    pub async fn is_loading(&self) -> bool {
        *self.loading.lock().await
    }

    pub async fn get_error(&self) -> Option<String> {
        self.error.lock().await.clone()
    }

    pub async fn load_model(&self) -> Result<(), AppError> {
        if self.is_ready() {
            return Ok(());
        }

        {
            let mut loading = self.loading.lock().await;
            if *loading {
                return Err("Model is already loading".into());
            }
            *loading = true;
        }

        *self.error.lock().await = None;

        let result = self.do_load_model().await;

        *self.loading.lock().await = false;

        if let Err(ref e) = result {
            *self.error.lock().await = Some(e.message.clone());
        }

        result
    }

    async fn do_load_model(&self) -> Result<(), AppError> {
        let model_path = self.model_path.clone();

        let model = tauri::async_runtime::spawn_blocking(move || -> Result<Session, AppError> {
            let _ = ort::init().with_name("pet-lense").commit();

            let session = Session::builder()
                .map_err(|e| AppError { message: format!("Failed to create session builder: {}", e) })?
                .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
                .map_err(|e| AppError { message: format!("Failed to set optimization level: {}", e) })?
                .with_intra_threads(4)
                .map_err(|e| AppError { message: format!("Failed to set intra threads: {}", e) })?
                .with_execution_providers([
                    ort::execution_providers::CPUExecutionProvider::default().build(),
                ])
                .map_err(|e| AppError { message: format!("Failed to register CPU execution provider: {}", e) })?
                .commit_from_file(model_path)
                .map_err(|e| AppError {
                    message: format!("Failed to load ONNX model: {}", e),
                })?;

            Ok(session)
        })
        .await
        .map_err(|e| AppError {
            message: format!("Failed to spawn model loading task: {}", e),
        })??;

        *self.model.lock().unwrap() = Some(model);

        Ok(())
    }

    pub fn get_model_lock(&self) -> Arc<std::sync::Mutex<Option<Session>>> {
        self.model.clone()
    }
}
