use crate::error::AppError;
use crate::models::classify_types::{Classification, ModelStatus};
use crate::services::classifier::inference;
use crate::services::classifier::model_manager::ModelManager;
use crate::services::selection::Selection;
use tauri::State;

#[tauri::command]
pub async fn get_model_status(model_manager: State<'_, ModelManager>) -> Result<ModelStatus, AppError> {
    Ok(ModelStatus {
        loading: model_manager.is_loading().await,
        ready: model_manager.is_ready(),
        error: model_manager.get_error().await,
    })
}

#[tauri::command]
pub async fn classify_image(
    model_manager: State<'_, ModelManager>,
    selection: State<'_, Selection>,
) -> Result<Classification, AppError> {
    if !model_manager.is_ready() {
        return Err("Model is not loaded".into());
    }

    let Some(path) = selection.get() else {
        return Err("No image selected. Pick a dog or cat picture first.".into());
    };

    let model_lock = model_manager.get_model_lock();

    // Decode and the forward pass are CPU-bound; keep them off the event loop.
    let result = tauri::async_runtime::spawn_blocking(move || {
        let mut guard = model_lock.lock().unwrap();
        let session = guard
            .as_mut()
            .ok_or_else(|| AppError::from("Model is not loaded"))?;
        inference::classify_file(session, &path)
    })
    .await
    .map_err(|e| AppError {
        message: format!("Task join failed: {}", e),
    })??;

    Ok(result)
}
