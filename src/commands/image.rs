use crate::error::AppError;
use crate::models::image_types::SelectedImage;
use crate::services::fs_service;
use crate::services::preview_service;
use crate::services::selection::Selection;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

/// Open the native file dialog and record the pick. Returns `None` when the
/// user cancels; the previous selection stays in place.
#[tauri::command]
pub async fn select_image(
    app: AppHandle,
    selection: State<'_, Selection>,
) -> Result<Option<SelectedImage>, AppError> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Image files", fs_service::IMAGE_EXTENSIONS)
        .blocking_pick_file();

    let Some(file) = picked else {
        return Ok(None);
    };

    let path = file.into_path().map_err(|e| AppError {
        message: format!("Unsupported dialog selection: {}", e),
    })?;

    if !fs_service::is_image_file(&path) {
        return Err(format!("Not an image file: {}", path.display()).into());
    }

    let preview = preview_service::generate_preview(&path)?;

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    selection.set(path.clone());

    Ok(Some(SelectedImage {
        file_name,
        path: path.to_string_lossy().to_string(),
        preview,
    }))
}
