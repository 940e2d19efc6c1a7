mod commands;
mod error;
mod models;
mod services;

use services::classifier::model_manager::ModelManager;
use services::selection::Selection;
use tauri::{Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Fixed location of the pretrained dog/cat network, read once at startup.
const MODEL_PATH: &str = "models/dogcat_vgg16.onnx";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let model_manager = ModelManager::new(std::path::PathBuf::from(MODEL_PATH));
            app.manage(model_manager.clone());
            app.manage(Selection::default());

            let window = app
                .get_webview_window("main")
                .expect("main window missing from config");

            // Without the model file there is nothing this app can do: report
            // and quit before the window ever shows.
            if !model_manager.model_file_exists() {
                let app_handle = app.handle().clone();
                tauri::async_runtime::spawn(async move {
                    app_handle
                        .dialog()
                        .message(format!("Model file '{}' not found", MODEL_PATH))
                        .kind(MessageDialogKind::Error)
                        .title("Error")
                        .blocking_show();
                    app_handle.exit(1);
                });
                return Ok(());
            }

            window.show().expect("Failed to show main window");

            // Load the model in the background so the window comes up
            // immediately; the frontend keeps Classify disabled until the
            // "ready" status arrives.
            let app_handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let _ = app_handle.emit("model-status", serde_json::json!({
                    "status": "loading"
                }));

                match model_manager.load_model().await {
                    Ok(()) => {
                        eprintln!("Model loaded from {}", MODEL_PATH);
                        let _ = app_handle.emit("model-status", serde_json::json!({
                            "status": "ready"
                        }));
                    }
                    Err(e) => {
                        eprintln!("Failed to load model: {}", e);
                        let _ = app_handle.emit("model-status", serde_json::json!({
                            "status": "error",
                            "message": e.to_string()
                        }));
                        app_handle
                            .dialog()
                            .message(format!("Failed to load model: {}", e))
                            .kind(MessageDialogKind::Error)
                            .title("Error")
                            .blocking_show();
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::classifier::get_model_status,
            commands::classifier::classify_image,
            commands::image::select_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
