pub mod classifier;
pub mod fs_service;
pub mod preview_service;
pub mod selection;
