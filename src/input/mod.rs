//! Input processing module
//! Handles file detection and loading job postings from disk

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
