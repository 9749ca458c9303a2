/// State management module
///
/// This module handles all application state, including:
/// - The fetched image type (data.rs)
/// - What the main screen is showing (view.rs)
/// - The session history of fetched images (history.rs)
/// - The controller that mutates both (controller.rs)

pub mod controller;
pub mod data;
pub mod history;
pub mod view;
