/// State management module
///
/// This module handles all application state, including:
/// - Book service client (library.rs)
/// - Shared data structures (data.rs)
/// - Local edit cells of the book form (edit.rs)

pub mod library;
pub mod data;
pub mod edit;
