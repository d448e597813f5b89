/// Reusable presentation pieces shared by the pages
///
/// - `spinner.rs` - canvas loading indicator
/// - `back_button.rs` - navigation back to the landing view

pub mod back_button;
pub mod spinner;
