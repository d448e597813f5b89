/// Pages of the application, one per route
///
/// Each page owns its state and message enum ("state down, messages up");
/// the shell in main.rs maps them into the application message.

pub mod edit_book;
pub mod home;
