use anyhow::Context;
use clap::Parser;
use iced::{Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod pages;
mod routes;
mod state;
mod ui;

use crate::config::{AppConfig, LoggingConfig};
use crate::pages::edit_book::{self, Action, EditBook};
use crate::pages::home::{self, Home};
use crate::routes::Route;
use crate::state::library::Library;
use crate::ui::spinner::Spinner;

/// Interval between spinner animation frames
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about = "Edit records of a book catalogue service")]
struct Cli {
    /// Page to open, e.g. /books/edit/7
    #[arg(default_value = "/")]
    path: String,

    /// Configuration file layered over the defaults and the user config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// The page currently mounted
#[derive(Debug)]
enum Page {
    Home(Home),
    EditBook(EditBook),
}

/// Main application state
struct BookEditor {
    /// Client for the book service
    library: Library,
    /// Mounted page
    page: Page,
    /// Current rotation of the loading spinner
    spinner_angle: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Home(home::Message),
    EditBook(edit_book::Message),
    /// Spinner animation frame
    Tick,
}

impl BookEditor {
    /// Create a new instance of the application on the given page
    fn new(library: Library, route: Route) -> (Self, Task<Message>) {
        let mut app = BookEditor {
            library,
            page: Page::Home(Home::new()),
            spinner_angle: 0.0,
        };
        let task = app.navigate(route);
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => {
                let route = match &mut self.page {
                    Page::Home(home) => home.update(message),
                    _ => None,
                };
                match route {
                    Some(route) => self.navigate(route),
                    None => Task::none(),
                }
            }
            Message::EditBook(message) => {
                let action = match &mut self.page {
                    Page::EditBook(page) => page.update(message),
                    _ => {
                        // Late response after the editor was left
                        tracing::debug!("Dropping {:?}: editor is not mounted", message);
                        Action::None
                    }
                };
                self.perform(action)
            }
            Message::Tick => {
                self.spinner_angle = Spinner::advance(self.spinner_angle);
                Task::none()
            }
        }
    }

    /// Mount the page for a route
    /// An editor already on screen is re-pointed rather than rebuilt.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::debug!("Navigating to {}", route);

        let action = match route {
            Route::Home => {
                self.page = Page::Home(Home::new());
                Action::None
            }
            Route::EditBook(id) => {
                if let Page::EditBook(page) = &mut self.page {
                    page.set_id(id)
                } else {
                    let (page, action) = EditBook::new(id);
                    self.page = Page::EditBook(page);
                    action
                }
            }
        };

        self.perform(action)
    }

    /// Carry out a side effect requested by the editor page
    fn perform(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Fetch(ticket, id) => {
                let library = self.library.clone();
                Task::perform(async move { library.fetch_book(id).await }, move |result| {
                    Message::EditBook(edit_book::Message::Loaded(ticket, result))
                })
            }
            Action::Put(ticket, id, payload) => {
                let library = self.library.clone();
                Task::perform(
                    async move { library.update_book(id, payload).await },
                    move |result| Message::EditBook(edit_book::Message::Saved(ticket, result)),
                )
            }
            Action::Navigate(route) => self.navigate(route),
            Action::Alert(description) => {
                show_alert(&description);
                Task::none()
            }
        }
    }

    fn is_loading(&self) -> bool {
        matches!(&self.page, Page::EditBook(page) if page.is_loading())
    }

    /// Animate the spinner only while it is visible
    fn subscription(&self) -> Subscription<Message> {
        if self.is_loading() {
            iced::time::every(SPINNER_FRAME).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Window title, naming the book being edited
    fn title(&self) -> String {
        match &self.page {
            Page::Home(_) => "Book Editor".to_string(),
            Page::EditBook(page) if page.fields().title.is_empty() => {
                format!("Book Editor - {}", page.id())
            }
            Page::EditBook(page) => format!("Book Editor - {}", page.fields().title),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.page {
            Page::Home(home) => home.view().map(Message::Home),
            Page::EditBook(page) => page.view(self.spinner_angle).map(Message::EditBook),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Blocking native alert, returns once the user dismisses it
fn show_alert(description: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Book Editor")
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Install the global tracing subscriber; RUST_LOG takes precedence
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_editor={}", logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!("Starting Book Editor v{}", env!("CARGO_PKG_VERSION"));

    let route: Route = cli
        .path
        .parse()
        .with_context(|| format!("Invalid start page {}", cli.path))?;

    let library = Library::new(&config.api).context("Failed to create book service client")?;
    tracing::info!("Book service: {:?}", library);

    iced::application(BookEditor::title, BookEditor::update, BookEditor::view)
        .subscription(BookEditor::subscription)
        .theme(BookEditor::theme)
        .centered()
        .run_with(move || BookEditor::new(library, route))?;

    Ok(())
}
