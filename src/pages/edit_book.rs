/// Edit Book page
///
/// Keeps three local edit cells in sync with one book on the service:
/// the book is fetched whenever the edited id changes, and written back
/// when the user presses Save.
///
/// `update` never performs I/O. It returns an [`Action`] that the
/// application shell carries out, and the outcome comes back as a
/// [`Message`] carrying the [`Ticket`] of the request. Only the latest
/// read and the latest write of the mounted page are accepted.

use iced::widget::{button, column, container, text, text_input, Column};
use iced::{Element, Length};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ApiError;
use crate::routes::Route;
use crate::state::data::{Book, BookId, BookPayload};
use crate::state::edit::{BookFields, Field};
use crate::ui::{back_button, spinner};

/// Text of the alert raised when saving fails
pub const SAVE_FAILED: &str = "Error while pushing data";

/// Identifies one request, unique for the lifetime of the process
///
/// A remounted page never reuses a ticket of an earlier mount, so late
/// responses for the same book id cannot be mistaken for current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Ticket(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Page messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Read issued under the ticket finished
    Loaded(Ticket, Result<Book, ApiError>),
    TitleChanged(String),
    AuthorChanged(String),
    PublishYearChanged(String),
    /// User pressed "Save"
    Save,
    /// Write issued under the ticket finished
    Saved(Ticket, Result<(), ApiError>),
    /// User pressed "Back"
    Back,
}

/// Side effect requested by the page
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// GET the book
    Fetch(Ticket, BookId),
    /// PUT the payload to the book
    Put(Ticket, BookId, BookPayload),
    Navigate(Route),
    /// Show a blocking alert with this text
    Alert(String),
}

/// State of the Edit Book page
#[derive(Debug, Clone)]
pub struct EditBook {
    /// Book currently being edited
    id: BookId,
    /// Local, uncommitted field values
    fields: BookFields,
    /// True while a read or write is outstanding
    loading: bool,
    /// Ticket of the read whose response is still awaited
    pending_read: Option<Ticket>,
    /// Ticket of the write whose response is still awaited
    pending_write: Option<Ticket>,
}

impl EditBook {
    /// Mount the page for a book and request its current values
    pub fn new(id: BookId) -> (Self, Action) {
        let mut page = EditBook {
            id: id.clone(),
            fields: BookFields::new(),
            loading: false,
            pending_read: None,
            pending_write: None,
        };
        let action = page.load(id);
        (page, action)
    }

    /// Point the page at another book
    /// Re-fetches only when the id actually changes.
    pub fn set_id(&mut self, id: BookId) -> Action {
        if id == self.id {
            return Action::None;
        }
        self.load(id)
    }

    /// Start a read; any outstanding read or write is abandoned
    fn load(&mut self, id: BookId) -> Action {
        tracing::debug!("Loading book {}", id);
        let ticket = Ticket::next();
        self.id = id.clone();
        self.loading = true;
        self.pending_read = Some(ticket);
        self.pending_write = None;
        Action::Fetch(ticket, id)
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn fields(&self) -> &BookFields {
        &self.fields
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub fn pending_read(&self) -> Option<Ticket> {
        self.pending_read
    }

    #[cfg(test)]
    pub fn pending_write(&self) -> Option<Ticket> {
        self.pending_write
    }

    /// Handle a page message and report the side effect to perform
    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(ticket, result) => {
                if self.pending_read != Some(ticket) {
                    tracing::debug!("Discarding stale read {:?} (editing {})", ticket, self.id);
                    return Action::None;
                }
                self.pending_read = None;

                match result {
                    Ok(book) => {
                        tracing::info!("Fetched book {}: {:?}", self.id, book);
                        self.fields.populate(&book);
                        self.loading = false;
                    }
                    Err(err) => {
                        // The spinner stays up: nothing re-enables the form after a failed read
                        tracing::error!("Failed to fetch book {}: {}", self.id, err);
                    }
                }
                Action::None
            }
            Message::TitleChanged(value) => self.edit(Field::Title, value),
            Message::AuthorChanged(value) => self.edit(Field::Author, value),
            Message::PublishYearChanged(value) => self.edit(Field::PublishYear, value),
            Message::Save => {
                let ticket = Ticket::next();
                let payload = self.fields.payload();
                self.loading = true;
                self.pending_write = Some(ticket);
                Action::Put(ticket, self.id.clone(), payload)
            }
            Message::Saved(ticket, result) => {
                if self.pending_write != Some(ticket) {
                    tracing::debug!("Discarding stale write {:?} (editing {})", ticket, self.id);
                    return Action::None;
                }
                self.pending_write = None;
                self.loading = false;

                match result {
                    Ok(()) => {
                        tracing::info!("Saved book {}", self.id);
                        Action::Navigate(Route::Home)
                    }
                    Err(err) => {
                        tracing::error!("Failed to save book {}: {}", self.id, err);
                        Action::Alert(SAVE_FAILED.to_string())
                    }
                }
            }
            Message::Back => Action::Navigate(Route::Home),
        }
    }

    fn edit(&mut self, field: Field, value: String) -> Action {
        self.fields.set(field, value);
        Action::None
    }

    /// Build the page; `spinner_angle` is the shell's animation phase
    pub fn view(&self, spinner_angle: f32) -> Element<'_, Message> {
        let form = column![
            self.field_input(Field::Title, Message::TitleChanged),
            self.field_input(Field::Author, Message::AuthorChanged),
            self.field_input(Field::PublishYear, Message::PublishYearChanged),
            button("Save")
                .on_press(Message::Save)
                .padding(10)
                .width(Length::Fill),
        ]
        .spacing(20)
        .padding(16)
        .width(Length::Fixed(600.0));

        let mut content: Column<Message> = column![
            back_button::view(Message::Back),
            text("Edit Book").size(30),
        ]
        .spacing(16)
        .padding(16);

        if self.loading {
            content = content.push(spinner::view(spinner_angle));
        }

        content
            .push(
                container(container(form).style(container::bordered_box))
                    .center_x(Length::Fill),
            )
            .into()
    }

    fn field_input(
        &self,
        field: Field,
        on_input: fn(String) -> Message,
    ) -> Element<'_, Message> {
        column![
            text(field.label()).size(18),
            text_input("", &self.fields.value(field))
                .on_input(on_input)
                .padding([8, 16]),
        ]
        .spacing(6)
        .into()
    }
}
