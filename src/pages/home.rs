/// Landing view at `/`
///
/// Lets the user pick which book to edit by id.
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::routes::Route;
use crate::state::data::BookId;

#[derive(Debug, Clone)]
pub enum Message {
    IdChanged(String),
    /// User pressed "Edit" or hit enter in the id field
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct Home {
    /// Raw contents of the id field
    id_input: String,
    /// Shown when the entered id is unusable
    error: Option<String>,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a message; returns the route to navigate to, if any
    pub fn update(&mut self, message: Message) -> Option<Route> {
        match message {
            Message::IdChanged(value) => {
                self.id_input = value;
                self.error = None;
                None
            }
            Message::Open => match BookId::new(self.id_input.as_str()) {
                Some(id) => Some(Route::EditBook(id)),
                None => {
                    self.error = Some("Enter a book id".to_string());
                    None
                }
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let picker = row![
            text_input("Book id", &self.id_input)
                .on_input(Message::IdChanged)
                .on_submit(Message::Open)
                .padding([8, 16])
                .width(Length::Fixed(320.0)),
            button("Edit").on_press(Message::Open).padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut content = column![text("Books").size(30), picker]
            .spacing(20)
            .padding(40)
            .align_x(Alignment::Center);

        if let Some(error) = &self.error {
            content = content.push(text(error).size(14));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_valid_id() {
        let mut home = Home::new();
        home.update(Message::IdChanged(" 7 ".to_string()));

        let route = home.update(Message::Open);

        assert_eq!(route, Some(Route::EditBook(BookId::new("7").unwrap())));
    }

    #[test]
    fn test_open_blank_id_shows_error() {
        let mut home = Home::new();

        assert_eq!(home.update(Message::Open), None);
        assert!(home.error.is_some());

        // Typing clears the error
        home.update(Message::IdChanged("7".to_string()));
        assert!(home.error.is_none());
    }
}
