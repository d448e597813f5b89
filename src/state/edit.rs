/// Local, uncommitted copies of a book's editable fields
///
/// The form never holds a `Book` aggregate. Each field is its own cell,
/// overwritten wholesale by the matching input, and the cells are
/// re-initialised from the service whenever the edited id changes.

use super::data::{Book, BookPayload, PublishYear};

/// Identifies one editable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    PublishYear,
}

impl Field {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::PublishYear => "Publish Year",
        }
    }
}

/// The three editable cells of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publish_year: PublishYear,
}

impl BookFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every cell with the values of a fetched book
    /// Unsaved edits are discarded, not merged.
    pub fn populate(&mut self, book: &Book) {
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.publish_year = book.publish_year.clone();
    }

    /// Overwrite a single cell with the raw input value
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Author => self.author = value,
            Field::PublishYear => self.publish_year = PublishYear::Text(value),
        }
    }

    /// Current text of a cell, as displayed in its input
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Author => self.author.clone(),
            Field::PublishYear => self.publish_year.to_string(),
        }
    }

    /// Assemble the write payload from the current cells, unvalidated
    pub fn payload(&self) -> BookPayload {
        BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            publish_year: self.publish_year.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: None,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publish_year: PublishYear::Number(1965),
        }
    }

    #[test]
    fn test_default_is_empty() {
        let fields = BookFields::new();
        assert_eq!(fields.value(Field::Title), "");
        assert_eq!(fields.value(Field::Author), "");
        assert_eq!(fields.value(Field::PublishYear), "");
    }

    #[test]
    fn test_set_touches_only_one_cell() {
        let mut fields = BookFields::new();
        fields.populate(&sample_book());

        fields.set(Field::Author, "F. Herbert".to_string());

        assert_eq!(fields.title, "Dune");
        assert_eq!(fields.author, "F. Herbert");
        assert_eq!(fields.publish_year, PublishYear::Number(1965));

        // Same input twice leaves the same state
        fields.set(Field::Author, "F. Herbert".to_string());
        assert_eq!(fields.author, "F. Herbert");
    }

    #[test]
    fn test_publish_year_edit_is_raw_text() {
        let mut fields = BookFields::new();
        fields.populate(&sample_book());

        fields.set(Field::PublishYear, "19x5".to_string());

        assert_eq!(fields.publish_year, PublishYear::Text("19x5".to_string()));
        assert_eq!(fields.payload().publish_year, PublishYear::Text("19x5".to_string()));
    }

    #[test]
    fn test_populate_discards_edits() {
        let mut fields = BookFields::new();
        fields.set(Field::Title, "draft".to_string());
        fields.set(Field::PublishYear, "2001".to_string());

        fields.populate(&sample_book());

        assert_eq!(fields, BookFields {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publish_year: PublishYear::Number(1965),
        });
    }

    #[test]
    fn test_payload_is_not_validated() {
        let fields = BookFields::new();
        let payload = fields.payload();
        assert_eq!(payload.title, "");
        assert_eq!(payload.author, "");
        assert_eq!(payload.publish_year, PublishYear::Text(String::new()));
    }
}
