//! Navigation paths and the typed routes they resolve to
//!
//! The editor page receives its id from the route and asks for
//! navigation by returning a [`Route`], so neither capability is global.

use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::state::data::BookId;

/// A page of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, the landing view
    Home,
    /// `/books/edit/{id}`
    EditBook(BookId),
}

impl Route {
    /// Path form of the route, the inverse of [`Route::from_str`]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::EditBook(id) => format!("/books/edit/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["books", "edit"] => Err(RouteError::MissingId(path.to_string())),
            ["books", "edit", id] => BookId::new(*id)
                .map(Route::EditBook)
                .ok_or_else(|| RouteError::MissingId(path.to_string())),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("".parse::<Route>(), Ok(Route::Home));
    }

    #[test]
    fn test_parse_edit() {
        let route: Route = "/books/edit/7".parse().unwrap();
        assert_eq!(route, Route::EditBook(BookId::new("7").unwrap()));
        assert_eq!(route.path(), "/books/edit/7");

        // Trailing slash is tolerated
        assert_eq!("/books/edit/7/".parse::<Route>(), Ok(route));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "/books/edit".parse::<Route>(),
            Err(RouteError::MissingId(_))
        ));
        assert!(matches!(
            "/books/delete/7".parse::<Route>(),
            Err(RouteError::UnknownPath(_))
        ));
        assert!(matches!(
            "/books/edit/7/extra".parse::<Route>(),
            Err(RouteError::UnknownPath(_))
        ));
    }
}
