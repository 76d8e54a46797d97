use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Specialization of a library book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookKind {
    Fiction { genre: String },
    NonFiction { subject: String },
}

/// A catalogued library book, addressed by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub kind: BookKind,
}

impl Book {
    pub fn fiction(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
            kind: BookKind::Fiction {
                genre: genre.into(),
            },
        }
    }

    pub fn non_fiction(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
            kind: BookKind::NonFiction {
                subject: subject.into(),
            },
        }
    }

    fn detail_line(&self) -> String {
        format!(
            "Title: {}, Author: {}, ISBN: {}, Year: {}",
            self.title, self.author, self.isbn, self.year
        )
    }
}

impl Record for Book {
    const COLUMNS: [&'static str; 4] = ["ISBN", "Title", "Author", "Year"];

    fn key(&self) -> &str {
        &self.isbn
    }

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn numeric(&self) -> f64 {
        f64::from(self.year)
    }

    fn column_value(&self, column: usize) -> String {
        match column {
            0 => self.isbn.clone(),
            1 => self.title.clone(),
            2 => self.author.clone(),
            3 => self.year.to_string(),
            _ => String::new(),
        }
    }

    fn display_lines(&self) -> [String; 2] {
        let detail = self.detail_line();
        let full = match &self.kind {
            BookKind::Fiction { genre } => format!("{detail}, Genre: {genre}"),
            BookKind::NonFiction { subject } => format!("{detail}, Subject: {subject}"),
        };
        [detail, full]
    }
}
