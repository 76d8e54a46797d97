use std::cmp::Ordering;

use catalog_model::Record;

/// Case-sensitive lexicographic order on the record's primary text
/// (book title, student name).
pub fn by_primary_text<R: Record>(a: &R, b: &R) -> Ordering {
    a.primary_text().cmp(b.primary_text())
}

/// Ascending order on the record's numeric attribute (publication year,
/// GPA). NaN compares as equal; ordering among NaN values is undefined.
pub fn by_numeric<R: Record>(a: &R, b: &R) -> Ordering {
    a.numeric()
        .partial_cmp(&b.numeric())
        .unwrap_or(Ordering::Equal)
}
