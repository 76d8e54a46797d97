//! Record families shown in the Catalog Studio table views.

mod book;
mod record;
mod student;

pub use book::*;
pub use record::*;
pub use student::*;
