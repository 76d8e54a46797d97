use catalog_model::{Book, Record, Student};
use catalog_store::{by_primary_text, KeyedCollection};
use catalog_table::TableModel;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod table_view;

#[derive(Debug, Parser)]
#[command(author, version, about = "Catalog Studio record browser")]
struct Cli {
    /// Record family to load into the catalog
    #[arg(long, value_enum, default_value_t = Domain::Library)]
    domain: Domain,

    /// Run the console demonstration without opening the table window
    #[arg(long)]
    headless: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Domain {
    Library,
    Students,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let args = Cli::parse();
    match args.domain {
        Domain::Library => run(
            library_samples(),
            "Books sorted by title:",
            "Library Management",
            args.headless,
        ),
        Domain::Students => run(
            student_samples(),
            "Students sorted by name:",
            "Student Management",
            args.headless,
        ),
    }
}

/// Populate, display, sort, display again, then hand a snapshot to the
/// table window. The collection never changes after the snapshot is taken.
fn run<R: Record>(
    records: Vec<R>,
    sorted_header: &str,
    window_title: &str,
    headless: bool,
) -> anyhow::Result<()> {
    let mut catalog = KeyedCollection::new();
    for record in records {
        catalog.add(record);
    }

    display_all(&catalog);

    catalog.sort(by_primary_text);
    println!("{sorted_header}");
    display_all(&catalog);

    let model = TableModel::from_records(&catalog.snapshot());
    if headless {
        info!(rows = model.row_count(), "headless run, skipping window");
        return Ok(());
    }
    table_view::show(window_title, model)
}

fn display_all<R: Record>(catalog: &KeyedCollection<R>) {
    for record in catalog.iter() {
        for line in record.display_lines() {
            println!("{line}");
        }
    }
}

fn library_samples() -> Vec<Book> {
    vec![
        Book::fiction(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "9780743273565",
            1925,
            "Novel",
        ),
        Book::non_fiction(
            "A Brief History of Time",
            "Stephen Hawking",
            "9780553380163",
            1988,
            "Science",
        ),
    ]
}

fn student_samples() -> Vec<Student> {
    vec![
        Student::undergraduate("Alice", 20, "UG2021001", 3.5, "Computer Science"),
        Student::graduate("Bob", 25, "GR2021001", 3.8, "Artificial Intelligence"),
    ]
}
