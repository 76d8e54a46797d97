/// Common surface shared by every record family the catalog can hold.
///
/// The store sorts through `primary_text`/`numeric`, the table view-model
/// reads cells through `COLUMNS`/`column_value`, and the console
/// demonstration prints `display_lines` in order.
pub trait Record: Clone {
    /// Column names for the tabular view, in fixed order.
    const COLUMNS: [&'static str; 4];

    /// Unique addressing key within a collection. Non-empty, immutable.
    fn key(&self) -> &str;

    /// Text field used by the lexicographic ordering rule.
    fn primary_text(&self) -> &str;

    /// Attribute used by the numeric ordering rule.
    fn numeric(&self) -> f64;

    /// Cell text for the given column of the fixed schema.
    fn column_value(&self, column: usize) -> String;

    /// Console output for this record: the inherited detail line first,
    /// then the full line including the specialization field.
    fn display_lines(&self) -> [String; 2];
}
