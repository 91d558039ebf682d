//! CSV text rendering.

/// One exported column: header label plus value accessor.
///
/// `value` returns `None` for an absent value, which renders as an empty
/// unquoted field.
pub struct CsvColumn<T> {
    pub label: &'static str,
    pub value: fn(&T) -> Option<String>,
}

impl<T> CsvColumn<T> {
    pub const fn new(label: &'static str, value: fn(&T) -> Option<String>) -> Self {
        Self { label, value }
    }
}

impl<T> Clone for CsvColumn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CsvColumn<T> {}

/// Wraps `value` in double quotes, doubling any inner quote.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders a header row plus one row per item, joined by `\n`.
///
/// No trailing newline is written.
pub fn render_csv<T>(rows: &[T], columns: &[CsvColumn<T>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|column| quote_field(column.label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        let fields = columns
            .iter()
            .map(|column| match (column.value)(row) {
                Some(value) => quote_field(&value),
                None => String::new(),
            })
            .collect::<Vec<_>>();
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{quote_field, render_csv, CsvColumn};

    struct Row {
        name: &'static str,
        extra: Option<&'static str>,
    }

    fn name(row: &Row) -> Option<String> {
        Some(row.name.to_string())
    }

    fn extra(row: &Row) -> Option<String> {
        row.extra.map(str::to_string)
    }

    const COLUMNS: [CsvColumn<Row>; 2] = [CsvColumn::new("Name", name), CsvColumn::new("Extra", extra)];

    #[test]
    fn quote_field_doubles_inner_quotes() {
        assert_eq!(quote_field(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(quote_field(""), r#""""#);
    }

    #[test]
    fn render_csv_writes_header_only_for_no_rows() {
        assert_eq!(render_csv::<Row>(&[], &COLUMNS), r#""Name","Extra""#);
    }

    #[test]
    fn render_csv_leaves_absent_values_unquoted() {
        let rows = [
            Row {
                name: "a,b",
                extra: None,
            },
            Row {
                name: "c",
                extra: Some("line\nbreak"),
            },
        ];
        assert_eq!(
            render_csv(&rows, &COLUMNS),
            "\"Name\",\"Extra\"\n\"a,b\",\n\"c\",\"line\nbreak\""
        );
    }
}
