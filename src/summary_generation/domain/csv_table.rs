/// A rectangular block of CSV text: one header row plus data rows.
///
/// Rows are kept as strings; typing happens only when cells are written to a
/// spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Value of `column` in the first data row, if both exist
    pub fn first_value(&self, column: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h.trim() == column)?;
        self.rows
            .first()
            .and_then(|row| row.get(index))
            .map(String::as_str)
    }

    /// A1 reference covering the header and every data row,
    /// e.g. `A1:F11` for six columns and ten rows
    pub fn range(&self) -> String {
        let (last_col, last_row) = self.last_cell();
        format!("A1:{}{}", last_col, last_row)
    }

    /// [`CsvTable::range`] with absolute anchors, e.g. `$A$1:$F$11`
    pub fn absolute_range(&self) -> String {
        let (last_col, last_row) = self.last_cell();
        format!("$A$1:${}${}", last_col, last_row)
    }

    fn last_cell(&self) -> (String, usize) {
        (
            column_letter(self.column_count().max(1) - 1),
            self.row_count() + 1,
        )
    }
}

/// Spreadsheet column name for a zero-based index (0 → A, 25 → Z, 26 → AA)
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        CsvTable::new(
            vec!["host".to_string(), "test_type".to_string(), "ber".to_string()],
            vec![
                vec![
                    "bh-glx-b02u02".to_string(),
                    "TestType.SERDES_PRBS".to_string(),
                    "1e-12".to_string(),
                ],
                vec![
                    "bh-glx-b02u02".to_string(),
                    "TestType.SERDES_PRBS".to_string(),
                    "2e-12".to_string(),
                ],
            ],
        )
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_first_value() {
        let table = table();
        assert_eq!(table.first_value("host"), Some("bh-glx-b02u02"));
        assert_eq!(table.first_value("missing"), None);
        assert_eq!(CsvTable::default().first_value("host"), None);
    }

    #[test]
    fn test_absolute_range_includes_header_row() {
        assert_eq!(table().absolute_range(), "$A$1:$C$3");
        assert_eq!(table().range(), "A1:C3");
    }
}
