use crate::summary_generation::domain::CsvTable;
use std::collections::HashMap;

/// Name of the column appended to every merged row
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// TableMerger - concatenates the CSV tables of one group and test type
///
/// Columns are the union of all source headers in first-seen order, followed
/// by [`SOURCE_FILE_COLUMN`]. A header repeated within one file maps to the
/// same repeat in the merged header, so the second `lane` of every file lands
/// in one column. Rows keep file order, then row order. Identical rows coming
/// from different files are all kept.
pub struct TableMerger {
    headers: Vec<String>,
    rows: Vec<(Vec<(usize, String)>, String)>,
}

impl TableMerger {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Appends one source table; `source` tags each of its rows
    pub fn push(&mut self, source: &str, table: CsvTable) {
        let mut repeats: HashMap<&str, usize> = HashMap::new();
        let column_map: Vec<usize> = table
            .headers
            .iter()
            .map(|header| {
                let nth = repeats.entry(header.as_str()).or_insert(0);
                let index = self.column_index(header, *nth);
                *nth += 1;
                index
            })
            .collect();

        for row in table.rows {
            let cells = row
                .into_iter()
                .enumerate()
                .filter_map(|(i, value)| column_map.get(i).map(|&col| (col, value)))
                .collect();
            self.rows.push((cells, source.to_string()));
        }
    }

    /// Index of the `nth` column called `header`, added if not present yet
    fn column_index(&mut self, header: &str, nth: usize) -> usize {
        let existing = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == header)
            .map(|(index, _)| index)
            .nth(nth);
        match existing {
            Some(index) => index,
            None => {
                self.headers.push(header.to_string());
                self.headers.len() - 1
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// [`SOURCE_FILE_COLUMN`], suffixed when a source file already has such a column
    fn tag_column(&self) -> String {
        let mut name = SOURCE_FILE_COLUMN.to_string();
        let mut suffix = 2;
        while self.headers.contains(&name) {
            name = format!("{}_{}", SOURCE_FILE_COLUMN, suffix);
            suffix += 1;
        }
        name
    }

    pub fn finish(self) -> CsvTable {
        let width = self.headers.len();
        let tag_column = self.tag_column();
        let mut headers = self.headers;
        headers.push(tag_column);

        let rows = self
            .rows
            .into_iter()
            .map(|(cells, source)| {
                let mut row = vec![String::new(); width];
                for (col, value) in cells {
                    row[col] = value;
                }
                row.push(source);
                row
            })
            .collect();

        CsvTable::new(headers, rows)
    }
}

impl Default for TableMerger {
    fn default() -> Self {
        Self::new()
    }
}
