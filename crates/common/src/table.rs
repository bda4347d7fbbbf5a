use serde::Serialize;

/// A table pulled out of one PDF page: a rectangular grid of cell strings.
///
/// `page` and `index` are both 1-based; `index` counts tables within the
/// page in top-to-bottom order. Rows are padded by the extractor so every
/// row has the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub page: usize,
    pub index: usize,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(page: usize, index: usize, rows: Vec<Vec<String>>) -> Self {
        Self { page, index, rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
