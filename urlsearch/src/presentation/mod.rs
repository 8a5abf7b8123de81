//! Column definitions for the result table.
//!
//! Rendering belongs to the host; this module only says which columns exist
//! and how a cell is read from a [`SearchResult`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::search::SearchResult;

/// Minimum column width in pixels.
pub const MIN_COLUMN_WIDTH: u32 = 100;
/// Maximum column width in pixels.
pub const MAX_COLUMN_WIDTH: u32 = 200;

/// The result field a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultColumnField {
    /// Containing site.
    Site,
    /// Resource title.
    Title,
    /// Resource URL.
    Path,
    /// Hit summary.
    Summary,
}

impl ResultColumnField {
    /// Reads this field from `result`.
    #[must_use]
    pub fn value<'a>(&self, result: &'a SearchResult) -> Option<&'a str> {
        match self {
            Self::Site => result.site.as_deref(),
            Self::Title => result.title.as_deref(),
            Self::Path => result.path.as_deref(),
            Self::Summary => result.summary.as_deref(),
        }
    }

    /// Column header text.
    #[must_use]
    pub fn header(&self) -> &'static str {
        match self {
            Self::Site => "Site",
            Self::Title => "Title",
            Self::Path => "Path",
            Self::Summary => "Summary",
        }
    }
}

impl fmt::Display for ResultColumnField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Site => write!(f, "site"),
            Self::Title => write!(f, "title"),
            Self::Path => write!(f, "path"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// A column of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultColumn {
    /// Stable column key.
    pub key: String,
    /// Header text.
    pub name: String,
    /// Field shown in the column.
    pub field: ResultColumnField,
    /// Minimum width in pixels.
    pub min_width: u32,
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Whether the user may resize the column.
    pub resizable: bool,
}

impl ResultColumn {
    /// Creates a resizable column with default widths.
    #[must_use]
    pub fn new(key: impl Into<String>, field: ResultColumnField) -> Self {
        Self {
            key: key.into(),
            name: field.header().to_string(),
            field,
            min_width: MIN_COLUMN_WIDTH,
            max_width: MAX_COLUMN_WIDTH,
            resizable: true,
        }
    }

    /// Reads this column's cell from `result`.
    #[must_use]
    pub fn cell<'a>(&self, result: &'a SearchResult) -> Option<&'a str> {
        self.field.value(result)
    }
}

/// Columns of the result table: Title, Path and Summary, with Site first
/// when `show_site` is set.
#[must_use]
pub fn result_columns(show_site: bool) -> Vec<ResultColumn> {
    let mut columns = Vec::with_capacity(4);
    if show_site {
        columns.push(ResultColumn::new("column1", ResultColumnField::Site));
    }
    columns.push(ResultColumn::new("column2", ResultColumnField::Title));
    columns.push(ResultColumn::new("column3", ResultColumnField::Path));
    columns.push(ResultColumn::new("column4", ResultColumnField::Summary));
    columns
}

/// Cells of every result for `columns`, row by row.
#[must_use]
pub fn table_rows<'a>(
    results: &'a [SearchResult],
    columns: &[ResultColumn],
) -> Vec<Vec<Option<&'a str>>> {
    results
        .iter()
        .map(|result| columns.iter().map(|c| c.cell(result)).collect())
        .collect()
}
