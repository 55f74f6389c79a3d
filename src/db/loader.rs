use crate::config::Delimiter;
use crate::db::rows::Record;
use crate::db::table::Table;
use crate::error::PlotError;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Loads the benchmark log at `path` as a table with schema `R`.
///
/// The first line must be a header naming at least the columns of `R`.
pub fn load_table<R: Record>(
    path: &Path,
    delimiter: Delimiter,
) -> Result<Table<R>, PlotError> {
    if !path.is_file() {
        return Err(PlotError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| PlotError::malformed(path, e))?;

    // check the header before parsing rows, so that a missing column is
    // reported by name
    let headers = reader
        .headers()
        .map_err(|e| PlotError::malformed(path, e))?
        .clone();
    for column in R::COLUMNS {
        if !headers.iter().any(|header| header == *column) {
            return Err(PlotError::malformed(
                path,
                format!("missing column `{}`", column),
            ));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<R>() {
        let row = record.map_err(|e| {
            let line = e.position().map(|position| position.line());
            match line {
                Some(line) => PlotError::malformed(path, format!("line {}: {}", line, e)),
                None => PlotError::malformed(path, e),
            }
        })?;
        rows.push(row);
    }

    let table = Table::new(rows);
    if let Some(index) = table.first_unordered() {
        return Err(PlotError::malformed(
            path,
            format!(
                "row {} does not increase the {} column",
                index + 1,
                R::COLUMNS[0]
            ),
        ));
    }
    tracing::debug!("loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}
