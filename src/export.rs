//! CSV export of response data
//!
//! Writes equal-length 1-D columns side by side, one labeled column each,
//! appending a `.csv` extension to the target path when absent.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write labeled columns as CSV to an arbitrary writer
///
/// # Errors
///
/// `io::ErrorKind::InvalidInput` when the label count does not match the
/// column count or the columns differ in length.
pub fn write_columns<W: Write>(
    writer: W,
    labels: &[&str],
    columns: &[&[f64]],
    delimiter: u8,
) -> io::Result<()> {
    if labels.len() != columns.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Number of labels ({}) must match number of columns ({})",
                labels.len(),
                columns.len()
            ),
        ));
    }
    if let Some(first) = columns.first() {
        for (i, col) in columns.iter().enumerate() {
            if col.len() != first.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "Column {} has length {} but column 0 has length {}",
                        i,
                        col.len(),
                        first.len()
                    ),
                ));
            }
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(labels)?;

    let rows = columns.first().map(|c| c.len()).unwrap_or(0);
    for row in 0..rows {
        let record: Vec<String> = columns.iter().map(|col| col[row].to_string()).collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export labeled columns to a CSV file
///
/// A `.csv` extension is appended when the path does not already carry one.
///
/// # Example
///
/// ```no_run
/// use secord::export::export_csv;
///
/// let t = vec![0.0, 0.1, 0.2];
/// let y = vec![0.0, 0.5, 0.8];
/// export_csv("step_response", &["time [s]", "output"], &[&t, &y], b',').unwrap();
/// ```
pub fn export_csv<P: AsRef<Path>>(
    path: P,
    labels: &[&str],
    columns: &[&[f64]],
    delimiter: u8,
) -> io::Result<()> {
    let path = ensure_csv_extension(path.as_ref());
    let file = std::fs::File::create(path)?;
    write_columns(file, labels, columns, delimiter)
}

fn ensure_csv_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".csv");
            PathBuf::from(name)
        }
    }
}
