//! Semicolon-delimited CSV output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::ExportResult;
use crate::transform::ExportRow;

/// Column order of the output file. `pace` is declared in the header but
/// never populated; the field stays empty in every row.
pub const FIELDNAMES: [&str; 9] = [
    "start_date",
    "distance",
    "moving_time",
    "elapsed_time",
    "pace",
    "elevation",
    "average_heartrate",
    "max_heartrate",
    "name",
];

const DELIMITER: u8 = b';';

/// Write the header plus one record per row, creating or truncating `path`.
pub fn write_rows(path: &Path, rows: &[ExportRow]) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(FIELDNAMES)?;
    for row in rows {
        writer.write_record([
            row.start_date.clone(),
            row.distance_km.to_string(),
            row.moving_time_min.to_string(),
            row.elapsed_time_min.to_string(),
            String::new(),
            opt_field(row.elevation_m),
            opt_field(row.average_heartrate),
            opt_field(row.max_heartrate),
            row.name.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn opt_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
