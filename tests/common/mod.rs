use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a portfolio CSV with the standard header followed by `rows`.
pub fn write_portfolio(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["kind", "address", "area", "sold_price"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
