use cosiest_lattice::delimited::{column_f64, read_rows, split_rows, DelimitedError};
use log::info;
use std::fs::File;

const SAMPLE: &str = "Year,Anomaly\n1880,-0.16\n1881,-0.08\n1882,-0.11\n1883,-0.17\n1884,-0.28\n";

#[doc(hidden)]
fn main() -> Result<(), DelimitedError> {
    env_logger::init();
    let rows = match std::env::args().nth(1) {
        Some(path) => {
            info!("reading {path}");
            read_rows(File::open(path)?)?
        }
        None => split_rows(SAMPLE),
    };

    // First row is the header.
    let body = rows.get(1..).unwrap_or_default();
    let years = column_f64(body, 0)?;
    let anomalies = column_f64(body, 1)?;
    println!("year,series_a,series_b");
    for (year, anomaly) in years.iter().zip(&anomalies) {
        println!("{year},{},{}", 14. + anomaly, 15. + anomaly);
    }
    Ok(())
}
