use std::path::PathBuf;
use library_fees::util::data_file_path;

const DEFAULT_INFILE: &str = "book_returns_short.csv";
const DEFAULT_OUTFILE: &str = "book_fees.csv";

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> library_fees::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let infile = args.next().map(PathBuf::from).unwrap_or_else(|| data_file_path(DEFAULT_INFILE));
    let outfile = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE));

    library_fees::fees_report(&infile, &outfile)?;
    print!("{}", std::fs::read_to_string(&outfile)?);
    Ok(())
}
