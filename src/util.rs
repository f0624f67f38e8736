use std::path::PathBuf;

/// Directory holding the sample data files shipped with the crate.
pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Full path of the data file called `file_name`.
pub fn data_file_path(file_name: &str) -> PathBuf {
    data_dir().join(file_name)
}
