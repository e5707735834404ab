use std::path::PathBuf;

/// An absolute path below the crate root, for locating checked-in files.
pub fn manifest_path<const N: usize>(segments: [&str; N]) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.extend(segments);

    path
}
