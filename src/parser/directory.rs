use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::parser::filter::matches_extension;

/// Find searchable files under a directory. Recursive scans use walkdir;
/// otherwise only the top level is listed. Results are sorted for a
/// deterministic report order.
pub fn find_search_files(
    dir: &Path,
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if matches_extension(path, extensions) {
                files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if matches_extension(&path, extensions) {
                files.push(path);
            }
        }
        files.sort();
    }

    Ok(files)
}
