use std::path::Path;

use walkdir::WalkDir;

use crate::model::Entry;

/// Suffixes that mark a file as launchable: exactly four characters, dot
/// included, compared case-insensitively.
pub const RECOGNIZED_SUFFIXES: [&str; 3] = [".lnk", ".exe", ".url"];

const SUFFIX_LEN: usize = 4;

/// Walks `root` at most `depth_limit` levels deep and appends an [`Entry`]
/// for every regular file carrying a recognized suffix.
///
/// A missing or unreadable root is a silent no-op, as are unreadable
/// children; the accumulator is never left in a partial state beyond the
/// entries already appended. A depth limit of 0 yields nothing.
pub fn crawl_into(root: &Path, depth_limit: usize, out: &mut Vec<Entry>) {
    if depth_limit == 0 {
        return;
    }

    let walk = WalkDir::new(root)
        .min_depth(1)
        .max_depth(depth_limit)
        .follow_links(false);

    for child in walk.into_iter().filter_map(Result::ok) {
        if !child.file_type().is_file() {
            continue;
        }

        let Some(file_name) = child.file_name().to_str() else {
            continue;
        };

        if let Some(stem) = strip_recognized_suffix(file_name) {
            out.push(Entry::from_owned(
                stem.to_string(),
                child.path().to_string_lossy().into_owned(),
            ));
        }
    }
}

/// Returns the filename minus its 4-character suffix when that suffix is
/// recognized. Names of 4 characters or fewer never match, so a file
/// literally named ".exe" is excluded rather than indexed with an empty
/// display name.
fn strip_recognized_suffix(file_name: &str) -> Option<&str> {
    if file_name.len() <= SUFFIX_LEN {
        return None;
    }

    let split = file_name.len() - SUFFIX_LEN;
    if !file_name.is_char_boundary(split) {
        return None;
    }

    let (stem, suffix) = file_name.split_at(split);
    RECOGNIZED_SUFFIXES
        .iter()
        .any(|recognized| suffix.eq_ignore_ascii_case(recognized))
        .then_some(stem)
}
