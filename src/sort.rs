//! Optional ordering of validated candidates.
//!
//! Reorders the candidate sequence in place by name, modification time, or
//! byte size, ascending or descending. The sort is stable in both
//! directions: equal keys keep their discovery order.

use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{SortField, SortKey, SortOrder};

/// Sort candidates in place according to the given key.
///
/// `name` compares the full path string lowercased; `date` compares the
/// filesystem modification time; `size` compares byte size. Paths whose
/// metadata cannot be read sort as epoch mtime / zero bytes rather than
/// failing, so per-file errors only surface in the merge fold.
pub fn sort_pdfs(paths: &mut [PathBuf], key: &SortKey) {
    match key.field {
        SortField::Name => sort_with(paths, key.order, name_key),
        SortField::Date => sort_with(paths, key.order, date_key),
        SortField::Size => sort_with(paths, key.order, size_key),
    }
}

fn sort_with<K, F>(paths: &mut [PathBuf], order: SortOrder, key_fn: F)
where
    K: Ord,
    F: Fn(&Path) -> K,
{
    match order {
        // sort_by_cached_key is stable; Reverse keeps it stable while
        // flipping the comparison for descending order.
        SortOrder::Ascending => paths.sort_by_cached_key(|path| key_fn(path)),
        SortOrder::Descending => paths.sort_by_cached_key(|path| Reverse(key_fn(path))),
    }
}

fn name_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

fn date_key(path: &Path) -> SystemTime {
    path.metadata()
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn size_key(path: &Path) -> u64 {
    path.metadata().map(|meta| meta.len()).unwrap_or(0)
}
