//! Word list loading.
//!
//! Reads line-oriented text into a [`PrefixTree`], one word per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::DictionaryConfig;
use crate::data_structures::PrefixTree;
use crate::error::PrefixTreeResult;

/// Builds a tree from every word in `reader`.
///
/// Blank lines and comment lines are skipped. Read failures propagate.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    config: &DictionaryConfig,
) -> PrefixTreeResult<PrefixTree> {
    let mut tree = PrefixTree::new();
    let mut lines_read = 0usize;

    for line in reader.lines() {
        let line = line?;
        lines_read += 1;

        let word = if config.trim_whitespace {
            line.trim()
        } else {
            line.as_str()
        };
        if word.is_empty() || config.is_comment(word) {
            continue;
        }
        tree.insert(word);
    }

    debug!(lines_read, words = tree.len(), "Dictionary loaded");
    Ok(tree)
}

/// Builds a tree from the word list at `path`.
pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    config: &DictionaryConfig,
) -> PrefixTreeResult<PrefixTree> {
    let path = path.as_ref();
    debug!(?path, "Opening dictionary");
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), config)
}
