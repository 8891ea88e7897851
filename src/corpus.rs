use std::path::Path;

use anyhow::Result;

use crate::errors::HarnessError;

/// The text resource fed into timed invocations: an immutable ordered
/// sequence of lines, loaded once at startup and owned by the harness for
/// its lifetime.
#[derive(Debug)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Read a UTF-8 text file into a corpus, one record per newline.
    pub fn load(path: &Path) -> Result<Corpus> {
        let content =
            std::fs::read_to_string(path).map_err(|source| HarnessError::CorpusReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Corpus {
            lines: content.lines().map(String::from).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the first `min(n, len)` lines with `\n` into one text block.
    ///
    /// Always the prefix, never a random offset, so larger samples are
    /// strict supersets of smaller ones.
    pub fn prefix_block(&self, n: usize) -> String {
        let take = n.min(self.lines.len());
        self.lines[..take].join("\n")
    }
}
