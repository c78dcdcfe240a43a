//! Optional style guide loading
//!
//! The style guide is an opaque text blob appended to the prompt. It is
//! never parsed or validated, and a missing or unreadable file is simply
//! treated as "no style guide".

use std::fs;
use std::path::Path;

use tracing::debug;

/// Default style guide location, relative to the working directory
pub const STYLE_GUIDE_PATH: &str = "seed/style_guide.md";

/// Load the style guide if one exists. Read failures are silent.
pub fn load_style_guide(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no style guide loaded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_none() {
        assert!(load_style_guide("does/not/exist.md").is_none());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style_guide.md");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Use sentence case for headings.").unwrap();

        let guide = load_style_guide(&path).unwrap();
        assert!(guide.contains("sentence case"));
    }
}
