use std::fs;
use std::path::{Path, PathBuf};

/// The HTML page being updated, read fully into memory and written back in
/// place. Content is kept as one buffer so everything outside the replaced
/// span survives byte for byte.
pub struct Document {
    pub content: String,
    pub filename: PathBuf,
}

impl Document {
    pub fn from_file(filename: PathBuf) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(&filename)?;
        Ok(Self { content, filename })
    }

    pub fn save(&self) -> Result<usize, std::io::Error> {
        let byte_count = self.content.len();
        fs::write(&self.filename, &self.content)?;
        Ok(byte_count)
    }
}

/// Replacement markup read once from its own file.
pub struct Fragment {
    pub text: String,
}

impl Fragment {
    pub fn from_file(filename: &Path) -> Result<Self, std::io::Error> {
        let text = fs::read_to_string(filename)?;
        Ok(Self { text })
    }
}
