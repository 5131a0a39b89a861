//! Manager result types

/// Classification of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Direct children of the cursor, split by kind.
///
/// Both lists are independently sorted ascending by name (byte order).
/// Directories are presented before files but stored separately.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl DirectoryListing {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}
