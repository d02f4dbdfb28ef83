use std::path::{Path, PathBuf};

/// One entry of a relocation: `source_dir/name` to `destination_dir/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMove {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// The destination directory and the ordered moves into it.
///
/// Building a plan only joins paths; nothing on disk is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationPlan {
    pub destination_dir: PathBuf,
    pub moves: Vec<FileMove>,
}

impl RelocationPlan {
    pub fn new<S: AsRef<str>>(file_names: &[S], source_dir: &Path, destination_dir: &Path) -> Self {
        let moves = file_names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                FileMove {
                    name: name.to_string(),
                    source: source_dir.join(name),
                    destination: destination_dir.join(name),
                }
            })
            .collect();

        Self {
            destination_dir: destination_dir.to_path_buf(),
            moves,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
