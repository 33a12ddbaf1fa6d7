use crate::core::InputSource;
use crate::utils::error::{ReachError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileInput;

impl LocalFileInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for LocalFileInput {
    fn read_input(&self, path: &Path) -> Result<String> {
        // 一次讀完，檔案在返回前即關閉
        fs::read_to_string(path).map_err(|source| ReachError::FileNotFoundError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"* 0 0\nA 1 0\n").unwrap();

        let content = LocalFileInput::new().read_input(file.path()).unwrap();
        assert_eq!(content, "* 0 0\nA 1 0\n");
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let err = LocalFileInput::new()
            .read_input(Path::new("/no/such/grid.txt"))
            .unwrap_err();
        match err {
            ReachError::FileNotFoundError { path, .. } => {
                assert_eq!(path, Path::new("/no/such/grid.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
