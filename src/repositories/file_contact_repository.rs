use crate::config::Config;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::ContactRecord;
use crate::repositories::line_format::{encode_line, parse_line};
use crate::repositories::traits::{ContactRepository, StorageState};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Contact repository backed by a single text file.
///
/// The file is opened only for the duration of a load or save and closed
/// straight after.
pub struct FileContactRepository {
    data_dir: PathBuf,
    data_file: PathBuf,
}

impl FileContactRepository {
    /// Create a repository for the directory and file named in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            data_file: config.data_file_path(),
        }
    }

    /// Path of the contact file.
    pub fn path(&self) -> &Path {
        &self.data_file
    }
}

impl ContactRepository for FileContactRepository {
    fn storage_state(&self) -> StorageState {
        if !self.data_dir.is_dir() {
            StorageState::MissingDirectory
        } else if !self.data_file.exists() {
            StorageState::MissingFile
        } else {
            StorageState::Ready
        }
    }

    fn create_directory(&self) -> PersistenceResult<()> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| PersistenceError::io(&self.data_dir, e))?;
        info!(path = %self.data_dir.display(), "Created data directory");
        Ok(())
    }

    fn create_file(&self) -> PersistenceResult<()> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.data_file)
            .map_err(|e| PersistenceError::io(&self.data_file, e))?;
        info!(path = %self.data_file.display(), "Created empty contact file");
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Vec<ContactRecord>> {
        let file =
            File::open(&self.data_file).map_err(|e| PersistenceError::io(&self.data_file, e))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| PersistenceError::io(&self.data_file, e))?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_line(index + 1, &line)?);
        }

        debug!(
            path = %self.data_file.display(),
            count = records.len(),
            "Loaded contacts"
        );
        Ok(records)
    }

    fn save(&self, records: &[ContactRecord]) -> PersistenceResult<()> {
        let file =
            File::create(&self.data_file).map_err(|e| PersistenceError::io(&self.data_file, e))?;
        let mut writer = BufWriter::new(file);

        for record in records {
            writeln!(writer, "{}", encode_line(record))
                .map_err(|e| PersistenceError::io(&self.data_file, e))?;
        }
        writer
            .flush()
            .map_err(|e| PersistenceError::io(&self.data_file, e))?;

        debug!(
            path = %self.data_file.display(),
            count = records.len(),
            "Saved contacts"
        );
        Ok(())
    }

    fn directory_location(&self) -> String {
        absolute(&self.data_dir).display().to_string()
    }

    fn file_location(&self) -> String {
        absolute(&self.data_file).display().to_string()
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> FileContactRepository {
        FileContactRepository::new(&Config::new(dir.path().join("data"), "contacts.txt"))
    }

    #[test]
    fn test_storage_state_progression() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);

        assert_eq!(repo.storage_state(), StorageState::MissingDirectory);
        repo.create_directory().unwrap();
        assert_eq!(repo.storage_state(), StorageState::MissingFile);
        repo.create_file().unwrap();
        assert_eq!(repo.storage_state(), StorageState::Ready);
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_file_refuses_to_clobber() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        repo.create_directory().unwrap();
        fs::write(repo.path(), "Ann 555-1234\n").unwrap();

        assert!(matches!(
            repo.create_file(),
            Err(PersistenceError::Io { .. })
        ));
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_save_writes_one_line_per_record() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        repo.create_directory().unwrap();

        let records = vec![
            ContactRecord::from_raw("Ann", "5551234").unwrap(),
            ContactRecord::from_raw("Ben Ode", "5559876543").unwrap(),
        ];
        repo.save(&records).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(text, "Ann 555-1234\nBen Ode (555)-987-6543\n");
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        repo.create_directory().unwrap();
        fs::write(repo.path(), "Old Entry 555-0000\nOther 555-1111\n").unwrap();

        repo.save(&[ContactRecord::from_raw("New", "5552222").unwrap()])
            .unwrap();

        assert_eq!(fs::read_to_string(repo.path()).unwrap(), "New 555-2222\n");
    }

    #[test]
    fn test_load_skips_blank_lines_and_reads_legacy() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        repo.create_directory().unwrap();
        fs::write(
            repo.path(),
            "John 5551234567\n\n   \r\nJane Doe 555 123 4567\r\nAnn 555-1234\n",
        )
        .unwrap();

        let records = repo.load().unwrap();
        let lines: Vec<String> = records.iter().map(encode_line).collect();
        assert_eq!(
            lines,
            vec![
                "John (555)-123-4567",
                "Jane Doe (555)-123-4567",
                "Ann 555-1234"
            ]
        );
    }

    #[test]
    fn test_load_reports_malformed_line_number() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        repo.create_directory().unwrap();
        fs::write(repo.path(), "Ann 555-1234\nnonsense\n").unwrap();

        match repo.load() {
            Err(PersistenceError::MalformedLine {
                line_number, line, ..
            }) => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "nonsense");
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        assert!(matches!(repo.load(), Err(PersistenceError::Io { .. })));
    }

    #[test]
    fn test_save_without_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let repo = repo_in(&tmp);
        let result = repo.save(&[ContactRecord::from_raw("Ann", "5551234").unwrap()]);
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }

    #[test]
    fn test_locations_are_absolute() {
        let repo = FileContactRepository::new(&Config::default());
        assert!(Path::new(&repo.directory_location()).is_absolute());
        assert!(repo.file_location().ends_with("contacts.txt"));
    }
}
