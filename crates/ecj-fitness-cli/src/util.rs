use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Path argument that selects stdout instead of a file
pub const STDOUT_PATH: &str = "-";

/// Initialise `env_logger`, defaulting to `warn` unless `RUST_LOG` is set.
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: &Path) -> anyhow::Result<Self> {
        if output_path.as_os_str() == STDOUT_PATH {
            Ok(Output::stdout())
        } else {
            Output::create(output_path.to_owned())
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    /// Create or truncate the file at `path`.
    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write as _};

    use super::*;

    #[test]
    fn test_file_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitnesses.csv");
        fs::write(&path, "stale contents that are longer\n").unwrap();

        let mut output = Output::from_output_path(&path).unwrap();
        output.write_all(b"Generation\n").unwrap();
        output.flush().unwrap();
        drop(output);

        assert_eq!(fs::read_to_string(&path).unwrap(), "Generation\n");
    }

    #[test]
    fn test_dash_selects_stdout() {
        let output = Output::from_output_path(Path::new("-")).unwrap();
        assert_eq!(output.display_path(), "stdout");
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Output::create(dir.path().join("absent/fitnesses.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
