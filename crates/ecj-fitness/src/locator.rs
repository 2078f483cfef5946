//! Seed directory discovery
//!
//! Each candidate directory is named after its seed and is expected to hold a
//! log named `<prefix><seed><suffix>` (`ecj<seed>.log` by default). Candidates
//! that are not directories, or that lack the log, are skipped without error
//! so unrelated arguments do no harm.

use std::{
    collections::BTreeMap,
    ffi::OsStr,
    io,
    path::{Path, PathBuf},
};

use crate::{
    parser::{GenerationFitness, ParseLogError},
    seed::{InvalidSeedName, SeedName},
    workdir,
};

/// Log file naming convention inside a seed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogNaming {
    pub prefix: String,
    pub suffix: String,
}

impl Default for LogNaming {
    fn default() -> Self {
        Self {
            prefix: "ecj".to_owned(),
            suffix: ".log".to_owned(),
        }
    }
}

impl LogNaming {
    #[must_use]
    pub fn file_name(&self, seed: &str) -> String {
        format!("{}{seed}{}", self.prefix, self.suffix)
    }
}

/// Fitness series of one seed's run
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRun {
    pub seed: SeedName,
    pub fitness: GenerationFitness,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LocateError {
    #[display("failed to enter seed directory {}", path.display())]
    EnterDir { path: PathBuf, source: io::Error },
    #[display("failed to parse log file {}", path.display())]
    Parse {
        path: PathBuf,
        source: ParseLogError,
    },
    #[display("invalid seed directory {}", path.display())]
    Seed {
        path: PathBuf,
        source: InvalidSeedName,
    },
}

/// Collect the runs of every candidate directory that holds a log.
///
/// The result is sorted by numeric seed value. A seed named twice (for
/// example `1` and `./1/`) yields one run holding the later parse.
///
/// # Errors
///
/// Fails on the first log that cannot be read or parsed, and on any included
/// directory whose name is not an integer.
pub fn locate_seed_runs<I, P>(dirs: I, naming: &LogNaming) -> Result<Vec<SeedRun>, LocateError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut runs = BTreeMap::new();

    for dir in dirs {
        let dir = dir.as_ref();
        let Some((name, fitness)) = locate_one(dir, naming)? else {
            continue;
        };
        let seed = name.parse::<SeedName>().map_err(|source| LocateError::Seed {
            path: dir.to_owned(),
            source,
        })?;
        log::info!("seed {seed}: {} generations", fitness.len());
        runs.insert(seed, fitness);
    }

    Ok(runs
        .into_iter()
        .map(|(seed, fitness)| SeedRun { seed, fitness })
        .collect())
}

fn locate_one(
    dir: &Path,
    naming: &LogNaming,
) -> Result<Option<(String, GenerationFitness)>, LocateError> {
    if !dir.is_dir() {
        log::debug!("skipping {}: not a directory", dir.display());
        return Ok(None);
    }
    let Some(name) = dir.file_name().and_then(OsStr::to_str) else {
        log::debug!("skipping {}: no usable seed name", dir.display());
        return Ok(None);
    };

    let log_name = naming.file_name(name);
    let fitness = workdir::with_current_dir(dir, || {
        let log_path = Path::new(&log_name);
        if !log_path.is_file() {
            return Ok(None);
        }
        GenerationFitness::from_file(log_path).map(Some)
    })
    .map_err(|source| LocateError::EnterDir {
        path: dir.to_owned(),
        source,
    })?
    .map_err(|source| LocateError::Parse {
        path: dir.join(&log_name),
        source,
    })?;

    let Some(fitness) = fitness else {
        log::debug!("skipping {}: no {log_name}", dir.display());
        return Ok(None);
    };
    Ok(Some((name.to_owned(), fitness)))
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    fn write_seed(root: &Path, seed: &str, log: &str) {
        let dir = root.join(seed);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("ecj{seed}.log")), log).unwrap();
    }

    fn seed_names(runs: &[SeedRun]) -> Vec<&str> {
        runs.iter().map(|run| run.seed.as_str()).collect()
    }

    /// Change into a fresh temp dir for the duration of a test
    struct Sandbox {
        _guard: workdir::CurrentDirGuard,
        root: TempDir,
    }

    impl Sandbox {
        fn new() -> Self {
            let root = tempfile::tempdir().unwrap();
            let guard = workdir::CurrentDirGuard::enter(root.path()).unwrap();
            Self {
                _guard: guard,
                root,
            }
        }

        fn path(&self) -> &Path {
            self.root.path()
        }
    }

    #[test]
    #[serial]
    fn test_sorts_numerically() {
        let sandbox = Sandbox::new();
        for seed in ["10", "2", "1"] {
            write_seed(sandbox.path(), seed, "Fitness: 1.0\n");
        }

        let runs = locate_seed_runs(["10", "2", "1"], &LogNaming::default()).unwrap();

        assert_eq!(seed_names(&runs), ["1", "2", "10"]);
    }

    #[test]
    #[serial]
    fn test_skips_dirs_without_log() {
        let sandbox = Sandbox::new();
        write_seed(sandbox.path(), "1", "Fitness: 1.0\n");
        write_seed(sandbox.path(), "3", "Fitness: 3.0\n");
        fs::create_dir(sandbox.path().join("2")).unwrap();
        // Log named after a different seed does not count.
        fs::create_dir(sandbox.path().join("4")).unwrap();
        fs::write(sandbox.path().join("4/ecj5.log"), "Fitness: 4.0\n").unwrap();

        let runs = locate_seed_runs(["1", "2", "3", "4"], &LogNaming::default()).unwrap();

        assert_eq!(seed_names(&runs), ["1", "3"]);
        assert_eq!(runs[1].fitness.get(0), Some(3.0));
    }

    #[test]
    #[serial]
    fn test_skips_non_directories() {
        let sandbox = Sandbox::new();
        write_seed(sandbox.path(), "7", "Fitness: 0.7\n");
        fs::write(sandbox.path().join("8"), "Fitness: 0.8\n").unwrap();

        let runs =
            locate_seed_runs(["7", "8", "missing", "notes.txt"], &LogNaming::default()).unwrap();

        assert_eq!(seed_names(&runs), ["7"]);
    }

    #[test]
    #[serial]
    fn test_trailing_separator_and_duplicates() {
        let sandbox = Sandbox::new();
        write_seed(sandbox.path(), "5", "Fitness: 0.5\nFitness: 0.6\n");

        let runs = locate_seed_runs(["5/", "./5"], &LogNaming::default()).unwrap();

        assert_eq!(seed_names(&runs), ["5"]);
        assert_eq!(runs[0].fitness.len(), 2);
    }

    #[test]
    #[serial]
    fn test_nested_path_uses_last_segment() {
        let sandbox = Sandbox::new();
        write_seed(&sandbox.path().join("runs"), "12", "Fitness: 1.2\n");

        let runs = locate_seed_runs(["runs/12"], &LogNaming::default()).unwrap();

        assert_eq!(seed_names(&runs), ["12"]);
    }

    #[test]
    #[serial]
    fn test_custom_naming() {
        let sandbox = Sandbox::new();
        let dir = sandbox.path().join("3");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("out3.stat"), "Fitness: 0.3\n").unwrap();
        let naming = LogNaming {
            prefix: "out".to_owned(),
            suffix: ".stat".to_owned(),
        };

        let runs = locate_seed_runs(["3"], &naming).unwrap();

        assert_eq!(seed_names(&runs), ["3"]);
        assert_eq!(naming.file_name("3"), "out3.stat");
    }

    #[test]
    #[serial]
    fn test_non_integer_seed_is_fatal() {
        let sandbox = Sandbox::new();
        write_seed(sandbox.path(), "alpha", "Fitness: 1.0\n");

        let err = locate_seed_runs(["alpha"], &LogNaming::default()).unwrap_err();

        assert!(matches!(err, LocateError::Seed { .. }));
    }

    #[test]
    #[serial]
    fn test_non_integer_dir_without_log_is_ignored() {
        let sandbox = Sandbox::new();
        fs::create_dir(sandbox.path().join("alpha")).unwrap();

        let runs = locate_seed_runs(["alpha"], &LogNaming::default()).unwrap();

        assert!(runs.is_empty());
    }

    #[test]
    #[serial]
    fn test_restores_working_directory() {
        let sandbox = Sandbox::new();
        write_seed(sandbox.path(), "1", "Fitness: 1.0\n");
        write_seed(sandbox.path(), "2", "Fitness: broken\n");
        let before = env::current_dir().unwrap();

        locate_seed_runs(["1"], &LogNaming::default()).unwrap();
        assert_eq!(env::current_dir().unwrap(), before);

        let err = locate_seed_runs(["1", "2"], &LogNaming::default()).unwrap_err();
        assert!(matches!(err, LocateError::Parse { .. }));
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_no_candidates() {
        let _sandbox = Sandbox::new();
        let runs = locate_seed_runs(Vec::<PathBuf>::new(), &LogNaming::default()).unwrap();
        assert!(runs.is_empty());
    }
}
