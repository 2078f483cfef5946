//! Scoped working directory changes
//!
//! Locating a seed's log happens from inside the seed directory. The previous
//! working directory is restored when the guard is dropped, which covers
//! normal returns, `?` early returns and unwinding panics alike.

use std::{
    env, io,
    path::{Path, PathBuf},
};

/// Restores the saved working directory on drop
#[derive(Debug)]
pub struct CurrentDirGuard {
    saved: PathBuf,
}

impl CurrentDirGuard {
    /// Save the current working directory and change into `dir`.
    pub fn enter<P>(dir: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let saved = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { saved })
    }

    #[must_use]
    pub fn saved(&self) -> &Path {
        &self.saved
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.saved) {
            log::warn!(
                "failed to restore working directory {}: {err}",
                self.saved.display()
            );
        }
    }
}

/// Run `f` with `dir` as the working directory.
///
/// The error case only covers entering `dir`; whatever `f` returns is passed
/// through untouched.
pub fn with_current_dir<P, F, T>(dir: P, f: F) -> io::Result<T>
where
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let _guard = CurrentDirGuard::enter(dir)?;
    Ok(f())
}
