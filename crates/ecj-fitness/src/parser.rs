//! ECJ run log parsing
//!
//! An ECJ statistics log reports the best fitness of every generation on a
//! line containing `Fitness: <value>`. Once the run finishes, a summary
//! section starting with `Best Individual of Run:` repeats the final fitness,
//! so scanning stops at that banner.
//!
//! Generation indices come from the order of the fitness lines, not from
//! anything printed in the log.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseFloatError,
    path::Path,
};

/// Marker preceding a generation's fitness value
pub const FITNESS_MARKER: &str = "Fitness: ";

/// Banner that starts the end-of-run summary
pub const TERMINAL_MARKER: &str = "Best Individual of Run:";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseLogError {
    #[display("failed to read log")]
    Io(io::Error),
    #[display("line {line}: invalid fitness value '{text}'")]
    InvalidFitness {
        line: usize,
        text: String,
        source: ParseFloatError,
    },
}

/// Ordered mapping from generation index to fitness value
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationFitness {
    values: BTreeMap<usize, f64>,
}

impl GenerationFitness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a log file from disk.
    pub fn from_file<P>(path: P) -> Result<Self, ParseLogError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).map_err(ParseLogError::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a log from any buffered reader.
    ///
    /// Reading stops at the first line containing [`TERMINAL_MARKER`]. Every
    /// earlier line containing [`FITNESS_MARKER`] contributes the next
    /// generation; all other lines are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ecj_fitness::parser::GenerationFitness;
    /// let log = "Generation: 0\nFitness: 1.5\nGeneration: 1\nFitness: 2.25\n";
    /// let fitness = GenerationFitness::from_reader(log.as_bytes()).unwrap();
    /// assert_eq!(fitness.len(), 2);
    /// assert_eq!(fitness.get(1), Some(2.25));
    /// ```
    pub fn from_reader<R>(reader: R) -> Result<Self, ParseLogError>
    where
        R: BufRead,
    {
        let mut fitness = Self::new();
        let mut generation = 0;

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line.map_err(ParseLogError::Io)?;
            if line.contains(TERMINAL_MARKER) {
                break;
            }
            let Some(text) = line.split(FITNESS_MARKER).nth(1) else {
                continue;
            };
            let value = text
                .trim()
                .parse::<f64>()
                .map_err(|source| ParseLogError::InvalidFitness {
                    line: line_idx + 1,
                    text: text.trim().to_owned(),
                    source,
                })?;
            fitness.insert(generation, value);
            generation += 1;
        }

        Ok(fitness)
    }

    /// Record `value` for `generation`, replacing any earlier value.
    pub fn insert(&mut self, generation: usize, value: f64) {
        self.values.insert(generation, value);
    }

    #[must_use]
    pub fn get(&self, generation: usize) -> Option<f64> {
        self.values.get(&generation).copied()
    }

    /// Number of recorded generations
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().map(|(&generation, &value)| (generation, value))
    }
}

impl FromIterator<f64> for GenerationFitness {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: iter.into_iter().enumerate().collect(),
        }
    }
}
