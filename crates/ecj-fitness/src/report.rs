//! Fitness report table
//!
//! The report has one `Generation` column plus one `Seed_<name>` column per
//! run, in seed order. Each generation row holds the run's fitness or `NULL`
//! when the run recorded no value for it, and a closing `MAX_FITNESS` row
//! holds each run's best emitted value.

use std::{collections::BTreeMap, fmt, io};

use crate::{locator::SeedRun, seed::SeedName};

/// Label of the first header cell
pub const GENERATION_LABEL: &str = "Generation";

/// Label of the closing maxima row
pub const MAX_FITNESS_LABEL: &str = "MAX_FITNESS";

/// Placeholder for a generation a run did not record
pub const MISSING_CELL: &str = "NULL";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReportError {
    #[display("failed to write CSV record")]
    Csv(csv::Error),
    #[display("failed to flush report output")]
    Io(io::Error),
}

/// One report cell, rendered to text when written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Label(&'a str),
    Generation(usize),
    Fitness(f64),
    Missing,
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Label(label) => fmt::Display::fmt(label, f),
            Cell::Generation(generation) => fmt::Display::fmt(generation, f),
            // Debug keeps the fractional part of integral values (`1.0`, not `1`).
            Cell::Fitness(value) => fmt::Debug::fmt(value, f),
            Cell::Missing => fmt::Display::fmt(MISSING_CELL, f),
        }
    }
}

/// A header, generation or maxima row
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow<'a> {
    pub cells: Vec<Cell<'a>>,
}

impl ReportRow<'_> {
    pub fn to_record(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(ToString::to_string)
    }
}

/// Best fitness emitted so far per seed
///
/// Seeds with no emitted value report negative infinity.
#[derive(Debug, Default, Clone)]
pub struct MaxFitness<'a> {
    map: BTreeMap<&'a SeedName, f64>,
}

impl<'a> MaxFitness<'a> {
    #[must_use]
    pub fn get(&self, seed: &SeedName) -> f64 {
        self.map.get(seed).copied().unwrap_or(f64::NEG_INFINITY)
    }

    pub fn observe(&mut self, seed: &'a SeedName, value: f64) {
        let max = self.get(seed).max(value);
        self.map.insert(seed, max);
    }
}

/// Generation-indexed view over a set of runs
#[derive(Debug, Clone, Copy)]
pub struct ReportTable<'a> {
    runs: &'a [SeedRun],
}

impl<'a> ReportTable<'a> {
    /// `runs` must already be in column order.
    #[must_use]
    pub fn new(runs: &'a [SeedRun]) -> Self {
        Self { runs }
    }

    #[must_use]
    pub fn header(&self) -> Vec<String> {
        std::iter::once(GENERATION_LABEL.to_owned())
            .chain(self.runs.iter().map(|run| run.seed.column_label()))
            .collect()
    }

    /// Build the generation rows `0..generations` followed by the maxima row.
    ///
    /// Without any run there are no generation rows, only the maxima label.
    #[must_use]
    pub fn rows(&self, generations: usize) -> Vec<ReportRow<'a>> {
        let mut max_fitness = MaxFitness::default();
        let mut rows = Vec::new();

        if !self.runs.is_empty() {
            for generation in 0..generations {
                let mut cells = Vec::with_capacity(self.runs.len() + 1);
                cells.push(Cell::Generation(generation));
                for run in self.runs {
                    match run.fitness.get(generation) {
                        Some(value) => {
                            max_fitness.observe(&run.seed, value);
                            cells.push(Cell::Fitness(value));
                        }
                        None => cells.push(Cell::Missing),
                    }
                }
                rows.push(ReportRow { cells });
            }
        }

        let cells = std::iter::once(Cell::Label(MAX_FITNESS_LABEL))
            .chain(
                self.runs
                    .iter()
                    .map(|run| Cell::Fitness(max_fitness.get(&run.seed))),
            )
            .collect();
        rows.push(ReportRow { cells });

        rows
    }

    /// Write the whole table as CSV.
    pub fn write_csv<W>(&self, writer: W, generations: usize) -> Result<(), ReportError>
    where
        W: io::Write,
    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        writer
            .write_record(self.header())
            .map_err(ReportError::Csv)?;
        for row in self.rows(generations) {
            writer
                .write_record(row.to_record())
                .map_err(ReportError::Csv)?;
        }
        writer.flush().map_err(ReportError::Io)?;

        Ok(())
    }
}

/// Write the report for `runs` with `generations` generation rows.
pub fn write_csv<W>(writer: W, runs: &[SeedRun], generations: usize) -> Result<(), ReportError>
where
    W: io::Write,
{
    ReportTable::new(runs).write_csv(writer, generations)
}
