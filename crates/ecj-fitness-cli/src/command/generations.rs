//! Number of generation rows in the report
//!
//! By default the count is asked for on stdin after the seed directories
//! have been scanned. It is deliberately independent of the data: it may be
//! shorter or longer than any run.

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use ecj_fitness::locator::SeedRun;

const PROMPT: &str = "Number of generations: ";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum GenerationCountError {
    #[display("failed to read generation count")]
    Io(io::Error),
    #[display("no generation count given")]
    EndOfInput,
    #[display("invalid generation count '{input}'")]
    Invalid {
        input: String,
        source: ParseIntError,
    },
}

/// Where the generation row count comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowCount {
    /// Ask on stdin
    Prompt,
    /// Given on the command line
    Fixed(usize),
    /// Generations recorded by the first seed in column order
    FirstSeed,
}

impl RowCount {
    pub(crate) fn resolve<R, W>(
        self,
        runs: &[SeedRun],
        input: R,
        prompt: W,
    ) -> Result<usize, GenerationCountError>
    where
        R: BufRead,
        W: Write,
    {
        match self {
            RowCount::Prompt => read_generation_count(input, prompt),
            RowCount::Fixed(count) => Ok(count),
            RowCount::FirstSeed => Ok(runs.first().map_or(0, |run| run.fitness.len())),
        }
    }
}

/// Prompt on `prompt` and read one non-negative integer line from `input`.
pub(crate) fn read_generation_count<R, W>(
    mut input: R,
    mut prompt: W,
) -> Result<usize, GenerationCountError>
where
    R: BufRead,
    W: Write,
{
    prompt
        .write_all(PROMPT.as_bytes())
        .and_then(|()| prompt.flush())
        .map_err(GenerationCountError::Io)?;

    let mut line = String::new();
    if input
        .read_line(&mut line)
        .map_err(GenerationCountError::Io)?
        == 0
    {
        return Err(GenerationCountError::EndOfInput);
    }

    let input = line.trim();
    input
        .parse()
        .map_err(|source| GenerationCountError::Invalid {
            input: input.to_owned(),
            source,
        })
}
