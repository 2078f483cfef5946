//! Fitness extraction and aggregation for ECJ run logs.
//!
//! This crate turns a set of per-seed ECJ run directories into a single
//! generation-indexed fitness table:
//!
//! - **Seed names**: Integer-valued directory names used as column keys
//! - **Log parsing**: Line-oriented extraction of per-generation fitness values
//! - **Log location**: Discovery of `ecj<seed>.log` files inside seed directories
//! - **Reporting**: CSV table with `NULL` fill and a per-seed `MAX_FITNESS` row
//!
//! # Modules
//!
//! - [`seed`]: Seed name parsing and numeric ordering
//! - [`parser`]: Generation → fitness extraction from a single log
//! - [`workdir`]: Scoped working directory changes
//! - [`locator`]: Seed directory discovery
//! - [`report`]: Table construction and CSV output
//!
//! # Examples
//!
//! ```
//! use ecj_fitness::{locator::SeedRun, parser::GenerationFitness, report, seed::SeedName};
//!
//! let log = "Fitness: 0.5\nFitness: 0.8\nBest Individual of Run:\nFitness: 0.8\n";
//! let run = SeedRun {
//!     seed: "1".parse::<SeedName>().unwrap(),
//!     fitness: GenerationFitness::from_reader(log.as_bytes()).unwrap(),
//! };
//!
//! let mut csv = Vec::new();
//! report::write_csv(&mut csv, &[run], 3).unwrap();
//! assert_eq!(
//!     String::from_utf8(csv).unwrap(),
//!     "Generation,Seed_1\n0,0.5\n1,0.8\n2,NULL\nMAX_FITNESS,0.8\n"
//! );
//! ```

pub mod locator;
pub mod parser;
pub mod report;
pub mod seed;
pub mod workdir;
