use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use symchar::char_table::CharacterTable;
use symchar::env_config;
use symchar::orthogonality::{check_column_orthogonality, check_row_orthogonality};
use symchar::storage::{save_table, table_file_path};
use symchar::types::{CharTable, Partition};

/// Values are accumulated in i128: |χ| < sqrt(n!) fits for every n whose
/// table is computable in practice.
type Value = i128;

#[derive(Parser)]
#[command(name = "chartable")]
#[command(author, version, about = "Character tables of S_n via the Murnaghan-Nakayama rule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full character table of S_n
    Table {
        /// Degree n of the symmetric group
        degree: usize,

        /// Order rows and columns reverse-lexicographically instead of generation order
        #[arg(long)]
        sorted: bool,

        /// Save the table as JSON (default path: data/char_tables/s{n}.json)
        #[arg(long, short)]
        output: Option<Option<PathBuf>>,

        /// Check the orthogonality relations before printing
        #[arg(long)]
        verify: bool,
    },

    /// Compute a single value χ_λ(ρ)
    Value {
        /// Character label, e.g. 3,2,1
        lambda: Partition,

        /// Conjugacy class (cycle type), e.g. 2,2,1,1
        rho: Partition,
    },

    /// List the partitions of n
    Partitions {
        degree: usize,

        #[arg(long)]
        sorted: bool,
    },

    /// Check row and column orthogonality of the table of S_n
    Verify { degree: usize },
}

fn print_table(table: &CharacterTable<Value>) {
    let labels: Vec<String> = table.partitions.iter().map(|p| p.to_string()).collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let cell_width = table
        .values
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);

    for (label, row) in labels.iter().zip(&table.values) {
        let cells: Vec<String> = row
            .iter()
            .map(|v| format!("{:>width$}", v, width = cell_width))
            .collect();
        println!("{:<width$}  {}", label, cells.join(" "), width = label_width);
    }
}

fn verify(table: &CharacterTable<Value>) -> Result<()> {
    env_config::init_rayon_threads();
    check_row_orthogonality(table)?;
    check_column_orthogonality(table)?;
    println!("S_{}: row and column orthogonality hold", table.degree);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    env_config::init_base_path().context("failed to enter SYMCHAR_BASE_PATH")?;

    let mut chars = CharTable::<Value>::new();

    match cli.command {
        Commands::Table {
            degree,
            sorted,
            output,
            verify: check,
        } => {
            let mut table = chars.labelled_table(degree);
            if sorted {
                table = table.reordered_canonically();
            }
            if check {
                verify(&table)?;
            }
            if let Some(path) = output {
                let path = path.unwrap_or_else(|| table_file_path(degree));
                save_table(&table, &path)
                    .with_context(|| format!("failed to save {}", path.display()))?;
            }
            print_table(&table);
        }
        Commands::Value { lambda, rho } => {
            println!("{}", chars.checked_char_value(&lambda, &rho)?);
        }
        Commands::Partitions { degree, sorted } => {
            let partitions = if sorted {
                chars.sorted_partitions_of(degree)
            } else {
                chars.partitions_of(degree)
            };
            for p in &partitions {
                println!("{}", p);
            }
        }
        Commands::Verify { degree } => {
            let table = chars.labelled_table(degree);
            verify(&table)?;
        }
    }

    Ok(())
}
