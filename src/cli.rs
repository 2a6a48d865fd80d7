use crate::record::Op;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one sequence operation over an ndjson record stream
    Run {
        /// Operation to apply to each record
        #[arg(value_enum)]
        op: Op,

        /// Input ndjson file (default: stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Output ndjson file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Number of worker threads (with more than one, output order follows completion)
        #[arg(long, default_value = "1")]
        threads: usize,
    },

    /// Report the longest open reading frame of each FASTA record
    LongestOrfs {
        /// Input FASTA file (plain or gzipped)
        fasta_file: String,

        /// Output ndjson file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}
