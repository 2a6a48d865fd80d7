use bioseq_tools::{cli, commands};
use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Run {
            op,
            input,
            output,
            threads,
        } => commands::run::run(op, input, output, threads),
        cli::Commands::LongestOrfs { fasta_file, output } => {
            commands::longest_orfs::run(fasta_file, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
