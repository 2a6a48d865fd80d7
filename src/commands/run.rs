use crate::config::Config;
use crate::record::threading::RecordPool;
use crate::record::{process_stream, Op, StreamStats};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

pub fn run(op: Op, input: Option<String>, output: Option<String>, threads: usize) -> Result<()> {
    let config = Config::load();

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open input file {}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let writer: Box<dyn Write + Send> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let stats = if threads <= 1 {
        process_stream(op, reader, writer, &config)?
    } else {
        process_parallel(op, reader, writer, config, threads)?
    };

    if stats.errors > 0 {
        eprintln!(
            "{} records processed, {} failed",
            stats.processed, stats.errors
        );
    }
    Ok(())
}

fn process_parallel<R: BufRead>(
    op: Op,
    reader: R,
    writer: Box<dyn Write + Send>,
    config: Config,
    threads: usize,
) -> Result<StreamStats> {
    let pool = RecordPool::new(op, config, threads, writer);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        pool.send(line)?;
    }
    pool.finish()
}
