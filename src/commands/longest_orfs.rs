use crate::engine::find_longest_open_reading_frame;
use anyhow::{Context, Result};
use bio::io::fasta;
use indicatif::{ProgressBar, ProgressStyle};
use niffler::get_reader;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

pub fn run(fasta_file: String, output: Option<String>) -> Result<()> {
    let file = File::open(&fasta_file)
        .with_context(|| format!("Failed to open FASTA file {}", fasta_file))?;
    let (inner_reader, _compression) = get_reader(Box::new(file))?;
    let reader = fasta::Reader::new(BufReader::new(inner_reader));

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output file {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    progress.set_message("Scanning records");

    let mut scanned = 0u64;
    let mut errors = 0u64;
    for result in reader.records() {
        let record = result?;
        let sequence = std::str::from_utf8(record.seq())
            .with_context(|| format!("Record {} is not valid UTF-8", record.id()))?;

        match find_longest_open_reading_frame(sequence) {
            Ok((orf, frame)) => writeln!(
                writer,
                "{}",
                json!({ "id": record.id(), "orf": orf, "frame": frame })
            )?,
            Err(error) => {
                errors += 1;
                writeln!(
                    writer,
                    "{}",
                    json!({ "id": record.id(), "error": error.to_string() })
                )?;
            }
        }

        scanned += 1;
        if scanned % 100 == 0 {
            progress.set_message(format!("Scanned {} records", scanned));
            progress.tick();
        }
    }
    writer.flush()?;

    progress.finish_with_message(format!("Scanned {} records ({} failed)", scanned, errors));
    Ok(())
}
