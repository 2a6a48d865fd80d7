use super::{error_line, process_line, Op, StreamStats};
use crate::config::Config;
use anyhow::Result;
use crossbeam_channel::{bounded, Sender};
use std::io::Write;
use std::thread;

/// Fans record lines out to a fixed set of worker threads.
///
/// Every worker owns a clone of the config and runs the operation on each
/// line it receives; a dedicated writer thread drains the results. The
/// engine is stateless, so no coordination beyond the two channels is
/// needed. Output lines follow completion order, not input order.
pub struct RecordPool {
    workers: Vec<thread::JoinHandle<StreamStats>>,
    writer: thread::JoinHandle<std::io::Result<()>>,
    tx: Sender<String>,
}

impl RecordPool {
    pub fn new<W: Write + Send + 'static>(
        op: Op,
        config: Config,
        num_threads: usize,
        mut output: W,
    ) -> Self {
        let (tx, rx) = bounded::<String>(num_threads * 2);
        let (result_tx, result_rx) = bounded::<String>(num_threads * 2);

        let mut workers = Vec::with_capacity(num_threads);
        for _ in 0..num_threads {
            let rx = rx.clone();
            let result_tx = result_tx.clone();
            let worker_config = config.clone();
            let handle = thread::spawn(move || {
                let mut stats = StreamStats::default();
                while let Ok(line) = rx.recv() {
                    let output = match process_line(op, &line, &worker_config) {
                        Ok(output) => {
                            stats.processed += 1;
                            output
                        }
                        Err(error) => {
                            stats.errors += 1;
                            error_line(&error)
                        }
                    };
                    if result_tx.send(output).is_err() {
                        break;
                    }
                }
                stats
            });
            workers.push(handle);
        }
        drop(result_tx);

        let writer = thread::spawn(move || {
            while let Ok(line) = result_rx.recv() {
                writeln!(output, "{}", line)?;
            }
            output.flush()
        });

        RecordPool { workers, writer, tx }
    }

    pub fn send(&self, line: String) -> Result<()> {
        Ok(self.tx.send(line)?)
    }

    /// Closes the input channel, waits for the workers and the writer, and
    /// returns the merged stats.
    pub fn finish(self) -> Result<StreamStats> {
        drop(self.tx);

        let mut stats = StreamStats::default();
        for handle in self.workers {
            match handle.join() {
                Ok(worker_stats) => {
                    stats.processed += worker_stats.processed;
                    stats.errors += worker_stats.errors;
                }
                Err(_) => anyhow::bail!("worker thread panicked"),
            }
        }

        match self.writer.join() {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("writer thread panicked"),
        }

        Ok(stats)
    }
}
