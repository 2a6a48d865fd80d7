use bioseq_tools::config::Config;
use bioseq_tools::record::threading::RecordPool;
use bioseq_tools::record::{process_stream, Op};
use serde_json::Value;
use std::io::{Cursor, Read, Seek, SeekFrom};

#[test]
fn streams_records_through_one_operation() {
    let input = "\
{\"seq\": \"ATGACCCTGAAGGTGAA\"}
{\"seq\": \"AUGACCCUGAAGGUGAA\"}
{\"seq\": \"atgaccctgaaggtgaa\"}
";
    let mut output = Vec::new();
    let stats = process_stream(
        Op::Transcribe,
        Cursor::new(input),
        &mut output,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(stats.processed, 3);
    assert_eq!(stats.errors, 0);
    let lines: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
    assert_eq!(
        lines,
        vec![
            "\"AUGACCCUGAAGGUGAA\"",
            "\"ATGACCCTGAAGGTGAA\"",
            "\"augacccugaaggugaa\""
        ]
    );
}

#[test]
fn failed_records_become_error_lines_and_the_stream_continues() {
    let input = "\
{\"seq\": \"MAYKSGKRPTFFEVFKAHCSDS\"}

{\"seq\": \"ATGACCCTGAAGGTGAA\"}
not json at all
";
    let mut output = Vec::new();
    let stats = process_stream(
        Op::Transcribe,
        Cursor::new(input),
        &mut output,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(stats.processed, 1);
    assert_eq!(stats.errors, 2);
    let lines: Vec<Value> = std::str::from_utf8(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0]["error"].as_str().unwrap().contains("protein"));
    assert_eq!(lines[1], Value::String("AUGACCCUGAAGGUGAA".to_string()));
    assert!(lines[2]["error"].is_string());
}

#[test]
fn exon_records_flow_through_splice_operations() {
    let input = "\
{\"seq\": \"GGCGGCGGCGGTGAGGTGAGCCTGCGCGAATACGTGGTCGCCCTGT\", \"exonsRanges\": [[0, 10], [20, 30]]}
{\"seq\": \"GGCGGCGGCGGTGAGGTGGACCTGCGCGAATACGTGGTCGCCCTGT\", \"exonsRanges\": [[0, 10], [20, 30]]}
";
    let mut output = Vec::new();
    let stats = process_stream(
        Op::NonCanonicalSplices,
        Cursor::new(input),
        &mut output,
        &Config::default(),
    )
    .unwrap();

    assert_eq!(stats.processed, 2);
    let lines: Vec<&str> = std::str::from_utf8(&output).unwrap().lines().collect();
    assert_eq!(lines, vec!["[]", "[20]"]);
}

#[test]
fn the_worker_pool_processes_every_record() {
    let record_count = 200;
    let output_file = tempfile::NamedTempFile::new().unwrap();
    let handle = output_file.reopen().unwrap();

    let pool = RecordPool::new(Op::ReverseComplement, Config::default(), 4, handle);
    for i in 0..record_count {
        // One malformed record mixed into the stream.
        let line = if i == 57 {
            "{\"exonsRanges\": [[0, 3]]}".to_string()
        } else {
            "{\"seq\": \"ATGACCCTGAAGGTGAA\"}".to_string()
        };
        pool.send(line).unwrap();
    }
    let stats = pool.finish().unwrap();

    assert_eq!(stats.processed, record_count - 1);
    assert_eq!(stats.errors, 1);

    let mut file = output_file.reopen().unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();

    let mut results = 0u64;
    let mut errors = 0u64;
    for line in contents.lines() {
        let value: Value = serde_json::from_str(line).unwrap();
        match value {
            Value::String(seq) => {
                assert_eq!(seq, "TTCACCTTCAGGGTCAT");
                results += 1;
            }
            Value::Object(map) => {
                assert!(map["error"].as_str().unwrap().contains("'seq'"));
                errors += 1;
            }
            other => panic!("unexpected output line: {}", other),
        }
    }
    assert_eq!(results, record_count - 1);
    assert_eq!(errors, 1);
}

#[test]
fn pool_output_is_written_even_for_empty_input() {
    let output_file = tempfile::NamedTempFile::new().unwrap();
    let handle = output_file.reopen().unwrap();
    let pool = RecordPool::new(Op::Reverse, Config::default(), 2, handle);
    let stats = pool.finish().unwrap();
    assert_eq!(stats.processed, 0);
    assert_eq!(stats.errors, 0);
}
