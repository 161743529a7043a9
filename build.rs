//! Build script: validates the embedded emoji table (data/emoji-table.jsonl) at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let table_path: PathBuf = [&manifest_dir, "data", "emoji-table.jsonl"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", table_path.display());

    let jsonl = std::fs::read_to_string(&table_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. emoji-table.jsonl must exist (regenerate it with `build-table`).",
            table_path.display(),
            e
        )
    });

    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    #[serde(untagged)]
    enum Record {
        Metadata {
            #[serde(rename = "_metadata")]
            metadata: serde_json::Value,
        },
        Range {
            range: [String; 2],
            decimal: [u32; 2],
        },
        Single {
            code: String,
            decimal: u32,
        },
    }

    let mut entries = 0usize;
    for (idx, line) in jsonl.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(line).unwrap_or_else(|e| {
            panic!(
                "emoji-table.jsonl line {} is invalid: {}. Fix the file and rebuild.",
                idx + 1,
                e
            )
        });
        match record {
            Record::Metadata { .. } => {}
            Record::Range { decimal, .. } => {
                assert!(
                    decimal[0] <= decimal[1],
                    "emoji-table.jsonl line {}: inverted range {:?}",
                    idx + 1,
                    decimal
                );
                entries += 1;
            }
            Record::Single { .. } => entries += 1,
        }
    }
    assert!(entries > 0, "emoji-table.jsonl contains no entries");
}
