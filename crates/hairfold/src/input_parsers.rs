use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use paste::paste;

// ============================================================
//  FASTA-like records
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: String,
}

impl FastaRecord {
    /// First word of the header without '>', or "anonymous".
    pub fn name(&self) -> &str {
        self.header.as_deref()
            .and_then(|h| h.strip_prefix('>'))
            .and_then(|s| s.split_whitespace().next())
            .unwrap_or("anonymous")
    }
}

/// Records start at a '>' header line (optional for the first record).
/// Sequence lines are concatenated, only the first whitespace separated
/// token of each line is used.
pub fn read_fasta_records<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            if header.is_some() || !sequence.is_empty() {
                records.push(finish_record(header.take(), std::mem::take(&mut sequence))?);
            }
            header = Some(line.to_string());
        } else if let Some(token) = line.split_whitespace().next() {
            sequence.push_str(token);
        }
    }

    if header.is_some() || !sequence.is_empty() {
        records.push(finish_record(header, sequence)?);
    }
    if records.is_empty() {
        bail!("No sequence found in input");
    }
    Ok(records)
}

fn finish_record(header: Option<String>, sequence: String) -> Result<FastaRecord> {
    if sequence.is_empty() {
        return Err(anyhow!("Missing sequence line after {}", 
            header.as_deref().unwrap_or("header")));
    }
    Ok(FastaRecord { header, sequence })
}

/// One notation string per line; headers ('>') and comments ('#') are
/// skipped, only the first token of each line is used.
pub fn read_notations<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut notations = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('>') || line.starts_with('#') {
            continue;
        }
        if let Some(token) = line.split_whitespace().next() {
            notations.push(token.to_string());
        }
    }
    Ok(notations)
}

// ============================================================
//  Macro generating file/string/stdin/input helpers
// ============================================================

/// Generate input adapters for a base parser function `fn base<R: BufRead>(R) -> Result<T>`.
///
/// This expands into:
/// - `base_string(&str)`
/// - `base_file<P: AsRef<Path>>(P)`
/// - `base_stdin()`
/// - `base_input(&str)`  (dispatches "-" → stdin, otherwise → file)
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            /// Read from a string buffer.
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            /// Read from a file path.
            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            /// Read from stdin.
            pub fn [<$base _stdin>]() -> $ret {
                let reader = BufReader::new(stdin());
                $base(reader)
            }

            /// Read either from stdin ("-") or a file path.
            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type RecordsResult = Result<Vec<FastaRecord>>;
type NotationsResult = Result<Vec<String>>;

define_input_variants!(read_fasta_records, RecordsResult);
define_input_variants!(read_notations, NotationsResult);

// ============================================================
//  Display helpers
// ============================================================

pub fn ruler(len: usize) -> String {
    let mut s = String::new();
    let mut c = 0;
    for i in 0..=len {
        if i % 10 == 0 {
            let t = format!("{}", i / 10);
            c = t.len() - 1;
            s.push_str(&t);
            continue;
        } else if c > 0 {
            c -= 1;
            continue;
        }
        if i % 10 == 5 {
            s.push(',');
        } else {
            s.push('.');
        }
    }
    s
}

/// Energies are kept in dcal/mol, printed in kcal/mol.
pub fn kcal(energy: i32) -> String {
    format!("{:>6.2}", energy as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruler() {
        assert_eq!(ruler(0), "0");
        assert_eq!(ruler(5), "0....,");
        assert_eq!(ruler(10), "0....,....1");
    }

    #[test]
    fn test_kcal() {
        assert_eq!(kcal(-549), " -5.49");
        assert_eq!(kcal(0), "  0.00");
    }

    #[test]
    fn test_read_fasta_records_multiple() {
        let input = ">one first\nGGGAAAACCC\n\n>two\nACGU\nACGU extra\n";
        let records = read_fasta_records_string(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "one");
        assert_eq!(records[0].sequence, "GGGAAAACCC");
        assert_eq!(records[1].header.as_deref(), Some(">two"));
        assert_eq!(records[1].sequence, "ACGUACGU");
    }

    #[test]
    fn test_read_fasta_records_headerless() {
        let records = read_fasta_records_string("ggguuuccc\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header, None);
        assert_eq!(records[0].name(), "anonymous");
    }

    #[test]
    fn test_read_fasta_records_errors() {
        assert!(read_fasta_records_string("").is_err());
        assert!(read_fasta_records_string(">lonely\n").is_err());
        assert!(read_fasta_records_string(">a\n>b\nACGU\n").is_err());
        assert!(read_fasta_records_file("/nonexistent/input.fa").is_err());
    }

    #[test]
    fn test_read_notations() {
        let input = "# comment\n((..))\n>header\n(.[.).] -1.0\n\n";
        let notations = read_notations_string(input).unwrap();
        assert_eq!(notations, vec!["((..))".to_string(), "(.[.).]".to_string()]);
    }
}
