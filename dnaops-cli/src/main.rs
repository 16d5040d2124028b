use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dnaops_core::DnaSeq;

/// Perform some operations on a DNA sequence (A, T, C, G only)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print mistakes when checking the sequence
    #[arg(short, long)]
    verbose: bool,

    /// Check the sequence is valid
    #[arg(short, long)]
    check: bool,

    /// Reverse-complement the sequence
    #[arg(short, long)]
    reverse: bool,

    /// Find the longest open reading frame(s) of the input sequence
    #[arg(long)]
    orf: bool,

    /// Find the longest open reading frame(s) of the reverse-complemented sequence
    #[arg(long)]
    orf_reverse: bool,

    /// String containing the DNA sequence
    #[arg(short, long)]
    sequence: Option<String>,

    /// File containing the DNA sequence
    #[arg(short, long, conflicts_with = "sequence")]
    file: Option<PathBuf>,
}

fn load_sequence(args: &Args) -> Result<DnaSeq> {
    if let Some(sequence) = &args.sequence {
        return Ok(DnaSeq::new(sequence.as_bytes()));
    }
    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read sequence file {}", path.display()))?;
        // Files may wrap the sequence over several lines.
        let stripped: String = contents.split_whitespace().collect();
        return Ok(DnaSeq::new(stripped.into_bytes()));
    }
    anyhow::bail!("no input sequence provided (see --help)");
}

fn render_orfs(orfs: &[DnaSeq]) -> String {
    let rendered: Vec<String> = orfs.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

fn run(args: &Args, out: &mut dyn Write) -> Result<()> {
    if !(args.check || args.reverse || args.orf || args.orf_reverse) {
        anyhow::bail!("no calculation option provided (see --help)");
    }

    let seq = load_sequence(args)?;

    if args.check {
        match seq.validation_report() {
            None => writeln!(out, "Input DNA sequence is valid\n")?,
            Some(report) => {
                if args.verbose {
                    writeln!(out, "mistake(s) found in string:\n{report}\n")?;
                }
                writeln!(out, "Input DNA sequence is not valid\n")?;
            }
        }
    }

    if args.reverse {
        let reverse = seq.reverse_complement()?;
        writeln!(out, "Reverse complemented sequence:\n{reverse}\n")?;
    }

    if args.orf {
        let orfs = seq.longest_orfs()?;
        writeln!(
            out,
            "Longest open reading frame/s (input sequence):\n{}\n",
            render_orfs(&orfs)
        )?;
    }

    if args.orf_reverse {
        let reverse = seq.reverse_complement()?;
        let orfs = reverse.longest_orfs()?;
        writeln!(
            out,
            "Longest open reading frame/s (reverse-complemented sequence):\n{}\n",
            render_orfs(&orfs)
        )?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)
}
