mod corpus_io;
mod features;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use comma_context::{CommaConfig, Lexicalization};
use rayon::prelude::*;

use crate::features::describe_sentence;

#[derive(Parser)]
#[command(author, version, about = "Directional comma context queries over annotated corpora")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON corpus into an rkyv archive
    Pack {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Write the query results of every comma as JSON lines
    Extract {
        /// Corpus as JSON, or as an archive with the .rkyv extension
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Prefer gold annotations where a sentence carries them
        #[arg(long)]
        gold: bool,

        /// Append named-entity tags to chunk and phrase notations
        #[arg(long)]
        lexicalize_ner: bool,

        /// Append part-of-speech tags to chunk and phrase notations
        #[arg(long)]
        lexicalize_pos: bool,

        /// Largest distance queried in each direction
        #[arg(short, long, default_value_t = 2)]
        distance: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Pack { input, output } => {
            let corpus = corpus_io::read_json(&input)?;
            log::info!(
                "packing corpus version {} with {} sentences and {} commas",
                corpus.version,
                corpus.sentences.len(),
                corpus.comma_count()
            );
            let size = corpus_io::write_archive(&corpus, &output)?;
            log::info!("wrote {} bytes to {}", size, output.display());
        }
        Command::Extract { input, output, gold, lexicalize_ner, lexicalize_pos, distance } => {
            let mut lexicalize = Lexicalization::empty();
            lexicalize.set(Lexicalization::NAMED_ENTITY, lexicalize_ner);
            lexicalize.set(Lexicalization::PART_OF_SPEECH, lexicalize_pos);
            let config = CommaConfig::new(gold, lexicalize);

            let corpus = corpus_io::read_corpus(&input)?;
            log::info!(
                "extracting {} commas from {} sentences with {:?}",
                corpus.comma_count(),
                corpus.sentences.len(),
                config
            );

            // Any annotation mismatch stops the whole run
            let described = corpus
                .sentences
                .into_par_iter()
                .enumerate()
                .map(|(index, record)| describe_sentence(index, record, config, distance))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            let mut written = 0;
            for features in described.iter().flatten() {
                serde_json::to_writer(&mut out, features)?;
                out.write_all(b"\n")?;
                written += 1;
            }
            out.flush()?;
            log::info!("wrote {} comma records", written);
        }
    }

    Ok(())
}
