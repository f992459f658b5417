mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use twobit_codec::{CachePolicy, Codec};

use args::{CompareArgs, DecodeArgs, OutputFormat, UnpackArgs};
use commands::{compare, encode, pack};

/// twobit: 2-bit DNA sequence codec
///
/// Encodes A/C/G/T sequences at two bits per base, packs them into
/// byte-aligned storage units and counts mismatches directly on the
/// encoded form.
#[derive(Parser, Debug)]
#[command(name = "twobit")]
#[command(author, version, about = "Encode, pack and compare DNA sequences at 2 bits per base", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Codec configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Plan cache policy, overriding the config file ("unbounded" or "lru:<capacity>")
    #[arg(long, global = true)]
    cache: Option<CachePolicy>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a sequence into its 2-bit integer.
    Encode {
        /// Sequence of A, C, G, T (case-insensitive)
        sequence: String,
    },

    /// Decode a 2-bit integer back into a sequence.
    Decode(DecodeArgs),

    /// Pack a sequence into byte-aligned storage units.
    ///
    /// Units are printed most significant first, in packing plan order.
    Pack {
        /// Sequence of A, C, G, T (case-insensitive)
        sequence: String,
    },

    /// Unpack storage units back into a sequence.
    Unpack(UnpackArgs),

    /// Show the packing plan for a sequence length.
    Plan {
        /// Sequence length in bases
        length: usize,
    },

    /// Count mismatches between two sequences.
    ///
    /// Compares over the length of the shorter sequence, minus --end-clip.
    Compare(CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let config = utils::load_config(cli.config.as_deref(), cli.cache)?;
    debug!(cache = %config.cache, "codec configured");
    let codec = Codec::from_config(&config);

    match cli.command {
        Commands::Encode { sequence } => {
            encode::encode_sequence(&codec, &sequence, cli.format)?;
        }
        Commands::Decode(args) => {
            encode::decode_value(&codec, args, cli.format)?;
        }
        Commands::Pack { sequence } => {
            pack::pack_sequence(&codec, &sequence, cli.format)?;
        }
        Commands::Unpack(args) => {
            pack::unpack_values(&codec, args, cli.format)?;
        }
        Commands::Plan { length } => {
            pack::show_plan(&codec, length, cli.format)?;
        }
        Commands::Compare(args) => {
            compare::compare_sequences(&codec, &args, cli.format)?;
        }
    }

    debug!(stats = ?codec.cache_stats(), "plan cache");
    Ok(())
}
