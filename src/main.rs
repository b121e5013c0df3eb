use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use subst_score::{Preset, Score, ScoreOpt, SequenceType};

#[derive(Parser, Debug)]
#[command(name = "subst-score", author, version, about = "Build and inspect substitution scoring matrices", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the scoring matrix with its gap penalties
    Show {
        #[command(flatten)]
        matrix: MatrixArgs,
    },
    /// Print the score of a single monomer pair
    Lookup {
        #[command(flatten)]
        matrix: MatrixArgs,
        /// Row monomer
        row: char,
        /// Column monomer
        col: char,
    },
}

#[derive(Args, Debug)]
struct MatrixArgs {
    /// Alphabet: nucleotide (dna) or amino-acid (protein)
    #[arg(short = 't', long = "type", default_value = "nucleotide")]
    sequence_type: SequenceType,
    #[arg(long = "match", default_value_t = 1, allow_negative_numbers = true)]
    match_score: i32,
    #[arg(long = "mismatch", default_value_t = -1, allow_negative_numbers = true)]
    mismatch_score: i32,
    /// Gap existence penalty (sign is ignored)
    #[arg(long = "existence", default_value_t = 11, allow_negative_numbers = true)]
    existence: i32,
    /// Gap extension penalty (sign is ignored)
    #[arg(long = "extension", default_value_t = 1, allow_negative_numbers = true)]
    extension: i32,
    /// Replace the default table with a preset: identity | blosum62
    #[arg(short, long)]
    preset: Option<Preset>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("subst_score=debug,info")
    } else {
        EnvFilter::new("subst_score=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Show { matrix } => run_show(&matrix, cli.format),
        Commands::Lookup { matrix, row, col } => run_lookup(&matrix, row, col, cli.format),
    }
}

fn build_score(args: &MatrixArgs) -> Result<Score> {
    let opt = ScoreOpt {
        match_score: args.match_score,
        mismatch_score: args.mismatch_score,
        existence: args.existence,
        extension: args.extension,
        sequence_type: args.sequence_type,
    };
    let mut score = opt.build();

    if let Some(preset) = args.preset {
        let st = score.sequence_type();
        score
            .set_table(preset.table())
            .map_err(|e| anyhow::anyhow!("cannot apply preset {:?} to a {} matrix: {}", preset, st, e))?;
        info!(?preset, "applied preset table");
    }
    Ok(score)
}

fn run_show(args: &MatrixArgs, format: OutputFormat) -> Result<()> {
    let score = build_score(args)?;
    match format {
        OutputFormat::Text => println!("{}", score),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&score)?),
    }
    Ok(())
}

fn run_lookup(args: &MatrixArgs, row: char, col: char, format: OutputFormat) -> Result<()> {
    let score = build_score(args)?;
    let (row, col) = (row.to_ascii_uppercase(), col.to_ascii_uppercase());
    let Some(value) = score.get(row, col) else {
        anyhow::bail!("'{}{}' is not a pair of {} monomers", row, col, score.sequence_type());
    };
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "row": row, "col": col, "score": value }));
        }
    }
    Ok(())
}
