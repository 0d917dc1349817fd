use anyhow::{bail, Context, Result};
use clap::Parser;
use university_records::utils::logger;
use university_records::{DataStore, FormatKind, LocalStorage};

#[derive(Parser)]
#[command(name = "university-convert")]
#[command(about = "Convert university data between JSON and XML")]
struct Args {
    /// Source file (.json or .xml)
    input: String,

    /// Destination file (.json or .xml)
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let input_kind = FormatKind::from_path(&args.input)?;
    let output_kind = FormatKind::from_path(&args.output)?;
    if args.input == args.output {
        bail!("input and output are the same file: {}", args.input);
    }

    // Paths are taken as given, relative to the working directory.
    let store = DataStore::new(LocalStorage::new("."));
    let data = store
        .load(input_kind.format().as_ref(), &args.input)
        .with_context(|| format!("failed to read {}", args.input))?;
    store
        .save(output_kind.format().as_ref(), &data, &args.output)
        .with_context(|| format!("failed to write {}", args.output))?;

    println!("✅ {} -> {} ({})", args.input, args.output, data.counts());
    Ok(())
}
