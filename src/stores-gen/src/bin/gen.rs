use std::fs::File;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rand::thread_rng;
use stores_gen::error::StoresGenError;
use stores_gen::store::dictionary;
use stores_gen::store::dictionary::NameDictionary;
use stores_gen::store::scenario;
use stores_gen::store::scenario::Scenario;
use stores_gen::tracing::TracingCliArgs;
use tracing::debug;
use tracing::info;

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    tracing: TracingCliArgs,
    /// Number of data rows to generate. Prompted for when omitted.
    #[arg(long)]
    rows: Option<u64>,
    /// Output CSV file. Overwritten if it exists. Prompted for when omitted.
    #[arg(long)]
    out_path: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    args.tracing.init()?;

    let rows = match args.rows {
        Some(rows) => rows,
        None => {
            let line = prompt("Enter the number of rows to generate: ")?;
            line.parse::<u64>().map_err(|_| {
                StoresGenError::InvalidInput(format!(
                    "row count must be a non-negative integer, got {line:?}"
                ))
            })?
        }
    };
    let out_path = match args.out_path {
        Some(path) => path,
        None => PathBuf::from(prompt("Enter the name of the csv file: ")?),
    };

    let lookup_path = PathBuf::from(dictionary::LOOKUP_WORKBOOK_PATH);
    if !lookup_path.try_exists()? {
        return Err(StoresGenError::FileNotFound(format!(
            "lookup workbook {lookup_path:?} doesn't exist"
        ))
        .into());
    }

    debug!("lookup workbook: {:?}", lookup_path);
    debug!("out path: {:?}", out_path);
    debug!("rows: {rows}");

    info!("loading store name dictionary...");
    let dictionary = NameDictionary::try_new_from_workbook(
        &lookup_path,
        dictionary::LOOKUP_SHEET,
        dictionary::ADJECTIVE_COLUMN,
        dictionary::NOUN_COLUMN,
    )?;

    info!("generating stores...");
    let cfg = scenario::Config {
        rng: thread_rng(),
        dictionary,
        rows,
    };
    let mut scenario = Scenario::new(cfg);

    let out = File::create(&out_path)?;
    let written = scenario.run(out)?;

    info!("successfully generated!");
    println!(
        "The process completed successfully: wrote {written} row(s) to {}",
        out_path.display()
    );

    Ok(())
}

fn prompt(message: &str) -> Result<String, anyhow::Error> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}
