#![forbid(unsafe_code)]

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use prioritize::{max_comparisons, Audited, BuildOptions, OrderBuilder, Shuffle};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod items;
mod prompt;

use prompt::Prompt;

/// Put a list of items in order of priority by answering which of two items
/// matters more, as few times as possible.
#[derive(Parser, Debug)]
#[command(name = "prioritize", version)]
struct Args {
    /// An item to prioritize. Can be given several times.
    #[arg(short, long = "item")]
    items: Vec<String>,

    /// Read items from a file, one per line.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Shuffle the items before comparing them.
    #[arg(long)]
    shuffle: bool,

    /// Shuffle reproducibly from this seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Drop items with the same text as an earlier one.
    #[arg(long)]
    dedup: bool,

    /// Log more, -v for debug and -vv for trace output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn build_options(&self) -> BuildOptions {
        let shuffle = match (self.seed, self.shuffle) {
            (Some(seed), _) => Shuffle::Seeded(seed),
            (None, true) => Shuffle::Entropy,
            (None, false) => Shuffle::Off,
        };
        BuildOptions { shuffle }
    }

    fn collect_items(&self) -> Result<Vec<String>> {
        let mut items = self.items.clone();
        if let Some(path) = &self.file {
            let file = File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            items.extend(items::read_items(BufReader::new(file))?);
        }
        if self.dedup {
            items = items::dedup(items);
        }
        Ok(items)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber =
        FmtSubscriber::builder().with_max_level(level).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(&args, stdin.lock(), io::stderr(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Ask for answers on `answers`, write questions to `prompts` and the finished
/// order to `out`.
fn run<R, P, W>(args: &Args, answers: R, prompts: P, mut out: W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let items = args.collect_items()?;
    if items.is_empty() {
        warn!("No items given, use --item or --file");
    }
    let n = items.len();
    info!(items = n, max_comparisons = max_comparisons(n), "ordering");

    let prompt = Prompt::new(&items, answers, prompts);
    let mut comparator = Audited::try_new(prompt, n)?;
    let ranking = OrderBuilder::new(args.build_options())
        .build((0..n).collect(), &mut comparator)
        .context("Could not finish ordering the items")?;
    info!(comparisons = comparator.into_inner().asked(), "done");

    write!(out, "{}", ranking.map(|i| &items[i]))?;
    Ok(())
}
