use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::model::chain::{Chain, MAX_PREFIX_LEN, MAX_WORDS, MIN_PREFIX_LEN, MIN_WORDS};
use rs_markov_core::model::seed::SeedPrefix;

/// Generates random text from a Markov chain built over the words read on stdin.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, about, long_about = None)]
struct Cli {
	/// Maximum number of words to print
	#[arg(short = 'w', long = "words", default_value_t = 100,
		value_parser = RangedU64ValueParser::<usize>::new().range(MIN_WORDS as u64..=MAX_WORDS as u64))]
	words: usize,

	/// Number of words in the prefix
	#[arg(short = 'l', long = "prefix-len", default_value_t = 2,
		value_parser = RangedU64ValueParser::<usize>::new().range(MIN_PREFIX_LEN as u64..=MAX_PREFIX_LEN as u64))]
	prefix_len: usize,

	/// Start the text with these words; must contain exactly `prefix-len` words
	#[arg(short = 'p', long = "prefix")]
	prefix: Option<String>,

	/// Seed for the random generator, for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Print the chain as JSON instead of generating text
	#[arg(long)]
	dump: bool,
}

impl Cli {
	/// Seed prefix, if a non-blank one was given.
	fn seed_prefix(&self) -> Option<SeedPrefix> {
		self.prefix.as_deref().and_then(SeedPrefix::parse)
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

/// Builds the chain from `input` and writes either the generated text or the
/// JSON dump to `out`.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<(), Box<dyn Error>> {
	let seed_prefix = cli.seed_prefix();
	let chain = Chain::from_reader(cli.prefix_len, input, seed_prefix.as_ref())?;
	debug!("chain ready: {} prefixes", chain.len());

	if cli.dump {
		serde_json::to_writer_pretty(&mut *out, &chain)?;
		writeln!(out)?;
		return Ok(());
	}

	let text = chain.generate(cli.words, seed_prefix.as_ref(), &mut cli.rng())?;
	writeln!(out, "{}", text)?;
	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let stdin = io::stdin();
	if stdin.is_terminal() {
		error!("no input: pipe some text into rs-markov, e.g. `rs-markov -w 50 < book.txt`");
		return ExitCode::from(2);
	}

	let stdout = io::stdout();
	match run(&cli, stdin.lock(), &mut stdout.lock()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{}", e);
			ExitCode::FAILURE
		}
	}
}
