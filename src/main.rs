//! Compute the square root of a value given on the command line.

use valroot::cli;
use valroot::error;
use valroot::logging;
use valroot::parser;
use valroot::results;
use valroot::ValueHolder;

fn run_valroot(args: &cli::Cli) -> error::Result<()> {
    let holder = ValueHolder::new(parser::parse_value(&args.value)?);

    results::write_results(&holder, std::io::stdout().lock(), args.mode(), args.compact)?;

    Ok(())
}

fn main() -> miette::Result<()> {
    let args = cli::parse();
    logging::init_logging(&args.log_level);
    run_valroot(&args).map_err(|e| miette::Report::new_boxed(e).with_source_code(args.value))
}
