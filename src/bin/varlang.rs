// VarLang reader. See `varlang --help` for options.

use clap::Parser;
use varlang::cli::{self, args::VarlangArgs};

fn main() -> miette::Result<()> {
    let args = VarlangArgs::parse();
    cli::init_logging(args.verbose);
    cli::run(&args)
}
