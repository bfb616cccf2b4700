use clap::Parser;

use cvsift::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(&cli);
    cli::run(cli)
}
