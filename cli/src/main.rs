mod commands;
mod terminal;

use commands::{CommandLine, expand};
use ipexpand_common::config::Config;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init();

    if commands.help {
        eprint!("{}", commands::usage());
        return Ok(());
    }

    let mut stray_positionals = false;
    for extra in &commands.extras {
        if extra.starts_with('-') {
            warn!("unknown option '{extra}', ignoring; pass -h for help");
        } else {
            stray_positionals = true;
        }
    }
    if stray_positionals {
        // stdout on purpose: stray arguments are reported on the output
        // stream, everything else diagnostic goes to stderr
        println!("extra arguments are ignored; the network is read from stdin");
    }

    let cfg = Config {
        omit_edges: commands.omit_edges,
    };

    expand::run(&cfg)
}
