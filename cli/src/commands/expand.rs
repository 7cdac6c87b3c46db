use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, bail};
use tracing::debug;

use ipexpand_common::config::Config;
use ipexpand_common::network::cidr::Network;
use ipexpand_common::network::format::dotted;
use ipexpand_common::network::range::HostRange;

/// Reads one network from stdin and writes its member addresses to
/// stdout, one per line, ascending.
pub fn run(cfg: &Config) -> anyhow::Result<()> {
    let network = read_network(io::stdin().lock())?;
    debug!("expanding network {network}");

    let range = HostRange::from_network(&network, cfg.omit_edges);
    let written = write_hosts(io::stdout().lock(), &range)?;
    debug!("{written} addresses written");

    Ok(())
}

/// Reads a single line and parses it as a network. Reaching end of input
/// without a line is an error; the line terminator is stripped before
/// parsing.
fn read_network(mut input: impl BufRead) -> anyhow::Result<Network> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("reading the network from stdin")?;
    if read == 0 {
        bail!("no input: expected an IPv4 network such as 192.168.1.0/24");
    }

    let network = line
        .trim_end_matches(['\r', '\n'])
        .parse::<Network>()
        .context("parsing the network")?;
    Ok(network)
}

/// Streams the range to `out` through a buffered writer, returning the
/// number of addresses written.
fn write_hosts(out: impl Write, range: &HostRange) -> io::Result<u64> {
    let mut out = BufWriter::new(out);
    let mut written: u64 = 0;

    for addr in range.to_iter() {
        writeln!(out, "{}", dotted(addr))?;
        written += 1;
    }
    out.flush()?;

    Ok(written)
}
