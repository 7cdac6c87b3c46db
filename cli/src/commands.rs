pub mod expand;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ipexpand")]
#[command(about = "Expand an IPv4 network into its member addresses.")]
#[command(disable_help_flag = true)]
pub struct CommandLine {
    /// Omit the network and broadcast addresses for prefixes up to /30
    #[arg(short = 'i')]
    pub omit_edges: bool,

    /// Print usage to stderr and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Tolerated, never fatal: unknown options draw a warning, stray
    /// positionals an advisory
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extras: Vec<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn usage() -> String {
    format!(
        concat!(
            "ipexpand {version}\n",
            "Expand an IPv4 network into its member addresses.\n",
            "\n",
            "Usage: ipexpand [-i] [-h]\n",
            "\n",
            "Options:\n",
            "  -i  Omit the network and broadcast addresses for prefixes up to /30\n",
            "  -h  Print this help and exit\n",
            "\n",
            "The network is read as one line from stdin, e.g. \"192.168.1.0/24\".\n",
        ),
        version = env!("CARGO_PKG_VERSION")
    )
}
