//! CLI argument parsing using clap v4

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use syscontrol::Domain;

/// syscontrol - hardware inventory and CPU stress benchmark
#[derive(Parser, Debug)]
#[command(name = "syscontrol")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "SYSCONTROL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Defaults to `report` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show detailed hardware information
    Report {
        /// Limit the report to one hardware category
        #[arg(value_enum)]
        domain: Option<DomainArg>,
    },

    /// Show a condensed overview of every category
    Summary,

    /// Run the multi-threaded CPU stress benchmark
    Benchmark {
        /// Workload iterations per worker
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Worker count, 0 for one per logical processor (defaults to the config)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Sample per-core CPU usage
    Monitor {
        /// Number of samples to print
        #[arg(short, long)]
        samples: Option<u32>,

        /// Delay between samples in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Write the default config to the user config directory
    InitConfig,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainArg {
    #[value(alias = "cpu")]
    Processor,
    #[value(alias = "gpu")]
    Graphics,
    #[value(alias = "ram")]
    Memory,
    Disk,
    Network,
    #[value(alias = "temp")]
    Thermal,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Processor => Domain::Processor,
            DomainArg::Graphics => Domain::Graphics,
            DomainArg::Memory => Domain::Memory,
            DomainArg::Disk => Domain::Disk,
            DomainArg::Network => Domain::Network,
            DomainArg::Thermal => Domain::Thermal,
        }
    }
}
