mod cli;

use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, warn};

use cli::{Cli, Commands};
use syscontrol::config::{ensure_user_config_exists, load_config};
use syscontrol::display::{self, ConsolePresenter, Renderer, Section};
use syscontrol::{
    configured_engine, logging, system_aggregator, Config, CoreUsageSampler, Domain,
    HardwareProvider, Result, SummaryView, SyscontrolError, TelemetryAggregator,
};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose, cli.quiet)?;
    debug!(?config, "Configuration loaded");

    let renderer = Renderer::new(&config.display);
    let command = cli.command.unwrap_or(Commands::Report { domain: None });

    match command {
        Commands::Report { domain } => {
            let aggregator = system_aggregator(&config);
            let domains = match domain {
                Some(domain) => vec![Domain::from(domain)],
                None => Domain::ALL.to_vec(),
            };
            for domain in domains {
                renderer.print(&domain_report(&aggregator, domain));
            }
        }
        Commands::Summary => {
            let snapshot = system_aggregator(&config).snapshot();
            let failed = snapshot.failed_domains();
            if !failed.is_empty() {
                warn!(domains = ?failed, "Some domains could not be queried");
            }
            renderer.print(&display::summary_section(&SummaryView::project(&snapshot)));
        }
        Commands::Benchmark {
            iterations,
            workers,
        } => {
            let mut engine = configured_engine(&config);
            if let Some(iterations) = iterations {
                engine = engine.with_iterations(iterations);
            }
            if let Some(workers) = workers {
                engine = engine.with_workers(workers);
            }
            let report = engine.run(&ConsolePresenter)?;
            println!();
            renderer.print(&display::benchmark_section(&report));
        }
        Commands::Monitor {
            samples,
            interval_ms,
        } => {
            let samples = samples.unwrap_or(config.monitor.samples);
            let interval =
                Duration::from_millis(interval_ms.unwrap_or(config.monitor.interval_ms));
            monitor(&config, samples, interval)?;
        }
        Commands::InitConfig => match ensure_user_config_exists()? {
            Some(path) => println!("Created default config at {}", path.display()),
            None => println!("Config already exists, leaving it unchanged"),
        },
    }

    Ok(())
}

/// Query a single domain and build its report section
fn domain_report<P: HardwareProvider>(
    aggregator: &TelemetryAggregator<P>,
    domain: Domain,
) -> Section {
    match domain {
        Domain::Processor => display::processor_section(&aggregator.processor()),
        Domain::Graphics => display::graphics_section(&aggregator.graphics()),
        Domain::Memory => display::memory_section(&aggregator.memory()),
        Domain::Disk => display::disk_section(&aggregator.disks()),
        Domain::Network => display::network_section(&aggregator.network()),
        Domain::Thermal => display::thermal_section(&aggregator.thermal()),
    }
}

fn monitor(config: &Config, samples: u32, interval: Duration) -> Result<()> {
    let aggregator = system_aggregator(config);
    let renderer = Renderer::new(&config.display);
    let mut sampler = CoreUsageSampler::new();

    let read_counters = || {
        let probe = aggregator.core_times();
        if probe.ok {
            Ok(probe.value)
        } else {
            Err(SyscontrolError::detection("per-core CPU counters unavailable"))
        }
    };

    // First sample is the baseline
    sampler.sample(&read_counters()?);
    for _ in 0..samples {
        thread::sleep(interval);
        let usage = sampler.sample(&read_counters()?);
        renderer.print(&display::usage_section(&usage));
    }
    Ok(())
}
