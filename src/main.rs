//! cablegen - EMR Cable Generator Tools
//!
//! Desktop form and command line for FTTH cable installation records.
//!
//! # Features
//!
//! - Cable names for cluster and feeder runs
//! - Cluster (CI) length description: route + FDT/FAT slack + 5% tolerance
//! - Feeder length description: route + slack + 5% tolerance
//! - One-click copy of every result to the clipboard
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! cablegen
//!
//! # CLI commands
//! cablegen cable cluster --fdt FDT-01 --line A1 --cable-type 24C/2T --length 150
//! cablegen cable feeder --olt OLT-5 --fdt FDT-9 --feeder-type MAINFEEDER --cable-type 96C/8T --length 300
//! cablegen cluster --route 1000 --slack-fdt 2 --slack-fat 3 --otdr 1160
//! cablegen feeder --route 500 --slack 1
//! cablegen list-types
//! ```

mod app;

use cablegen::core::cable::{
    CableCategory, CableRecord, ClusterCable, ClusterCableType, FeederCable, FeederCableType,
    FeederType,
};
use cablegen::core::slack::{ClusterLengthInput, FeederLengthInput};
use clap::{Parser, Subcommand};
use iced::Size;
use std::process::ExitCode;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cablegen")]
#[command(version, long_version = cablegen::build::CLAP_LONG_VERSION)]
#[command(about = "EMR Cable Generator Tools - cable names and slack lengths for FTTH records", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cable name
    Cable {
        #[command(subcommand)]
        kind: CableCommand,
    },
    /// Cluster (CI) length description: route plus FDT and FAT slack
    Cluster {
        /// Route length in meters (blank = 0)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        route: String,
        /// Slack units reserved at the FDT (blank = 0)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        slack_fdt: String,
        /// Slack units reserved at the FAT (blank = 0)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        slack_fat: String,
        /// Length measured by OTDR, echoed as given
        #[arg(long, default_value = "")]
        otdr: String,
    },
    /// Feeder length description: route plus slack
    Feeder {
        /// Route length in meters (blank = 0)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        route: String,
        /// Slack units (blank = 0)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        slack: String,
        /// Length measured by OTDR, echoed as given
        #[arg(long, default_value = "")]
        otdr: String,
    },
    /// List cable and feeder types per category
    ListTypes,
}

#[derive(Subcommand)]
enum CableCommand {
    /// Cluster cable: FDT code and line code
    Cluster {
        #[arg(long, default_value = "")]
        fdt: String,
        #[arg(long, default_value = "")]
        line: String,
        /// One of 24C/2T, 36C/3T, 48C/4T
        #[arg(long, default_value = "24C/2T")]
        cable_type: String,
        /// Length by OTDR, echoed as given
        #[arg(long, default_value = "")]
        length: String,
    },
    /// Feeder cable: OLT code and FDT code
    Feeder {
        #[arg(long, default_value = "")]
        olt: String,
        #[arg(long, default_value = "")]
        fdt: String,
        /// SUBFEEDER, HUBFEEDER or MAINFEEDER
        #[arg(long, default_value = "SUBFEEDER")]
        feeder_type: String,
        /// One of 24C/2T, 48C/4T, 96C/8T, 144C/12T, 288C/24T
        #[arg(long, default_value = "24C/2T")]
        cable_type: String,
        /// Length by OTDR, echoed as given
        #[arg(long, default_value = "")]
        length: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        init_cli_logger(cli.verbose);
        match handle_cli(command) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::warn!("Rejected input: {e}");
                eprintln!("{}", e.display_text());
                ExitCode::FAILURE
            }
        }
    } else {
        launch_gui()
    }
}

fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cablegen=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn handle_cli(command: Commands) -> cablegen::Result<String> {
    match command {
        Commands::Cable { kind } => {
            let record = match kind {
                CableCommand::Cluster {
                    fdt,
                    line,
                    cable_type,
                    length,
                } => CableRecord::Cluster(ClusterCable {
                    fdt_code: fdt,
                    line_code: line,
                    cable_type: ClusterCableType::parse_token(&cable_type)?,
                    length,
                }),
                CableCommand::Feeder {
                    olt,
                    fdt,
                    feeder_type,
                    cable_type,
                    length,
                } => CableRecord::Feeder(FeederCable {
                    olt_code: olt,
                    fdt_code: fdt,
                    feeder_type: FeederType::parse_token(&feeder_type)?,
                    cable_type: FeederCableType::parse_token(&cable_type)?,
                    length,
                }),
            };
            Ok(record.format_name())
        }
        Commands::Cluster {
            route,
            slack_fdt,
            slack_fat,
            otdr,
        } => {
            let report =
                ClusterLengthInput::from_fields(&route, &slack_fdt, &slack_fat, &otdr)?.compute()?;
            Ok(report.to_string())
        }
        Commands::Feeder { route, slack, otdr } => {
            let report = FeederLengthInput::from_fields(&route, &slack, &otdr)?.compute()?;
            Ok(report.to_string())
        }
        Commands::ListTypes => {
            let mut lines = Vec::new();
            for category in CableCategory::iter() {
                lines.push(format!(
                    "{category} cable types: {}",
                    category.cable_type_tokens().join(", ")
                ));
            }
            lines.push(format!(
                "feeder types: {}",
                FeederType::iter()
                    .map(FeederType::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
            Ok(lines.join("\n"))
        }
    }
}

fn launch_gui() -> ExitCode {
    let _ = cablegen::utils::ensure_dirs();

    // Set up logging to file
    if let Some(mut log_path) = cablegen::utils::get_state_dir() {
        log_path.push("cablegen.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .window(iced::window::Settings {
            size: Size::new(1000.0, 750.0),
            resizable: false,
            ..Default::default()
        })
        .title("EMR Cable Generator Tools")
        .theme(app::State::iced_theme)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
