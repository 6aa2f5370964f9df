mod chart;
mod payload;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "sigviz";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Assemble renderer-agnostic chart data for mutational signature visualizations.")
        .subcommand_required(true)
        .subcommand(chart::cli::create_chart_cli())
        .subcommand(payload::cli::create_payload_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CHART
        //
        Some((chart::cli::CHART_CMD, matches)) => {
            chart::handlers::run_chart(matches)?;
        }

        //
        // PAYLOAD
        //
        Some((payload::cli::PAYLOAD_CMD, matches)) => {
            payload::handlers::run_payload(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
