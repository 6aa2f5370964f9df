use clap::{Arg, Command, arg};

pub use sigviz_core::consts::CHART_CMD;

pub fn create_chart_cli() -> Command {
    Command::new(CHART_CMD)
        .about("Assemble chart data from a signature payload for one disease cohort.")
        .arg(
            Arg::new("payload")
                .required(true)
                .help("Path to the payload JSON document"),
        )
        .arg(
            arg!(--disease <CODE>)
                .required(false)
                .help("Disease code for the reference cohort (default: first available)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
