use clap::{Arg, Command, arg};

pub use sigviz_core::consts::PAYLOAD_CMD;

pub fn create_payload_cli() -> Command {
    Command::new(PAYLOAD_CMD)
        .about("Build a signature payload from SigProfiler activity tables.")
        .arg(
            Arg::new("activities")
                .required(true)
                .help("Query activity table (TSV)"),
        )
        .arg(
            arg!(--reference <REFERENCE>)
                .required(true)
                .help("Reference cohort activity table (TSV)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output JSON path (default: stdout)"),
        )
}
