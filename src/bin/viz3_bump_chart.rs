//! Visualization 3: bump chart of breed popularity rankings by year.
//! Run: cargo run --bin viz3_bump_chart

use petviz::generate::Step;
use petviz::{cli, logging};

fn main() {
    logging::init();
    std::process::exit(cli::run_step(Step::Bump));
}
