//! Regenerate all three visualizations, each as its own process, stopping at the first failure.
//! Run: cargo build --bins && cargo run --bin generate_all_visualizations

use petviz::{cli, logging};

fn main() {
    logging::init();
    std::process::exit(cli::run_all());
}
