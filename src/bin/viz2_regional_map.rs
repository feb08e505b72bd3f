//! Visualization 2: devotion choropleth by state with the state comparison overlay.
//! Run: cargo run --bin viz2_regional_map

use petviz::generate::Step;
use petviz::{cli, logging};

fn main() {
    logging::init();
    std::process::exit(cli::run_step(Step::Map));
}
