//! Visualization 1: pet ownership bar chart (households per species, shaded by share).
//! Run: cargo run --bin viz1_pet_ownership

use petviz::generate::Step;
use petviz::{cli, logging};

fn main() {
    logging::init();
    std::process::exit(cli::run_step(Step::Ownership));
}
