//! Yearly week-planner generator.
//!
//! One run produces two PDF documents for the configured year: a
//! primary one with a cover and one page per week, and a secondary one
//! with the same pages repacked two per sheet.

mod config;
mod generate;
mod logging;

use config::Config;

fn main() {
    logging::init();
    if let Err(e) = generate::run(&Config::default()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
