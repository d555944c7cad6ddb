//! `imbed name <url>` – preview the generated local filename.

use imbed_core::config::Settings;
use imbed_core::filename;

pub fn run_name(url: &str, settings: &Settings) {
    let name = filename::generate_filename(url, &settings.naming_policy());
    println!("{}", name);
}
