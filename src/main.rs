// src/main.rs
use tour_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    match cli::run() {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
