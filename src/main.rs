use anyhow::{bail, Result};
use clap::Parser;
use volby_scraper::fetch::HttpFetcher;
use volby_scraper::{aggregate, debug, districts, export};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Scraper for the 2017 Czech parliamentary election results on volby.cz"
)]
struct Args {
    /// District (okres) name, exactly as listed on the results site
    district: String,

    /// Path to output CSV file
    output: String,

    /// Enable debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // clap exits with code 2 on usage errors; argument errors here exit 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            std::process::exit(1);
        }
    };
    debug::set_debug(args.debug);

    let fetcher = HttpFetcher::new()?;

    let districts = districts::fetch_districts(&fetcher)?;
    let district_url = match districts.get(&args.district) {
        Some(url) => url,
        None => bail!("District '{}' not found", args.district),
    };

    println!("Scraping district '{}'", args.district);
    let rows = aggregate::scrape_district(&fetcher, district_url)?;
    export::save_rows_to_csv(&rows, &args.output)?;

    Ok(())
}
