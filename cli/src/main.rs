use clap::Parser;
use hostinv_core::{core::collect_inventory, structs::options::CollectionOptions};
use log::info;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory to write the <hostname>.json snapshot into
    #[clap(short, long, value_parser, default_value = ".")]
    directory: String,

    /// Include the MSI-registered installed software enumeration. Slow and may
    /// trigger repair actions in the installer service
    #[clap(long)]
    include_software: bool,

    /// Log level for inventory.log (error, warn, info, debug)
    #[clap(short, long, value_parser)]
    logging: Option<String>,
}

fn main() {
    let args = Args::parse();
    println!("[hostinv] Starting inventory collection!");

    let options = CollectionOptions {
        directory: args.directory,
        include_software: args.include_software,
        logging: args.logging,
    };

    let status = collect_inventory(&options);
    match status {
        Ok(_) => info!("[hostinv] Collection success"),
        Err(err) => {
            println!("[hostinv] Failed to collect inventory: {err}");
            std::process::exit(1);
        }
    }
    println!("[hostinv] Finished inventory collection!");
}
