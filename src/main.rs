use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use sheet_cms::config::{read_config_file, resolve_config, Sitemap};
use sheet_cms::generator::generate;
use sheet_cms::logger::configure_logger;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file. SHEET_CSV_URL and SITE_BASE still override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the pages and posts.json are written to
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Path of the page template
    #[arg(long)]
    template: Option<PathBuf>,

    /// Also write sitemap.xml next to the generated pages
    #[arg(long)]
    sitemap: bool,
}

fn main() {
    let args = Args::parse();

    let cfg_file = match args.config {
        Some(ref path) => match read_config_file(path) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        },
        None => None,
    };

    let mut config = match resolve_config(cfg_file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }
    if let Some(template) = args.template {
        config.template_path = template;
    }
    if args.sitemap && config.sitemap.is_none() {
        config.sitemap = Some(Sitemap::default());
    }

    if let Some(ref log) = config.log {
        if let Err(e) = configure_logger(log) {
            eprintln!("Error configuring logger: {}", e);
            exit(1);
        }
    }

    match generate(&config) {
        Ok(count) => println!("Generated: {} posts", count),
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    }
}
