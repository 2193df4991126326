use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdsite::Config;
use mdsite::site::build_site;

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown content")]
struct Cli {
    /// Base path the site is served from (e.g. "/" or "/blog/")
    base_path: Option<String>,

    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Directory of Markdown content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static files to copy
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (deleted and rebuilt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with title and content placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        let site = &mut config.site;
        if let Some(base_path) = self.base_path {
            site.base_path = base_path;
        }
        if let Some(content) = self.content {
            site.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            site.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            site.output_dir = output;
        }
        if let Some(template) = self.template {
            site.template = template;
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    let summary = match build_site(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Built {} pages ({} static files) into {}",
        summary.pages,
        summary.static_files,
        config.site.output_dir.display()
    );
}
