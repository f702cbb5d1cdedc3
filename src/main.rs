use barbershop::BuildMode;
use barbershop::core::config::{load_config, resolve};
use barbershop::core::seo::{Head, PageMeta};
use barbershop::core::state::Tab;
use barbershop::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "barbershop", about = "Sharp Corner Barbershop in your terminal")]
struct Args {
    /// Build mode (overrides BARBERSHOP_MODE and the config file)
    #[arg(short, long, value_enum)]
    mode: Option<BuildMode>,

    /// Print the document head for the home page as HTML and exit
    #[arg(long)]
    print_head: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}; falling back to defaults");
            Default::default()
        }
    };
    let resolved = resolve(&config, args.mode);

    // File logger only; stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if resolved.mode.is_development() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Barbershop starting up in {:?} mode", resolved.mode);

    if args.print_head {
        let mut head = Head::new();
        head.mount(&PageMeta::for_tab(Tab::Home));
        print!("{}", head.render_html());
        return Ok(());
    }

    tui::run(resolved)
}
