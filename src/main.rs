use clap::{Parser, Subcommand};
use onepager::page::RevealMode;
use onepager::{config, content, output, page};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "onepager")]
#[command(about = "Single-page site generator with scroll-reveal motion")]
#[command(long_about = "\
Single-page site generator with scroll-reveal motion

Renders one landing page to a self-contained index.html: inline CSS, staggered
scroll reveals, a seamless marquee band, and a radial SVG emblem. Two small
TOML files drive everything:

  config.toml    # Palette, motion, and emblem settings (optional)
  copy.toml      # Page copy overrides, sparse (optional)

Both files are optional; missing files fall back to the stock site. Run
'onepager gen-config' for a documented config.toml.

The generated page carries ~30 lines of vanilla JavaScript for the reveal
behavior. Browsers without IntersectionObserver, and builds made with
--static-reveal, fail open: all content is simply visible.")]
#[command(version = version_string())]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Copy deck overrides
    #[arg(long, default_value = "copy.toml", global = true)]
    copy: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct RevealArgs {
    /// Render every region shown and emit no JavaScript
    #[arg(long)]
    static_reveal: bool,
}

impl RevealArgs {
    fn mode(&self) -> RevealMode {
        if self.static_reveal {
            RevealMode::Static
        } else {
            RevealMode::Scripted
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render the page into the output directory
    Build(RevealArgs),
    /// Validate config and copy without writing anything
    Check {
        #[command(flatten)]
        reveal: RevealArgs,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(reveal) => {
            let config = config::load_config(&cli.config)?;
            let deck = content::load_deck(&cli.copy)?;
            let report = page::build(&config, &deck, reveal.mode(), &cli.output)?;
            output::print_build_output(&report, &cli.output);
        }
        Command::Check { reveal, json } => {
            let config = config::load_config(&cli.config)?;
            let deck = content::load_deck(&cli.copy)?;
            let report = page::dry_run(&config, &deck, reveal.mode());
            if json {
                let check = output::CheckReport::from_build(&report);
                println!("{}", serde_json::to_string_pretty(&check)?);
            } else {
                println!("==> Checking {}", cli.config.display());
                output::print_check_output(&report);
                println!("==> Config and copy are valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
