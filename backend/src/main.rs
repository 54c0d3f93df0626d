//! Wellmap CLI - Contour heatmaps for vertical vs horizontal wells
//!
//! # Commands
//!
//! ```bash
//! wellmap serve                          # Start HTTP server (port 3000)
//! wellmap inspect data.csv               # Summarize axes, units and bounds
//! wellmap view data.csv --metric 9       # Print the view JSON for one selection
//! wellmap metrics                        # List selectable metrics
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use wellmap::{compute_view, load_dataset, metric_options, Config, Metric, ViewRequest};

#[derive(Parser)]
#[command(name = "wellmap")]
#[command(about = "Contour heatmaps of vertical vs horizontal well economics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: WELLMAP_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the built dashboard to serve at /
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Table delimiter (default: WELLMAP_DELIMITER or ';')
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Load a table and summarize its grids
    Inspect {
        /// Input table
        input: PathBuf,

        /// Table delimiter
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the view for one control selection
    View {
        /// Input table
        input: PathBuf,

        /// Metric id (1-10)
        #[arg(short, long, default_value_t = Metric::DEFAULT.id())]
        metric: u8,

        /// Lower end of the color window
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        v_min: f64,

        /// Upper end of the color window
        #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
        v_max: f64,

        /// Contour step
        #[arg(short, long, default_value_t = 0.5)]
        granularity: f64,

        /// Table delimiter
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List selectable metrics
    Metrics,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match cli.command {
        Commands::Serve {
            port,
            static_dir,
            delimiter,
        } => {
            cmd_serve(
                config
                    .with_port(port)
                    .with_static_dir(static_dir)
                    .with_delimiter(delimiter),
            )
            .await
        }

        Commands::Inspect {
            input,
            delimiter,
            json,
        } => cmd_inspect(&input, delimiter.unwrap_or(config.delimiter), json),

        Commands::View {
            input,
            metric,
            v_min,
            v_max,
            granularity,
            delimiter,
            output,
        } => {
            let request = ViewRequest {
                metric,
                v_min,
                v_max,
                granularity,
                file_path: Some(input.display().to_string()),
                submit_clicks: 1,
            };
            cmd_view(&input, &request, delimiter.unwrap_or(config.delimiter), output.as_deref())
        }

        Commands::Metrics => cmd_metrics(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    wellmap::server::start_server(config).await?;
    Ok(())
}

fn cmd_inspect(input: &Path, delimiter: char, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Inspecting: {}", input.display());

    let data = load_dataset(input, delimiter)?;
    let summary = data.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Records:      {}", summary.record_count);
    println!("Grid:         {} x {}", summary.rows, summary.cols);
    println!("Rows ({}):  {}", summary.perm_header, format_axis(&summary.perms));
    println!("Cols ({}):  {}", summary.height_header, format_axis(&summary.heights));
    println!();
    for metric in Metric::ALL {
        let unit = summary.units.get(&metric.id()).map(String::as_str).unwrap_or("-");
        match summary.eur_bounds.get(&metric.id()) {
            Some(b) => println!(
                "  {:>2}  {:<32} {:<8} [{} .. {}]",
                metric.id(),
                metric.label(),
                unit,
                b.min,
                b.max
            ),
            None => println!("  {:>2}  {:<32} {}", metric.id(), metric.label(), unit),
        }
    }

    Ok(())
}

fn cmd_view(
    input: &Path,
    request: &ViewRequest,
    delimiter: char,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("🗺️  Computing view: {}", input.display());

    let data = load_dataset(input, delimiter)?;
    let view = compute_view(request, &data)?;

    eprintln!("   Metric: {} ({})", view.metric, view.title);
    let json = serde_json::to_string_pretty(&view)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_metrics() -> Result<(), Box<dyn std::error::Error>> {
    for option in metric_options() {
        println!("{:>2}  {}", option.value, option.label);
    }
    Ok(())
}

fn format_axis(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
