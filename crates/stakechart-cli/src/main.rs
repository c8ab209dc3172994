use serde::Serialize;
use stakechart::render::{DonutChart, SvgRenderOptions, sanitize_svg_id};
use stakechart::{ChartConfig, parse_allocation};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(stakechart::render::ChartError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<stakechart::render::ChartError> for CliError {
    fn from(value: stakechart::render::ChartError) -> Self {
        Self::Chart(value)
    }
}

impl From<stakechart::Error> for CliError {
    fn from(value: stakechart::Error) -> Self {
        Self::Chart(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    size: Option<f64>,
    depth: Option<f64>,
    background: Option<String>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "stakechart-cli\n\
\n\
USAGE:\n\
  stakechart-cli layout [--pretty] [--size <px>] [--depth <px>] [<path>|-]\n\
  stakechart-cli render [--size <px>] [--depth <px>] [--background <css-color>] [--id <diagram-id>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', allocation JSON is read from stdin.\n\
  - Input shape: {\"playerOwned\": 30, \"investorOwned\": 50, \"available\": 20, \"totalShares\": 100}\n\
  - layout prints the derived chart layout as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.size = Some(size.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--depth" => {
                let Some(depth) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.depth = Some(depth.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn chart_config(args: &Args) -> ChartConfig {
    let mut config = ChartConfig::default();
    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    config
}

fn run(argv: &[String]) -> Result<(), CliError> {
    let args = parse_args(argv)?;
    let text = read_input(args.input.as_deref())?;
    let allocation = parse_allocation(&text)?;

    let mut chart = DonutChart::new().with_config(chart_config(&args));
    chart.svg = SvgRenderOptions {
        diagram_id: args.diagram_id.as_deref().map(sanitize_svg_id),
        background: args.background.clone(),
    };

    match args.command {
        Command::Layout => {
            let layout = chart.layout(&allocation)?;
            write_json(&layout, args.pretty)?;
            println!();
        }
        Command::Render => {
            let svg = chart.render_svg(&allocation)?;
            write_text(&svg, args.out.as_deref())?;
        }
    }
    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
