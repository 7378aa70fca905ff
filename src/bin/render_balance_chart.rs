#[cfg(feature = "cairo-backend")]
use balance_chart::api::{BalanceChart, BalanceChartConfig};
#[cfg(feature = "cairo-backend")]
use balance_chart::core::Viewport;
#[cfg(feature = "cairo-backend")]
use balance_chart::dashboard::{BankData, HomeScreenModel};
#[cfg(feature = "cairo-backend")]
use balance_chart::render::CairoRenderer;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "balance_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 360;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 240;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    data_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    width: u32,
    height: u32,
    pointer_x: Option<f64>,
    tap_label: Option<usize>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = balance_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;

    if let Some(path) = &args.data_path {
        let data = BankData::from_json_path(path).map_err(|err| {
            format!("failed to load dashboard data `{}`: {err}", path.display())
        })?;
        let home = HomeScreenModel::from_bank_data(&data).map_err(|err| err.to_string())?;
        println!(
            "balance {} | {} recipients | {} transactions",
            home.balance_text,
            home.recipients.all.len(),
            home.transactions.len()
        );
    }

    let viewport = Viewport::new(args.width, args.height);
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            let mut config = BalanceChartConfig::from_json_str(&raw)
                .map_err(|err| format!("invalid config `{}`: {err}", path.display()))?;
            config.viewport = viewport;
            config
        }
        None => BalanceChartConfig::dashboard(viewport).map_err(|err| err.to_string())?,
    };

    let renderer = CairoRenderer::new(args.width as i32, args.height as i32)
        .map_err(|err| err.to_string())?;
    let mut chart = BalanceChart::new(renderer, config).map_err(|err| err.to_string())?;

    if let Some(index) = args.tap_label {
        chart.on_label_tap(index);
    }
    if let Some(x) = args.pointer_x {
        chart.on_viewport_pointer_move(x);
    }

    chart.render().map_err(|err| err.to_string())?;
    chart
        .renderer()
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    let snapshot = chart
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    println!("{snapshot}");
    println!("wrote {}", args.output_path.display());
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        data_path: None,
        config_path: None,
        output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        pointer_x: None,
        tap_label: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--data" => parsed.data_path = Some(PathBuf::from(value("--data")?)),
            "--config" => parsed.config_path = Some(PathBuf::from(value("--config")?)),
            "--output" => parsed.output_path = PathBuf::from(value("--output")?),
            "--width" => parsed.width = parse_number(&value("--width")?, "--width")?,
            "--height" => parsed.height = parse_number(&value("--height")?, "--height")?,
            "--pointer-x" => {
                parsed.pointer_x = Some(parse_number(&value("--pointer-x")?, "--pointer-x")?);
            }
            "--tap-label" => {
                parsed.tap_label = Some(parse_number(&value("--tap-label")?, "--tap-label")?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    if parsed.width == 0 || parsed.height == 0 {
        return Err("--width and --height must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(feature = "cairo-backend")]
fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value `{raw}` for {name}"))
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_balance_chart -- [options]\n\nOptions:\n  --data <path>        Dashboard dataset to validate and summarize\n  --config <path>      Chart config JSON (default: dashboard series)\n  --output <path>      PNG output path (default: {DEFAULT_OUTPUT_PATH})\n  --width <px>         Viewport width (default: {DEFAULT_WIDTH})\n  --height <px>        Viewport height (default: {DEFAULT_HEIGHT})\n  --pointer-x <px>     Move the scrubber to viewport x\n  --tap-label <index>  Tap the x-axis label of sample index\n  -h, --help           Show this message"
    )
}
