#[cfg(feature = "cairo-backend")]
use chart_views::api::{ChartKind, ChartSettings, ChartView};
#[cfg(feature = "cairo-backend")]
use chart_views::core::Viewport;
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 640;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 480;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    settings_path: Option<PathBuf>,
    kind: ChartKind,
    viewport: Viewport,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = chart_views::telemetry::init_default_tracing();
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
    use chart_views::render::CairoRenderer;

    let args = parse_args()?;
    let json = fs::read(&args.input_path).map_err(|err| {
        format!(
            "failed to read chart json `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let settings = match &args.settings_path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| {
                format!("failed to read settings `{}`: {err}", path.display())
            })?;
            ChartSettings::from_json_compat_str(&raw)
                .map_err(|err| format!("invalid settings: {err}"))?
        }
        None => ChartSettings::default(),
    };

    let width = i32::try_from(args.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(args.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let renderer =
        CairoRenderer::new(width, height).map_err(|err| format!("renderer init failed: {err}"))?;

    let mut view = ChartView::from_json(renderer, args.kind, &json, settings)
        .map_err(|err| format!("chart rejected: {err}"))?;
    view.render(args.viewport)
        .map_err(|err| format!("render failed: {err}"))?;

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            format!("failed to create output dir `{}`: {err}", parent.display())
        })?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    let renderer = view.into_renderer();
    renderer
        .surface()
        .write_to_png(&mut file)
        .map_err(|err| format!("failed to write png `{}`: {err}", args.output_path.display()))?;

    let stats = renderer.last_stats();
    println!(
        "rendered {} chart -> {} ({} lines, {} arcs, {} texts)",
        args.kind.name(),
        args.output_path.display(),
        stats.lines_drawn,
        stats.arcs_drawn,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut settings_path: Option<PathBuf> = None;
    let mut kind = ChartKind::Bar;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--settings" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --settings".to_owned())?;
                settings_path = Some(PathBuf::from(value));
            }
            "--kind" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --kind".to_owned())?;
                kind = parse_kind(&value)?;
            }
            "--width" => {
                width = parse_dimension("--width", args.next())?;
            }
            "--height" => {
                height = parse_dimension("--height", args.next())?;
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

    let input_path = input_path.ok_or_else(|| format!("missing --input\n\n{}", usage_message()))?;
    let output_path = output_path.unwrap_or_else(|| input_path.with_extension("png"));

    Ok(CliArgs {
        input_path,
        output_path,
        settings_path,
        kind,
        viewport: Viewport::new(width, height),
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_kind(value: &str) -> Result<ChartKind, String> {
    match value {
        "bar" => Ok(ChartKind::Bar),
        "line" => Ok(ChartKind::Line),
        "donut" => Ok(ChartKind::Donut),
        other => Err(format!("unknown chart kind `{other}` (expected bar, line or donut)")),
    }
}

#[cfg(feature = "cairo-backend")]
fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{flag} must be a positive integer, got `{value}`")),
    }
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_chart_png -- --input <chart.json> [options]\n\nOptions:\n  --output <path>      PNG output path (default: input path with .png extension)\n  --kind <kind>        bar, line or donut (default: bar)\n  --settings <path>    Chart settings json (bare or schema v1 envelope)\n  --width <px>         Surface width (default: {DEFAULT_WIDTH})\n  --height <px>        Surface height (default: {DEFAULT_HEIGHT})\n  -h, --help           Show this message"
    )
}
