// File: crates/minibar-demo/src/main.rs
// Summary: Demo loads a key/value dataset from CSV or JSON and renders a line or bar chart PNG.
//
// Usage: minibar-demo <data.csv|data.json> [--kind line|bar] [--config cfg.json] [--title TEXT] [-o out.png]

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use minibar_core::{ChartConfig, Dataset, SeriesKind, SkiaSurface};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

struct Args {
    input: PathBuf,
    kind: Option<SeriesKind>,
    config: Option<PathBuf>,
    title: Option<String>,
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let mut config = match &args.config {
        Some(p) => ChartConfig::from_json_file(p)
            .with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if args.title.is_some() {
        config.title = args.title.clone();
    }

    let data = load_dataset(&args.input)
        .with_context(|| format!("failed to load dataset '{}'", args.input.display()))?;
    info!(points = data.len(), input = %args.input.display(), "loaded dataset");
    if data.is_empty() {
        bail!("no rows loaded; check headers/delimiter.");
    }

    let range = data.range()?;
    info!(min = range.min, max = range.max, "value range");
    if range.is_degenerate() {
        warn!("all values are equal; points will be centered vertically");
    }

    let mut engine = config.build_engine::<SkiaSurface>()?;
    engine.draw_series(config.kind, &data, config.series_hex(), config.annotations())?;

    let out = args.output.clone().unwrap_or_else(|| out_name_with(&args.input, config.kind));
    engine.render_to_png(&out)?;
    info!(path = %out.display(), "wrote chart");
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut args = Args { input: PathBuf::new(), kind: None, config: None, title: None, output: None };
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("missing value for {flag}"));
        match arg.as_str() {
            "--kind" | "-k" => {
                args.kind = Some(match value("--kind")?.to_ascii_lowercase().as_str() {
                    "line" | "lines" => SeriesKind::Line,
                    "bar" | "bars" => SeriesKind::Bar,
                    other => bail!("unknown chart kind '{other}' (expected line or bar)"),
                })
            }
            "--config" | "-c" => args.config = Some(PathBuf::from(value("--config")?)),
            "--title" | "-t" => args.title = Some(value("--title")?),
            "--output" | "-o" => args.output = Some(PathBuf::from(value("--output")?)),
            s if s.starts_with('-') => bail!("unknown flag '{s}'"),
            other => input = Some(PathBuf::from(other)),
        }
    }
    args.input = input.context(
        "usage: minibar-demo <data.csv|data.json> [--kind line|bar] [--config cfg.json] [--title TEXT] [-o out.png]",
    )?;
    Ok(args)
}

/// Dispatch on extension: `.json` is an object of key -> number, anything else is CSV.
fn load_dataset(path: &Path) -> Result<Dataset> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("json") => load_json(path),
        _ => load_csv(path),
    }
}

/// JSON object whose key order is the x-axis order.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let map: IndexMap<String, serde_json::Value> = serde_json::from_str(&text)?;
    let mut data = Dataset::new();
    for (key, value) in map {
        match value {
            serde_json::Value::Number(n) => {
                let v = n.as_f64().with_context(|| format!("value for '{key}' out of range"))?;
                data.push(key, v)?;
            }
            serde_json::Value::String(s) => data.push_str(key, &s)?,
            other => bail!("value for '{key}' is not a number: {other}"),
        }
    }
    Ok(data)
}

/// Two-column CSV with a header row: key, value.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");
    if headers.len() < 2 {
        warn!("expected at least two columns (key, value)");
    }

    let mut data = Dataset::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let (Some(key), Some(raw)) = (rec.get(0), rec.get(1)) else {
            warn!(row, "skipping short record");
            continue;
        };
        data.push_str(key, raw).with_context(|| format!("row {}", row + 1))?;
    }
    Ok(data)
}

/// Produce output file name like target/out/chart_<stem>_<kind>.png
fn out_name_with(input: &Path, kind: SeriesKind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let suffix = match kind {
        SeriesKind::Line => "lines",
        SeriesKind::Bar => "bars",
    };
    PathBuf::from("target/out").join(format!("chart_{stem}_{suffix}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags_in_any_order() {
        let a = args(&["-o", "x.png", "data.csv", "--kind", "bar", "--title", "Sales"]).unwrap();
        assert_eq!(a.input, PathBuf::from("data.csv"));
        assert_eq!(a.kind, Some(SeriesKind::Bar));
        assert_eq!(a.title.as_deref(), Some("Sales"));
        assert_eq!(a.output, Some(PathBuf::from("x.png")));
    }

    #[test]
    fn rejects_missing_input_and_bad_kind() {
        assert!(args(&["--kind", "line"]).is_err());
        assert!(args(&["d.csv", "--kind", "pie"]).is_err());
        assert!(args(&["d.csv", "--kind"]).is_err());
        assert!(args(&["d.csv", "--bogus"]).is_err());
    }

    #[test]
    fn output_name_from_stem_and_kind() {
        let p = out_name_with(Path::new("data/sales.csv"), SeriesKind::Bar);
        assert_eq!(p, PathBuf::from("target/out/chart_sales_bars.png"));
    }

    #[test]
    fn json_keeps_key_order() {
        let dir = std::env::temp_dir().join("minibar-demo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("months.json");
        std::fs::write(&path, r#"{"Mar": 15, "Jan": 10, "Feb": "20"}"#).unwrap();
        let data = load_dataset(&path).unwrap();
        let keys: Vec<_> = data.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["Mar", "Jan", "Feb"]);
        assert_eq!(data.points()[2].value, 20.0);
    }

    #[test]
    fn csv_rejects_non_numeric_values() {
        let dir = std::env::temp_dir().join("minibar-demo-test");
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.csv");
        std::fs::write(&good, "month,total\nJan, 10\nFeb,20.5\n").unwrap();
        let data = load_dataset(&good).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.points()[1].value, 20.5);

        let bad = dir.join("bad.csv");
        std::fs::write(&bad, "month,total\nJan,ten\n").unwrap();
        assert!(load_dataset(&bad).is_err());
    }
}
