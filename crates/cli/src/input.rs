//! Point sources: whitespace-separated text files and CSV files.
//!
//! Text files are a token stream of numbers read as consecutive `x y` pairs;
//! line breaks are not significant. CSV files need `x` and `y` columns.

use anyhow::{anyhow, bail, Context, Result};
use closest::Point;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read points from `path`, dispatching on the `.csv` extension.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return read_csv(path);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not open '{}'", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a token stream of finite numbers into points.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut out = Vec::new();
    let mut pending: Option<f64> = None;
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        for tok in line.split_whitespace() {
            let v: f64 = tok
                .parse()
                .with_context(|| format!("line {lineno}: invalid number '{tok}'"))?;
            if !v.is_finite() {
                bail!("line {lineno}: non-finite coordinate '{tok}'");
            }
            match pending.take() {
                None => pending = Some(v),
                Some(x) => out.push(Point::new(x, v)),
            }
        }
    }
    if let Some(x) = pending {
        bail!("trailing x coordinate {x} has no matching y");
    }
    Ok(out)
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    if !path.exists() {
        bail!("could not open '{}'", path.display());
    }
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Point::new(x, y)),
            _ => Err(anyhow!("row {}: missing or non-finite coordinate", row + 1)),
        })
        .collect()
}
