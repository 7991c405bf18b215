// emit.rs - Persisted cluster list
//
// Format read by the grass loader (a RON newtype around a list of tuples):
//
//   ([(value,x,y,w,h), (value,x,y,w,h), ...])
//
// The wrapper and separators must be reproduced byte for byte. A zero value
// is written as `0`; any other value as the shortest round-trip decimal
// (`0.5`, `1.0`, `0.5773502691896258`).

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::cluster::Cluster;
use crate::error::Result;

#[derive(Deserialize)]
struct ClusterFile(Vec<(f64, u32, u32, u32, u32)>);

fn fmt_value(out: &mut String, value: f64) {
    if value == 0.0 {
        out.push('0');
    } else {
        let _ = write!(out, "{:?}", value);
    }
}

/// Render clusters to the persisted text form.
pub fn to_text(clusters: &[Cluster]) -> String {
    let mut out = String::with_capacity(clusters.len() * 28 + 4);
    out.push_str("([");
    for (i, c) in clusters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('(');
        fmt_value(&mut out, c.value);
        let _ = write!(out, ",{},{},{},{})", c.x, c.y, c.w, c.h);
    }
    out.push_str("])");
    out
}

pub fn write_clusters<W: Write>(writer: &mut W, clusters: &[Cluster]) -> Result<()> {
    writer.write_all(to_text(clusters).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn save(path: &Path, clusters: &[Cluster]) -> Result<()> {
    info!("Writing {} boxes to {}", clusters.len(), path.display());
    let mut f = BufWriter::new(File::create(path)?);
    write_clusters(&mut f, clusters)
}

/// Parse persisted text back into clusters.
pub fn parse_clusters(text: &str) -> Result<Vec<Cluster>> {
    let ClusterFile(entries) = ron::from_str(text)?;
    Ok(entries
        .into_iter()
        .map(|(value, x, y, w, h)| Cluster::new(value, x, y, w, h))
        .collect())
}

pub fn read_clusters(path: &Path) -> Result<Vec<Cluster>> {
    let text = std::fs::read_to_string(path)?;
    parse_clusters(&text)
}
