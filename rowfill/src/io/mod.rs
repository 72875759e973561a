use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::EPOCH;
use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use printnest::entities::DesignItem;
use printnest::io::ext_repr::{ExtInstance, ExtItem};
use printnest_utils::dimensions::resolve_file;
use serde::Serialize;
use svg::Document;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path).context("could not open instance file")?;
    serde_json::from_reader(BufReader::new(file))
        .context("not a valid packing request (sheet and items)")
}

/// Converts the items of a request into packer input.
/// File-backed items are measured with the dimension resolver, which never fails.
/// Relative file paths are taken relative to `base_dir`.
pub fn resolve_items(items: Vec<ExtItem>, base_dir: &Path) -> Vec<DesignItem> {
    items
        .into_iter()
        .map(|ext_item| match ext_item {
            ExtItem::Sized(design_item) => design_item,
            ExtItem::File(file_item) => {
                let filename = file_item
                    .file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let path = base_dir.join(&file_item.file);
                let report = resolve_file(&path, file_item.mime_type.as_deref(), &filename);
                for note in &report.processing_notes {
                    warn!("[ROWFILL] {}: {note}", path.display());
                }
                info!(
                    "[ROWFILL] resolved {} to {:.1} x {:.1} mm ({}, confidence {:.2})",
                    path.display(),
                    report.width_mm,
                    report.height_mm,
                    report.category,
                    report.confidence
                );
                let name = match file_item.name.is_empty() {
                    true => filename,
                    false => file_item.name,
                };
                report
                    .into_design_item(file_item.id, name)
                    .with_priority(file_item.priority)
            }
        })
        .collect()
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)?;
    info!(
        "[IO] solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).context("could not write svg file")?;
    info!(
        "[IO] SVG written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
