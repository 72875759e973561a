use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use printnest::io::svg::sheet_to_svg;
use rowfill::config::RowFillConfig;
use rowfill::io;
use rowfill::io::cli::Cli;
use rowfill::io::output::SelectionOutput;
use rowfill::strategy::select;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RowFillConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed RowFillConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file should have a valid UTF-8 name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let base_dir = args.input_file.parent().unwrap_or(Path::new("."));
    let design_items = io::resolve_items(ext_instance.items.clone(), base_dir);
    let selection = select(&design_items, ext_instance.sheet, &config)?;

    let best = selection.best();
    info!(
        "[MAIN] best strategy: {} ({} sheet(s), {:.1}% efficiency)",
        best.name, best.result.sheets_used, best.result.efficiency
    );

    for sheet in 1..=best.result.sheets_used {
        let svg = sheet_to_svg(
            &best.result,
            &best.sheet,
            sheet,
            config.svg_draw_options,
            &best.name,
        );
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_stem}_{sheet}.svg"));
        io::write_svg(&svg, &svg_path)?;
    }

    let output = SelectionOutput {
        instance: ext_instance,
        selection,
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
