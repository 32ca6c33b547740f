use crate::cli::ReorderArgs;
use crate::config::FileConfig;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use stickyreorder::core::energetics::EnergeticsModel;
use stickyreorder::core::energetics::nearest_neighbor::NearestNeighborModel;
use stickyreorder::core::models::tileset::TileSet;
use stickyreorder::engine::progress::ProgressReporter;
use stickyreorder::workflows;
use tracing::info;

pub fn run(args: ReorderArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = file_config.merge_with_cli(&args)?;

    info!("Loading tile set from {:?}", &args.input);
    let tileset = TileSet::read_from_path(&args.input)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let models: Vec<Box<dyn EnergeticsModel>> = vec![Box::new(NearestNeighborModel::new())];

    println!("Starting sticky-end reordering...");
    let result = workflows::reorder::run(&tileset, &config, models, &reporter)?;

    result.tileset.write_to_path(&args.output)?;

    println!(
        "Reordering complete: score {:.4} -> {:.4} over {} steps ({} accepted).",
        result.initial_score, result.best_score, result.steps, result.accepted
    );
    if result.reassigned.is_empty() {
        println!("No ends were reassigned; the input ordering is already the best found.");
    } else {
        println!("{} end(s) reassigned:", result.reassigned.len());
        for r in &result.reassigned {
            println!("  {}: {} -> {}", r.name, r.old_sequence, r.new_sequence);
        }
    }
    println!("Reordered tile set written to: {}", args.output.display());

    Ok(())
}
