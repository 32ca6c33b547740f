use crate::cli::ScoreArgs;
use crate::error::Result;
use stickyreorder::core::energetics::EnergeticsModel;
use stickyreorder::core::energetics::nearest_neighbor::NearestNeighborModel;
use stickyreorder::core::models::end::EndClass;
use stickyreorder::core::models::pool::EndPool;
use stickyreorder::core::models::tileset::TileSet;
use stickyreorder::engine::scoring::ScoringModel;
use stickyreorder::engine::state::AssignmentState;
use tracing::info;

pub fn run(args: ScoreArgs) -> Result<()> {
    info!("Loading tile set from {:?}", &args.input);
    let tileset = TileSet::read_from_path(&args.input)?;

    let td = EndPool::from_tileset(&tileset, EndClass::Td);
    let dt = EndPool::from_tileset(&tileset, EndClass::Dt);
    let models: Vec<Box<dyn EnergeticsModel>> = vec![Box::new(NearestNeighborModel::new())];

    let mut scoring = ScoringModel::new(
        td.clone(),
        dt.clone(),
        models,
        &tileset.pair_classes,
        &tileset.input_pairs,
    )?;
    let state = AssignmentState::identity(td.len(), dt.len());
    let terms = scoring.score_terms(&state)?;

    println!("Tile set: {}", args.input.display());
    println!(
        "  ends: {} TD, {} DT; classified pairs scored: {}",
        td.len(),
        dt.len(),
        scoring.classified_pair_count()
    );
    println!("  input-pair spread term: {:.6}", terms.input);
    println!("  classified-pair term:   {:.6}", terms.pairs);
    println!("  total score:            {:.6}", terms.total());

    Ok(())
}
