use crate::core::energetics::EnergeticsModel;
use crate::core::models::end::EndClass;
use crate::core::models::pool::EndPool;
use crate::core::models::sequence::DnaSequence;
use crate::core::models::tileset::TileSet;
use crate::engine::anneal::Annealer;
use crate::engine::config::{EndSelection, ReorderConfig};
use crate::engine::error::EngineError;
use crate::engine::mutate::MutationOperator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scoring::ScoringModel;
use crate::engine::state::AssignmentState;
use tracing::{info, instrument};

/// One end whose sequence changed during reordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Reassignment {
    pub name: String,
    pub old_sequence: DnaSequence,
    pub new_sequence: DnaSequence,
}

#[derive(Debug, Clone)]
pub struct ReorderResult {
    /// The input tile set with the best-found sequence assignments written
    /// back into its end list.
    pub tileset: TileSet,
    pub initial_score: f64,
    pub best_score: f64,
    pub accepted: usize,
    pub steps: usize,
    pub reassigned: Vec<Reassignment>,
}

/// Runs a complete reordering pass: build the per-class pools, calibrate the
/// scoring model, anneal from the identity assignment, and read the best
/// permutation back into a new tile-set document.
#[instrument(skip_all, name = "reorder_workflow")]
pub fn run(
    tileset: &TileSet,
    config: &ReorderConfig,
    models: Vec<Box<dyn EnergeticsModel>>,
    reporter: &ProgressReporter,
) -> Result<ReorderResult, EngineError> {
    // === Phase 0: Preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    tileset.validate()?;

    let td = EndPool::from_tileset(tileset, EndClass::Td);
    let dt = EndPool::from_tileset(tileset, EndClass::Dt);
    if td.is_empty() && dt.is_empty() {
        return Err(EngineError::NothingToOptimize);
    }
    info!(
        td_ends = td.len(),
        dt_ends = dt.len(),
        pairs = tileset.pair_classes.len(),
        "Built orientation-class pools"
    );

    let mutable_td = resolve_mutable_slots(&td, &config.mutable_ends, &dt)?;
    let mutable_dt = resolve_mutable_slots(&dt, &config.mutable_ends, &td)?;
    let mutation = MutationOperator::new(mutable_td, mutable_dt)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 1: Calibration ===
    reporter.report(Progress::PhaseStart {
        name: "Calibration",
    });
    let mut scoring = ScoringModel::new(
        td.clone(),
        dt.clone(),
        models,
        &tileset.pair_classes,
        &tileset.input_pairs,
    )?;
    let state = AssignmentState::identity(td.len(), dt.len());
    let initial_score = scoring.score(&state)?;
    info!(initial_score, "Scored identity assignment");
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Annealing ===
    reporter.report(Progress::PhaseStart { name: "Annealing" });
    let annealer = Annealer::new(config.anneal.clone());
    let outcome = annealer.run(&mut scoring, &mutation, state, reporter)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Readback ===
    let mut result_tileset = tileset.clone();
    let mut reassigned = Vec::new();
    for (pool, class) in [(&td, EndClass::Td), (&dt, EndClass::Dt)] {
        let perm = outcome.best_state.perm(class);
        for slot in 0..pool.len() {
            let new_sequence = pool.sequence(perm[slot]);
            if new_sequence != pool.sequence(slot) {
                result_tileset.set_end_sequence(pool.name(slot), new_sequence.clone())?;
                reassigned.push(Reassignment {
                    name: pool.name(slot).to_string(),
                    old_sequence: pool.sequence(slot).clone(),
                    new_sequence: new_sequence.clone(),
                });
            }
        }
    }

    info!(
        initial_score,
        best_score = outcome.best_score,
        reassigned = reassigned.len(),
        "Reorder workflow complete"
    );

    Ok(ReorderResult {
        tileset: result_tileset,
        initial_score,
        best_score: outcome.best_score,
        accepted: outcome.accepted,
        steps: outcome.steps,
        reassigned,
    })
}

/// Translate the end selection into mutable slot indices for one pool.
/// Names are checked against both pools so that a typo is reported instead
/// of silently freezing an end.
fn resolve_mutable_slots(
    pool: &EndPool,
    selection: &EndSelection,
    other_pool: &EndPool,
) -> Result<Vec<usize>, EngineError> {
    match selection {
        EndSelection::All => Ok((0..pool.len()).collect()),
        EndSelection::List { include, exclude } => {
            for name in include.iter().chain(exclude.iter()) {
                if pool.slot_of(name).is_none() && other_pool.slot_of(name).is_none() {
                    return Err(EngineError::UnknownEnd(name.clone()));
                }
            }
            let mut slots: Vec<usize> = if include.is_empty() {
                (0..pool.len()).collect()
            } else {
                include.iter().filter_map(|n| pool.slot_of(n)).collect()
            };
            slots.sort_unstable();
            slots.dedup();
            slots.retain(|&slot| {
                !exclude
                    .iter()
                    .any(|n| pool.slot_of(n) == Some(slot))
            });
            Ok(slots)
        }
    }
}
