use super::cache::EnergyCache;
use super::calibrate::MultiplierTable;
use super::error::EngineError;
use super::state::AssignmentState;
use crate::core::energetics::{EnergeticsModel, PairKind};
use crate::core::models::classify::{ClassifiedPair, PairClass};
use crate::core::models::end::{EndClass, EndRef};
use crate::core::models::pool::EndPool;
use crate::core::models::tileset::{InputPair, InputPolarity};
use tracing::debug;

/// Everything that is per-energetics-model: the model itself, one energy
/// cache per orientation class, and the calibrated multiplier table.
struct ModelTables {
    model: Box<dyn EnergeticsModel>,
    cache_td: EnergyCache,
    cache_dt: EnergyCache,
    multipliers: MultiplierTable,
}

/// A classification entry resolved against the pools: slot indices instead
/// of names, and the cache kind implied by the two complement flags.
#[derive(Debug, Clone, Copy)]
struct ResolvedPair {
    class: EndClass,
    x_slot: usize,
    y_slot: usize,
    kind: PairKind,
    label: PairClass,
}

/// One input port resolved to its slot and the self-binding cache kind
/// fixed by its declared polarity.
#[derive(Debug, Clone, Copy)]
struct ResolvedPort {
    class: EndClass,
    slot: usize,
    kind: PairKind,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedInputPair {
    a: ResolvedPort,
    b: ResolvedPort,
}

/// The two additive components of a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTerms {
    /// Spread penalty over designated input-pair self-binding strengths.
    pub input: f64,
    /// Sum of weighted, exponentiated classified-pair energies.
    pub pairs: f64,
}

impl ScoreTerms {
    pub fn total(&self) -> f64 {
        self.input + self.pairs
    }
}

/// Scores a candidate slot assignment: classified end pairs contribute
/// `multiplier[class] * exp(energy)`, input pairs contribute a spread
/// penalty over their self-binding strengths. With several energetics
/// models, every term is the mean over the models; one model is just the
/// length-1 case of the same code path.
pub struct ScoringModel {
    td: EndPool,
    dt: EndPool,
    models: Vec<ModelTables>,
    pairs: Vec<ResolvedPair>,
    input_pairs: Vec<ResolvedInputPair>,
}

impl ScoringModel {
    pub fn new(
        td: EndPool,
        dt: EndPool,
        models: Vec<Box<dyn EnergeticsModel>>,
        classified: &[ClassifiedPair],
        input_pairs: &[InputPair],
    ) -> Result<Self, EngineError> {
        if models.is_empty() {
            return Err(EngineError::NoEnergeticsModel);
        }

        let mut pairs = Vec::with_capacity(classified.len());
        for entry in classified {
            let (class_a, x_slot) = locate(&td, &dt, &entry.a)?;
            let (class_b, y_slot) = locate(&td, &dt, &entry.b)?;
            if class_a != class_b {
                // Classification cannot mix the two strand orientations;
                // such entries carry no meaning and are skipped.
                debug!(
                    a = %entry.a,
                    b = %entry.b,
                    "Skipping cross-class pair classification"
                );
                continue;
            }
            pairs.push(ResolvedPair {
                class: class_a,
                x_slot,
                y_slot,
                kind: PairKind::from_sides(entry.a.is_complement, entry.b.is_complement),
                label: entry.class,
            });
        }

        let mut resolved_inputs = Vec::with_capacity(input_pairs.len());
        for pair in input_pairs {
            resolved_inputs.push(ResolvedInputPair {
                a: resolve_port(&td, &dt, &pair.a.name, pair.a.polarity)?,
                b: resolve_port(&td, &dt, &pair.b.name, pair.b.polarity)?,
            });
        }

        let mut tables = Vec::with_capacity(models.len());
        for model in models {
            let multipliers = MultiplierTable::calibrate(model.as_ref(), &td, &dt)?;
            tables.push(ModelTables {
                cache_td: EnergyCache::new(EndClass::Td, td.len()),
                cache_dt: EnergyCache::new(EndClass::Dt, dt.len()),
                multipliers,
                model,
            });
        }

        Ok(Self {
            td,
            dt,
            models: tables,
            pairs,
            input_pairs: resolved_inputs,
        })
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn classified_pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Takes `&mut self` because energies are filled into the caches lazily
    /// on first touch; the caches are never invalidated.
    pub fn score(&mut self, state: &AssignmentState) -> Result<f64, EngineError> {
        Ok(self.score_terms(state)?.total())
    }

    pub fn score_terms(&mut self, state: &AssignmentState) -> Result<ScoreTerms, EngineError> {
        let model_count = self.models.len() as f64;

        let mut input = 0.0;
        if !self.input_pairs.is_empty() {
            for tables in &mut self.models {
                let mut strengths = Vec::with_capacity(self.input_pairs.len());
                for pair in &self.input_pairs {
                    let e_a = port_self_energy(&self.td, &self.dt, tables, state, &pair.a)?;
                    let e_b = port_self_energy(&self.td, &self.dt, tables, state, &pair.b)?;
                    // Legacy arithmetic kept bit-for-bit: the two
                    // self-energies are summed before the absolute value.
                    strengths.push((e_a + e_b).abs());
                }
                let spread = spread_of(&strengths);
                input += tables.multipliers.get(PairClass::Identity) * spread.exp();
            }
            input /= model_count;
        }

        let mut pair_total = 0.0;
        for pair in &self.pairs {
            let perm = state.perm(pair.class);
            let x = perm[pair.x_slot];
            let y = perm[pair.y_slot];
            let mut term = 0.0;
            for tables in &mut self.models {
                let ModelTables {
                    model,
                    cache_td,
                    cache_dt,
                    multipliers,
                } = tables;
                let (cache, pool) = match pair.class {
                    EndClass::Td => (cache_td, &self.td),
                    EndClass::Dt => (cache_dt, &self.dt),
                };
                let energy = cache.get(pair.kind, x, y, model.as_ref(), pool)?;
                term += multipliers.get(pair.label) * energy.exp();
            }
            pair_total += term / model_count;
        }

        Ok(ScoreTerms {
            input,
            pairs: pair_total,
        })
    }
}

fn locate(td: &EndPool, dt: &EndPool, end_ref: &EndRef) -> Result<(EndClass, usize), EngineError> {
    if let Some(slot) = td.slot_of(&end_ref.name) {
        Ok((EndClass::Td, slot))
    } else if let Some(slot) = dt.slot_of(&end_ref.name) {
        Ok((EndClass::Dt, slot))
    } else {
        Err(EngineError::UnknownEnd(end_ref.name.clone()))
    }
}

fn resolve_port(
    td: &EndPool,
    dt: &EndPool,
    name: &str,
    polarity: InputPolarity,
) -> Result<ResolvedPort, EngineError> {
    let (class, slot) = locate(td, dt, &EndRef::plain(name))?;
    let kind = match polarity {
        InputPolarity::Sequence => PairKind::SelfComp,
        InputPolarity::Complement => PairKind::CompSelf,
    };
    Ok(ResolvedPort { class, slot, kind })
}

/// Self-binding energy of the sequence currently assigned to the port's
/// slot, with the strand orientation fixed by the port's polarity.
fn port_self_energy(
    td: &EndPool,
    dt: &EndPool,
    tables: &mut ModelTables,
    state: &AssignmentState,
    port: &ResolvedPort,
) -> Result<f64, EngineError> {
    let base = state.perm(port.class)[port.slot];
    let ModelTables {
        model,
        cache_td,
        cache_dt,
        ..
    } = tables;
    let (cache, pool) = match port.class {
        EndClass::Td => (cache_td, td),
        EndClass::Dt => (cache_dt, dt),
    };
    cache.get(port.kind, base, base, model.as_ref(), pool)
}

/// Max minus min; zero for fewer than two values.
fn spread_of(values: &[f64]) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if values.is_empty() { 0.0 } else { max - min }
}
