use super::config::AnnealConfig;
use super::error::EngineError;
use super::mutate::MutationOperator;
use super::progress::{Progress, ProgressReporter};
use super::scoring::ScoringModel;
use super::state::AssignmentState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    pub best_state: AssignmentState,
    pub best_score: f64,
    pub final_state: AssignmentState,
    pub final_score: f64,
    pub accepted: usize,
    pub steps: usize,
}

/// Metropolis-criterion random search over slot assignments, cooling
/// geometrically from `t_hot` to `t_cold` across the step budget. The step
/// budget is the sole termination condition.
pub struct Annealer {
    config: AnnealConfig,
}

impl Annealer {
    pub fn new(config: AnnealConfig) -> Self {
        Self { config }
    }

    #[instrument(skip_all, name = "anneal", fields(steps = self.config.steps))]
    pub fn run(
        &self,
        scoring: &mut ScoringModel,
        mutation: &MutationOperator,
        mut state: AssignmentState,
        reporter: &ProgressReporter,
    ) -> Result<AnnealOutcome, EngineError> {
        let cfg = &self.config;
        let mut rng = match cfg.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut current_score = scoring.score(&state)?;
        let mut best_state = state.clone();
        let mut best_score = current_score;
        info!(initial_score = current_score, "Starting annealing run");

        reporter.report(Progress::TaskStart {
            total_steps: cfg.steps as u64,
        });

        // Geometric cooling: temperature multiplied by a fixed ratio each
        // step so that step 0 runs at t_hot and the last step at t_cold.
        let ratio = if cfg.steps > 1 {
            (cfg.t_cold / cfg.t_hot).powf(1.0 / (cfg.steps - 1) as f64)
        } else {
            1.0
        };
        let mut temperature = cfg.t_hot;
        let mut accepted = 0usize;

        for step in 0..cfg.steps {
            let mv = mutation.mutate(&mut state, &mut rng);
            let candidate_score = scoring.score(&state)?;

            let accept = candidate_score < current_score
                || rng.gen_range(0.0..1.0)
                    < ((current_score - candidate_score) / temperature).exp();

            if accept {
                current_score = candidate_score;
                accepted += 1;
                if candidate_score < best_score {
                    best_score = candidate_score;
                    best_state = state.clone();
                    trace!(step, best_score, "New best state");
                }
            } else {
                mv.undo(&mut state);
            }

            reporter.report(Progress::TaskIncrement);
            if (step + 1) % cfg.report_every == 0 {
                reporter.report(Progress::AnnealStep {
                    step: step + 1,
                    temperature,
                    score: current_score,
                    best: best_score,
                });
                debug!(
                    step = step + 1,
                    temperature,
                    score = current_score,
                    best = best_score,
                    "Annealing progress"
                );
            }

            temperature *= ratio;
        }

        reporter.report(Progress::TaskFinish);
        info!(
            best_score,
            final_score = current_score,
            accepted,
            steps = cfg.steps,
            "Annealing run finished"
        );

        Ok(AnnealOutcome {
            best_state,
            best_score,
            final_state: state,
            final_score: current_score,
            accepted,
            steps: cfg.steps,
        })
    }
}
