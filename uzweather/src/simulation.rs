//! Simulated report provider - stands in for a network call

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::Action;
use crate::cities::CityName;
use crate::report::{self, WeatherReport};

/// Default latency of the simulated call.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Runtime knobs for the simulated provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub delay: Duration,
    /// Fixed seed for reproducible reports; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_millis(delay_ms: u64, seed: Option<u64>) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            seed,
        }
    }

    pub fn build(&self) -> ReportSource {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ReportSource::new(rng, self.delay)
    }
}

/// Generates reports after an artificial delay.
///
/// Cloning shares the random generator, so clones handed to spawned tasks
/// draw from one sequence.
#[derive(Clone, Debug)]
pub struct ReportSource {
    rng: Arc<Mutex<StdRng>>,
    delay: Duration,
}

impl ReportSource {
    pub fn new(rng: StdRng, delay: Duration) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sample a report immediately.
    pub fn generate(&self, city: CityName) -> WeatherReport {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        report::generate(city, &mut *rng)
    }

    /// Resolve with a fresh report once the delay has elapsed. Never fails.
    pub fn request_report(
        &self,
        city: CityName,
    ) -> impl Future<Output = WeatherReport> + Send + 'static {
        let source = self.clone();
        async move {
            tokio::time::sleep(source.delay).await;
            source.generate(city)
        }
    }

    /// Task body for `Effect::RequestReport`: the delayed report, tagged with
    /// the id of the submission that asked for it.
    pub fn resolve(
        &self,
        city: CityName,
        request_id: u64,
    ) -> impl Future<Output = Action> + Send + 'static {
        let request = self.request_report(city);
        async move {
            let report = request.await;
            Action::LookupDidResolve { request_id, report }
        }
    }
}
