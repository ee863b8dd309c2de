//! Runs the color analysis and the algorithm demos.

use rand::Rng;
use tracing::{debug, info, warn};

use super::report::{
    ColorStats, DemoReport, FibonacciReport, PersistenceOutcome, SearchReport,
};
use crate::adapter::outbound::sqlite::SqliteFrequencyStore;
use crate::domain::algorithm::{fibonacci_sum, linear_search, BinaryNumber};
use crate::domain::{ColorAnalyzer, FrequencyTable};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::{FrequencyStore, SaveReport};

/// Main application struct.
pub struct App {
    config: Config,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run against the configured SQLite database.
    ///
    /// A persistence failure is logged and recorded in the report; it does
    /// not fail the run.
    ///
    /// # Errors
    ///
    /// Returns an error when a statistic or the Fibonacci sum is undefined
    /// for the configured input.
    pub fn run(&self, persist: bool) -> Result<DemoReport> {
        let persist = persist && self.config.database.enabled;
        self.run_with(
            |table| {
                if !persist {
                    return None;
                }
                Some(
                    SqliteFrequencyStore::connect(&self.config.database)
                        .and_then(|store| store.save(table)),
                )
            },
            &mut rand::thread_rng(),
        )
    }

    /// Run against an explicit store and random source.
    ///
    /// # Errors
    ///
    /// See [`App::run`].
    pub fn run_with_store<S, R>(&self, store: &S, rng: &mut R) -> Result<DemoReport>
    where
        S: FrequencyStore + ?Sized,
        R: Rng + ?Sized,
    {
        self.run_with(|table| Some(store.save(table)), rng)
    }

    fn run_with<P, R>(&self, persist: P, rng: &mut R) -> Result<DemoReport>
    where
        P: FnOnce(&FrequencyTable) -> Option<Result<SaveReport>>,
        R: Rng + ?Sized,
    {
        let survey = &self.config.survey;
        let analyzer = ColorAnalyzer::new(&survey.observations);
        debug!(
            observations = analyzer.observations(),
            labels = analyzer.table().len(),
            "frequency table built"
        );

        let stats = ColorStats::compute(&analyzer, &survey.probability_label)?;
        let persistence = Self::outcome(persist(analyzer.table()));

        let search = &self.config.search;
        let found = linear_search(&search.numbers, search.target, search.start);
        let search = SearchReport::new(search.numbers.clone(), search.target, search.start, found);

        let binary = BinaryNumber::generate(rng);

        let terms = self.config.fibonacci.terms;
        let fibonacci = FibonacciReport {
            terms,
            sum: fibonacci_sum(terms)?,
        };

        Ok(DemoReport {
            stats,
            persistence,
            search,
            binary,
            fibonacci,
        })
    }

    fn outcome(result: Option<Result<SaveReport>>) -> PersistenceOutcome {
        match result {
            None => {
                debug!("persistence skipped");
                PersistenceOutcome::Skipped
            }
            Some(Ok(report)) => {
                info!(
                    inserted = report.inserted,
                    updated = report.updated,
                    "color frequencies saved"
                );
                PersistenceOutcome::Saved(report)
            }
            Some(Err(e)) => {
                warn!(error = %e, "failed to save color frequencies");
                PersistenceOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryFrequencyStore;
    use crate::error::{Error, StatsError};
    use crate::infrastructure::config::survey::SurveyConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FailingStore;

    impl FrequencyStore for FailingStore {
        fn save(&self, _table: &FrequencyTable) -> Result<SaveReport> {
            Err(Error::Connection("connection refused".into()))
        }

        fn load_all(&self) -> Result<Vec<crate::port::PersistedFrequency>> {
            Err(Error::Connection("connection refused".into()))
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn sample_week_report() {
        let app = App::new(Config::default());
        let store = MemoryFrequencyStore::new();

        let report = app.run_with_store(&store, &mut rng()).unwrap();

        assert_eq!(report.stats.observations, 94);
        assert_eq!(report.stats.mode_label.as_deref(), Some("BLUE"));
        assert_eq!(report.stats.mean_label.as_deref(), Some("ORANGE"));
        assert_eq!(report.stats.median_label.as_deref(), Some("ORANGE"));
        assert!((report.stats.variance - 76.266_666_666_666_67).abs() < 1e-9);
        assert!((report.stats.probability.value - 9.0 / 94.0).abs() < 1e-12);
        assert_eq!(report.search.index, 3);
        assert_eq!(report.fibonacci.sum, 20_365_011_073);
        assert_eq!(
            report.persistence,
            PersistenceOutcome::Saved(SaveReport {
                inserted: 10,
                updated: 0
            })
        );
        assert_eq!(store.load_all().unwrap().len(), 10);
    }

    #[test]
    fn store_failure_does_not_fail_run() {
        let app = App::new(Config::default());

        let report = app.run_with_store(&FailingStore, &mut rng()).unwrap();

        assert!(report.persistence.is_failed());
        assert_eq!(report.stats.mode_label.as_deref(), Some("BLUE"));
    }

    #[test]
    fn single_label_survey_fails_on_variance() {
        let config = Config {
            survey: SurveyConfig {
                observations: vec!["RED".into(), "RED".into()],
                probability_label: "RED".into(),
            },
            ..Config::default()
        };
        let app = App::new(config);

        let result = app.run_with_store(&MemoryFrequencyStore::new(), &mut rng());

        assert!(matches!(
            result,
            Err(Error::Stats(StatsError::InsufficientData { found: 1, .. }))
        ));
    }

    #[test]
    fn disabled_database_skips_persistence() {
        let mut config = Config::default();
        config.database.enabled = false;
        let app = App::new(config);

        let report = app.run(true).unwrap();

        assert_eq!(report.persistence, PersistenceOutcome::Skipped);
    }

    #[test]
    fn missing_search_target_reports_sentinel() {
        let mut config = Config::default();
        config.search.target = 8;
        let app = App::new(config);

        let report = app
            .run_with_store(&MemoryFrequencyStore::new(), &mut rng())
            .unwrap();

        assert_eq!(report.search.index, -1);
    }
}
