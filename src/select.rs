use crate::config::ReportConfig;
use crate::db::{self, Record};
use crate::error::PlotError;
use crate::key::{ConfigKey, EnumerationMode};
use crate::series::Series;

/// Every series one figure row needs, derived from a single log.
#[derive(Debug, Clone)]
pub struct Selection<R: Record> {
    pub key: ConfigKey,
    pub series: Vec<(R::Metric, Series)>,
}

impl<R: Record> Selection<R> {
    pub fn get(&self, metric: R::Metric) -> Option<&Series> {
        self.series
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, series)| series)
    }
}

/// Resolves configuration keys to log files and derives their series.
pub struct Selector<'a> {
    config: &'a ReportConfig,
}

impl<'a> Selector<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    pub fn select<R: Record>(
        &self,
        k: usize,
        mode: EnumerationMode,
    ) -> Result<Selection<R>, PlotError> {
        let key = ConfigKey::new(R::KIND, k, mode);
        let path = key.path(self.config.data_dir());
        let table = db::load_table::<R>(&path, self.config.delimiter())?;
        let series = R::METRICS
            .iter()
            .map(|&metric| (metric, table.derive(metric)))
            .collect();
        Ok(Selection { key, series })
    }
}
