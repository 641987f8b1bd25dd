//! Derived filtering of the service log collection: free text, type,
//! and an inclusive start-date window.

use chrono::NaiveDate;

use crate::core::service_logs::ServiceLogStore;
use crate::models::service_log::ServiceLog;
use crate::models::service_type::ServiceType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    /// Case-insensitive substring over provider, order, car and
    /// description. Empty matches everything.
    pub text: String,
    /// None means "all types".
    pub service_type: Option<ServiceType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl LogFilter {
    pub fn matches(&self, log: &ServiceLog) -> bool {
        let text = self.text.trim().to_lowercase();
        if !text.is_empty() {
            let haystack = format!(
                "{} {} {} {}",
                log.data.provider_id,
                log.data.service_order,
                log.data.car_id,
                log.data.service_description
            )
            .to_lowercase();
            if !haystack.contains(&text) {
                return false;
            }
        }

        if let Some(wanted) = self.service_type
            && log.service_type() != Some(wanted)
        {
            return false;
        }

        // A record whose start date does not parse cannot satisfy a
        // date bound.
        if self.from_date.is_some() || self.to_date.is_some() {
            let Some(start) = log.start_date() else {
                return false;
            };
            if let Some(from) = self.from_date
                && start < from
            {
                return false;
            }
            if let Some(to) = self.to_date
                && start > to
            {
                return false;
            }
        }

        true
    }
}

/// Pure filter pass over the store contents, preserving order.
pub fn filter_logs<'a>(logs: &'a [ServiceLog], filter: &LogFilter) -> Vec<&'a ServiceLog> {
    logs.iter().filter(|log| filter.matches(log)).collect()
}

/// Memoized view over a [`ServiceLogStore`]: the filter pass reruns only
/// when the store revision or the filter inputs change. A convenience,
/// not a correctness requirement.
#[derive(Debug, Default)]
pub struct FilteredLogs {
    cached: Option<(u64, LogFilter, Vec<ServiceLog>)>,
}

impl FilteredLogs {
    pub fn query(&mut self, store: &ServiceLogStore, filter: &LogFilter) -> &[ServiceLog] {
        let fresh = matches!(
            &self.cached,
            Some((rev, f, _)) if *rev == store.revision() && f == filter
        );

        if !fresh {
            let results: Vec<ServiceLog> = store
                .logs
                .iter()
                .filter(|log| filter.matches(log))
                .cloned()
                .collect();
            self.cached = Some((store.revision(), filter.clone(), results));
        }

        match &self.cached {
            Some((_, _, results)) => results,
            None => &[],
        }
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
