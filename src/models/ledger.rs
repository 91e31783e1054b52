//! Job ledger: the immutable source-of-truth job list.

use serde::{Deserialize, Serialize};

use super::{Job, JobId};

/// Ordered jobs exactly as read, addressable by id.
///
/// Policies never mutate the ledger; each run takes a [`working_copy`]
/// so FCFS, SJF and every sweep cell observe the same pristine input.
///
/// Serialized as a list of `[arrival_time, burst_time]` records, so ids are
/// always reassigned by position on the way back in.
///
/// [`working_copy`]: JobLedger::working_copy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct JobLedger {
    jobs: Vec<Job>,
}

impl JobLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from `(arrival_time, burst_time)` records.
    ///
    /// Ids are assigned by position.
    pub fn from_records(records: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let jobs = records
            .into_iter()
            .enumerate()
            .map(|(id, (arrival, burst))| Job::new(id, arrival, burst))
            .collect();
        Self { jobs }
    }

    /// Appends a job with the next id.
    pub fn push(&mut self, arrival_time: f64, burst_time: f64) -> JobId {
        let id = self.jobs.len();
        self.jobs.push(Job::new(id, arrival_time, burst_time));
        id
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Independent deep copy with runtime fields reset.
    pub fn working_copy(&self) -> Vec<Job> {
        self.jobs.iter().map(Job::pristine).collect()
    }
}

impl From<Vec<(f64, f64)>> for JobLedger {
    fn from(records: Vec<(f64, f64)>) -> Self {
        Self::from_records(records)
    }
}

impl From<JobLedger> for Vec<(f64, f64)> {
    fn from(ledger: JobLedger) -> Self {
        ledger
            .jobs
            .iter()
            .map(|j| (j.arrival_time, j.burst_time))
            .collect()
    }
}

impl FromIterator<(f64, f64)> for JobLedger {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_input_order() {
        let ledger = JobLedger::from_records([(3.0, 1.0), (0.0, 2.0)]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(0).unwrap().arrival_time, 3.0);
        assert_eq!(ledger.get(1).unwrap().id, 1);
        assert!(ledger.get(2).is_none());
    }

    #[test]
    fn test_working_copy_is_independent() {
        let ledger: JobLedger = [(0.0, 5.0), (1.0, 3.0)].into_iter().collect();
        let mut copy = ledger.working_copy();
        copy[0].run_for(2.0);
        copy[0].complete(2.0);

        assert!((ledger.get(0).unwrap().remaining_time - 5.0).abs() < 1e-10);
        assert!(!ledger.get(0).unwrap().is_completed());
    }

    #[test]
    fn test_push_assigns_next_id() {
        let mut ledger = JobLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.push(0.0, 2.5), 0);
        assert_eq!(ledger.push(1.0, 1.5), 1);
        assert_eq!(ledger.get(1).unwrap().id, 1);
    }

    #[test]
    fn test_serde_records_round_trip() {
        let ledger = JobLedger::from_records([(0.0, 5.0), (1.5, 3.0)]);
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, "[[0.0,5.0],[1.5,3.0]]");

        let back: JobLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }

    #[test]
    fn test_deserialize_assigns_ids_by_position() {
        let ledger: JobLedger = serde_json::from_str("[[4.0, 1.0], [0.0, 2.0]]").unwrap();
        assert_eq!(ledger.get(0).unwrap().id, 0);
        assert_eq!(ledger.get(1).unwrap().id, 1);
        assert!((ledger.get(1).unwrap().arrival_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_rejects_job_objects() {
        let json = r#"{"jobs":[{"id":7,"arrival_time":0.0,"burst_time":1.0,"remaining_time":1.0,"outcome":null}]}"#;
        assert!(serde_json::from_str::<JobLedger>(json).is_err());
    }
}
