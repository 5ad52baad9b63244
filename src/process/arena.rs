/*!
 * Process Arena
 * Per-run storage of process records, indexed by input position
 *
 * Each policy run builds its own arena from the shared definitions, so no
 * mutable state is ever shared between runs. Membership ("admitted",
 * "completed") is tracked with explicit status flags instead of value
 * comparisons, and arrivals are consumed through a cursor over the records
 * ordered by arrival time.
 */

use super::types::{ProcessRecord, ProcessSpec};
use crate::core::types::Ticks;

/// Position of a record in its arena
pub type ProcessIdx = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Not yet arrived (or not yet observed by the policy)
    Pending,
    /// Handed to the policy's ready structure
    Admitted,
    Completed,
}

#[derive(Debug, Clone)]
pub struct ProcessArena {
    records: Vec<ProcessRecord>,
    status: Vec<ProcessStatus>,
    // Stable by arrival time: equal arrivals keep input order
    arrival_order: Vec<ProcessIdx>,
    cursor: usize,
    completion_order: Vec<ProcessIdx>,
}

impl ProcessArena {
    pub fn from_specs(specs: &[ProcessSpec]) -> Self {
        let records: Vec<ProcessRecord> = specs.iter().map(ProcessRecord::from_spec).collect();

        let mut arrival_order: Vec<ProcessIdx> = (0..records.len()).collect();
        arrival_order.sort_by_key(|&idx| records[idx].arrival_time);

        Self {
            status: vec![ProcessStatus::Pending; records.len()],
            completion_order: Vec::with_capacity(records.len()),
            records,
            arrival_order,
            cursor: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: ProcessIdx) -> &ProcessRecord {
        &self.records[idx]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: ProcessIdx) -> &mut ProcessRecord {
        &mut self.records[idx]
    }

    #[inline]
    pub fn status(&self, idx: ProcessIdx) -> ProcessStatus {
        self.status[idx]
    }

    pub fn all_completed(&self) -> bool {
        self.completion_order.len() == self.records.len()
    }

    /// Admit pending processes, in arrival order, while `accept(arrival)` holds
    ///
    /// Stops at the first pending process the predicate rejects. Returns the
    /// number admitted.
    pub fn admit_while<P, Q>(&mut self, accept: P, ready: &mut Q) -> usize
    where
        P: Fn(Ticks) -> bool,
        Q: Extend<ProcessIdx>,
    {
        let start = self.cursor;
        while let Some(&idx) = self.arrival_order.get(self.cursor) {
            if !accept(self.records[idx].arrival_time) {
                break;
            }
            debug_assert_eq!(self.status[idx], ProcessStatus::Pending);
            self.status[idx] = ProcessStatus::Admitted;
            self.cursor += 1;
        }

        let admitted = &self.arrival_order[start..self.cursor];
        ready.extend(admitted.iter().copied());
        admitted.len()
    }

    /// Admit every pending process that has arrived by `now`
    pub fn admit_arrived<Q: Extend<ProcessIdx>>(&mut self, now: Ticks, ready: &mut Q) -> usize {
        self.admit_while(|arrival| arrival <= now, ready)
    }

    /// Admit the next process in arrival order regardless of the clock
    pub fn admit_next(&mut self) -> Option<ProcessIdx> {
        let idx = *self.arrival_order.get(self.cursor)?;
        self.status[idx] = ProcessStatus::Admitted;
        self.cursor += 1;
        Some(idx)
    }

    /// Earliest arrival among processes not yet admitted
    ///
    /// Policies only consult this when their ready structure is empty, at
    /// which point every admitted process has completed, so this is also the
    /// earliest arrival among all uncompleted processes.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.arrival_order
            .get(self.cursor)
            .map(|&idx| self.records[idx].arrival_time)
    }

    /// Finalize a process whose remaining time reached zero at `now`
    pub fn complete(&mut self, idx: ProcessIdx, now: Ticks) {
        debug_assert_eq!(
            self.status[idx],
            ProcessStatus::Admitted,
            "Process {} completed without being admitted",
            self.records[idx].id
        );
        self.records[idx].complete(now);
        self.status[idx] = ProcessStatus::Completed;
        self.completion_order.push(idx);
    }

    /// Consume the arena, yielding records in completion order
    pub fn into_completed(self) -> Vec<ProcessRecord> {
        let mut slots: Vec<Option<ProcessRecord>> = self.records.into_iter().map(Some).collect();
        self.completion_order
            .iter()
            .filter_map(|&idx| slots[idx].take())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn specs() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("A", 5, 2, 1),
            ProcessSpec::new("B", 0, 3, 2),
            ProcessSpec::new("C", 5, 1, 3),
            ProcessSpec::new("D", 2, 4, 1),
        ]
    }

    #[test]
    fn test_admission_follows_arrival_order() {
        let mut arena = ProcessArena::from_specs(&specs());
        let mut ready = Vec::new();

        assert_eq!(arena.admit_arrived(0, &mut ready), 1);
        assert_eq!(ready, vec![1]);
        assert_eq!(arena.next_arrival(), Some(2));

        assert_eq!(arena.admit_arrived(5, &mut ready), 3);
        // Equal arrivals keep input order
        assert_eq!(ready, vec![1, 3, 0, 2]);
        assert_eq!(arena.next_arrival(), None);
        assert_eq!(arena.status(0), ProcessStatus::Admitted);
    }

    #[test]
    fn test_admit_while_stops_at_first_rejection() {
        let mut arena = ProcessArena::from_specs(&specs());
        let mut queue = VecDeque::new();

        assert_eq!(arena.admit_while(|arrival| arrival == 2, &mut queue), 0);
        assert!(queue.is_empty());
        assert_eq!(arena.admit_while(|arrival| arrival == 0, &mut queue), 1);
        assert_eq!(arena.admit_while(|arrival| arrival == 2, &mut queue), 1);
        assert_eq!(queue, VecDeque::from(vec![1, 3]));
    }

    #[test]
    fn test_completion_order() {
        let mut arena = ProcessArena::from_specs(&specs());
        while arena.admit_next().is_some() {}

        for (idx, finish) in [(2, 6), (0, 7), (1, 9), (3, 12)] {
            let burst = arena.get(idx).burst_time;
            arena.get_mut(idx).dispatch(finish - burst);
            arena.get_mut(idx).execute(burst);
            arena.complete(idx, finish);
        }

        assert!(arena.all_completed());
        let ids: Vec<String> = arena.into_completed().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_empty_arena() {
        let arena = ProcessArena::from_specs(&[]);
        assert!(arena.is_empty());
        assert!(arena.all_completed());
        assert_eq!(arena.next_arrival(), None);
    }
}
