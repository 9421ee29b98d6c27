use crate::{Error, Handle, HandleTable, NoopLog, SeedLog, TimeSource};
use core::cell::Cell;
use rand::{RngCore, SeedableRng};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread::scope;

struct MockTime {
    secs: u32,
}

impl TimeSource<u32> for MockTime {
    fn current_secs(&self) -> u32 {
        self.secs
    }
}

#[derive(Default)]
struct CountingLog {
    calls: Cell<usize>,
}

impl SeedLog for CountingLog {
    fn seed_used(&self, _name: &[u8], _seed: u32, _effective: u32) {
        self.calls.set(self.calls.get() + 1);
    }
}

fn take(table: &HandleTable, handle: Handle, n: usize) -> Vec<u32> {
    (0..n).map(|_| table.next(handle).unwrap()).collect()
}

#[test]
fn golden_sequence_through_table() {
    let table = HandleTable::new();
    let handle = table.create("foo", 42, &NoopLog).unwrap();

    assert_eq!(
        take(&table, handle, 5),
        [4_035_590_050, 1_298_720_902, 3_629_971_501, 3_815_939_231, 3_039_921_000]
    );
}

#[test]
fn identical_inputs_give_identical_streams() {
    let table = HandleTable::new();
    let a = table.create("foo", 42, &NoopLog).unwrap();
    let b = table.create("foo", 42, &NoopLog).unwrap();

    assert_ne!(a, b);
    assert_eq!(take(&table, a, 1000), take(&table, b, 1000));
}

#[test]
fn handles_advance_independently() {
    let table = HandleTable::new();
    let a = table.create("foo", 42, &NoopLog).unwrap();
    let b = table.create("foo", 42, &NoopLog).unwrap();

    let first_a = table.next(a).unwrap();
    table.next(a).unwrap();
    let first_b = table.next(b).unwrap();

    assert_eq!(first_a, first_b);
}

#[test]
fn default_seed_same_second_collides() {
    let table = HandleTable::new();
    let clock = MockTime { secs: 1_760_000_000 };
    let a = table.create_with_clock("foo", &clock, &NoopLog).unwrap();
    let b = table.create_with_clock("foo", &clock, &NoopLog).unwrap();
    let explicit = table.create("foo", 1_760_000_000, &NoopLog).unwrap();

    let stream = take(&table, a, 100);
    assert_eq!(stream, take(&table, b, 100));
    assert_eq!(stream, take(&table, explicit, 100));
}

#[test]
fn first_handle_is_never_null() {
    let table = HandleTable::new();
    let handle = table.create("foo", 0, &NoopLog).unwrap();

    assert!(!handle.is_null());
    assert_eq!(handle.to_raw(), 1);
}

#[test]
fn destroy_releases_generator() {
    let table = HandleTable::new();
    let handle = table.create("foo", 42, &NoopLog).unwrap();
    assert_eq!(table.len().unwrap(), 1);
    assert!(table.contains(handle).unwrap());

    table.destroy(handle).unwrap();

    assert!(table.is_empty().unwrap());
    assert!(!table.contains(handle).unwrap());
}

#[test]
fn next_after_destroy_is_reported() {
    let table = HandleTable::new();
    let handle = table.create("foo", 42, &NoopLog).unwrap();
    table.destroy(handle).unwrap();

    assert_eq!(table.next(handle), Err(Error::UnknownHandle(handle)));
}

#[test]
fn double_destroy_is_reported() {
    let table = HandleTable::new();
    let handle = table.create("foo", 42, &NoopLog).unwrap();
    table.destroy(handle).unwrap();

    assert_eq!(table.destroy(handle), Err(Error::UnknownHandle(handle)));
}

#[test]
fn forged_handles_are_reported() {
    let table = HandleTable::new();
    let live = table.create("foo", 42, &NoopLog).unwrap();

    for raw in [0, 999, u64::MAX] {
        let forged = Handle::from_raw(raw);
        assert_eq!(table.next(forged), Err(Error::UnknownHandle(forged)));
        assert_eq!(table.destroy(forged), Err(Error::UnknownHandle(forged)));
    }
    assert!(table.contains(live).unwrap());
}

#[test]
fn destroy_leaves_other_handles_intact() {
    let table = HandleTable::new();
    let a = table.create("foo", 42, &NoopLog).unwrap();
    let b = table.create("bar", 42, &NoopLog).unwrap();

    table.destroy(a).unwrap();

    assert_eq!(table.next(b).unwrap(), 2_130_873_773);
}

#[test]
fn handles_are_not_reused() {
    let table = HandleTable::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let handle = table.create("foo", 1, &NoopLog).unwrap();
        assert!(seen.insert(handle));
        table.destroy(handle).unwrap();
    }
}

#[test]
fn exhausted_counter_is_reported() {
    let table: HandleTable = HandleTable::with_first_handle(u64::MAX - 1);
    let last = table.create("foo", 42, &NoopLog).unwrap();
    assert_eq!(last.to_raw(), u64::MAX - 1);

    assert_eq!(
        table.create("foo", 42, &NoopLog),
        Err(Error::HandlesExhausted)
    );
    assert_eq!(table.len().unwrap(), 1);
}

/// Engine whose every draw panics, used to poison the table lock.
struct PanickingEngine;

impl RngCore for PanickingEngine {
    fn next_u32(&mut self) -> u32 {
        panic!("engine failure");
    }

    fn next_u64(&mut self) -> u64 {
        panic!("engine failure");
    }

    fn fill_bytes(&mut self, _dst: &mut [u8]) {
        panic!("engine failure");
    }
}

impl SeedableRng for PanickingEngine {
    type Seed = [u8; 4];

    fn from_seed(_seed: Self::Seed) -> Self {
        Self
    }
}

#[cfg(not(feature = "parking-lot"))]
#[test]
fn panic_under_lock_poisons_table() {
    let table = HandleTable::<PanickingEngine>::with_first_handle(1);
    let handle = table.create("foo", 42, &NoopLog).unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| table.next(handle)));
    assert!(outcome.is_err());

    assert_eq!(table.next(handle), Err(Error::LockPoisoned));
    assert_eq!(table.destroy(handle), Err(Error::LockPoisoned));
    assert_eq!(table.len(), Err(Error::LockPoisoned));
    assert_eq!(table.contains(handle), Err(Error::LockPoisoned));
}

#[cfg(feature = "parking-lot")]
#[test]
fn panic_under_lock_leaves_table_usable() {
    let table = HandleTable::<PanickingEngine>::with_first_handle(1);
    let handle = table.create("foo", 42, &NoopLog).unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| table.next(handle)));
    assert!(outcome.is_err());

    assert_eq!(table.len(), Ok(1));
    assert_eq!(table.destroy(handle), Ok(()));
}

#[test]
fn every_creation_is_logged() {
    let table = HandleTable::new();
    let log = CountingLog::default();
    let clock = MockTime { secs: 7 };

    table.create("foo", 42, &log).unwrap();
    table.create_with_clock("foo", &clock, &log).unwrap();

    assert_eq!(log.calls.get(), 2);
}

#[test]
fn concurrent_creation_issues_unique_handles() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 256;

    let table = Arc::new(HandleTable::new());
    let handles: Vec<Handle> = scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|t| {
                let table = Arc::clone(&table);
                s.spawn(move || {
                    (0..PER_THREAD)
                        .map(|i| {
                            let seed = (t * PER_THREAD + i) as u32;
                            let handle = table.create("worker", seed, &NoopLog).unwrap();
                            table.next(handle).unwrap();
                            handle
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect()
    });

    let unique: HashSet<_> = handles.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(table.len().unwrap(), THREADS * PER_THREAD);

    for handle in handles {
        table.destroy(handle).unwrap();
    }
    assert!(table.is_empty().unwrap());
}

#[test]
fn handle_display_is_hex() {
    assert_eq!(Handle::from_raw(255).to_string(), "0xff");
    assert_eq!(u64::from(Handle::from(7u64)), 7);
    assert!(Handle::NULL.is_null());
}
