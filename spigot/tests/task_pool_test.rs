// Integration tests for the shared task pool

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use spigot::{DigitPosition, PoolError, TaskPool};

#[test]
fn test_new_pool_holds_all_positions_in_order() {
    let pool = TaskPool::new(5);
    assert_eq!(pool.total_tasks(), 5);
    assert_eq!(pool.remaining(), 5);
    assert_eq!(pool.resolved(), 0);

    let mut state = pool.lock();
    let popped: Vec<DigitPosition> = (0..5).map(|_| state.pop_front().unwrap()).collect();
    assert_eq!(popped, vec![1, 2, 3, 4, 5]);
    assert!(state.is_empty());
    assert_eq!(state.pop_front(), Err(PoolError::QueueEmpty));
}

#[test]
fn test_results_are_write_once() {
    let pool = TaskPool::new(2);
    assert_eq!(pool.record_result(1, "1".to_string()), Ok(1));
    assert_eq!(
        pool.record_result(1, "9".to_string()),
        Err(PoolError::DuplicateResult(1))
    );
    assert_eq!(pool.record_result(2, "4".to_string()), Ok(2));
    assert_eq!(pool.snapshot_ordered_result(), Ok("14".to_string()));
}

#[test]
fn test_snapshot_orders_by_position() {
    let pool = TaskPool::new(4);
    for (position, text) in [(3, "c"), (1, "a"), (4, "d"), (2, "b")] {
        pool.record_result(position, text.to_string()).unwrap();
    }
    assert_eq!(pool.snapshot_ordered_result(), Ok("abcd".to_string()));
}

#[test]
fn test_incomplete_snapshot_is_rejected() {
    let pool = TaskPool::new(3);
    pool.record_result(1, "1".to_string()).unwrap();
    pool.record_result(3, "1".to_string()).unwrap();
    assert_eq!(
        pool.snapshot_ordered_result(),
        Err(PoolError::Incomplete { missing: 2 })
    );
}

#[test]
fn test_concurrent_drain_with_explicit_lock() {
    let total = 200;
    let pool = Arc::new(TaskPool::new(total));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = pool.clone();
            thread::spawn(move || {
                let mut claimed = Vec::new();
                loop {
                    let position = {
                        let mut state = pool.lock();
                        if state.is_empty() {
                            break;
                        }
                        state.pop_front().unwrap()
                    };
                    claimed.push(position);
                    pool.lock()
                        .insert_result(position, (position % 10).to_string())
                        .unwrap();
                }
                claimed
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for position in handle.join().unwrap() {
            assert!(seen.insert(position), "position {position} claimed twice");
        }
    }

    assert_eq!(seen.len(), total as usize);
    assert_eq!(pool.result_keys(), (1..=total).collect::<Vec<_>>());
    assert!(pool.is_empty());
}

#[test]
fn test_try_claim_next_never_double_assigns() {
    let total = 3;
    let pool = Arc::new(TaskPool::new(total));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let pool = pool.clone();
            thread::spawn(move || {
                let mut claimed = Vec::new();
                while let Some(position) = pool.try_claim_next() {
                    claimed.push(position);
                }
                claimed
            })
        })
        .collect();

    let mut all: Vec<DigitPosition> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3]);
    assert_eq!(pool.try_claim_next(), None);
}
