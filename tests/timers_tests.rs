// Host-side tests for the cancellable timer queue.

use soundboard::core::TimerQueue;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn pops_in_deadline_order() {
    let mut q = TimerQueue::new();
    q.schedule_at(ms(300), "c");
    q.schedule_at(ms(100), "a");
    q.schedule_at(ms(200), "b");
    let mut fired = Vec::new();
    while let Some((_, t)) = q.pop_due(ms(1000)) {
        fired.push(t);
    }
    assert_eq!(fired, vec!["a", "b", "c"]);
    assert!(q.is_empty());
}

#[test]
fn equal_deadlines_fire_in_scheduling_order() {
    let mut q = TimerQueue::new();
    for i in 0..5 {
        q.schedule_at(ms(50), i);
    }
    let fired: Vec<i32> = std::iter::from_fn(|| q.pop_due(ms(50)).map(|(_, t)| t)).collect();
    assert_eq!(fired, vec![0, 1, 2, 3, 4]);
}

#[test]
fn nothing_fires_before_its_deadline() {
    let mut q = TimerQueue::new();
    q.schedule_at(ms(100), ());
    assert!(q.pop_due(ms(99)).is_none());
    assert_eq!(q.next_deadline(), Some(ms(100)));
    assert_eq!(q.pop_due(ms(100)).map(|(due, _)| due), Some(ms(100)));
    assert_eq!(q.next_deadline(), None);
}

#[test]
fn cancel_removes_one_task() {
    let mut q = TimerQueue::new();
    let keep = q.schedule_at(ms(10), 'k');
    let drop = q.schedule_at(ms(20), 'd');
    assert!(q.cancel(drop));
    assert!(!q.cancel(drop));
    assert!(q.contains(keep));
    assert!(!q.contains(drop));
    assert_eq!(q.len(), 1);
    assert_eq!(q.pop_due(ms(100)).map(|(_, t)| t), Some('k'));
    assert!(!q.cancel(keep));
}

#[test]
fn cancelling_every_handle_empties_the_queue() {
    let mut q = TimerQueue::new();
    let ids: Vec<_> = (0..4).map(|i| q.schedule_at(ms(i * 10), i)).collect();
    assert_eq!(ids.iter().filter(|id| q.cancel(**id)).count(), 4);
    assert!(q.is_empty());
    assert!(q.pop_due(ms(1000)).is_none());
}
