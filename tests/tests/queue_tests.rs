use algorithms::{ArrayQueue, QueueError};
use integration_tests::{SCENARIO_CAPACITY, drain, queue_with};
use serde_json::json;

#[test]
fn test_textbook_scenario() {
    let mut queue = queue_with(SCENARIO_CAPACITY, &[3, 4, 5]).expect("Failed to fill queue");
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.to_vec(), vec![3, 4, 5]);

    assert_eq!(queue.pop(), Ok(3));
    assert_eq!(queue.len(), 2);

    queue.push(6).expect("Wrapped slot should be reusable");
    assert_eq!(queue.to_vec(), vec![4, 5, 6]);

    assert_eq!(queue.push(7), Err(QueueError::QueueFull { capacity: 3 }));
    assert_eq!(queue.to_vec(), vec![4, 5, 6]);
}

#[test]
fn test_capacity_bound() {
    for capacity in 1..=8 {
        let mut queue = ArrayQueue::new(capacity).unwrap();
        for value in 0..capacity as i32 {
            queue.push(value).unwrap();
            assert!(queue.len() <= capacity);
        }
        assert_eq!(
            queue.push(-1),
            Err(QueueError::QueueFull { capacity }),
            "capacity {}",
            capacity
        );
        assert_eq!(queue.len(), capacity);
    }
}

#[test]
fn test_emptiness_bound() {
    let mut queue: ArrayQueue<i32> = ArrayQueue::new(4).unwrap();
    assert_eq!(queue.pop(), Err(QueueError::QueueEmpty));
    assert_eq!(queue.peek(), Err(QueueError::QueueEmpty));
    assert_eq!(queue.len(), 0);

    queue.push(1).unwrap();
    queue.push(2).unwrap();
    assert_eq!(drain(&mut queue), vec![1, 2]);
    assert_eq!(queue.pop(), Err(QueueError::QueueEmpty));
    assert_eq!(queue.peek(), Err(QueueError::QueueEmpty));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_fifo_ordering() {
    let values = [9, -3, 0, 42, 7, 7, 1];
    let mut queue = queue_with(values.len(), &values).unwrap();
    assert_eq!(drain(&mut queue), values.to_vec());
}

#[test]
fn test_wraparound_for_every_shift() {
    let capacity = 5;
    for k in 1..capacity {
        let initial: Vec<i32> = (0..capacity as i32).collect();
        let mut queue = queue_with(capacity, &initial).unwrap();
        for expected in 0..k as i32 {
            assert_eq!(queue.pop(), Ok(expected));
        }
        for extra in 0..k as i32 {
            queue.push(100 + extra).unwrap();
        }

        let expected: Vec<i32> = (k as i32..capacity as i32)
            .chain((0..k as i32).map(|extra| 100 + extra))
            .collect();
        assert_eq!(queue.to_vec(), expected, "shift {}", k);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), expected);
        assert!(queue.is_full());
    }
}

#[test]
fn test_long_interleaving_keeps_fifo() {
    let mut queue = ArrayQueue::new(4).unwrap();
    let mut next_in = 0;
    let mut next_out = 0;

    for round in 0..50 {
        let pushes = round % 3 + 1;
        for _ in 0..pushes {
            if queue.push(next_in).is_ok() {
                next_in += 1;
            }
        }
        let pops = round % 2 + 1;
        for _ in 0..pops {
            if let Ok(value) = queue.pop() {
                assert_eq!(value, next_out);
                next_out += 1;
            }
        }
        assert_eq!(queue.len() as i32, next_in - next_out);
    }
}

#[test]
fn test_peek_is_idempotent() {
    let mut queue = queue_with(3, &[8, 9]).unwrap();
    for _ in 0..10 {
        assert_eq!(queue.peek(), Ok(8));
        assert_eq!(queue.len(), 2);
    }
    assert_eq!(queue.pop(), Ok(8));
    assert_eq!(queue.peek(), Ok(9));
}

#[test]
fn test_invalid_capacity() {
    let err = ArrayQueue::<i32>::new(0).unwrap_err();
    assert_eq!(err, QueueError::InvalidCapacity { capacity: 0 });
    assert_eq!(err.to_string(), "invalid queue capacity 0, must be positive and fit in memory");
}

#[test]
fn test_errors_convert_into_anyhow() {
    let result = queue_with(2, &[1, 2, 3]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to push item 2 (3)"));
    assert_eq!(
        err.downcast_ref::<QueueError>(),
        Some(&QueueError::QueueFull { capacity: 2 })
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut queue = queue_with(3, &[3, 4, 5]).unwrap();
    queue.pop().unwrap();
    queue.push(6).unwrap();

    let value = serde_json::to_value(queue.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({"capacity": 3, "front": 1, "len": 3, "items": [4, 5, 6]})
    );
}
