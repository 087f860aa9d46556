use algorithms::{HashMapOpenAddressing, LinkedList, LinkedListError, merge_sort};

#[test]
fn test_linked_list_walkthrough() {
    let mut list: LinkedList<i32> = [1, 3, 2, 5, 4].into_iter().collect();

    list.insert_after(0, 0).expect("Head exists");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 0, 3, 2, 5, 4]);

    assert_eq!(list.remove_after(0), Some(0));
    assert_eq!(list.get(3), Some(&5));
    assert_eq!(list.find(&2), Some(2));
    assert_eq!(list.find(&9), None);

    let err = list.insert_after(7, 1).unwrap_err();
    assert_eq!(err, LinkedListError::IndexOutOfBounds { index: 7, len: 5 });
    assert_eq!(err.to_string(), "index 7 out of bounds for list of length 5");
}

#[test]
fn test_hash_map_walkthrough() {
    let mut map = HashMapOpenAddressing::new();
    map.put(0, "0000".to_string());
    map.put(5, "hh".to_string());
    map.put(1, "lc".to_string());
    map.put(9, "hello".to_string());
    assert_eq!(map.remove(5), Some("hh".to_string()));

    assert_eq!(map.len(), 3);
    assert!(!map.contains_key(5));
    assert_eq!(map.get(9).map(String::as_str), Some("hello"));

    let mut keys: Vec<i32> = map.iter().map(|(key, _)| key).collect();
    merge_sort(&mut keys);
    assert_eq!(keys, vec![0, 1, 9]);
}

#[test]
fn test_hash_map_grows_and_keeps_every_key() {
    let mut map = HashMapOpenAddressing::new();
    for key in 0..1000 {
        assert_eq!(map.put(key * 3, key), None);
    }
    assert_eq!(map.len(), 1000);
    assert!(map.capacity() >= 1000);
    for key in 0..1000 {
        assert_eq!(map.get(key * 3), Some(&key));
    }
}

#[test]
fn test_merge_sort_textbook_input() {
    let mut nums = vec![7, 3, 2, 6, 0, 1, 5, 4];
    merge_sort(&mut nums);
    assert_eq!(nums, (0..8).collect::<Vec<_>>());
}
