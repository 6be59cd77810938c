use powerheap::*;

#[test]
fn serializes_power_and_level_order() {
  let mut heap = PowerHeap::new(2).unwrap();
  heap.extend([10, 20, 5]);
  let json = serde_json::to_string(&heap).unwrap();
  assert_eq!(json, r#"{"power":2,"data":[20,10,5]}"#);
}

#[test]
fn round_trip_keeps_order() {
  let heap = PowerHeap::from_vec(3, vec![4, 8, 15, 16, 23, 42]).unwrap();
  let json = serde_json::to_string(&heap).unwrap();
  let back: PowerHeap<i32> = serde_json::from_str(&json).unwrap();
  assert_eq!(back.power(), 3);
  assert_eq!(back.into_sorted_vec(), [4, 8, 15, 16, 23, 42]);
}

#[test]
fn unordered_input_is_heapified() {
  let heap: PowerHeap<i32> = serde_json::from_str(r#"{"power":1,"data":[1,2,3,4,5]}"#).unwrap();
  assert_eq!(heap.peek_max(), Ok(&5));
  assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
}

#[test]
fn invalid_power_is_rejected() {
  let err = serde_json::from_str::<PowerHeap<i32>>(r#"{"power":-1,"data":[1]}"#).unwrap_err();
  assert!(err
    .to_string()
    .starts_with("Invalid branching exponent -1"));
  assert!(serde_json::from_str::<PowerHeap<i32>>(r#"{"power":4096,"data":[]}"#).is_err());
}
