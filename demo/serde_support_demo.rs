use powerheap::*;

const JSON_STR: &str = r#"
{
  "power": 2,
  "data": [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]
}
"#;

fn main() {
  let mut heap_a = PowerHeap::new(3).unwrap();
  heap_a.extend(["Serde", "sure", "makes", "this", "really", "easy!"]);

  // The data comes in unordered and is heapified on the way in.
  let heap_b: PowerHeap<u8> = serde_json::from_str(JSON_STR).unwrap();

  println!(
    "{} \n\n{:?}\n",
    serde_json::to_string_pretty(&heap_a).unwrap(),
    heap_b
  );

  let rejected = serde_json::from_str::<PowerHeap<u8>>(r#"{ "power": -2, "data": [] }"#);
  println!("{}", rejected.unwrap_err());
}
