use avlbst::{equal_paths, AvlTreeMap, BinaryNode};

fn main() {
    let mut map = AvlTreeMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "two");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&1), Some(&"one"));
    map.remove(&1);
    assert!(map.get(&1).is_none());

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut root = BinaryNode::new(1);
    root.left = Some(Box::new(BinaryNode::new(2)));
    root.right = Some(Box::new(BinaryNode::new(3)));
    println!("all leaves equally deep: {}", equal_paths(Some(&root)));

    root.left.as_mut().unwrap().left = Some(Box::new(BinaryNode::new(4)));
    println!("all leaves equally deep: {}", equal_paths(Some(&root)));
}
