use roster::{OrderedRecordList, Record};

fn names(list: &OrderedRecordList) -> Vec<&str> {
    list.iter().map(|r| r.name.as_str()).collect()
}

fn abc_list() -> OrderedRecordList {
    [
        Record::new("A", 30, 70.0),
        Record::new("B", 31, 71.0),
        Record::new("C", 32, 72.0),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_prepend_yields_new_head() {
    let mut list = abc_list();
    list.prepend(Record::new("D", 33, 73.0));

    assert_eq!(names(&list), ["D", "A", "B", "C"]);
    assert_eq!(list.iter().next().map(|r| r.name.as_str()), Some("D"));
}

#[test]
fn test_append_yields_new_tail() {
    let mut list = abc_list();
    list.append(Record::new("D", 33, 73.0));

    assert_eq!(names(&list), ["A", "B", "C", "D"]);
    assert_eq!(list.iter().last().map(|r| r.name.as_str()), Some("D"));
}

#[test]
fn test_append_on_empty_list_becomes_sole_head() {
    let mut list = OrderedRecordList::new();
    list.append(Record::new("A", 30, 70.0));

    assert_eq!(names(&list), ["A"]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_insert_after_splices_behind_match() {
    let mut list = abc_list();
    assert!(list.insert_after("B", Record::new("D", 33, 73.0)));

    assert_eq!(names(&list), ["A", "B", "D", "C"]);
}

#[test]
fn test_insert_after_tail_match() {
    let mut list = abc_list();
    assert!(list.insert_after("C", Record::new("D", 33, 73.0)));

    assert_eq!(names(&list), ["A", "B", "C", "D"]);
}

#[test]
fn test_insert_before_splices_ahead_of_match() {
    let mut list = abc_list();
    assert!(list.insert_before("B", Record::new("D", 33, 73.0)));

    assert_eq!(names(&list), ["A", "D", "B", "C"]);
}

#[test]
fn test_insert_before_head_match_acts_as_prepend() {
    let mut list = abc_list();
    assert!(list.insert_before("A", Record::new("D", 33, 73.0)));

    assert_eq!(names(&list), ["D", "A", "B", "C"]);
}

#[test]
fn test_remove_by_name_unlinks_first_match() {
    let mut list = abc_list();
    let removed = list.remove_by_name("B");

    assert_eq!(removed.map(|r| r.name), Some("B".to_string()));
    assert_eq!(names(&list), ["A", "C"]);
}

#[test]
fn test_remove_head() {
    let mut list = abc_list();
    assert!(list.remove_by_name("A").is_some());
    assert_eq!(names(&list), ["B", "C"]);
}

#[test]
fn test_remove_until_empty() {
    let mut list = abc_list();
    for name in ["B", "A", "C"] {
        assert!(list.remove_by_name(name).is_some());
    }
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_duplicate_names_resolve_to_first_match() {
    let mut list: OrderedRecordList = [
        Record::new("A", 30, 70.0),
        Record::new("B", 31, 71.0),
        Record::new("A", 40, 80.0),
    ]
    .into_iter()
    .collect();

    let removed = list.remove_by_name("A");
    assert_eq!(removed.map(|r| r.age), Some(30), "head occurrence goes first");
    assert_eq!(names(&list), ["B", "A"]);
    assert_eq!(list.iter().last().map(|r| r.age), Some(40));
}

#[test]
fn test_insert_after_duplicate_targets_first_match() {
    let mut list: OrderedRecordList = [
        Record::new("A", 30, 70.0),
        Record::new("B", 31, 71.0),
        Record::new("A", 40, 80.0),
    ]
    .into_iter()
    .collect();

    assert!(list.insert_after("A", Record::new("D", 33, 73.0)));
    assert_eq!(names(&list), ["A", "D", "B", "A"]);
}

#[test]
fn test_miss_is_a_silent_noop() {
    let mut list = abc_list();

    assert!(!list.insert_after("Z", Record::new("D", 33, 73.0)));
    assert!(!list.insert_before("Z", Record::new("D", 33, 73.0)));
    assert!(list.remove_by_name("Z").is_none());

    assert_eq!(names(&list), ["A", "B", "C"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_empty_list_operations_are_safe() {
    let mut list = OrderedRecordList::new();

    assert!(list.remove_by_name("anything").is_none());
    assert!(!list.insert_before("anything", Record::new("D", 33, 73.0)));
    assert!(!list.insert_after("anything", Record::new("D", 33, 73.0)));

    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);
}

#[test]
fn test_length_tracks_successful_mutations() {
    let mut list = OrderedRecordList::new();

    list.prepend(Record::new("A", 30, 70.0));
    list.append(Record::new("B", 31, 71.0));
    assert_eq!(list.len(), 2);

    assert!(list.insert_after("A", Record::new("C", 32, 72.0)));
    assert_eq!(list.len(), 3);

    assert!(!list.insert_before("Z", Record::new("D", 33, 73.0)));
    assert_eq!(list.len(), 3, "no-op must not change length");

    assert!(list.remove_by_name("B").is_some());
    assert_eq!(list.len(), 2);

    assert!(list.remove_by_name("B").is_none());
    assert_eq!(list.len(), 2);
}

#[test]
fn test_end_to_end_demo_scenario() {
    let mut list = OrderedRecordList::new();

    list.prepend(Record::new("Alice", 20, 85.5));
    list.append(Record::new("Boris", 22, 90.2));
    assert!(list.insert_after("Alice", Record::new("Victor", 21, 88.0)));
    assert!(list.insert_before("Boris", Record::new("Galina", 23, 92.1)));

    assert_eq!(names(&list), ["Alice", "Victor", "Galina", "Boris"]);

    assert!(list.remove_by_name("Victor").is_some());
    assert_eq!(names(&list), ["Alice", "Galina", "Boris"]);
}
