//! End-to-end pipeline behavior over the household fixture and generated
//! sequences.

mod common;

use common::{is_female, is_male, name, people, people_seq, Gender};
use lazyseq::{generate, wrap, Flow, SeqError, Sequence};

#[test]
fn generate_allows_arbitrary_sequences() {
    let window = generate(|i| i).drop(1).take(3).to_vec().unwrap();
    assert_eq!(window, [1, 2, 3]);
}

#[test]
fn generate_can_be_iterated_like_any_sequence() {
    // Walk the naturals until one exceeds a threshold.
    let mut hits = 0;
    generate(|i| i * 7 % 10)
        .each(|x| {
            hits += 1;
            if x > 5 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        })
        .unwrap();
    assert!(hits > 0);
}

#[test]
fn generate_provides_random_access() {
    let naturals = generate(|i| i + 1);
    assert_eq!(naturals.get(9).unwrap(), 10);
}

#[test]
fn generate_refuses_length() {
    let err = generate(|i| i + 1).len().unwrap_err();
    assert!(matches!(err, SeqError::LengthUndefined { .. }));
}

#[test]
fn map_collects_names() {
    let names = people_seq().map(name).to_vec().unwrap();
    assert_eq!(names, ["David", "Mary", "Lauren", "Adam", "Daniel", "Happy"]);
}

#[test]
fn map_provides_indexed_access() {
    let count = people().len();
    let last_name = people_seq().map(name).get(count - 1).unwrap();
    assert_eq!(last_name, "Happy");
}

#[test]
fn filter_selects_the_males() {
    let boys = people_seq().filter(is_male).to_vec().unwrap();
    assert_eq!(common::names(&boys), ["David", "Adam", "Daniel"]);
}

#[test]
fn filter_combines_with_previous_filters() {
    let sons = people_seq()
        .filter(is_male)
        .filter(|p| p.name != "David")
        .to_vec()
        .unwrap();
    assert_eq!(common::names(&sons), ["Adam", "Daniel"]);
}

#[test]
fn reject_does_the_opposite_of_filter() {
    let girls = people_seq().reject(is_male).to_vec().unwrap();
    assert_eq!(common::names(&girls), ["Mary", "Lauren", "Happy"]);
}

#[test]
fn reverse_iterates_backwards() {
    let reversed = people_seq().reverse().to_vec().unwrap();
    assert_eq!(
        common::names(&reversed),
        ["Happy", "Daniel", "Adam", "Lauren", "Mary", "David"]
    );
}

#[test]
fn reverse_indexes_from_the_back() {
    let last_person = people_seq().reverse().get(0).unwrap();
    assert_eq!(last_person.name, "Happy");
}

#[test]
fn take_selects_the_first_n() {
    let first_two = people_seq().take(2).to_vec().unwrap();
    assert_eq!(common::names(&first_two), ["David", "Mary"]);
}

#[test]
fn drop_skips_the_first_n() {
    let children = people_seq().drop(2).to_vec().unwrap();
    assert_eq!(
        common::names(&children),
        ["Lauren", "Adam", "Daniel", "Happy"]
    );
}

#[test]
fn sort_by_orders_by_the_selector() {
    let by_name = people_seq().sort_by(|p| p.name).to_vec().unwrap();
    assert_eq!(
        common::names(&by_name),
        ["Adam", "Daniel", "David", "Happy", "Lauren", "Mary"]
    );
}

#[test]
fn sort_by_age_is_ascending() {
    let by_age = people_seq().sort_by(common::age).to_vec().unwrap();
    assert_eq!(
        common::names(&by_age),
        ["Happy", "Daniel", "Adam", "Lauren", "Mary", "David"]
    );
}

#[test]
fn uniq_returns_one_of_each_value() {
    let genders = people_seq().map(common::gender).uniq().to_vec().unwrap();
    assert_eq!(genders, [Gender::Male, Gender::Female]);
}

#[test]
fn chained_methods_apply_in_order() {
    let girl_names = people_seq()
        .filter(is_female)
        .map(name)
        .reverse()
        .drop(1)
        .take(2)
        .uniq()
        .to_vec()
        .unwrap();
    assert_eq!(girl_names, ["Lauren", "Mary"]);
}

#[test]
fn take_then_map_transforms_the_taken() {
    let first_two_genders = people_seq()
        .take(2)
        .map(common::gender)
        .to_vec()
        .unwrap();
    assert_eq!(first_two_genders, [Gender::Male, Gender::Female]);
}

#[test]
fn three_maps_fuse_into_one_pass() {
    let initials = people_seq()
        .map(|p| p.age)
        .map(|age| if age < 50 { "young" } else { "old" })
        .map(|group| &group[..1])
        .to_vec()
        .unwrap();
    assert_eq!(initials, ["o", "o", "y", "y", "y", "y"]);
}

#[test]
fn identity_round_trip() {
    let xs = vec![9, 8, 7, 6];
    assert_eq!(wrap(xs.clone()).to_vec().unwrap(), xs);
}

#[test]
fn sibling_chains_are_isolated() {
    let seq = people_seq();
    let males = seq.clone().filter(is_male).to_vec().unwrap();
    let females = seq.filter(is_female).to_vec().unwrap();
    assert_eq!(males.len() + females.len(), people().len());
    assert!(males.iter().all(is_male));
    assert!(females.iter().all(is_female));
}
