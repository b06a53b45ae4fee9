//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use lazyseq::{wrap, ArraySequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: &'static str,
    pub age: u32,
    pub gender: Gender,
}

impl Person {
    pub const fn new(name: &'static str, age: u32, gender: Gender) -> Self {
        Self { name, age, gender }
    }
}

/// The household used throughout the behavioral suites.
pub fn people() -> Vec<Person> {
    vec![
        Person::new("David", 63, Gender::Male),
        Person::new("Mary", 62, Gender::Female),
        Person::new("Lauren", 32, Gender::Female),
        Person::new("Adam", 30, Gender::Male),
        Person::new("Daniel", 28, Gender::Male),
        Person::new("Happy", 25, Gender::Female),
    ]
}

pub fn people_seq() -> ArraySequence<Person> {
    wrap(people())
}

pub fn is_male(person: &Person) -> bool {
    person.gender == Gender::Male
}

pub fn is_female(person: &Person) -> bool {
    person.gender == Gender::Female
}

pub fn name(person: Person) -> &'static str {
    person.name
}

pub fn age(person: &Person) -> u32 {
    person.age
}

pub fn gender(person: Person) -> Gender {
    person.gender
}

pub fn names(persons: &[Person]) -> Vec<&'static str> {
    persons.iter().map(|p| p.name).collect()
}
