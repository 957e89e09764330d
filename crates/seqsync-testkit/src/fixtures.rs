//! Literal list scenarios.

use crate::strings;

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub source: Vec<String>,
    pub target: Vec<String>,
}

fn scenario(name: &'static str, source: &[&str], target: &[&str]) -> Scenario {
    Scenario {
        name,
        source: strings(source),
        target: strings(target),
    }
}

pub fn reordered() -> Scenario {
    scenario(
        "reordered",
        &["Zagreb", "Wien", "Paris", "Roma", "London"],
        &["Paris", "Zagreb", "London", "Wien", "Roma"],
    )
}

pub fn with_additions() -> Scenario {
    scenario(
        "with_additions",
        &["Zagreb", "Wien", "Paris"],
        &["Paris", "Zagreb", "London", "Wien", "Roma"],
    )
}

pub fn with_removals() -> Scenario {
    scenario(
        "with_removals",
        &["Zagreb", "Wien", "Paris", "London", "Roma"],
        &["Roma", "London", "Paris"],
    )
}

pub fn completely_different() -> Scenario {
    scenario(
        "completely_different",
        &["Zagreb", "Wien", "Paris", "London", "Roma"],
        &["Madrid", "Lisboa", "Dublin", "Oslo", "Stockholm"],
    )
}

pub fn from_empty() -> Scenario {
    scenario(
        "from_empty",
        &[],
        &["Madrid", "Lisboa", "Dublin", "Oslo", "Stockholm"],
    )
}

pub fn to_empty() -> Scenario {
    scenario(
        "to_empty",
        &["Madrid", "Lisboa", "Dublin", "Oslo", "Stockholm"],
        &[],
    )
}

pub fn all() -> Vec<Scenario> {
    vec![
        reordered(),
        with_additions(),
        with_removals(),
        completely_different(),
        from_empty(),
        to_empty(),
    ]
}
