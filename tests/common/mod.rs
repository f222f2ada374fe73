#![allow(dead_code)]

use itertools::Itertools;
use rand::{self, Rng};
use splaytree::SplayTree;
use std::collections::BTreeMap;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Insert { value: i32 },
    Delete { value: i32 },
    Search { value: i32 },
    PopMin,
    PopMax,
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Value(Option<i32>),
    Found(bool),
}

pub const MAX_VALUE: i32 = 200;

/// Installs a logger at the level given by the `SPLAYTREE_LOG` environment variable
/// (e.g. `SPLAYTREE_LOG=trace`). Off by default.
pub fn init_logging() {
    let level = std::env::var("SPLAYTREE_LOG")
        .ok()
        .and_then(|level| level.parse::<simplelog::LevelFilter>().ok())
        .unwrap_or(simplelog::LevelFilter::Off);
    // every test calls this, only the first one succeeds
    let _ = simplelog::TestLogger::init(level, simplelog::Config::default());
}

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let value = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
    match rng.gen_range(0..10) {
        0..=3 => Insert { value },
        4..=6 => Delete { value },
        7 => Search { value },
        8 => PopMin,
        9 => PopMax,
        _ => panic!(),
    }
}

/// A plain multiset to compare the tree against: value to number of occurrences.
#[derive(Default, Debug)]
pub struct Model {
    counts: BTreeMap<i32, usize>,
}

impl Model {
    pub fn insert(&mut self, value: i32) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn delete(&mut self, value: i32) -> Option<i32> {
        let count = self.counts.get_mut(&value)?;
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&value);
        }
        Some(value)
    }

    pub fn min(&self) -> Option<i32> {
        self.counts.keys().next().cloned()
    }

    pub fn max(&self) -> Option<i32> {
        self.counts.keys().next_back().cloned()
    }

    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn values(&self) -> Vec<i32> {
        self.counts
            .iter()
            .flat_map(|(value, count)| std::iter::repeat(*value).take(*count))
            .collect()
    }
}

pub fn run_round(round_action: &RoundAction, tree: &mut SplayTree<i32>, model: &mut Model) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Insert { value } => {
            tree.insert(value);
            model.insert(value);
            assert_eq!(tree.root(), Some(&value));
            Empty
        }
        Delete { value } => {
            let res = tree.delete(&value);
            assert_eq!(res, model.delete(value));
            Value(res)
        }
        Search { value } => {
            let found = tree.contains(&value);
            assert_eq!(found, model.counts.contains_key(&value));
            Found(found)
        }
        PopMin => {
            let res = tree.pop_min();
            assert_eq!(res, model.min());
            if let Some(value) = res {
                model.delete(value);
            }
            Value(res)
        }
        PopMax => {
            let res = tree.pop_max();
            assert_eq!(res, model.max());
            if let Some(value) = res {
                model.delete(value);
            }
            Value(res)
        }
    }
}

/// Checks every observable property of the tree against the model.
pub fn check_against_model(tree: &SplayTree<i32>, model: &Model) {
    tree.assert_correctness();
    let values: Vec<i32> = tree.iter().cloned().collect();
    assert!(values.iter().tuple_windows().all(|(a, b)| a <= b));
    assert_eq!(values, model.values());
    assert_eq!(tree.len(), model.len());
    assert_eq!(tree.min().cloned(), model.min());
    assert_eq!(tree.max().cloned(), model.max());
    assert_eq!(tree.is_empty(), model.len() == 0);
    assert!(tree.height() <= tree.len());
    assert_eq!(tree.height() == 0, tree.is_empty());
}

pub fn check_consistency(rounds: usize) {
    let mut rng = rand::thread_rng();
    let mut tree = SplayTree::new();
    let mut model = Model::default();
    for _ in 0..rounds {
        let round_action = random_round_action(&mut rng);
        run_round(&round_action, &mut tree, &mut model);
        check_against_model(&tree, &model);
    }
}
