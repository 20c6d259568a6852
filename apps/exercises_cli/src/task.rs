//! Tasks that can be run from the command line or from a task file.

use anyhow::{Context, Result};
use exercises_containers::{BinarySearchTree, Stack};
use exercises_math::{Quaternion, Shape, powers};
use exercises_text::{PhraseBuilder, first_then_apply};
use serde::{Deserialize, Serialize};
use std::{fmt::Write, path::PathBuf};

/// A list of tasks to run in order, as read from a RON file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Task {
    /// List the powers of `base` up to and including `limit`.
    Powers { base: i64, limit: i64 },
    /// Show a quaternion, its conjugate and, if a right hand side is given,
    /// the sum and both products of the two.
    Quaternion {
        lhs: [f64; 4],
        #[serde(default)]
        rhs: Option<[f64; 4]>,
    },
    /// Count the meaningful lines in a file.
    LineCount { path: PathBuf },
    /// Join words into a phrase.
    Say { words: Vec<String> },
    /// Upper-case the first word starting with the prefix.
    FirstWithPrefix { prefix: String, words: Vec<String> },
    /// Compute the volume and surface area of a shape.
    Measure { shape: Shape },
    /// Reverse words by pushing them onto a stack and popping them off.
    Reverse { words: Vec<String> },
    /// Insert words into a binary search tree and list them in order.
    Sort { words: Vec<String> },
}

impl Task {
    /// Runs the task and returns its textual report.
    pub fn run(&self) -> Result<String> {
        match self {
            Self::Powers { base, limit } => Ok(powers(*base, *limit)
                .map(|power| power.to_string())
                .collect::<Vec<_>>()
                .join(", ")),
            Self::Quaternion { lhs, rhs } => Ok(describe_quaternions(
                Quaternion::from(*lhs),
                rhs.map(Quaternion::from),
            )),
            Self::LineCount { path } => {
                let count = exercises_io::meaningful_line_count(path)?;
                Ok(count.to_string())
            }
            Self::Say { words } => Ok(words
                .iter()
                .fold(PhraseBuilder::new(), |phrase, word| phrase.and(word.as_str()))
                .build()),
            Self::FirstWithPrefix { prefix, words } => Ok(first_then_apply(
                words,
                |word| word.starts_with(prefix.as_str()),
                |word| word.to_uppercase(),
            )
            .unwrap_or_else(|| String::from("(none)"))),
            Self::Measure { shape } => Ok(format!(
                "volume = {:.6}, surface area = {:.6}",
                shape.volume(),
                shape.surface_area()
            )),
            Self::Reverse { words } => reverse_with_stack(words),
            Self::Sort { words } => {
                let tree: BinarySearchTree<&str> = words.iter().map(String::as_str).collect();
                let sorted: Vec<&str> = tree.iter().copied().collect();
                Ok(format!("{tree} -> {}", sorted.join(" ")))
            }
        }
    }
}

fn describe_quaternions(lhs: Quaternion, rhs: Option<Quaternion>) -> String {
    let mut report = format!("p = {lhs}\nconj(p) = {}", lhs.conjugate());
    if let Some(rhs) = rhs {
        // Writing to a `String` can not fail
        let _ = write!(
            report,
            "\nq = {rhs}\nconj(q) = {}\np + q = {}\np * q = {}\nq * p = {}",
            rhs.conjugate(),
            lhs + rhs,
            lhs * rhs,
            rhs * lhs,
        );
    }
    report
}

fn reverse_with_stack(words: &[String]) -> Result<String> {
    let mut stack = Stack::new();
    for word in words {
        stack
            .push(word.as_str())
            .with_context(|| format!("Could not push {word:?}"))?;
    }
    let mut reversed = Vec::with_capacity(stack.len());
    while let Ok(word) = stack.pop() {
        reversed.push(word);
    }
    Ok(reversed.join(" "))
}
