// ============================================================
// Layer 3: Topic and Split
// ============================================================
// AG News has exactly four classes. The raw CSV files label
// them 1..=4; everything downstream of the label encoder uses
// the zero-based index defined here.
//
//   index | raw | name
//   ------+-----+--------------------
//     0   |  1  | World
//     1   |  2  | Sports
//     2   |  3  | Business
//     3   |  4  | Science/Technology

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// One of the four AG News topic classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    World,
    Sports,
    Business,
    SciTech,
}

impl Topic {
    /// Number of classes. The one-hot width is always this value.
    pub const COUNT: usize = 4;

    /// All topics in index order
    pub const ALL: [Topic; Topic::COUNT] =
        [Topic::World, Topic::Sports, Topic::Business, Topic::SciTech];

    /// Look up a topic by its zero-based class index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based class index
    pub fn index(self) -> usize {
        match self {
            Topic::World    => 0,
            Topic::Sports   => 1,
            Topic::Business => 2,
            Topic::SciTech  => 3,
        }
    }

    /// Human readable class name as used in reports
    pub fn name(self) -> &'static str {
        match self {
            Topic::World    => "World",
            Topic::Sports   => "Sports",
            Topic::Business => "Business",
            Topic::SciTech  => "Science/Technology",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Split ────────────────────────────────────────────────────────────────────
/// Which CSV file of the dataset to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test  => "test",
        }
    }

    /// File name inside the dataset directory, e.g. `train.csv`
    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = anyhow::Error;

    /// Only `train` and `test` exist in AG News.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "test"  => Ok(Split::Test),
            other   => bail!("unknown split '{other}', expected 'train' or 'test'"),
        }
    }
}
