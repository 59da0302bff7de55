//! Path identity and metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque path identifier issued by a path-bearing graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathHandle(pub usize);

/// How a path should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSense {
    /// Named path without sample structure
    Generic,
    /// Reference assembly path
    Reference,
    /// Haplotype of a sample
    Haplotype,
}

/// Interval of the full path covered by this path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subrange {
    pub start: usize,
    pub end: Option<usize>,
}

/// Full identity tuple of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathMetadata {
    pub sense: PathSense,
    pub sample: Option<String>,
    pub locus: Option<String>,
    pub haplotype: Option<usize>,
    pub phase_block: Option<usize>,
    pub subrange: Option<Subrange>,
}

impl PathMetadata {
    /// Generic path identified by its name alone
    pub fn generic(name: impl Into<String>) -> Self {
        Self {
            sense: PathSense::Generic,
            sample: None,
            locus: Some(name.into()),
            haplotype: None,
            phase_block: None,
            subrange: None,
        }
    }

    /// Reference path of a sample
    pub fn reference(sample: impl Into<String>, locus: impl Into<String>) -> Self {
        Self {
            sense: PathSense::Reference,
            sample: Some(sample.into()),
            locus: Some(locus.into()),
            haplotype: None,
            phase_block: None,
            subrange: None,
        }
    }

    /// Haplotype path of a sample
    pub fn haplotype(
        sample: impl Into<String>,
        locus: impl Into<String>,
        haplotype: usize,
        phase_block: usize,
    ) -> Self {
        Self {
            sense: PathSense::Haplotype,
            sample: Some(sample.into()),
            locus: Some(locus.into()),
            haplotype: Some(haplotype),
            phase_block: Some(phase_block),
            subrange: None,
        }
    }

    /// Builder: Set haplotype
    pub fn with_haplotype(mut self, haplotype: usize) -> Self {
        self.haplotype = Some(haplotype);
        self
    }

    /// Builder: Set subrange
    pub fn with_subrange(mut self, start: usize, end: Option<usize>) -> Self {
        self.subrange = Some(Subrange { start, end });
        self
    }
}

impl fmt::Display for PathMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locus = self.locus.as_deref().unwrap_or("*");
        match &self.sample {
            Some(sample) => write!(
                f,
                "{}#{}#{}",
                sample,
                self.haplotype.unwrap_or(0),
                locus
            )?,
            None => write!(f, "{}", locus)?,
        }
        if let Some(range) = self.subrange {
            match range.end {
                Some(end) => write!(f, "[{}-{}]", range.start, end)?,
                None => write!(f, "[{}]", range.start)?,
            }
        }
        Ok(())
    }
}
