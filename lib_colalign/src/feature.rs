use std::{fmt::Display, ops::Deref};

use crate::sequence::Strand;

mod io;

/// An annotated range of an alignment.
///
/// On a circular alignment, a feature with `end < start` wraps around the end of the alignment.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub start: isize,
    pub end: isize,
    pub strand: Strand,
    pub name: Option<String>,
}

/// An ordered collection of features.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl Feature {
    pub fn new(start: isize, end: isize, strand: Strand) -> Self {
        Self {
            start,
            end,
            strand,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} ({})", self.start, self.end, self.strand)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}

impl FeatureSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

impl Deref for FeatureSet {
    type Target = [Feature];

    fn deref(&self) -> &Self::Target {
        &self.features
    }
}

impl From<Vec<Feature>> for FeatureSet {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
