use std::ops::Range;

use log::trace;

use crate::error::{Error, Result};

use super::{Alignment, Column};

/// A coordinate range translated into column indices.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ResolvedRange {
    Linear(Range<usize>),
    /// A range of a circular alignment that runs over its end.
    /// It consists of the `tail` of the alignment, followed by its `head`.
    Wrapped {
        tail: Range<usize>,
        head: Range<usize>,
    },
}

impl ResolvedRange {
    pub fn len(&self) -> usize {
        match self {
            ResolvedRange::Linear(range) => range.len(),
            ResolvedRange::Wrapped { tail, head } => tail.len() + head.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column indices in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match self {
            ResolvedRange::Linear(range) => (range.clone(), 0..0),
            ResolvedRange::Wrapped { tail, head } => (tail.clone(), head.clone()),
        };
        first.chain(second)
    }
}

impl Alignment {
    /// Translates the coordinates `start..end` into column indices.
    ///
    /// On a linear alignment, the range must lie within `self.start()..self.end()`.
    /// On a circular alignment, the range may additionally run over the end of the alignment,
    /// expressed either as `end < start` or as `end > self.end()`.
    /// A wrapping range must start before `self.end()`.
    pub fn resolve_range(&self, start: isize, end: isize) -> Result<ResolvedRange> {
        let lower = self.start();
        let upper = self.end();
        let out_of_range = || Error::OutOfRange {
            start,
            end,
            lower,
            upper,
        };

        if start < lower || start > upper {
            return Err(out_of_range());
        }

        if start <= end && end <= upper {
            return Ok(ResolvedRange::Linear(
                (start - lower) as usize..(end - lower) as usize,
            ));
        }

        // A wrapping range starts on a column of the alignment.
        if !self.circular || start >= upper {
            return Err(out_of_range());
        }

        let head_end = if end < start {
            end
        } else {
            end - self.len() as isize
        };
        if head_end < lower || head_end > start {
            return Err(out_of_range());
        }

        trace!("Range {start}..{end} wraps around the end of alignment {}", self.id);
        Ok(ResolvedRange::Wrapped {
            tail: (start - lower) as usize..self.len(),
            head: 0..(head_end - lower) as usize,
        })
    }

    /// Copies the columns of the coordinates `start..end`.
    ///
    /// See [`resolve_range`](Self::resolve_range) for the valid ranges.
    pub fn resolve_columns(&self, start: isize, end: isize) -> Result<Vec<Column>> {
        let range = self.resolve_range(start, end)?;
        Ok(range
            .indices()
            .map(|index| self.columns[index].clone())
            .collect())
    }
}
