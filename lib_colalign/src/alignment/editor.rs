use log::{debug, trace};

use crate::{
    error::{Error, Result},
    feature::Feature,
};

use super::{Alignment, Column, orientation::reverse_complement_columns};

/// The end of an alignment at which another alignment is joined.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JoinEnd {
    /// Prepend the other alignment.
    Low,
    /// Append the other alignment.
    High,
}

impl Alignment {
    /// Cuts the alignment down to the coordinates `start..end`.
    ///
    /// The result is linear and starts at coordinate `start`.
    /// If the alignment is circular, the range may wrap around its end.
    pub fn truncate(&mut self, start: isize, end: isize) -> Result<()> {
        debug!("Truncating alignment {} to {start}..{end}", self.id);
        self.columns = self.resolve_columns(start, end)?;
        self.offset = start;
        self.circular = false;
        Ok(())
    }

    /// Like [`truncate`](Self::truncate), but returns the result as a detached copy.
    pub fn subseq(&self, start: isize, end: isize) -> Result<Self> {
        debug!("Extracting {start}..{end} from alignment {}", self.id);
        let mut result = self.with_columns(self.resolve_columns(start, end)?);
        result.offset = start;
        result.circular = false;
        Ok(result)
    }

    /// Joins the columns of `other` to the given end of this alignment.
    ///
    /// Neither alignment may be circular, and both must have the same number of rows.
    pub fn join(&mut self, other: &Alignment, end: JoinEnd) -> Result<()> {
        if self.circular {
            return Err(Error::CircularReceiver);
        } else if other.circular {
            return Err(Error::CircularArgument);
        } else if self.row_count() != other.row_count() {
            return Err(Error::RowCountMismatch {
                sequences: other.row_count(),
                count: self.row_count(),
            });
        }

        let offset = self
            .joined_offset(other.len(), end)
            .ok_or(Error::CoordinateOverflow {
                offset: self.offset,
                length: other.len(),
            })?;

        debug!(
            "Joining {} columns of alignment {} to the {end:?} end of alignment {}",
            other.len(),
            other.id,
            self.id
        );
        match end {
            JoinEnd::Low => {
                let mut columns = Vec::with_capacity(self.len() + other.len());
                columns.extend(other.columns.iter().cloned());
                columns.append(&mut self.columns);
                self.columns = columns;
            }
            JoinEnd::High => self.columns.extend(other.columns.iter().cloned()),
        }
        self.offset = offset;

        Ok(())
    }

    /// The offset after joining `length` columns to the given end, if the end coordinate still fits.
    fn joined_offset(&self, length: usize, end: JoinEnd) -> Option<isize> {
        let length = isize::try_from(length).ok()?;
        let offset = match end {
            JoinEnd::Low => self.offset.checked_sub(length)?,
            JoinEnd::High => self.offset,
        };
        let joined_length = isize::try_from(self.len()).ok()?.checked_add(length)?;
        offset.checked_add(joined_length)?;
        Some(offset)
    }

    /// Replaces the alignment with the concatenation of the given features.
    ///
    /// The strands of the features are ignored.
    /// The result is linear and starts at coordinate zero.
    pub fn stitch(&mut self, features: &[Feature]) -> Result<()> {
        debug!("Stitching {} features of alignment {}", features.len(), self.id);
        let columns = self.feature_blocks(features)?.into_iter().flatten().collect();

        self.columns = columns;
        self.offset = 0;
        self.circular = false;
        Ok(())
    }

    /// Like [`stitch`](Self::stitch), but features on the reverse strand are reverse-complemented
    /// before they are concatenated.
    pub fn compose(&mut self, features: &[Feature]) -> Result<()> {
        debug!("Composing {} features of alignment {}", features.len(), self.id);
        let complement_table = self.alphabet.complement_table();
        let mut columns = Vec::new();
        for (mut block, feature) in self.feature_blocks(features)?.into_iter().zip(features) {
            if feature.strand.is_reverse() {
                trace!("Reverse-complementing feature {feature}");
                reverse_complement_columns(&mut block, complement_table);
            }
            columns.append(&mut block);
        }

        self.columns = columns;
        self.offset = 0;
        self.circular = false;
        Ok(())
    }

    /// Copies the columns of each feature, resolving the feature ranges against this alignment.
    fn feature_blocks(&self, features: &[Feature]) -> Result<Vec<Vec<Column>>> {
        features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                trace!("Resolving feature {index}: {feature}");
                self.resolve_columns(feature.start, feature.end)
                    .map_err(|error| match error {
                        Error::OutOfRange {
                            start,
                            end,
                            lower,
                            upper,
                        } => Error::FeatureOutOfRange {
                            feature: index,
                            start,
                            end,
                            lower,
                            upper,
                        },
                        error => error,
                    })
            })
            .collect()
    }
}
