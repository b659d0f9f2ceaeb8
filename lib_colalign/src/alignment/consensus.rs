//! Consensus calling, one column at a time.
//!
//! How a column is condensed into a single letter is decided by a [`ConsensusStrategy`].
//! Any closure `Fn(&Alignment, usize) -> QLetter` is a strategy.

use std::sync::Arc;

use crate::{
    alphabet::{DEFAULT_QUALITY, Letter, QLetter, Qphred, QualityEncoding},
    sequence::QualitySeq,
};

use super::Alignment;

pub trait ConsensusStrategy: Send + Sync {
    /// Returns the consensus of the column with the given index (not coordinate).
    fn consensus_letter(&self, alignment: &Alignment, column: usize) -> QLetter;
}

pub type RenderStrategy = Arc<dyn Fn(&Alignment) -> String + Send + Sync>;

/// Calls the most frequent letter of a column.
///
/// Ties are broken towards the smallest letter value.
/// The quality is the Phred-scaled probability that another letter is correct.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct MajorityConsensus {
    /// If false, gaps are only called in columns that consist entirely of gaps.
    pub include_gaps: bool,
}

/// Calls the IUPAC ambiguity code of all nucleotides in a column.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct AmbiguityConsensus;

impl<Function: Fn(&Alignment, usize) -> QLetter + Send + Sync> ConsensusStrategy for Function {
    fn consensus_letter(&self, alignment: &Alignment, column: usize) -> QLetter {
        self(alignment, column)
    }
}

impl Alignment {
    /// Calls the consensus of each column with this alignment's consensus strategy.
    ///
    /// The consensus is placed at the same coordinates, on the same strand and with the same circularity.
    pub fn consensus(&self) -> QualitySeq {
        let letters = (0..self.len())
            .map(|column| self.consensus_strategy.consensus_letter(self, column))
            .collect();

        let mut consensus = QualitySeq::new(
            format!("Consensus:{}", self.id),
            letters,
            self.alphabet.clone(),
            QualityEncoding::Sanger,
        );
        consensus.set_strand(self.strand);
        consensus.set_offset(self.offset);
        consensus.set_circular(self.circular);
        consensus
    }
}

/// The default render strategy, writing out the consensus letters.
pub fn render_consensus(alignment: &Alignment) -> String {
    alignment.consensus().letter_string()
}

impl MajorityConsensus {
    pub fn new(include_gaps: bool) -> Self {
        Self { include_gaps }
    }
}

impl ConsensusStrategy for MajorityConsensus {
    fn consensus_letter(&self, alignment: &Alignment, column: usize) -> QLetter {
        let gap = alignment.alphabet().gap();
        let mut counts = [0usize; 256];
        let mut total = 0;
        for &letter in &alignment.columns()[column] {
            if self.include_gaps || letter != gap {
                counts[usize::from(letter.0)] += 1;
                total += 1;
            }
        }

        let max_quality = QualityEncoding::Sanger.max_quality();
        if total == 0 {
            return QLetter::new(gap, max_quality);
        }

        let (letter, count) = counts
            .iter()
            .enumerate()
            .fold((0, 0), |(best, best_count), (letter, &count)| {
                if count > best_count {
                    (letter, count)
                } else {
                    (best, best_count)
                }
            });

        QLetter::new(
            Letter(letter as u8),
            Qphred::from_error_probability(1.0 - count as f64 / total as f64, max_quality),
        )
    }
}

const IUPAC_CODES: &[u8; 16] = b"-ACMGRSVTWYHKDBN";

impl AmbiguityConsensus {
    fn nucleotide_mask(letter: Letter) -> u8 {
        match letter.0.to_ascii_uppercase() {
            b'A' => 0b0001,
            b'C' => 0b0010,
            b'G' => 0b0100,
            b'T' | b'U' => 0b1000,
            b'M' => 0b0011,
            b'R' => 0b0101,
            b'W' => 0b1001,
            b'S' => 0b0110,
            b'Y' => 0b1010,
            b'K' => 0b1100,
            b'V' => 0b0111,
            b'H' => 0b1011,
            b'D' => 0b1101,
            b'B' => 0b1110,
            b'N' => 0b1111,
            _ => 0,
        }
    }
}

impl ConsensusStrategy for AmbiguityConsensus {
    fn consensus_letter(&self, alignment: &Alignment, column: usize) -> QLetter {
        let mask = alignment.columns()[column]
            .iter()
            .fold(0, |mask, &letter| mask | Self::nucleotide_mask(letter));

        let letter = if mask == 0 {
            alignment.alphabet().gap()
        } else {
            Letter(IUPAC_CODES[usize::from(mask)])
        };
        QLetter::new(letter, DEFAULT_QUALITY)
    }
}
