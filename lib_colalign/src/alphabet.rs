use std::fmt::{Debug, Display};

use compact_genome::{
    implementation::alphabets::{dna_alphabet::DnaAlphabet, dna_alphabet_or_n::DnaAlphabetOrN},
    interface::alphabet::{Alphabet, AlphabetCharacter},
};

use crate::error::{Error, Result};


/// The quality that is attached to letters that carry no quality of their own.
pub const DEFAULT_QUALITY: Qphred = Qphred(40);

/// The gap letter of the nucleic alphabets shipped with this crate.
pub const GAP: Letter = Letter(b'-');

/// A single letter of an alignment, stored as its ASCII value.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(pub u8);

/// A Phred-scaled quality score.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qphred(pub u8);

/// A letter together with its quality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QLetter {
    pub letter: Letter,
    pub quality: Qphred,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum QualityEncoding {
    Sanger,
    Illumina1_3,
    Illumina1_8,
}

/// Maps each letter to its complement by its raw value.
///
/// Letters without a complement map to themselves.
#[derive(Clone, Eq, PartialEq)]
pub struct ComplementTable {
    table: [Letter; 256],
}

/// The letter system of an alignment.
///
/// Alignments share their alphabet and never modify it.
pub trait NucleicAlphabet: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn gap(&self) -> Letter;

    fn complement_table(&self) -> &ComplementTable;

    fn is_valid(&self, letter: Letter) -> bool;
}

/// A nucleic alphabet derived from a `compact_genome` alphabet, extended by a gap letter.
///
/// Both upper and lower case letters are accepted, and complementing preserves the case.
#[derive(Debug, Clone)]
pub struct GappedNucleicAlphabet {
    name: String,
    gap: Letter,
    complement_table: ComplementTable,
    valid: [bool; 256],
}

impl Letter {
    pub fn to_char(self) -> char {
        self.0 as char
    }
}

impl From<u8> for Letter {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Qphred {
    /// Converts the probability that a letter is wrong into a quality.
    ///
    /// The result is capped at `max`, which is also returned for an error probability of zero.
    pub fn from_error_probability(error_probability: f64, max: Qphred) -> Self {
        if error_probability <= 0.0 {
            return max;
        }

        let quality = (-10.0 * error_probability.log10()).round();
        if quality >= f64::from(max.0) {
            max
        } else if quality <= 0.0 {
            Self(0)
        } else {
            Self(quality as u8)
        }
    }

    pub fn error_probability(self) -> f64 {
        10f64.powf(-f64::from(self.0) / 10.0)
    }
}

impl QLetter {
    pub fn new(letter: Letter, quality: Qphred) -> Self {
        Self { letter, quality }
    }
}

impl From<Letter> for QLetter {
    fn from(letter: Letter) -> Self {
        Self::new(letter, DEFAULT_QUALITY)
    }
}

impl QualityEncoding {
    pub fn offset(self) -> u8 {
        match self {
            QualityEncoding::Sanger | QualityEncoding::Illumina1_8 => 33,
            QualityEncoding::Illumina1_3 => 64,
        }
    }

    pub fn max_quality(self) -> Qphred {
        match self {
            QualityEncoding::Sanger => Qphred(93),
            QualityEncoding::Illumina1_3 => Qphred(62),
            QualityEncoding::Illumina1_8 => Qphred(41),
        }
    }

    pub fn encode(self, quality: Qphred) -> char {
        (quality.0.min(self.max_quality().0) + self.offset()) as char
    }
}

impl ComplementTable {
    pub fn identity() -> Self {
        Self {
            table: std::array::from_fn(|index| Letter(index as u8)),
        }
    }

    pub fn complement(&self, letter: Letter) -> Letter {
        self.table[usize::from(letter.0)]
    }

    pub fn set(&mut self, letter: Letter, complement: Letter) {
        self.table[usize::from(letter.0)] = complement;
    }
}

impl Debug for ComplementTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.table
                    .iter()
                    .enumerate()
                    .filter(|(index, complement)| usize::from(complement.0) != *index)
                    .map(|(index, complement)| ((index as u8) as char, complement.to_char())),
            )
            .finish()
    }
}

impl GappedNucleicAlphabet {
    pub fn from_alphabet<AlphabetType: Alphabet>(name: impl Into<String>, gap: Letter) -> Self {
        let mut complement_table = ComplementTable::identity();
        let mut valid = [false; 256];
        valid[usize::from(gap.0)] = true;

        for ascii in 0..=u8::MAX {
            if let Ok(character) = AlphabetType::ascii_to_character(ascii.to_ascii_uppercase()) {
                let complement = AlphabetType::character_to_ascii(character.complement());
                let complement = if ascii.is_ascii_lowercase() {
                    complement.to_ascii_lowercase()
                } else {
                    complement
                };

                complement_table.set(Letter(ascii), Letter(complement));
                valid[usize::from(ascii)] = true;
            }
        }

        Self {
            name: name.into(),
            gap,
            complement_table,
            valid,
        }
    }

    pub fn dna() -> Self {
        Self::from_alphabet::<DnaAlphabet>("DNA", GAP)
    }

    pub fn dna_or_n() -> Self {
        Self::from_alphabet::<DnaAlphabetOrN>("DNA or N", GAP)
    }

    /// Extends [`dna_or_n`](Self::dna_or_n) by the IUPAC ambiguity codes.
    pub fn dna_iupac() -> Self {
        let mut alphabet = Self::dna_or_n();
        alphabet.name = "IUPAC DNA".to_string();

        for (letter, complement) in [
            (b'R', b'Y'),
            (b'K', b'M'),
            (b'S', b'S'),
            (b'W', b'W'),
            (b'B', b'V'),
            (b'D', b'H'),
        ] {
            for (letter, complement) in [
                (letter, complement),
                (complement, letter),
                (letter.to_ascii_lowercase(), complement.to_ascii_lowercase()),
                (complement.to_ascii_lowercase(), letter.to_ascii_lowercase()),
            ] {
                alphabet
                    .complement_table
                    .set(Letter(letter), Letter(complement));
                alphabet.valid[usize::from(letter)] = true;
            }
        }

        alphabet
    }
}

impl NucleicAlphabet for GappedNucleicAlphabet {
    fn name(&self) -> &str {
        &self.name
    }

    fn gap(&self) -> Letter {
        self.gap
    }

    fn complement_table(&self) -> &ComplementTable {
        &self.complement_table
    }

    fn is_valid(&self, letter: Letter) -> bool {
        self.valid[usize::from(letter.0)]
    }
}

/// Converts ASCII text into letters, checking each letter against the alphabet.
pub fn letters_from_ascii(alphabet: &dyn NucleicAlphabet, ascii: &[u8]) -> Result<Vec<Letter>> {
    ascii
        .iter()
        .enumerate()
        .map(|(position, &ascii)| {
            let letter = Letter(ascii);
            if alphabet.is_valid(letter) {
                Ok(letter)
            } else {
                Err(Error::InvalidLetter {
                    letter: letter.to_char(),
                    position,
                    alphabet: alphabet.name().to_string(),
                })
            }
        })
        .collect()
}
