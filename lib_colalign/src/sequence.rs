use std::{fmt::Display, sync::Arc};

use crate::{
    alphabet::{Letter, NucleicAlphabet, QLetter, QualityEncoding, letters_from_ascii},
    error::Result,
};


/// The orientation of a sequence or feature.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Strand {
    Reverse = -1,
    None = 0,
    Forward = 1,
}

/// Something that can be absorbed as additional rows of an alignment.
///
/// A plain sequence is a source with a single row,
/// while an alignment contributes all of its rows at once.
pub trait RowSource {
    fn labels(&self) -> &[String];

    fn row_count(&self) -> usize {
        self.labels().len()
    }

    /// The first coordinate covered by this source.
    fn start(&self) -> isize;

    /// The coordinate after the last coordinate covered by this source.
    fn end(&self) -> isize;

    /// Appends the [`row_count`](Self::row_count) letters at `position` to `column`.
    ///
    /// `position` must be within `start()..end()`.
    fn append_letters_at(&self, position: isize, column: &mut Vec<Letter>);
}

/// A single unaligned nucleic acid sequence.
#[derive(Debug, Clone)]
pub struct LinearSeq {
    pub id: String,
    pub description: String,
    pub location: String,
    letters: Vec<Letter>,
    alphabet: Arc<dyn NucleicAlphabet>,
    strand: Strand,
    circular: bool,
    offset: isize,
}

/// A single nucleic acid sequence with a quality for each letter.
#[derive(Debug, Clone)]
pub struct QualitySeq {
    pub id: String,
    letters: Vec<QLetter>,
    alphabet: Arc<dyn NucleicAlphabet>,
    encoding: QualityEncoding,
    strand: Strand,
    circular: bool,
    offset: isize,
}

impl Strand {
    pub fn flipped(self) -> Self {
        match self {
            Strand::Reverse => Strand::Forward,
            Strand::None => Strand::None,
            Strand::Forward => Strand::Reverse,
        }
    }

    pub fn is_reverse(self) -> bool {
        self == Strand::Reverse
    }

    pub fn sign(self) -> i8 {
        self as i8
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Reverse => write!(f, "-"),
            Strand::None => write!(f, "."),
            Strand::Forward => write!(f, "+"),
        }
    }
}

impl LinearSeq {
    pub fn new(
        id: impl Into<String>,
        letters: Vec<Letter>,
        alphabet: Arc<dyn NucleicAlphabet>,
    ) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            location: String::new(),
            letters,
            alphabet,
            strand: Strand::Forward,
            circular: false,
            offset: 0,
        }
    }

    /// Creates a sequence from ASCII text, rejecting letters that are not part of the alphabet.
    pub fn from_ascii(
        id: impl Into<String>,
        ascii: &[u8],
        alphabet: Arc<dyn NucleicAlphabet>,
    ) -> Result<Self> {
        let letters = letters_from_ascii(alphabet.as_ref(), ascii)?;
        Ok(Self::new(id, letters, alphabet))
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn alphabet(&self) -> &Arc<dyn NucleicAlphabet> {
        &self.alphabet
    }

    /// Returns the letter at the given coordinate, if the sequence covers it.
    pub fn at(&self, position: isize) -> Option<Letter> {
        usize::try_from(position - self.offset)
            .ok()
            .and_then(|index| self.letters.get(index).copied())
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn set_strand(&mut self, strand: Strand) {
        self.strand = strand;
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    pub fn set_offset(&mut self, offset: isize) {
        self.offset = offset;
    }
}

impl RowSource for LinearSeq {
    fn labels(&self) -> &[String] {
        std::slice::from_ref(&self.id)
    }

    fn start(&self) -> isize {
        self.offset
    }

    fn end(&self) -> isize {
        self.offset + self.letters.len() as isize
    }

    fn append_letters_at(&self, position: isize, column: &mut Vec<Letter>) {
        column.push(self.letters[(position - self.offset) as usize]);
    }
}

impl Display for LinearSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl QualitySeq {
    pub fn new(
        id: impl Into<String>,
        letters: Vec<QLetter>,
        alphabet: Arc<dyn NucleicAlphabet>,
        encoding: QualityEncoding,
    ) -> Self {
        Self {
            id: id.into(),
            letters,
            alphabet,
            encoding,
            strand: Strand::Forward,
            circular: false,
            offset: 0,
        }
    }

    pub fn letters(&self) -> &[QLetter] {
        &self.letters
    }

    pub fn letters_mut(&mut self) -> &mut [QLetter] {
        &mut self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn alphabet(&self) -> &Arc<dyn NucleicAlphabet> {
        &self.alphabet
    }

    pub fn encoding(&self) -> QualityEncoding {
        self.encoding
    }

    pub fn start(&self) -> isize {
        self.offset
    }

    pub fn end(&self) -> isize {
        self.offset + self.letters.len() as isize
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn set_strand(&mut self, strand: Strand) {
        self.strand = strand;
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    pub fn set_offset(&mut self, offset: isize) {
        self.offset = offset;
    }

    pub fn letter_string(&self) -> String {
        self.letters
            .iter()
            .map(|qletter| qletter.letter.to_char())
            .collect()
    }

    /// The qualities as text in this sequence's [`QualityEncoding`].
    pub fn quality_string(&self) -> String {
        self.letters
            .iter()
            .map(|qletter| self.encoding.encode(qletter.quality))
            .collect()
    }
}

impl Display for QualitySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter_string())
    }
}
