//! A multiple alignment of nucleic acid sequences, stored as columns.
//!
//! The alignment occupies the coordinates `start()..end()`, where `start()` is its offset.
//! Every column holds exactly one letter per row.

use std::{any::Any, fmt::Display, sync::Arc};

use consensus::{ConsensusStrategy, RenderStrategy, render_consensus};

use crate::{
    alphabet::{Letter, NucleicAlphabet},
    error::{Error, Result},
    sequence::Strand,
};

pub mod columns;
pub mod consensus;
pub mod editor;
pub mod geometry;
pub mod orientation;


/// One position across all rows of an alignment.
pub type Column = Vec<Letter>;

pub struct Alignment {
    pub id: String,
    pub description: String,
    pub location: String,
    row_labels: Vec<String>,
    columns: Vec<Column>,
    alphabet: Arc<dyn NucleicAlphabet>,
    strand: Strand,
    circular: bool,
    offset: isize,
    consensus_strategy: Arc<dyn ConsensusStrategy>,
    render_strategy: RenderStrategy,
    /// Owned by the caller, no operation reads, copies or modifies it.
    metadata: Option<Box<dyn Any + Send + Sync>>,
}

impl Alignment {
    /// Creates a new alignment from its initial columns.
    ///
    /// If `row_labels` is empty and there are columns, then the rows are labelled `<id>:<row index>`.
    /// Otherwise, every column must have exactly one letter per row label.
    pub fn new(
        id: impl Into<String>,
        row_labels: Vec<String>,
        columns: Vec<Column>,
        alphabet: Arc<dyn NucleicAlphabet>,
        consensus_strategy: impl ConsensusStrategy + 'static,
    ) -> Result<Self> {
        let id = id.into();
        let row_labels = match (row_labels.is_empty(), columns.first()) {
            (true, Some(first)) => (0..first.len()).map(|row| format!("{id}:{row}")).collect(),
            _ => row_labels,
        };

        if let Some((column, length)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, length)| *length != row_labels.len())
        {
            return Err(if column == 0 {
                Error::RowLabelMismatch {
                    labels: row_labels.len(),
                    rows: length,
                }
            } else {
                Error::ColumnLengthMismatch {
                    column,
                    length,
                    count: row_labels.len(),
                }
            });
        }

        Ok(Self {
            id,
            description: String::new(),
            location: String::new(),
            row_labels,
            columns,
            alphabet,
            strand: Strand::Forward,
            circular: false,
            offset: 0,
            consensus_strategy: Arc::new(consensus_strategy),
            render_strategy: Arc::new(render_consensus),
            metadata: None,
        })
    }

    pub fn with_render_strategy(
        mut self,
        render_strategy: impl Fn(&Alignment) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render_strategy = Arc::new(render_strategy);
        self
    }

    pub fn set_consensus_strategy(
        &mut self,
        consensus_strategy: impl ConsensusStrategy + 'static,
    ) {
        self.consensus_strategy = Arc::new(consensus_strategy);
    }

    /// Returns a copy that shares no column storage with this alignment.
    ///
    /// The metadata is not copied.
    pub fn detached(&self) -> Self {
        self.with_columns(self.columns.clone())
    }

    /// Copies everything but the columns and the metadata.
    fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            row_labels: self.row_labels.clone(),
            columns,
            alphabet: self.alphabet.clone(),
            strand: self.strand,
            circular: self.circular,
            offset: self.offset,
            consensus_strategy: self.consensus_strategy.clone(),
            render_strategy: self.render_strategy.clone(),
            metadata: None,
        }
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn alphabet(&self) -> &Arc<dyn NucleicAlphabet> {
        &self.alphabet
    }

    pub fn start(&self) -> isize {
        self.offset
    }

    pub fn end(&self) -> isize {
        self.offset + self.columns.len() as isize
    }

    /// Moves the alignment to a new coordinate without changing its columns.
    ///
    /// The end coordinate `offset + len()` must fit into an `isize`.
    pub fn set_offset(&mut self, offset: isize) {
        self.offset = offset;
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    pub fn metadata(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.metadata.as_deref()
    }

    pub fn set_metadata(&mut self, metadata: Option<Box<dyn Any + Send + Sync>>) {
        self.metadata = metadata;
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (self.render_strategy)(self))
    }
}

impl std::fmt::Debug for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alignment")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("location", &self.location)
            .field("row_labels", &self.row_labels)
            .field("columns", &self.columns)
            .field("alphabet", &self.alphabet.name())
            .field("strand", &self.strand)
            .field("circular", &self.circular)
            .field("offset", &self.offset)
            .field("has_metadata", &self.metadata.is_some())
            .finish()
    }
}
