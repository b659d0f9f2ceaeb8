use log::debug;

use crate::{
    alphabet::{DEFAULT_QUALITY, Letter, QLetter},
    error::{Error, Result},
    sequence::{LinearSeq, RowSource},
};

use super::{Alignment, Column};

impl Alignment {
    /// Appends columns to the end of the alignment, dropping their qualities.
    ///
    /// Fails without modifying the alignment if any column does not have exactly one letter per row.
    pub fn append_columns(&mut self, columns: &[Vec<QLetter>]) -> Result<()> {
        let count = self.row_count();
        if let Some((column, length)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, length)| *length != count)
        {
            return Err(Error::ColumnLengthMismatch {
                column,
                length,
                count,
            });
        }

        self.columns.reserve(columns.len());
        self.columns.extend(
            columns
                .iter()
                .map(|column| column.iter().map(|qletter| qletter.letter).collect()),
        );

        Ok(())
    }

    /// Appends one sequence to each row.
    ///
    /// The sequences may have different lengths, shorter ones are padded with gaps.
    pub fn append_each(&mut self, rows: &[Vec<QLetter>]) -> Result<()> {
        if rows.len() != self.row_count() {
            return Err(Error::RowCountMismatch {
                sequences: rows.len(),
                count: self.row_count(),
            });
        }

        let length = rows.iter().map(Vec::len).max().unwrap_or(0);
        let gap = QLetter::from(self.alphabet.gap());
        let columns: Vec<_> = (0..length)
            .map(|index| {
                rows.iter()
                    .map(|row| row.get(index).copied().unwrap_or(gap))
                    .collect()
            })
            .collect();

        self.append_columns(&columns)
    }

    /// Adds the rows of each source to the alignment, in order.
    ///
    /// The letters of a source are placed at their coordinates.
    /// Where a source does not cover a column of the alignment, its rows receive gaps.
    /// Letters of a source outside of the alignment are dropped.
    pub fn add_rows(&mut self, sources: &[&dyn RowSource]) {
        let gap = self.alphabet.gap();
        let added_rows: usize = sources.iter().map(|source| source.row_count()).sum();
        debug!(
            "Adding {added_rows} rows from {} sources to alignment {}",
            sources.len(),
            self.id
        );

        let start = self.start();
        for (index, column) in self.columns.iter_mut().enumerate() {
            let position = start + index as isize;
            column.reserve(added_rows);

            for source in sources {
                if source.start() <= position && position < source.end() {
                    source.append_letters_at(position, column);
                } else {
                    column.extend(std::iter::repeat_n(gap, source.row_count()));
                }
            }
        }

        for source in sources {
            self.row_labels.extend(source.labels().iter().cloned());
        }
    }

    /// Copies a single row into a standalone sequence.
    pub fn extract_row(&self, row: usize) -> Result<LinearSeq> {
        if row >= self.row_count() {
            return Err(Error::RowOutOfRange {
                row,
                count: self.row_count(),
            });
        }

        let letters = self.columns.iter().map(|column| column[row]).collect();
        let mut sequence = LinearSeq::new(
            self.row_labels[row].clone(),
            letters,
            self.alphabet.clone(),
        );
        sequence.set_offset(self.offset);
        Ok(sequence)
    }

    /// The column at the given coordinate.
    pub fn column(&self, position: isize) -> Option<&[Letter]> {
        self.column_index(position)
            .map(|index| self.columns[index].as_slice())
    }

    /// The column at the given coordinate, with the default quality attached to each letter.
    pub fn column_qletters(&self, position: isize) -> Option<Vec<QLetter>> {
        self.column(position)
            .map(|column| column.iter().copied().map(QLetter::from).collect())
    }

    pub fn at(&self, position: isize, row: usize) -> Option<QLetter> {
        self.column(position)
            .and_then(|column| column.get(row))
            .map(|&letter| QLetter::new(letter, DEFAULT_QUALITY))
    }

    pub fn set(&mut self, position: isize, row: usize, letter: Letter) -> Result<()> {
        let count = self.row_count();
        if row >= count {
            return Err(Error::RowOutOfRange { row, count });
        }

        let index = self
            .column_index(position)
            .ok_or_else(|| Error::OutOfRange {
                start: position,
                end: position + 1,
                lower: self.start(),
                upper: self.end(),
            })?;
        self.columns[index][row] = letter;
        Ok(())
    }

    fn column_index(&self, position: isize) -> Option<usize> {
        usize::try_from(position - self.offset)
            .ok()
            .filter(|&index| index < self.columns.len())
    }
}

impl RowSource for Alignment {
    fn labels(&self) -> &[String] {
        &self.row_labels
    }

    fn start(&self) -> isize {
        self.offset
    }

    fn end(&self) -> isize {
        Alignment::end(self)
    }

    fn append_letters_at(&self, position: isize, column: &mut Column) {
        column.extend_from_slice(&self.columns[(position - self.offset) as usize]);
    }
}
