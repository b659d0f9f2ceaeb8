use log::debug;

use crate::alphabet::ComplementTable;

use super::{Alignment, Column};

impl Alignment {
    /// Reverse-complements the alignment in place and flips its strand.
    pub fn reverse_complement(&mut self) {
        debug!("Reverse-complementing alignment {}", self.id);
        reverse_complement_columns(&mut self.columns, self.alphabet.complement_table());
        self.strand = self.strand.flipped();
    }

    /// Reverses the order of the columns, leaving the letters and the strand untouched.
    pub fn reverse(&mut self) {
        self.columns.reverse();
    }
}

/// Reverses the columns and complements each letter.
pub fn reverse_complement_columns(columns: &mut [Column], complement_table: &ComplementTable) {
    if columns.is_empty() {
        return;
    }

    let (mut i, mut j) = (0, columns.len() - 1);
    while i < j {
        let (left, right) = columns.split_at_mut(j);
        for (l, r) in left[i].iter_mut().zip(right[0].iter_mut()) {
            (*l, *r) = (complement_table.complement(*r), complement_table.complement(*l));
        }
        i += 1;
        j -= 1;
    }

    if i == j {
        for letter in columns[i].iter_mut() {
            *letter = complement_table.complement(*letter);
        }
    }
}
