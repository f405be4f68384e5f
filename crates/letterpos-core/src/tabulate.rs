//! Position tabulation: type/token counts → letter × column frequencies.

use crate::normalize::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::table::{Column, FrequencyTable};
use crate::types::TypeCounts;

/// Count every letter occurrence at its (length, position) slot and in `T`,
/// weighted by the word's token count.
///
/// Only lengths 3..=7 are visited; a missing length contributes nothing.
pub fn tabulate(types: &TypeCounts) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for length in MIN_WORD_LEN..=MAX_WORD_LEN {
        let Some(words) = types.get(&length) else {
            continue;
        };
        for (word, &tokens) in words {
            for (position, letter) in word.chars().take(length).enumerate() {
                table.add(letter, Column::position(length, position), tokens);
                table.add(letter, Column::Total, tokens);
            }
        }
    }
    table
}
