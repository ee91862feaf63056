//! DNA alphabet and Watson-Crick complement rules

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Standard DNA bases
pub const STANDARD_BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Watson-Crick complement mapping over the standard bases
pub static COMPLEMENT: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert('A', 'T');
    map.insert('T', 'A');
    map.insert('G', 'C');
    map.insert('C', 'G');
    map
});

/// Check if a character is a standard DNA base (uppercase)
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Complement of a base, case-insensitive.
/// Returns `None` for any character outside the A/C/G/T alphabet.
pub fn complement_of(base: char) -> Option<char> {
    COMPLEMENT.get(&base.to_ascii_uppercase()).copied()
}
