//! Sign-pattern tables for the 2x2x2 column footprint and hypercube corners
//!
//! Entry `i` of each table is built by binary counting: bit `k` of `i`
//! selects +1 (set) or -1 (clear) for component `k`.

use crate::IVec4;

/// The 8 (x, y, z) columns of the board footprint
pub const COLUMNS: [[i32; 3]; 8] = [
    [-1, -1, -1],
    [ 1, -1, -1],
    [-1,  1, -1],
    [ 1,  1, -1],
    [-1, -1,  1],
    [ 1, -1,  1],
    [-1,  1,  1],
    [ 1,  1,  1],
];

/// Offsets from a unit cell's center to its 16 corners
pub const CORNER_OFFSETS: [IVec4; 16] = [
    IVec4::new(-1, -1, -1, -1), // 0  = 0b0000
    IVec4::new( 1, -1, -1, -1), // 1  = 0b0001
    IVec4::new(-1,  1, -1, -1), // 2  = 0b0010
    IVec4::new( 1,  1, -1, -1), // 3  = 0b0011
    IVec4::new(-1, -1,  1, -1), // 4  = 0b0100
    IVec4::new( 1, -1,  1, -1), // 5  = 0b0101
    IVec4::new(-1,  1,  1, -1), // 6  = 0b0110
    IVec4::new( 1,  1,  1, -1), // 7  = 0b0111
    IVec4::new(-1, -1, -1,  1), // 8  = 0b1000
    IVec4::new( 1, -1, -1,  1), // 9  = 0b1001
    IVec4::new(-1,  1, -1,  1), // 10 = 0b1010
    IVec4::new( 1,  1, -1,  1), // 11 = 0b1011
    IVec4::new(-1, -1,  1,  1), // 12 = 0b1100
    IVec4::new( 1, -1,  1,  1), // 13 = 0b1101
    IVec4::new(-1,  1,  1,  1), // 14 = 0b1110
    IVec4::new( 1,  1,  1,  1), // 15 = 0b1111
];

/// The cell in `column` at height `w`
#[inline]
pub fn cell_at(column: [i32; 3], w: i32) -> IVec4 {
    IVec4::new(column[0], column[1], column[2], w)
}
