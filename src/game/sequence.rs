//! Sequence generation

use rand::Rng;

use super::types::TileIndex;

/// Draw `len` tiles, each uniform over `[0, tile_count)`
///
/// An empty board yields an empty sequence.
pub fn generate_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    tile_count: usize,
) -> Vec<TileIndex> {
    if tile_count == 0 {
        return Vec::new();
    }
    (0..len).map(|_| rng.gen_range(0..tile_count)).collect()
}
