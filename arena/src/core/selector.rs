//! Random pair selection

use rand::Rng;
use shared::Item;

use crate::error::{ArenaError, ArenaResult};

/// Draw two items with different ids, uniformly at random
pub fn select_pair(items: &[Item]) -> ArenaResult<(Item, Item)> {
    select_pair_with(items, &mut rand::thread_rng())
}

/// [`select_pair`] with a caller-supplied RNG.
///
/// The first item is drawn uniformly, the second uniformly among the items
/// whose id differs from the first. With unique ids this is a uniform draw
/// without replacement; with repeated ids it still never returns a self-pair.
pub fn select_pair_with<R: Rng + ?Sized>(items: &[Item], rng: &mut R) -> ArenaResult<(Item, Item)> {
    if items.len() < 2 {
        return Err(ArenaError::InsufficientItems {
            available: items.len(),
        });
    }

    let left = &items[rng.gen_range(0..items.len())];
    let opponents: Vec<&Item> = items.iter().filter(|item| item.id != left.id).collect();
    if opponents.is_empty() {
        return Err(ArenaError::InsufficientItems { available: 1 });
    }
    let right = opponents[rng.gen_range(0..opponents.len())];

    Ok((left.clone(), right.clone()))
}
