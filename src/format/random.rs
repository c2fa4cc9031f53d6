use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick from an empty pool")]
pub struct EmptyPool;

/// One element chosen uniformly at random.
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T, EmptyPool>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(EmptyPool)
}

/// `count` independent picks; the same element may come up more than once.
pub fn pick_many<'a, T, R>(items: &'a [T], count: usize, rng: &mut R) -> Result<Vec<&'a T>, EmptyPool>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| pick(items, rng)).collect()
}
