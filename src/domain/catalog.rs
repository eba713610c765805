use std::ops::RangeInclusive;

use rand::Rng;

/// Product ids a shopper browses, favorites and orders.
pub const PRODUCT_IDS: RangeInclusive<u32> = 1..=20;
/// User ids a shopper acts on behalf of.
pub const USER_IDS: RangeInclusive<u32> = 1..=10;

pub fn random_product_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(PRODUCT_IDS)
}

pub fn random_user_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(USER_IDS)
}
