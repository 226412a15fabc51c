use lazy_static::*;

use crate::BigInt;

/// Largest machine-integer value served from the caches below.
pub const MAX_CONSTANT: u128 = 16;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT as usize + 1] = [
        BigInt::from_raw(vec![0]    , false),
        BigInt::from_raw(vec![1]    , false),
        BigInt::from_raw(vec![2]    , false),
        BigInt::from_raw(vec![3]    , false),
        BigInt::from_raw(vec![4]    , false),
        BigInt::from_raw(vec![5]    , false),
        BigInt::from_raw(vec![6]    , false),
        BigInt::from_raw(vec![7]    , false),
        BigInt::from_raw(vec![8]    , false),
        BigInt::from_raw(vec![9]    , false),
        BigInt::from_raw(vec![1, 0], false),
        BigInt::from_raw(vec![1, 1], false),
        BigInt::from_raw(vec![1, 2], false),
        BigInt::from_raw(vec![1, 3], false),
        BigInt::from_raw(vec![1, 4], false),
        BigInt::from_raw(vec![1, 5], false),
        BigInt::from_raw(vec![1, 6], false),
    ];
    // index 0 is the canonical zero in both caches, never signed
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT as usize + 1] = [
        BigInt::from_raw(vec![0]    , false),
        BigInt::from_raw(vec![1]    , true),
        BigInt::from_raw(vec![2]    , true),
        BigInt::from_raw(vec![3]    , true),
        BigInt::from_raw(vec![4]    , true),
        BigInt::from_raw(vec![5]    , true),
        BigInt::from_raw(vec![6]    , true),
        BigInt::from_raw(vec![7]    , true),
        BigInt::from_raw(vec![8]    , true),
        BigInt::from_raw(vec![9]    , true),
        BigInt::from_raw(vec![1, 0], true),
        BigInt::from_raw(vec![1, 1], true),
        BigInt::from_raw(vec![1, 2], true),
        BigInt::from_raw(vec![1, 3], true),
        BigInt::from_raw(vec![1, 4], true),
        BigInt::from_raw(vec![1, 5], true),
        BigInt::from_raw(vec![1, 6], true),
    ];
}
