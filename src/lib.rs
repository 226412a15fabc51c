//! Dec Int \
//! This crate provides:
//! - [`BigInt`]: signed arbitrary-precision integers stored as base-10 digit
//!   sequences, with schoolbook addition, subtraction and multiplication, a
//!   total ordering, and decimal parsing/rendering.

mod big_int;
mod digit_cache;

pub use big_int::{BigInt, ParseBigIntError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "12345670".into();
        let b: BigInt = "9876576210".into();
        println!("a = {}", a);
        println!("-a = {}", -&a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        assert!(a < b);
    }
}
