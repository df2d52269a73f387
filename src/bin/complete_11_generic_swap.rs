// Complete Generic Swap
// Exchanging two values of the same type: by value (move semantics) and
// in place through mutable references.

use colored::Colorize;
use std::mem;

/// Returns the pair with its values exchanged.
pub fn exchange<T>(a: T, b: T) -> (T, T) {
    (b, a)
}

/// Exchanges two values in place.
pub fn exchange_in_place<T>(a: &mut T, b: &mut T) {
    mem::swap(a, b);
}

fn main() {
    println!("{}", "=== Integers ===".bold());
    let (mut x, mut y) = (5, 10);
    println!("Before: x = {}, y = {}", x, y);
    exchange_in_place(&mut x, &mut y);
    println!("After:  x = {}, y = {}", x, y);

    println!("\n{}", "=== Floats ===".bold());
    let (d1, d2) = (1.5, 3.7);
    println!("Before: d1 = {}, d2 = {}", d1, d2);
    let (d1, d2) = exchange(d1, d2);
    println!("After:  d1 = {}, d2 = {}", d1, d2);

    println!("\n{}", "=== Strings ===".bold());
    let (mut s1, mut s2) = (String::from("Hello"), String::from("World"));
    println!("Before: s1 = {}, s2 = {}", s1, s2);
    exchange_in_place(&mut s1, &mut s2);
    println!("After:  s1 = {}, s2 = {}", s1, s2);
}

// =============================================================================
// Tests
// =============================================================================
