// Complete Rectangle Encapsulation
// Private dimensions behind a small accessor API, with derived area and
// perimeter.

use colored::Colorize;

pub struct Rectangle {
    base: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn area(&self) -> f64 {
        self.base * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.base + self.height)
    }
}

fn print_rectangle(label: &str, rect: &Rectangle) {
    println!("{}", label.bold());
    println!("Base: {}", rect.base());
    println!("Height: {}", rect.height());
    println!("Area: {}", rect.area());
    println!("Perimeter: {}", rect.perimeter());
    println!();
}

fn main() {
    let r1 = Rectangle::new(10.0, 5.0);
    print_rectangle("Rectangle 1", &r1);

    let mut r2 = Rectangle::new(7.5, 3.2);
    print_rectangle("Rectangle 2", &r2);

    r2.set_base(8.0);
    r2.set_height(4.0);
    print_rectangle("Rectangle 2 (modified)", &r2);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_and_perimeter() {
        let rect = Rectangle::new(10.0, 5.0);
        assert_eq!(rect.area(), 50.0);
        assert_eq!(rect.perimeter(), 30.0);
    }

    #[test]
    fn accessors_reflect_construction() {
        let rect = Rectangle::new(7.5, 3.2);
        assert_eq!(rect.base(), 7.5);
        assert_eq!(rect.height(), 3.2);
    }

    #[test]
    fn setters_update_derived_values() {
        let mut rect = Rectangle::new(7.5, 3.2);
        rect.set_base(8.0);
        rect.set_height(4.0);
        assert_eq!(rect.area(), 32.0);
        assert_eq!(rect.perimeter(), 24.0);
    }

    #[test]
    fn degenerate_rectangle() {
        let rect = Rectangle::new(0.0, 4.0);
        assert_eq!(rect.area(), 0.0);
        assert_eq!(rect.perimeter(), 8.0);
    }
}
