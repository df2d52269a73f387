// Complete Employee/Date Composition
// An employee record owning its joining date, with a drop trace when the
// record is released.

use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    day: u32,
    month: u32,
    year: u32,
}

impl Date {
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for Date {
    // dd/mm/yyyy, day and month zero-padded
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

pub struct Employee {
    name: String,
    joined: Date,
}

impl Employee {
    pub fn new(name: impl Into<String>, joined: Date) -> Self {
        Self {
            name: name.into(),
            joined,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn joined(&self) -> Date {
        self.joined
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee: {}", self.name)?;
        write!(f, "Joining date: {}", self.joined)
    }
}

impl Drop for Employee {
    fn drop(&mut self) {
        println!("Employee record \"{}\" released.", self.name);
    }
}

fn main() {
    let joined = Date::new(7, 7, 2025);
    let employee = Employee::new("Lucia Gomez", joined);

    println!("{}", "=== Employee Record ===".bold());
    println!("{}", employee);

    // The drop trace prints when `employee` goes out of scope.
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_zero_padded() {
        assert_eq!(Date::new(7, 7, 2025).to_string(), "07/07/2025");
        assert_eq!(Date::new(3, 12, 1999).to_string(), "03/12/1999");
    }

    #[test]
    fn date_with_two_digit_fields() {
        assert_eq!(Date::new(25, 11, 2024).to_string(), "25/11/2024");
    }

    #[test]
    fn employee_display_shows_name_and_date() {
        let employee = Employee::new("Lucia Gomez", Date::new(7, 7, 2025));
        let rendered = employee.to_string();
        assert!(rendered.contains("Lucia Gomez"));
        assert!(rendered.contains("07/07/2025"));
    }

    #[test]
    fn employee_accessors() {
        let joined = Date::new(1, 2, 2020);
        let employee = Employee::new("Ana", joined);
        assert_eq!(employee.name(), "Ana");
        assert_eq!(employee.joined(), joined);
    }
}
