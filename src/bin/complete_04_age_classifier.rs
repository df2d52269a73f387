// Complete Age Classifier
// Sorts a list of ages into minors, adults and seniors and reports the
// count of each group.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Minor,
    Adult,
    Senior,
}

impl AgeGroup {
    /// Under 18 is a minor, 18 through 64 an adult, 65 and up a senior.
    pub fn classify(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Minor,
            18..=64 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgeTally {
    pub minors: usize,
    pub adults: usize,
    pub seniors: usize,
}

pub fn tally(ages: &[u32]) -> AgeTally {
    ages.iter().fold(AgeTally::default(), |mut acc, &age| {
        match AgeGroup::classify(age) {
            AgeGroup::Minor => acc.minors += 1,
            AgeGroup::Adult => acc.adults += 1,
            AgeGroup::Senior => acc.seniors += 1,
        }
        acc
    })
}

fn main() {
    let ages = [12, 25, 70, 15, 45, 67, 17, 18, 64, 65];
    let counts = tally(&ages);

    println!("{}", "=== Age Groups ===".bold());
    println!("Minors: {}", counts.minors);
    println!("Adults: {}", counts.adults);
    println!("Seniors: {}", counts.seniors);
}

// =============================================================================
// Tests
// =============================================================================
