// Complete Course Catalog with Trait Objects
// One trait, two concrete course kinds, dynamic dispatch through
// Box<dyn Course> owned by the catalog.

use colored::Colorize;

// =============================================================================
// Course trait and concrete variants
// =============================================================================

pub const IN_PERSON_COST: f64 = 200.0;
pub const ONLINE_COST: f64 = 100.0;

pub trait Course {
    /// One human-readable line identifying the course and where it runs.
    fn describe(&self) -> String;

    /// Fixed enrollment cost for this kind of course, in euros.
    fn cost(&self) -> f64;

    fn title(&self) -> &str;
}

pub struct InPersonCourse {
    title: String,
    room: String,
}

impl InPersonCourse {
    pub fn new(title: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            room: room.into(),
        }
    }
}

impl Course for InPersonCourse {
    fn describe(&self) -> String {
        format!("In-person course in room {}: {}", self.room, self.title)
    }

    fn cost(&self) -> f64 {
        IN_PERSON_COST
    }

    fn title(&self) -> &str {
        &self.title
    }
}

pub struct OnlineCourse {
    title: String,
    platform: String,
}

impl OnlineCourse {
    pub fn new(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
        }
    }
}

impl Course for OnlineCourse {
    fn describe(&self) -> String {
        format!("Online course on {}: {}", self.platform, self.title)
    }

    fn cost(&self) -> f64 {
        ONLINE_COST
    }

    fn title(&self) -> &str {
        &self.title
    }
}

// =============================================================================
// Catalog: ordered, sole owner of its courses
// =============================================================================

#[derive(Default)]
pub struct CourseCatalog {
    courses: Vec<Box<dyn Course>>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    pub fn add(&mut self, course: Box<dyn Course>) {
        self.courses.push(course);
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    // Insertion order is iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Course> {
        self.courses.iter().map(|c| c.as_ref())
    }

    pub fn total_cost(&self) -> f64 {
        self.courses.iter().map(|c| c.cost()).sum()
    }

    /// Description line followed by a cost line for every course,
    /// in insertion order.
    pub fn listing(&self) -> Vec<String> {
        self.courses
            .iter()
            .flat_map(|c| [c.describe(), format!("Cost: {} euros", c.cost())])
            .collect()
    }
}

fn main() {
    let mut catalog = CourseCatalog::new();
    catalog.add(Box::new(InPersonCourse::new("C++ Programming", "B203")));
    catalog.add(Box::new(OnlineCourse::new("Introduction to Python", "Udemy")));
    catalog.add(Box::new(InPersonCourse::new("Data Structures", "A101")));
    catalog.add(Box::new(OnlineCourse::new("Interface Design", "Coursera")));

    println!("{}", "=== Course Catalog ===".bold());
    for line in catalog.listing() {
        println!("{}", line);
    }

    println!();
    println!(
        "{} courses on offer, {} euros in total",
        catalog.len(),
        catalog.total_cost()
    );
}

// =============================================================================
// Tests
// =============================================================================
