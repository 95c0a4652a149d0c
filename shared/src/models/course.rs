//! Course labels
//!
//! Courses are free-form strings. These are the ones the kitchen uses out of
//! the box; any other label is still a valid course.

pub const BURGERS: &str = "Burgers";
pub const PIZZA: &str = "Pizza";
pub const DESSERT: &str = "Dessert";
pub const BEVERAGES: &str = "Beverages";

/// Built-in course list, in display order
pub const DEFAULT_COURSES: [&str; 4] = [BURGERS, PIZZA, DESSERT, BEVERAGES];

/// Emoji shown next to items of a built-in course
pub fn course_emoji(course: &str) -> Option<&'static str> {
    match course {
        BURGERS => Some("🍔"),
        PIZZA => Some("🍕"),
        DESSERT => Some("🍰"),
        BEVERAGES => Some("🥤"),
        _ => None,
    }
}
