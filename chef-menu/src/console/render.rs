//! Plain-text rendering of menu views

use crate::core::HomeSummary;
use menu_shared::models::course_emoji;
use menu_shared::money::format_price;
use menu_shared::{AveragePrice, MenuItem};
use std::io::{self, Write};

pub fn welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🍔 FoodieChef - Craft Your Perfect Menu")?;
    writeln!(out, "Type `login <username>` to get started, `help` for commands.")
}

pub fn home(out: &mut impl Write, summary: &HomeSummary, currency: &str) -> io::Result<()> {
    writeln!(out, "{} 👋", summary.greeting)?;
    writeln!(out, "Total Menu Items: {}", summary.total_items)?;
    if summary.items.is_empty() {
        return writeln!(out, "No items match your filters");
    }
    for item in &summary.items {
        let emoji = course_emoji(&item.course).unwrap_or("•");
        writeln!(
            out,
            "{emoji} {} [{}] {}",
            item.name,
            item.course,
            format_price(item.price, currency)
        )?;
        writeln!(out, "    {}", item.description)?;
    }
    Ok(())
}

/// Management list: every item with its id
pub fn management(out: &mut impl Write, items: &[MenuItem], currency: &str) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No menu items yet. Add your first item!");
    }
    for item in items {
        writeln!(
            out,
            "#{} {} ({}) {} - {}",
            item.id,
            item.name,
            item.course,
            format_price(item.price, currency),
            item.description
        )?;
    }
    Ok(())
}

pub fn averages(out: &mut impl Write, averages: &[AveragePrice], currency: &str) -> io::Result<()> {
    if averages.is_empty() {
        return writeln!(out, "No menu items yet.");
    }
    for avg in averages {
        writeln!(out, "{}: {}", avg.course, format_price(avg.average, currency))?;
    }
    Ok(())
}

/// Course checklist; `selected` is tested per known course
pub fn courses(
    out: &mut impl Write,
    courses: &[String],
    is_selected: impl Fn(&str) -> bool,
) -> io::Result<()> {
    for course in courses {
        let mark = if is_selected(course.as_str()) { "[x]" } else { "[ ]" };
        writeln!(out, "{mark} {course}")?;
    }
    Ok(())
}
