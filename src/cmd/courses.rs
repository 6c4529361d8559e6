//! Show the known course catalog.

use anyhow::Result;
use colored::Colorize;

use gradebook::record::COURSE_CATALOG;
use gradebook::ui::colors;

/// Print the fixed course catalog, one row per course.
pub fn cmd_courses() -> Result<()> {
    println!("{}", "Course Catalog".bold());
    println!("==============");
    for (code, name) in COURSE_CATALOG {
        println!("  {}  {}", colors::identifier(code), name);
    }
    Ok(())
}
