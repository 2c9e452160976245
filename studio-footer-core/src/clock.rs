use chrono::{Datelike, Local};

/// Calendar year of the local clock, used for the copyright line.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_matches_chrono_local_date() {
        let year = current_year();
        assert_eq!(year, Local::now().year());
        assert!(year >= 2024);
    }
}
