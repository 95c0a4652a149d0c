//! Menu aggregation and filtering
//!
//! Both functions are pure: they read a snapshot of the menu and return a
//! derived collection without touching the input.

use std::collections::{HashMap, HashSet};

use crate::models::{AveragePrice, MenuItem};

/// Average price per course, one entry per distinct course.
///
/// Entries come out in the order each course is first seen in `items`.
/// Courses are compared verbatim ("Pizza" and "pizza" are two courses) and
/// averages are not rounded.
pub fn calculate_average_price_per_course(items: &[MenuItem]) -> Vec<AveragePrice> {
    // course -> index into `totals`
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64, u32)> = Vec::new();

    for item in items {
        let slot = *index.entry(item.course.as_str()).or_insert_with(|| {
            totals.push((item.course.as_str(), 0.0, 0));
            totals.len() - 1
        });
        let (_, total, count) = &mut totals[slot];
        *total += item.price;
        *count += 1;
    }

    totals
        .into_iter()
        .map(|(course, total, count)| AveragePrice {
            course: course.to_string(),
            average: total / f64::from(count),
        })
        .collect()
}

/// Items whose course is in the allow-list, in their original order.
///
/// Matching is exact and case-sensitive. Duplicate entries in `courses`
/// have no effect; an empty allow-list lets nothing through.
pub fn filter_menu_items<S: AsRef<str>>(items: &[MenuItem], courses: &[S]) -> Vec<MenuItem> {
    let allowed: HashSet<&str> = courses.iter().map(AsRef::as_ref).collect();
    items
        .iter()
        .filter(|item| allowed.contains(item.course.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: i64, course: &str, price: f64) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"), "desc", course, price)
    }

    fn ids(items: &[MenuItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    // ========== calculate_average_price_per_course ==========

    #[test]
    fn test_average_empty() {
        assert!(calculate_average_price_per_course(&[]).is_empty());
    }

    #[test]
    fn test_average_first_seen_order() {
        let items = vec![
            item(1, "Pizza", 100.0),
            item(2, "Pizza", 200.0),
            item(3, "Burgers", 50.0),
        ];
        let averages = calculate_average_price_per_course(&items);
        assert_eq!(
            averages,
            vec![
                AveragePrice {
                    course: "Pizza".to_string(),
                    average: 150.0
                },
                AveragePrice {
                    course: "Burgers".to_string(),
                    average: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_average_interleaved_courses_keep_first_seen_order() {
        let items = vec![
            item(1, "Dessert", 60.0),
            item(2, "Beverages", 20.0),
            item(3, "Dessert", 70.0),
            item(4, "Beverages", 30.0),
        ];
        let averages = calculate_average_price_per_course(&items);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].course, "Dessert");
        assert_eq!(averages[0].average, 65.0);
        assert_eq!(averages[1].course, "Beverages");
        assert_eq!(averages[1].average, 25.0);
    }

    #[test]
    fn test_average_single_item_is_exact() {
        let averages = calculate_average_price_per_course(&[item(1, "Pizza", 109.99)]);
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average, 109.99);
    }

    #[test]
    fn test_average_no_course_normalization() {
        let items = vec![
            item(1, "Pizza", 100.0),
            item(2, "pizza", 50.0),
            item(3, "Pizza ", 10.0),
        ];
        let courses: Vec<String> = calculate_average_price_per_course(&items)
            .into_iter()
            .map(|a| a.course)
            .collect();
        assert_eq!(courses, vec!["Pizza", "pizza", "Pizza "]);
    }

    #[test]
    fn test_average_is_not_rounded() {
        let items = vec![item(1, "Dessert", 1.0), item(2, "Dessert", 2.0), item(3, "Dessert", 2.0)];
        let averages = calculate_average_price_per_course(&items);
        assert_eq!(averages[0].average, 5.0 / 3.0);
    }

    // ========== filter_menu_items ==========

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![item(1, "A", 1.0), item(2, "B", 1.0), item(3, "A", 1.0)];
        assert_eq!(ids(&filter_menu_items(&items, &["A"])), vec![1, 3]);
    }

    #[test]
    fn test_filter_empty_allow_list() {
        let items = vec![item(1, "A", 1.0), item(2, "B", 1.0)];
        let none: [&str; 0] = [];
        assert!(filter_menu_items(&items, &none).is_empty());
    }

    #[test]
    fn test_filter_case_sensitive() {
        let items = vec![item(1, "Pizza", 1.0)];
        assert!(filter_menu_items(&items, &["pizza"]).is_empty());
    }

    #[test]
    fn test_filter_unknown_and_duplicate_entries() {
        let items = vec![item(1, "Pizza", 1.0), item(2, "Dessert", 1.0)];
        let result = filter_menu_items(&items, &["Pizza", "Soup", "Pizza"]);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_all_courses_returns_input() {
        let items = vec![
            item(1, "Burgers", 89.99),
            item(2, "Pizza", 109.99),
            item(3, "Burgers", 79.0),
        ];
        let courses = vec!["Pizza".to_string(), "Burgers".to_string()];
        assert_eq!(filter_menu_items(&items, &courses), items);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = vec![item(1, "A", 1.0), item(2, "B", 2.0)];
        let before = items.clone();
        let _ = filter_menu_items(&items, &["B"]);
        assert_eq!(items, before);
    }

    // ========== Properties ==========

    fn arb_course() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Burgers", "Pizza", "pizza", "Dessert", "Beverages"])
            .prop_map(str::to_string)
    }

    fn arb_items() -> impl Strategy<Value = Vec<MenuItem>> {
        prop::collection::vec((arb_course(), 1u32..100_000), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (course, cents))| item(i as i64, &course, f64::from(cents) / 100.0))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filter_never_grows(items in arb_items(), courses in prop::collection::vec(arb_course(), 0..6)) {
            prop_assert!(filter_menu_items(&items, &courses).len() <= items.len());
        }

        #[test]
        fn prop_filter_idempotent(items in arb_items(), courses in prop::collection::vec(arb_course(), 0..6)) {
            let once = filter_menu_items(&items, &courses);
            let twice = filter_menu_items(&once, &courses);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_by_present_courses_is_identity(items in arb_items()) {
            let courses: Vec<&str> = items.iter().map(|i| i.course.as_str()).collect();
            prop_assert_eq!(filter_menu_items(&items, &courses), items.clone());
        }

        #[test]
        fn prop_filter_keeps_relative_order(items in arb_items(), courses in prop::collection::vec(arb_course(), 0..6)) {
            // ids are assigned ascending, so a stable subsequence stays sorted
            let result = ids(&filter_menu_items(&items, &courses));
            prop_assert!(result.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_average_one_entry_per_course(items in arb_items()) {
            let averages = calculate_average_price_per_course(&items);
            let distinct: HashSet<&str> = items.iter().map(|i| i.course.as_str()).collect();
            prop_assert_eq!(averages.len(), distinct.len());
        }
    }
}
