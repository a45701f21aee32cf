use super::period::sort_year;

/// Returns `items` ordered most recent first by [`sort_year`].
///
/// The sort is stable, so entries with equal years keep their original order.
/// The input slice is left untouched.
pub fn sort_by_period_desc<'a, T, F>(items: &'a [T], period_of: F, current_year: i32) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut keyed: Vec<(i32, &T)> = items
        .iter()
        .map(|item| (sort_year(period_of(item), current_year), item))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let periods = ["2010-2013", "2024-Present", "2006-2010"];
        let sorted = sort_by_period_desc(&periods, |p| *p, 2025);
        assert_eq!(sorted, vec![&"2024-Present", &"2010-2013", &"2006-2010"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let periods = [("a", "2015"), ("b", "2020"), ("c", "Jan 2015")];
        let sorted: Vec<_> = sort_by_period_desc(&periods, |p| p.1, 2025)
            .into_iter()
            .map(|p| p.0)
            .collect();
        assert_eq!(sorted, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_unparsable_sorts_last() {
        let periods = ["TBD", "2012", "Present"];
        let sorted = sort_by_period_desc(&periods, |p| *p, 2025);
        assert_eq!(sorted, vec![&"Present", &"2012", &"TBD"]);
    }

    #[test]
    fn test_input_untouched() {
        let periods = vec!["2001", "2020"];
        let _ = sort_by_period_desc(periods.as_slice(), |p| *p, 2025);
        assert_eq!(periods, vec!["2001", "2020"]);
    }
}
