//! Filter engine: derives the filtered subset from the full record set.

use crate::models::{FilterCriteria, Paper};

/// Check a single paper against all four constraints.
///
/// A paper with an unparseable date fails any active year constraint.
#[must_use]
pub fn matches(paper: &Paper, criteria: &FilterCriteria) -> bool {
    let title_ok =
        criteria.title.is_empty() || paper.title.to_lowercase().contains(&criteria.title);

    let citations_ok = criteria.min_citations.is_none_or(|min| paper.citation_count >= min);

    if !(title_ok && citations_ok) {
        return false;
    }

    if criteria.start_year.is_none() && criteria.end_year.is_none() {
        return true;
    }

    let Some(year) = paper.year() else {
        return false;
    };

    criteria.start_year.is_none_or(|start| year >= start)
        && criteria.end_year.is_none_or(|end| year <= end)
}

/// Filter papers, preserving their relative order.
#[must_use]
pub fn filter_papers(papers: &[Paper], criteria: &FilterCriteria) -> Vec<Paper> {
    if criteria.is_unconstrained() {
        return papers.to_vec();
    }

    papers.iter().filter(|p| matches(p, criteria)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, published_at: &str, citations: u64) -> Paper {
        Paper {
            title: title.to_string(),
            published_at: published_at.to_string(),
            citation_count: citations,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_case_insensitive() {
        let p = paper("Attention Is All You Need", "2017-06-12", 90_000);
        let criteria = FilterCriteria::from_inputs("ATTENTION", "", "", "");
        assert!(matches(&p, &criteria));

        let criteria = FilterCriteria::from_inputs("convolution", "", "", "");
        assert!(!matches(&p, &criteria));
    }

    #[test]
    fn test_min_citations_inclusive() {
        let p = paper("A", "2020-01-01", 10);
        assert!(matches(&p, &FilterCriteria::from_inputs("", "10", "", "")));
        assert!(!matches(&p, &FilterCriteria::from_inputs("", "11", "", "")));
    }

    #[test]
    fn test_year_range_inclusive() {
        let p = paper("A", "2020-05-01", 0);
        assert!(matches(&p, &FilterCriteria::from_inputs("", "", "2020", "2020")));
        assert!(!matches(&p, &FilterCriteria::from_inputs("", "", "2021", "")));
        assert!(!matches(&p, &FilterCriteria::from_inputs("", "", "", "2019")));
    }

    #[test]
    fn test_bad_date_only_fails_year_constraints() {
        let p = paper("A", "unknown", 5);
        assert!(matches(&p, &FilterCriteria::default()));
        assert!(matches(&p, &FilterCriteria::from_inputs("a", "5", "", "")));
        assert!(!matches(&p, &FilterCriteria::from_inputs("", "", "2000", "")));
    }

    #[test]
    fn test_filter_preserves_order() {
        let papers = vec![
            paper("Graph one", "2019-01-01", 1),
            paper("Other", "2019-01-01", 1),
            paper("Graph two", "2019-01-01", 1),
        ];
        let out = filter_papers(&papers, &FilterCriteria::from_inputs("graph", "", "", ""));
        let titles: Vec<_> = out.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Graph one", "Graph two"]);
    }
}
