// src/stats.rs
use std::collections::HashSet;

use crate::cat::Cat;

/// Aggregate numbers for the Statistics tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_cats: usize,
    pub cats_with_photos: usize,
    /// Owners compared case-insensitively
    pub unique_owners: usize,
}

impl Stats {
    pub fn compute(cats: &[Cat]) -> Self {
        let owners: HashSet<String> = cats.iter().map(|c| c.owner_name.to_lowercase()).collect();
        Self {
            total_cats: cats.len(),
            cats_with_photos: cats.iter().filter(|c| c.has_photo()).count(),
            unique_owners: owners.len(),
        }
    }

    pub fn avg_cats_per_owner(&self) -> f64 {
        if self.unique_owners == 0 { 0.0 } else { self.total_cats as f64 / self.unique_owners as f64 }
    }

    /// Share of cats with a photo, 0..=100.
    pub fn photo_coverage_pct(&self) -> f64 {
        if self.total_cats == 0 { 0.0 } else { self.cats_with_photos as f64 * 100.0 / self.total_cats as f64 }
    }

    /// One decimal, or `0` when there are no owners.
    pub fn avg_label(&self) -> String {
        if self.unique_owners == 0 { s!("0") } else { format!("{:.1}", self.avg_cats_per_owner()) }
    }

    /// Whole percent, or `0%` when there are no cats.
    pub fn coverage_label(&self) -> String {
        format!("{:.0}%", self.photo_coverage_pct())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(owner: &str, photo: &str) -> Cat {
        Cat { owner_name: s!(owner), photo_reference: s!(photo), ..Default::default() }
    }

    #[test]
    fn empty_store_has_zero_labels() {
        let stats = Stats::compute(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.avg_label(), "0");
        assert_eq!(stats.coverage_label(), "0%");
    }

    #[test]
    fn owners_are_case_insensitive() {
        let cats = vec![
            cat("Jane Doe", "data:image/png;base64,AA"),
            cat("jane doe", ""),
            cat("Al", "   "),
        ];
        let stats = Stats::compute(&cats);
        assert_eq!(stats.total_cats, 3);
        assert_eq!(stats.cats_with_photos, 1);
        assert_eq!(stats.unique_owners, 2);
        assert_eq!(stats.avg_label(), "1.5");
        assert_eq!(stats.coverage_label(), "33%");
    }
}
