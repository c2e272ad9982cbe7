//! Token explorer page
//!
//! Search is a case-insensitive substring match over project name, token id
//! and location. The type filter is a substring match on the project type.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::clipboard::{self, Clipboard, ClipboardError};
use crate::format::group_indian;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectToken {
    pub id: &'static str,
    pub name: &'static str,
    pub project_type: &'static str,
    pub total_credits: u64,
    pub price: f64,
    pub location: &'static str,
    pub verification_date: &'static str,
    pub issuer: &'static str,
    pub status: &'static str,
    pub project_area: &'static str,
    pub certification_body: &'static str,
    pub owners: u32,
}

impl ProjectToken {
    pub fn verified_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.verification_date, "%Y-%m-%d").ok()
    }

    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }

    pub fn credits_label(&self) -> String {
        group_indian(self.total_credits)
    }

    fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.name, self.id, self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

pub static PROJECTS: [ProjectToken; 3] = [
    ProjectToken {
        id: "CCX-001",
        name: "Amazon Rainforest Conservation",
        project_type: "Forest Conservation",
        total_credits: 2500,
        price: 18.40,
        location: "Amazon Basin, Brazil",
        verification_date: "2024-01-15",
        issuer: "Green Planet Initiative",
        status: "Active",
        project_area: "1,250 hectares",
        certification_body: "VERRA",
        owners: 142,
    },
    ProjectToken {
        id: "REDD-002",
        name: "Mangrove Restoration Project",
        project_type: "REDD+",
        total_credits: 1800,
        price: 22.75,
        location: "Sundarbans, Bangladesh",
        verification_date: "2024-02-03",
        issuer: "Coastal Restoration Fund",
        status: "Active",
        project_area: "850 hectares",
        certification_body: "Gold Standard",
        owners: 89,
    },
    ProjectToken {
        id: "AFFOR-003",
        name: "Community Afforestation Initiative",
        project_type: "Afforestation",
        total_credits: 950,
        price: 15.20,
        location: "Karnataka, India",
        verification_date: "2024-01-28",
        issuer: "Rural Development Corp",
        status: "Pending",
        project_area: "475 hectares",
        certification_body: "CDM",
        owners: 67,
    },
];

/// Overview tiles above the grid
pub const SUMMARY: [(&str, &str); 4] = [
    ("Total Credits", "5,250"),
    ("Avg. Price", "₹19.85"),
    ("Token Holders", "298"),
    ("Active Projects", "3"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Forest,
    Redd,
    Afforestation,
}

impl ProjectFilter {
    pub fn all() -> [ProjectFilter; 4] {
        [
            ProjectFilter::All,
            ProjectFilter::Forest,
            ProjectFilter::Redd,
            ProjectFilter::Afforestation,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Forest => "forest",
            ProjectFilter::Redd => "redd",
            ProjectFilter::Afforestation => "afforestation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Forest => "Forest Conservation",
            ProjectFilter::Redd => "REDD+",
            ProjectFilter::Afforestation => "Afforestation",
        }
    }

    fn matches(self, token: &ProjectToken) -> bool {
        match self {
            ProjectFilter::All => true,
            other => token.project_type.to_lowercase().contains(other.id()),
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.id() == s.to_lowercase())
            .ok_or_else(|| format!("unknown filter '{}', expected one of all, forest, redd, afforestation", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerView {
    query: String,
    filter: ProjectFilter,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn results(&self) -> Vec<&'static ProjectToken> {
        PROJECTS
            .iter()
            .filter(|t| t.matches_query(&self.query) && self.filter.matches(t))
            .collect()
    }

    /// "No tokens found" state
    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }

    pub fn copy_token_id(
        &self,
        token: &ProjectToken,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        clipboard::copy(clipboard, token.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn ids(view: &ExplorerView) -> Vec<&'static str> {
        view.results().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let view = ExplorerView::new();
        assert_eq!(ids(&view), vec!["CCX-001", "REDD-002", "AFFOR-003"]);
    }

    #[test]
    fn test_search_fields() {
        let mut view = ExplorerView::new();
        view.set_query("mangrove");
        assert_eq!(ids(&view), vec!["REDD-002"]);
        view.set_query("affor-003");
        assert_eq!(ids(&view), vec!["AFFOR-003"]);
        view.set_query("INDIA");
        assert_eq!(ids(&view), vec!["AFFOR-003"]);
        view.set_query("Sydney");
        assert!(view.is_empty());
    }

    #[test]
    fn test_type_filter() {
        let mut view = ExplorerView::new();
        view.set_filter(ProjectFilter::Forest);
        assert_eq!(ids(&view), vec!["CCX-001"]);
        view.set_filter(ProjectFilter::Redd);
        assert_eq!(ids(&view), vec!["REDD-002"]);

        view.set_query("amazon");
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("REDD".parse::<ProjectFilter>(), Ok(ProjectFilter::Redd));
        assert!("solar".parse::<ProjectFilter>().is_err());
    }

    #[test]
    fn test_copy_token_id() {
        let clipboard = MemoryClipboard::new();
        let view = ExplorerView::new();
        view.copy_token_id(&PROJECTS[1], &clipboard).unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("REDD-002"));
    }

    #[test]
    fn test_summary_matches_catalog() {
        let credits: u64 = PROJECTS.iter().map(|t| t.total_credits).sum();
        let owners: u32 = PROJECTS.iter().map(|t| t.owners).sum();
        assert_eq!(group_indian(credits), SUMMARY[0].1);
        assert_eq!(owners.to_string(), SUMMARY[2].1);
        assert_eq!(
            PROJECTS[0].verified_on(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }
}
