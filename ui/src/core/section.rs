//! In-page anchor targets reachable from the navigation links.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Pricing,
    Sample,
}

impl Section {
    /// Render order of the links.
    pub const ALL: [Section; 3] = [Section::Features, Section::Pricing, Section::Sample];

    /// Element id the page must carry for the link to scroll anywhere.
    pub fn id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Pricing => "pricing",
            Section::Sample => "sample",
        }
    }

    pub fn label(self) -> String {
        match self {
            Section::Features => crate::t!("nav-features"),
            Section::Pricing => crate::t!("nav-pricing"),
            Section::Sample => crate::t!("nav-sample"),
        }
    }
}
