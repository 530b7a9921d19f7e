use crate::nav::NavigationEntry;

pub const HEADING: &str = "Eggy Tech Stack Documentation";
pub const LEAD: &str = "A single source of truth for internal developers. Learn how our services are built, how to get set up locally, and the practices we follow to ship reliably.";

pub const HELP_HEADING: &str = "How to use these docs";
pub const HELP_ITEMS: [&str; 3] = [
    "New to Eggy? Start with the tutorial to build the reference Task API and learn the controller/service pattern we use everywhere.",
    "Touching production code? Review the backend overview and deployment sections so you understand lambda packaging, environment management, and monitoring.",
    "Need a refresher? Use the search or sidebar to jump directly to DTO guidelines, testing practices, or troubleshooting tips.",
];

pub const CARD_AFFORDANCE: &str = "Explore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub lead: String,
}

/// A clickable navigation card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Identity across re-renders; the entry title.
    pub key: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub affordance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    pub heading: String,
    pub items: Vec<String>,
}

/// The homepage body: header, navigation grid, help list, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub header: Header,
    pub navigation: Vec<Card>,
    pub help: Help,
}

impl From<&NavigationEntry> for Card {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            key: entry.title.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            href: entry.href.to_string(),
            affordance: CARD_AFFORDANCE.into(),
        }
    }
}

/// Lay out the homepage for `entries`. One card per entry, order preserved.
pub fn render_content(entries: &[NavigationEntry]) -> Page {
    Page {
        header: Header {
            title: HEADING.into(),
            lead: LEAD.into(),
        },
        navigation: entries.iter().map(Card::from).collect(),
        help: Help {
            heading: HELP_HEADING.into(),
            items: HELP_ITEMS.iter().map(|item| item.to_string()).collect(),
        },
    }
}
