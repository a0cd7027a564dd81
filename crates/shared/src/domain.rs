use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// Fixed set of portfolio categories known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Portrait,
    Wedding,
    Landscape,
    Fashion,
    Events,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Portrait,
        Category::Wedding,
        Category::Landscape,
        Category::Fashion,
        Category::Events,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Portrait => "Portrait",
            Category::Wedding => "Wedding",
            Category::Landscape => "Landscape",
            Category::Fashion => "Fashion",
            Category::Events => "Events",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

/// Active selection for the portfolio grid: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("All") {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => only == category,
        }
    }
}

/// One entry in the static portfolio catalog. The tint stands in for the
/// photograph itself; no image assets ship with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: ItemId,
    pub category: Category,
    pub title: &'static str,
    pub tint: [u8; 3],
}

/// In-page navigation targets. Section containers register themselves under
/// these anchors so the nav bar can scroll to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    Home,
    Portfolio,
    About,
    Services,
    Contact,
}

impl SectionAnchor {
    pub const NAV_ORDER: [SectionAnchor; 5] = [
        SectionAnchor::Home,
        SectionAnchor::Portfolio,
        SectionAnchor::About,
        SectionAnchor::Services,
        SectionAnchor::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionAnchor::Home => "Home",
            SectionAnchor::Portfolio => "Portfolio",
            SectionAnchor::About => "About",
            SectionAnchor::Services => "Services",
            SectionAnchor::Contact => "Contact",
        }
    }
}
