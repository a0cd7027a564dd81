//! Static page content: the portfolio catalog plus the fixed copy used by the
//! hero, about, services, and footer sections.

use crate::domain::{Category, ItemId, PortfolioItem};

/// The portfolio catalog. Defined once at build time, never mutated; every
/// consumer shares it by reference. Ids are unique and grid order is catalog
/// order.
pub const CATALOG: [PortfolioItem; 6] = [
    PortfolioItem {
        id: ItemId(1),
        category: Category::Portrait,
        title: "Golden Hour",
        tint: [120, 72, 20],
    },
    PortfolioItem {
        id: ItemId(2),
        category: Category::Wedding,
        title: "Eternal Vows",
        tint: [136, 48, 78],
    },
    PortfolioItem {
        id: ItemId(3),
        category: Category::Landscape,
        title: "Mountain Mist",
        tint: [24, 100, 86],
    },
    PortfolioItem {
        id: ItemId(4),
        category: Category::Fashion,
        title: "Urban Elegance",
        tint: [96, 58, 140],
    },
    PortfolioItem {
        id: ItemId(5),
        category: Category::Portrait,
        title: "Silent Stories",
        tint: [62, 66, 74],
    },
    PortfolioItem {
        id: ItemId(6),
        category: Category::Events,
        title: "Celebration",
        tint: [130, 104, 22],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub price: &'static str,
}

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Portraits",
        description: "Professional portrait sessions that capture your authentic self. \
                      Perfect for headshots, family portraits, and personal branding.",
        features: ["Studio & Outdoor", "Professional Retouching", "Same-day Preview"],
        price: "From $299",
    },
    ServiceOffering {
        title: "Weddings",
        description: "Complete wedding photography coverage from getting ready to the \
                      last dance. Your love story, beautifully documented.",
        features: ["Full Day Coverage", "Engagement Session", "Premium Album"],
        price: "From $2,499",
    },
    ServiceOffering {
        title: "Events",
        description: "Dynamic event coverage for corporate gatherings, parties, and \
                      special occasions. Every moment matters.",
        features: ["Flexible Hours", "Quick Turnaround", "Digital Gallery"],
        price: "From $599",
    },
    ServiceOffering {
        title: "Commercial",
        description: "High-impact commercial photography for brands, products, and \
                      marketing campaigns that demand excellence.",
        features: ["Creative Direction", "Styling Available", "Commercial License"],
        price: "Custom Quote",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub label: &'static str,
    pub description: &'static str,
}

pub const SKILLS: [Skill; 4] = [
    Skill {
        label: "Portraits",
        description: "Capturing authentic personalities",
    },
    Skill {
        label: "Landscapes",
        description: "Nature's breathtaking moments",
    },
    Skill {
        label: "Events",
        description: "Celebrating life's milestones",
    },
    Skill {
        label: "Fashion",
        description: "Style meets artistry",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: "hello@zakirkhan.com",
    },
    ContactDetail {
        label: "Phone",
        value: "+1 (555) 123-4567",
    },
    ContactDetail {
        label: "Location",
        value: "New York, NY",
    },
];

pub const SOCIAL_LINKS: [&str; 4] = ["Instagram", "Twitter", "LinkedIn", "YouTube"];

pub const STUDIO_NAME: &str = "Zakir Khan";
pub const STUDIO_TAGLINE: &str = "Capturing stories through the lens";

/// Service choices offered by the contact form's combo box. The empty entry
/// is the unselected default; the form treats the field as optional.
pub const SERVICE_CHOICES: [&str; 5] = ["", "Portraits", "Weddings", "Events", "Commercial"];

#[cfg(test)]
mod tests {
    use super::CATALOG;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn catalog_is_in_id_order() {
        for window in CATALOG.windows(2) {
            assert!(window[0].id < window[1].id);
        }
    }
}
