//! Brand-wide copy shared by the navbar, footer, about and contact pages.

use super::services::Stat;
use crate::config::colors;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", icon: "⬢", color: colors::CYAN, route: Route::Home },
    NavItem { label: "Deploy", icon: "▲", color: "#00aaff", route: Route::Neon },
    NavItem { label: "Scale", icon: "●", color: "#0077ff", route: Route::Services },
    NavItem { label: "Pricing", icon: "■", color: colors::MAGENTA, route: Route::Pricing },
    NavItem { label: "Docs", icon: "◆", color: "#ff0099", route: Route::Faq },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub name: &'static str,
    pub route: Route,
}

pub const FOOTER_NAV: &[FooterLink] = &[
    FooterLink { name: "Home", route: Route::Home },
    FooterLink { name: "Services", route: Route::Services },
    FooterLink { name: "Pricing Plans", route: Route::Pricing },
    FooterLink { name: "About Us", route: Route::About },
    FooterLink { name: "FAQ", route: Route::Faq },
    FooterLink { name: "Contact", route: Route::Contact },
];

/// Legal pages live outside the app.
pub const LEGAL_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("SLA", "/sla"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "#"),
    ("Twitter", "#"),
    ("LinkedIn", "#"),
    ("Instagram", "#"),
    ("GitHub", "#"),
];

pub const EMAIL: &str = "info@marysville.es";
pub const PHONE: &str = "+1 (555) 123-4567";
pub const ADDRESS: &str = "Business Center, 4th Floor";
pub const CITY: &str = "Barcelona, Spain";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: Option<&'static str>,
    pub icon: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: EMAIL,
        detail: None,
        icon: "✉",
        href: Some("mailto:info@marysville.es"),
    },
    ContactChannel {
        label: "Phone",
        value: PHONE,
        detail: None,
        icon: "☎",
        href: Some("tel:+15551234567"),
    },
    ContactChannel {
        label: "Office",
        value: ADDRESS,
        detail: Some(CITY),
        icon: "📍",
        href: None,
    },
];

pub const SUPPORT_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM CET"),
    ("Saturday", "10:00 AM - 4:00 PM CET"),
    ("Sunday", "Closed"),
];

pub const ABOUT_HIGHLIGHTS: &[Stat] = &[
    Stat { value: "10K+", label: "Active Websites", icon: "🌐" },
    Stat { value: "99.9%", label: "Uptime SLA", icon: "📈" },
    Stat { value: "24/7", label: "Expert Support", icon: "👥" },
];

pub const MILESTONES: &[Stat] = &[
    Stat { value: "2020", label: "Founded", icon: "🚀" },
    Stat { value: "50+", label: "Countries", icon: "🌍" },
    Stat { value: "300%", label: "Growth in 2023", icon: "📊" },
];

/// (title, description)
pub const VALUES: &[(&str, &str)] = &[
    ("Speed First", "Every millisecond counts. We optimize relentlessly for performance."),
    ("Security Built-In", "DDoS protection, SSL, and backups included. Not an upsell."),
    ("Human Support", "Real engineers answering questions. No bots, no scripts."),
    ("Developer Tools", "APIs, CLI, Git integration. Built the way you actually work."),
];

/// (label, value)
pub const HARDWARE: &[(&str, &str)] = &[
    ("AMD EPYC CPUs", "Latest Gen"),
    ("NVMe SSD Storage", "Ultra Fast"),
    ("Network Speed", "10 Gbps"),
    ("DDoS Protection", "Always On"),
];

pub const REACH: &[Stat] = &[
    Stat { value: "50+", label: "Countries Served", icon: "🌍" },
    Stat { value: "10K+", label: "Websites Hosted", icon: "🖥" },
    Stat { value: "<100ms", label: "Avg Response", icon: "⏱" },
    Stat { value: "100%", label: "DDoS Protected", icon: "🛡" },
];

/// Closing numbers on the paged home.
pub const HERO_STATS: &[(&str, &str, &str)] = &[
    ("1.2ms", "Latency", colors::CYAN),
    ("99.99%", "Uptime", colors::MAGENTA),
    ("50Gbps", "Bandwidth", colors::CYAN),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_item_routes_somewhere_distinct() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            assert!(NAV_ITEMS[i + 1..].iter().all(|b| b.route != a.route), "{}", a.label);
        }
    }

    #[test]
    fn office_channel_has_no_link() {
        let office = CONTACT_CHANNELS.iter().find(|c| c.label == "Office");
        assert_eq!(office.and_then(|c| c.href), None);
        assert_eq!(office.and_then(|c| c.detail), Some(CITY));
    }
}
