use std::rc::Rc;

use yew::Reducible;

use crate::config::colors;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    Vps,
    Control,
    Security,
    Network,
    Support,
    Billing,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 6] = [
        FaqCategory::Vps,
        FaqCategory::Control,
        FaqCategory::Security,
        FaqCategory::Network,
        FaqCategory::Support,
        FaqCategory::Billing,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FaqCategory::Vps => "vps",
            FaqCategory::Control => "control",
            FaqCategory::Security => "security",
            FaqCategory::Network => "network",
            FaqCategory::Support => "support",
            FaqCategory::Billing => "billing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::Vps => "VPS Hosting",
            FaqCategory::Control => "Control Panels & OS",
            FaqCategory::Security => "Security & Backups",
            FaqCategory::Network => "IP & Networking",
            FaqCategory::Support => "Support & Management",
            FaqCategory::Billing => "Billing & Licenses",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FaqCategory::Vps => "🖥",
            FaqCategory::Control => "⚙",
            FaqCategory::Security => "🛡",
            FaqCategory::Network => "🌐",
            FaqCategory::Support => "🎧",
            FaqCategory::Billing => "💳",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FaqCategory::Vps | FaqCategory::Support => colors::PURPLE,
            FaqCategory::Control | FaqCategory::Billing => colors::VIOLET,
            FaqCategory::Security => colors::LIGHT_BLUE,
            FaqCategory::Network => colors::NAVY,
        }
    }
}

/// The category tab row: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FaqCategory),
}

impl CategoryFilter {
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(FaqCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Questions",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// First word of the label, for narrow screens.
    pub fn short_label(&self) -> &'static str {
        let label = self.label();
        label.split(' ').next().unwrap_or(label)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "❔",
            CategoryFilter::Only(category) => category.icon(),
        }
    }

    pub fn admits(&self, category: FaqCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaqAnswer {
    Text(&'static str),
    Bullets(&'static [Bullet]),
}

impl FaqAnswer {
    /// The answer as it reads on screen, for searching.
    pub fn plain_text(&self) -> String {
        match self {
            FaqAnswer::Text(text) => (*text).to_string(),
            FaqAnswer::Bullets(bullets) => bullets
                .iter()
                .map(|b| match b.label {
                    Some(label) => format!("{}: {}", label, b.text),
                    None => b.text.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: FaqAnswer,
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

impl FaqEntry {
    pub fn matches(&self, category: CategoryFilter, query: &str) -> bool {
        let needle = query.to_lowercase();
        category.admits(self.category)
            && (contains_ignore_case(self.question, &needle)
                || contains_ignore_case(&self.answer.plain_text(), &needle))
    }
}

/// Entries of `catalog` admitted by the category and containing `query`
/// (case-insensitive) in the question or answer.
pub fn filter_faqs<'a>(catalog: &'a [FaqEntry], category: CategoryFilter, query: &str) -> Vec<&'a FaqEntry> {
    catalog.iter().filter(|entry| entry.matches(category, query)).collect()
}

/// Tab, search box and expanded item of the FAQ page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqFilter {
    category: CategoryFilter,
    query: String,
    open: Option<usize>,
}

impl FaqFilter {
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Positions in the filtered list shift, so any expanded answer collapses.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.open = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = None;
    }

    /// Opens `index`, or closes it when it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn apply<'a>(&self, catalog: &'a [FaqEntry]) -> Vec<&'a FaqEntry> {
        filter_faqs(catalog, self.category, &self.query)
    }
}

pub enum FaqAction {
    SelectCategory(CategoryFilter),
    Search(String),
    Toggle(usize),
    Clear,
}

impl Reducible for FaqFilter {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FaqAction::SelectCategory(category) => next.set_category(category),
            FaqAction::Search(query) => next.set_query(query),
            FaqAction::Toggle(index) => next.toggle(index),
            FaqAction::Clear => next.clear(),
        }
        Rc::new(next)
    }
}

const PLAN_TIERS: &[Bullet] = &[
    Bullet { label: Some("Standard"), text: "Ideal for small websites and dev environments." },
    Bullet { label: Some("Quasar"), text: "Great for medium apps needing more performance." },
    Bullet { label: Some("Turbo"), text: "Designed for high-traffic, resource-heavy apps." },
];

const OPERATING_SYSTEMS: &[Bullet] = &[
    Bullet { label: None, text: "CentOS 7 / 8" },
    Bullet { label: None, text: "Ubuntu 20.04 / 22.04" },
    Bullet { label: None, text: "Debian" },
    Bullet { label: None, text: "AlmaLinux" },
    Bullet { label: None, text: "Windows Server (with optional licensing)" },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        category: FaqCategory::Vps,
        question: "What is VPS hosting?",
        answer: FaqAnswer::Text("A VPS (Virtual Private Server) is a virtual machine that runs its own operating system and resources. It offers more control, power, and isolation than shared hosting."),
    },
    FaqEntry {
        category: FaqCategory::Vps,
        question: "What's the difference between Standard, Quasar, and Turbo VPS?",
        answer: FaqAnswer::Bullets(PLAN_TIERS),
    },
    FaqEntry {
        category: FaqCategory::Vps,
        question: "Can I upgrade my VPS plan later?",
        answer: FaqAnswer::Text("Yes, you can upgrade your CPU, RAM, storage, and bandwidth at any time, with no downtime."),
    },
    FaqEntry {
        category: FaqCategory::Control,
        question: "Which control panels do you offer?",
        answer: FaqAnswer::Text("We support cPanel/WHM, Plesk, and Interworx, depending on your OS and preference."),
    },
    FaqEntry {
        category: FaqCategory::Control,
        question: "What operating systems are available?",
        answer: FaqAnswer::Bullets(OPERATING_SYSTEMS),
    },
    FaqEntry {
        category: FaqCategory::Control,
        question: "Can I install my own software or OS?",
        answer: FaqAnswer::Text("Yes. With full root access, you're free to install custom applications or re-install your preferred OS."),
    },
    FaqEntry {
        category: FaqCategory::Security,
        question: "Do you provide SSL certificates?",
        answer: FaqAnswer::Text("Yes! Free SSL certificates are included with all hosting plans."),
    },
    FaqEntry {
        category: FaqCategory::Security,
        question: "Is DDoS protection included?",
        answer: FaqAnswer::Text("Yes. All plans include basic DDoS protection. Turbo VPS plans come with enhanced protection."),
    },
    FaqEntry {
        category: FaqCategory::Security,
        question: "Are backups included?",
        answer: FaqAnswer::Text("We offer automated daily backups and on-demand snapshots. Additional backup storage is available as an add-on."),
    },
    FaqEntry {
        category: FaqCategory::Network,
        question: "Do I get a dedicated IP?",
        answer: FaqAnswer::Text("Yes, each VPS comes with at least one dedicated IPv4 address. Additional IPs are available."),
    },
    FaqEntry {
        category: FaqCategory::Network,
        question: "Is IPv6 supported?",
        answer: FaqAnswer::Text("Yes, we offer native IPv6 support on all VPS plans."),
    },
    FaqEntry {
        category: FaqCategory::Network,
        question: "Can I use private networking?",
        answer: FaqAnswer::Text("Yes. You can set up private/internal networks between your VPS instances for secure, internal communication."),
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "Is support available 24/7?",
        answer: FaqAnswer::Text("Yes, our technical support team is available 24/7/365."),
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "Do you offer managed services?",
        answer: FaqAnswer::Text("Yes. We offer Managed VPS plans where we take care of updates, security patches, and performance tuning."),
    },
    FaqEntry {
        category: FaqCategory::Support,
        question: "Can you migrate my website or server?",
        answer: FaqAnswer::Text("Absolutely. We offer free migration services for new clients."),
    },
    FaqEntry {
        category: FaqCategory::Billing,
        question: "Which payment methods do you accept?",
        answer: FaqAnswer::Text("We accept major credit/debit cards, PayPal, and select cryptocurrencies."),
    },
    FaqEntry {
        category: FaqCategory::Billing,
        question: "Can I bundle a domain with my hosting?",
        answer: FaqAnswer::Text("Yes! We offer domain registration and hosting bundles for convenience and savings."),
    },
    FaqEntry {
        category: FaqCategory::Billing,
        question: "Do you provide licenses for cPanel or Plesk?",
        answer: FaqAnswer::Text("Yes, you can add cPanel, Plesk, and Softaculous licenses to your plan at discounted prices."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn questions(entries: &[&FaqEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.question).collect()
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let security = filter_faqs(FAQS, CategoryFilter::Only(FaqCategory::Security), "");
        assert!(!security.is_empty());
        assert!(security.iter().all(|e| e.category == FaqCategory::Security));
        assert_eq!(security.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_question_and_answer() {
        let ssl = filter_faqs(FAQS, CategoryFilter::All, "ssl");
        assert_eq!(questions(&ssl), vec!["Do you provide SSL certificates?"]);

        let upper = filter_faqs(FAQS, CategoryFilter::All, "SSL");
        assert_eq!(questions(&upper), questions(&ssl));

        // "root access" only appears in an answer.
        let root = filter_faqs(FAQS, CategoryFilter::All, "Root Access");
        assert_eq!(questions(&root), vec!["Can I install my own software or OS?"]);
    }

    #[test]
    fn every_match_contains_the_query() {
        let hits = filter_faqs(FAQS, CategoryFilter::All, "vps");
        for entry in &hits {
            let haystack = format!("{} {}", entry.question, entry.answer.plain_text()).to_lowercase();
            assert!(haystack.contains("vps"), "{} does not mention vps", entry.question);
        }
        let misses = FAQS.len() - hits.len();
        assert!(misses > 0);
    }

    #[test]
    fn structured_answers_are_searchable() {
        let hits = filter_faqs(FAQS, CategoryFilter::All, "dev environments");
        assert_eq!(
            questions(&hits),
            vec!["What's the difference between Standard, Quasar, and Turbo VPS?"]
        );
        let alma = filter_faqs(FAQS, CategoryFilter::Only(FaqCategory::Control), "almalinux");
        assert_eq!(questions(&alma), vec!["What operating systems are available?"]);
    }

    #[test]
    fn one_entry_per_category_catalog() {
        let catalog = [
            FaqEntry {
                category: FaqCategory::Vps,
                question: "What is a VPS?",
                answer: FaqAnswer::Text("A virtual machine."),
            },
            FaqEntry {
                category: FaqCategory::Control,
                question: "Which panels?",
                answer: FaqAnswer::Text("cPanel and Plesk."),
            },
            FaqEntry {
                category: FaqCategory::Security,
                question: "SSL?",
                answer: FaqAnswer::Text("Included."),
            },
        ];
        let control = filter_faqs(&catalog, CategoryFilter::Only(FaqCategory::Control), "");
        assert_eq!(control.len(), 1);
        assert_eq!(control[0], &catalog[1]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter_faqs(FAQS, CategoryFilter::All, "kubernetes operator").is_empty());
    }

    #[test]
    fn changing_category_collapses_the_open_answer() {
        let mut filter = FaqFilter::default();
        filter.toggle(2);
        assert!(filter.is_open(2));

        filter.set_category(CategoryFilter::Only(FaqCategory::Network));
        let visible = filter.apply(FAQS);
        assert!((0..visible.len()).all(|i| !filter.is_open(i)));
        assert_eq!(filter.open(), None);
    }

    #[test]
    fn typing_a_query_collapses_the_open_answer() {
        let mut filter = FaqFilter::default();
        filter.toggle(0);
        filter.set_query("ipv6");
        assert_eq!(filter.open(), None);
        assert_eq!(filter.apply(FAQS).len(), 1);
    }

    #[test]
    fn toggle_opens_one_item_at_a_time() {
        let mut filter = FaqFilter::default();
        filter.toggle(1);
        filter.toggle(4);
        assert!(!filter.is_open(1));
        assert!(filter.is_open(4));
        filter.toggle(4);
        assert_eq!(filter.open(), None);
    }

    #[test]
    fn clear_restores_the_full_catalog() {
        let state = Rc::new(FaqFilter::default());
        let state = state.reduce(FaqAction::SelectCategory(CategoryFilter::Only(FaqCategory::Billing)));
        let state = state.reduce(FaqAction::Search("zzz".into()));
        assert!(state.apply(FAQS).is_empty());

        let state = state.reduce(FaqAction::Clear);
        assert_eq!(state.apply(FAQS).len(), FAQS.len());
        assert_eq!(state.category(), CategoryFilter::All);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn tabs_start_with_all_and_cover_every_category() {
        let tabs: Vec<_> = CategoryFilter::tabs().collect();
        assert_eq!(tabs.len(), FaqCategory::ALL.len() + 1);
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(CategoryFilter::Only(FaqCategory::Control).short_label(), "Control");
    }

    #[test]
    fn every_category_has_entries() {
        for category in FaqCategory::ALL {
            assert!(FAQS.iter().any(|e| e.category == category), "{} is empty", category.id());
        }
    }
}
