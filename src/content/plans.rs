use crate::config::colors;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanCategory {
    VpsHosting,
    Resources,
    Software,
    Security,
    Backups,
    Cloud,
    Billing,
}

impl Default for PlanCategory {
    fn default() -> Self {
        PlanCategory::VpsHosting
    }
}

impl PlanCategory {
    pub const ALL: [PlanCategory; 7] = [
        PlanCategory::VpsHosting,
        PlanCategory::Resources,
        PlanCategory::Software,
        PlanCategory::Security,
        PlanCategory::Backups,
        PlanCategory::Cloud,
        PlanCategory::Billing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlanCategory::VpsHosting => "VPS Hosting",
            PlanCategory::Resources => "Resources",
            PlanCategory::Software => "Software",
            PlanCategory::Security => "Security",
            PlanCategory::Backups => "Backups",
            PlanCategory::Cloud => "Cloud",
            PlanCategory::Billing => "Billing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PlanCategory::VpsHosting => "🖥",
            PlanCategory::Resources => "⚡",
            PlanCategory::Software => "💽",
            PlanCategory::Security => "🛡",
            PlanCategory::Backups => "🗄",
            PlanCategory::Cloud => "☁",
            PlanCategory::Billing => "🔄",
        }
    }

    pub fn plans(&self) -> &'static [Plan] {
        match self {
            PlanCategory::VpsHosting => VPS_HOSTING,
            PlanCategory::Resources => RESOURCES,
            PlanCategory::Software => SOFTWARE,
            PlanCategory::Security => SECURITY,
            PlanCategory::Backups => BACKUPS,
            PlanCategory::Cloud => CLOUD,
            PlanCategory::Billing => BILLING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    /// Dollar amount per month, as written.
    Monthly(&'static str),
    Free,
    /// Billing-term discount such as "-15%".
    Discount(&'static str),
    Custom,
}

impl Price {
    pub fn amount(&self) -> String {
        match self {
            Price::Monthly(amount) => format!("${}", amount),
            Price::Free => "Free".to_string(),
            Price::Discount(discount) => (*discount).to_string(),
            Price::Custom => "Custom".to_string(),
        }
    }

    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Price::Monthly(_) => Some("/mo"),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.amount(), self.suffix().unwrap_or(""))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub accent: &'static str,
}

const VPS_HOSTING: &[Plan] = &[
    Plan {
        name: "Standard VPS",
        price: Price::Monthly("19.99"),
        description: "Balanced resources, perfect for small businesses and personal projects.",
        features: &["Balanced CPU & RAM", "Standard SSD storage", "Perfect for small sites", "24/7 support included", "Free SSL certificate", "99.9% uptime guarantee"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Quasar VPS",
        price: Price::Monthly("39.99"),
        description: "Enhanced CPU/RAM for growing applications and medium traffic sites.",
        features: &["Enhanced CPU power", "Increased RAM capacity", "Perfect for growing apps", "Priority support", "Free SSL certificate", "Daily backups included"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "Turbo VPS",
        price: Price::Monthly("69.99"),
        description: "Maximum performance for high-traffic enterprise applications.",
        features: &["Maximum performance", "High-speed processing", "Enterprise-grade resources", "VIP support 24/7", "Advanced DDoS protection", "Hourly backups"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Managed VPS",
        price: Price::Monthly("20"),
        description: "Expert management for your VPS. We handle everything.",
        features: &["Full server management", "Automatic updates", "Security monitoring", "Expert support team", "Performance optimization", "Incident response"],
        popular: false,
        accent: colors::NAVY,
    },
];

const RESOURCES: &[Plan] = &[
    Plan {
        name: "1GB RAM",
        price: Price::Monthly("5"),
        description: "Additional RAM for enhanced performance.",
        features: &["Instant activation", "Seamless integration", "No downtime required", "Stackable upgrade"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "2 vCPU",
        price: Price::Monthly("10"),
        description: "Extra CPU cores for demanding applications.",
        features: &["Dedicated cores", "Improved processing", "Better multitasking", "Instant activation"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "50GB SSD",
        price: Price::Monthly("8"),
        description: "Additional NVMe storage space.",
        features: &["NVMe technology", "Fast read/write", "Expandable anytime", "No data migration"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Bandwidth Pack",
        price: Price::Monthly("15"),
        description: "1TB additional monthly bandwidth.",
        features: &["1TB extra transfer", "No throttling", "Global CDN included", "Automatic scaling"],
        popular: false,
        accent: colors::NAVY,
    },
];

const SOFTWARE: &[Plan] = &[
    Plan {
        name: "cPanel/WHM",
        price: Price::Monthly("15"),
        description: "Industry-leading control panel for easy management.",
        features: &["Full cPanel access", "WHM included", "Auto-installer", "Email management", "DNS management", "File manager"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "Plesk Panel",
        price: Price::Monthly("12"),
        description: "Powerful alternative control panel.",
        features: &["Intuitive interface", "WordPress toolkit", "Multi-site management", "Security features"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Softaculous",
        price: Price::Monthly("3"),
        description: "400+ one-click application installs.",
        features: &["400+ scripts", "Auto updates", "Staging environment", "Backup & restore"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "LiteSpeed",
        price: Price::Monthly("10"),
        description: "High-performance web server.",
        features: &["10x faster than Apache", "Built-in caching", "DDoS protection", "HTTP/3 support"],
        popular: false,
        accent: colors::NAVY,
    },
];

const SECURITY: &[Plan] = &[
    Plan {
        name: "DDoS Protection",
        price: Price::Monthly("10"),
        description: "Enterprise-grade DDoS mitigation.",
        features: &["Layer 3-7 protection", "Automatic detection", "Zero downtime", "24/7 monitoring"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "SSL Certificate",
        price: Price::Free,
        description: "Free Let's Encrypt SSL included.",
        features: &["Free SSL", "Auto-renewal", "Wildcard support", "Quick setup"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Firewall Pro",
        price: Price::Monthly("8"),
        description: "Advanced firewall protection.",
        features: &["Custom rules", "IP blocking", "Brute force protection", "Real-time alerts"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Malware Scanner",
        price: Price::Monthly("5"),
        description: "Daily malware scanning and removal.",
        features: &["Daily scans", "Auto removal", "Quarantine system", "Email alerts"],
        popular: false,
        accent: colors::NAVY,
    },
];

const BACKUPS: &[Plan] = &[
    Plan {
        name: "Daily Backup",
        price: Price::Monthly("5"),
        description: "Automatic daily backups with 7-day retention.",
        features: &["Daily snapshots", "7-day retention", "One-click restore", "Off-site storage"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "Weekly Backup",
        price: Price::Monthly("3"),
        description: "Weekly backups with 30-day retention.",
        features: &["Weekly snapshots", "30-day retention", "Easy restore", "Secure storage"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Hourly Backup",
        price: Price::Monthly("15"),
        description: "Enterprise hourly backups.",
        features: &["Hourly snapshots", "48-hour retention", "Instant restore", "Priority storage"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Custom Backup",
        price: Price::Monthly("10"),
        description: "Customizable backup schedule.",
        features: &["Custom schedule", "Flexible retention", "Multiple destinations", "Encryption included"],
        popular: false,
        accent: colors::NAVY,
    },
];

const CLOUD: &[Plan] = &[
    Plan {
        name: "Cloud Starter",
        price: Price::Monthly("29.99"),
        description: "Entry-level cloud hosting solution.",
        features: &["2 vCPU cores", "4GB RAM", "80GB NVMe SSD", "4TB bandwidth", "Auto-scaling ready", "99.99% uptime SLA"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Cloud Pro",
        price: Price::Monthly("59.99"),
        description: "Professional cloud infrastructure.",
        features: &["4 vCPU cores", "8GB RAM", "160GB NVMe SSD", "8TB bandwidth", "Load balancing", "Priority support"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "Cloud Enterprise",
        price: Price::Monthly("119.99"),
        description: "Enterprise-grade cloud solution.",
        features: &["8 vCPU cores", "16GB RAM", "320GB NVMe SSD", "Unlimited bandwidth", "Dedicated resources", "VIP support 24/7"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Cloud Custom",
        price: Price::Custom,
        description: "Tailored cloud infrastructure.",
        features: &["Custom resources", "Dedicated hardware", "Private network", "Custom SLA", "Dedicated account manager", "On-demand scaling"],
        popular: false,
        accent: colors::NAVY,
    },
];

const BILLING: &[Plan] = &[
    Plan {
        name: "Monthly",
        price: Price::Free,
        description: "Pay month-to-month with flexibility.",
        features: &["No long-term commitment", "Cancel anytime", "Full features access", "Standard support"],
        popular: false,
        accent: colors::LIGHT_BLUE,
    },
    Plan {
        name: "Quarterly",
        price: Price::Discount("-5%"),
        description: "Save 5% with quarterly billing.",
        features: &["5% discount", "3-month commitment", "Priority support", "Price lock guarantee"],
        popular: false,
        accent: colors::VIOLET,
    },
    Plan {
        name: "Annual",
        price: Price::Discount("-15%"),
        description: "Best value with annual billing.",
        features: &["15% discount", "12-month commitment", "Priority support", "Free domain included", "Price lock guarantee"],
        popular: true,
        accent: colors::PURPLE,
    },
    Plan {
        name: "Biennial",
        price: Price::Discount("-25%"),
        description: "Maximum savings with 2-year plan.",
        features: &["25% discount", "24-month commitment", "VIP support", "Free domain included", "Dedicated account manager"],
        popular: false,
        accent: colors::NAVY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_category_has_four_plans_and_one_favourite() {
        for category in PlanCategory::ALL {
            let plans = category.plans();
            assert_eq!(plans.len(), 4, "{}", category.label());
            assert_eq!(plans.iter().filter(|p| p.popular).count(), 1, "{}", category.label());
        }
    }

    #[test]
    fn price_labels() {
        assert_eq!(Price::Monthly("19.99").label(), "$19.99/mo");
        assert_eq!(Price::Free.label(), "Free");
        assert_eq!(Price::Discount("-15%").label(), "-15%");
        assert_eq!(Price::Custom.label(), "Custom");
    }

    #[test]
    fn pricing_opens_on_vps_hosting() {
        let names: Vec<_> = PlanCategory::default().plans().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Standard VPS", "Quasar VPS", "Turbo VPS", "Managed VPS"]);
    }

    #[test]
    fn plan_names_are_unique() {
        let mut names: Vec<_> = PlanCategory::ALL
            .iter()
            .flat_map(|c| c.plans().iter().map(|p| p.name))
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
