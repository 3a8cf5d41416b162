use crate::config::colors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Power for Every Scale",
        subtitle: "VPS Hosting Plans",
        description: "From startups to enterprises, our Standard, Quasar, and Turbo plans deliver exactly what you need.",
        icon: "🖥",
        image: "/assets/services/vps.jpg",
        accent: colors::PURPLE,
    },
    Service {
        title: "Built for Performance",
        subtitle: "Server Resources",
        description: "Scale from 1 GB to 64 GB RAM seamlessly. Lightning-fast SSD storage comes standard.",
        icon: "⚡",
        image: "/assets/services/resources.jpg",
        accent: colors::LIGHT_BLUE,
    },
    Service {
        title: "Protected & Connected",
        subtitle: "Network & Security",
        description: "Dedicated IPs, private networking, IPv6 support, and enterprise-grade DDoS protection.",
        icon: "🛡",
        image: "/assets/services/security.jpg",
        accent: colors::VIOLET,
    },
    Service {
        title: "Manage with Ease",
        subtitle: "Control Panels",
        description: "Industry-leading control panels including cPanel/WHM, Plesk, and Interworx.",
        icon: "⚙",
        image: "/assets/services/panels.jpg",
        accent: colors::NAVY,
    },
    Service {
        title: "Scale Without Limits",
        subtitle: "Cloud Infrastructure",
        description: "Built on enterprise cloud architecture with automatic scaling and high availability.",
        icon: "☁",
        image: "/assets/services/cloud.jpg",
        accent: colors::PURPLE,
    },
    Service {
        title: "Built for Developers",
        subtitle: "Developer Tools",
        description: "Full root access, secure SSH, powerful APIs, and automation tools.",
        icon: "⌨",
        image: "/assets/services/developers.jpg",
        accent: colors::LIGHT_BLUE,
    },
    Service {
        title: "Always Here for You",
        subtitle: "24/7 Expert Support",
        description: "Round-the-clock support from certified experts. Free migrations and real-time monitoring.",
        icon: "🎧",
        image: "/assets/services/support.jpg",
        accent: colors::VIOLET,
    },
];

pub const SERVICE_STATS: &[Stat] = &[
    Stat { value: "10,000+", label: "Active Servers", icon: "🖥" },
    Stat { value: "99.99%", label: "Uptime SLA", icon: "📈" },
    Stat { value: "< 100ms", label: "Response Time", icon: "⏱" },
    Stat { value: "24/7", label: "Expert Support", icon: "👥" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_has_seven_cards_with_distinct_subtitles() {
        assert_eq!(SERVICES.len(), 7);
        for (i, a) in SERVICES.iter().enumerate() {
            assert!(SERVICES[i + 1..].iter().all(|b| b.subtitle != a.subtitle));
        }
    }
}
