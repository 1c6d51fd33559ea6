//! Static page content

/// Brand shown in the navigation bar
pub const BRAND: &str = "KivevoX";
/// Name of the person behind the services
pub const OWNER: &str = "Peter John";

pub const HERO_BADGE: &str = "24/7 IT Support";
pub const HERO_TITLE: &str = "Your Trusted IT Expert";
pub const HERO_INTRO: &str = "Computer Science graduate with 5+ years in web development, network setups, \
and CCTV installations, delivering reliable IT solutions.";
pub const HERO_TAGLINE: &str = "\u{201c}Delivering Reliable Tech Solutions\u{201d}";

pub const HERO_BENEFITS: &[&str] = &[
    "Free Network Audit & Consultation",
    "Same-Day Emergency IT Services",
    "5+ Years of Industry Experience",
    "Certified in Network Security & Web Development",
];

/// (figure, caption) pairs under the hero text
pub const TRUST_STATS: &[(&str, &str)] = &[
    ("50+", "Happy Clients"),
    ("24/7", "Support"),
    ("100%", "Satisfaction"),
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub popular: bool,
    pub highlight: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Custom websites and web applications tailored to your business needs",
        features: &["Responsive Design", "SEO Optimized", "Fast Loading", "Mobile-First"],
        price: "Starter $499 | Pro $899 | Premium $1499",
        popular: true,
        highlight: "Most Popular",
    },
    Service {
        title: "Network & WiFi Setup",
        description: "Professional network configuration and WiFi optimization for homes and businesses",
        features: &["Network Planning", "WiFi Heatmap", "Security Setup", "Performance Tuning"],
        price: "Home $149 | Office $299 | Enterprise $599",
        popular: false,
        highlight: "Best Value",
    },
    Service {
        title: "CCTV Installation",
        description: "Complete security camera systems with remote monitoring capabilities",
        features: &["HD Cameras", "Remote Access", "Motion Detection", "Cloud Storage"],
        price: "Basic $299 | Smart $599 | Advanced $999",
        popular: false,
        highlight: "Top Security",
    },
    Service {
        title: "Cybersecurity",
        description: "Protect your business from cyber threats with comprehensive security solutions",
        features: &["Threat Assessment", "Firewall Setup", "Anti-virus", "Security Training"],
        price: "From $199 - Free Consultation",
        popular: false,
        highlight: "Secure Choice",
    },
    Service {
        title: "Hardware Support",
        description: "Computer repair, upgrades, and maintenance services",
        features: &["Diagnostics", "Component Replacement", "Performance Optimization", "Data Recovery"],
        price: "Basic Fix $49 | Full Service $99 | Premium Care $199",
        popular: false,
        highlight: "Budget Friendly",
    },
    Service {
        title: "IT Consulting",
        description: "Strategic IT guidance to help your business leverage technology effectively",
        features: &["IT Strategy", "Technology Planning", "System Integration", "Training"],
        price: "Free Consultation - Custom Quote",
        popular: false,
        highlight: "Free Consultation",
    },
];

/// Options offered by the contact form's "Service Needed" select
pub const SERVICE_OPTIONS: &[&str] = &[
    "Web Development",
    "Network Setup",
    "CCTV Installation",
    "Cybersecurity",
    "Hardware Support",
    "IT Consulting",
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100
    pub level: u16,
    pub highlight: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Web Development", level: 95, highlight: "Top Skill" },
    Skill { name: "Network Security", level: 90, highlight: "Highly Proficient" },
    Skill { name: "CCTV Systems", level: 88, highlight: "Expert Setup" },
    Skill { name: "Hardware Troubleshooting", level: 92, highlight: "Reliable Fixes" },
    Skill { name: "System Administration", level: 85, highlight: "Efficient Management" },
    Skill { name: "Customer Service", level: 98, highlight: "Client Favorite" },
];

/// Name the resume is offered under
pub const RESUME_FILE_NAME: &str = "Peter_John_Resume.pdf";

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Computer Science Graduate",
        description: "Bachelor's degree with focus on networking and cybersecurity",
        highlight: "Academic Excellence",
    },
    Achievement {
        title: "5+ Years Experience",
        description: "Proven track record in IT support and web development",
        highlight: "Trusted Expert",
    },
    Achievement {
        title: "50+ Happy Clients",
        description: "Small businesses and homeowners trust my expertise",
        highlight: "Client Trust",
    },
    Achievement {
        title: "24/7 Availability",
        description: "Always ready to help with urgent IT issues",
        highlight: "Always On",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlight: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Bus Booking System",
        description: "An online system for reserving and managing bus tickets.",
        features: &["Online Reservations", "Payment Integration", "Real-time Updates", "User Dashboard"],
        highlight: "Most Popular",
    },
    Project {
        title: "Hotel Management System",
        description: "Room booking, guest management, billing & reporting platform.",
        features: &["Room Booking", "Guest Management", "Billing System", "Reporting Tools"],
        highlight: "Top Choice",
    },
    Project {
        title: "Crypto Trading Bot",
        description: "Automated trading bot for Binance with smart strategies.",
        features: &["Automated Trading", "Smart Algorithms", "Binance API", "Performance Analytics"],
        highlight: "High Performance",
    },
    Project {
        title: "Rent Management System",
        description: "Track tenants, payments, and invoices with M-Pesa integration.",
        features: &["Tenant Tracking", "M-Pesa Integration", "Invoice Management", "Payment Alerts"],
        highlight: "Best Value",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub action: &'static str,
    pub available: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        title: "Call Me",
        description: "For urgent IT issues",
        value: "+254 751035034",
        action: "tel:+254751035034",
        available: "24/7 Emergency",
    },
    ContactMethod {
        title: "Email Me",
        description: "For general inquiries",
        value: "peterkivevo001@gmail.com",
        action: "mailto:peterkivevo001@gmail.com",
        available: "24-48h response",
    },
    ContactMethod {
        title: "WhatsApp",
        description: "Quick messages & updates",
        value: "+254 751035034",
        action: "https://wa.me/254751035034",
        available: "Instant response",
    },
    ContactMethod {
        title: "Visit Office",
        description: "By appointment only",
        value: "Nairobi, Kenya",
        action: "https://maps.google.com/?q=Nairobi,Kenya",
        available: "Mon-Fri 9AM-6PM",
    },
];

pub const EMERGENCY_NOTE: &str =
    "Critical system down? Network compromised? I'm available 24/7 for emergency situations.";

/// (label, url) pairs in the footer
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("X", "https://x.com"),
    ("Instagram", "https://instagram.com"),
    ("Portfolio", "https://portfolio.com"),
];

pub const FOOTER_BLURB: &str = "Your trusted local IT expert providing comprehensive technology \
solutions for businesses and homes across Kenya.";

/// Toast shown after a message is accepted
pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str =
    "Thanks for reaching out. I'll get back to you within 24 hours.";
