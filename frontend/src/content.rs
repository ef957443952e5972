//! Everything the page says. Rendered in declaration order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Briefcase,
    CheckCircle,
    Code,
    ExternalLink,
    FileText,
    Globe,
    GraduationCap,
    MessageCircle,
    Palette,
    Smartphone,
    Sparkles,
    User,
    Zap,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Briefcase => "💼",
            Icon::CheckCircle => "✅",
            Icon::Code => "💻",
            Icon::ExternalLink => "🔗",
            Icon::FileText => "📄",
            Icon::Globe => "🌐",
            Icon::GraduationCap => "🎓",
            Icon::MessageCircle => "💬",
            Icon::Palette => "🎨",
            Icon::Smartphone => "📱",
            Icon::Sparkles => "✨",
            Icon::User => "👤",
            Icon::Zap => "⚡",
        }
    }
}

/// Background colour of a badge; a gradient when `from != to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub from: &'static str,
    pub to: &'static str,
}

impl Accent {
    pub const fn gradient(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub const fn solid(color: &'static str) -> Self {
        Self {
            from: color,
            to: color,
        }
    }

    pub fn background(&self) -> String {
        if self.from == self.to {
            format!("background: {};", self.from)
        } else {
            format!(
                "background: linear-gradient(to right, {}, {});",
                self.from, self.to
            )
        }
    }
}

mod palette {
    pub const BLUE: &str = "#3b82f6";
    pub const CYAN: &str = "#06b6d4";
    pub const PURPLE: &str = "#a855f7";
    pub const PINK: &str = "#ec4899";
    pub const GREEN: &str = "#22c55e";
    pub const EMERALD: &str = "#10b981";
    pub const ORANGE: &str = "#f97316";
    pub const RED: &str = "#ef4444";
    pub const INDIGO: &str = "#6366f1";
    pub const TEAL: &str = "#14b8a6";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub label: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkflowStep {
    pub step: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    /// Shown under the label: number, username or a short blurb.
    pub handle: &'static str,
    /// Button text.
    pub action: &'static str,
    pub url: &'static str,
    pub accent: Accent,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: Icon,
}

pub const BRAND: &str = "Omar Hany";
pub const HERO_NAME: &str = "Eng. Omar Hany";
pub const HERO_ROLE: &str = "Professional Software Project Broker";
pub const HERO_PITCH: &str =
    "Connecting clients with trusted developers to build exceptional digital solutions";

pub const WHATSAPP_URL: &str = "https://wa.me/21030634710";
pub const TELEGRAM_URL: &str = "https://t.me/Eng_Omar_Hany";
pub const PORTFOLIO_URL: &str = "https://omarhany.netlify.app";

pub const ABOUT: [AboutCard; 2] = [
    AboutCard {
        title: "Professional Background",
        body: "I'm Omar Hany, a professional software project broker based in Egypt. I help clients build websites, mobile apps, and digital platforms by connecting them with trusted and talented developers.",
        icon: Icon::User,
    },
    AboutCard {
        title: "My Approach",
        body: "You just share your project idea with me, and I'll take care of the rest — pricing, team selection, and project delivery. I ensure quality results while you focus on your business goals.",
        icon: Icon::Briefcase,
    },
];

pub const SERVICES_INTRO: &str =
    "I specialize in connecting you with the right development teams for various digital solutions";

pub const SERVICES: [ServiceEntry; 6] = [
    ServiceEntry {
        label: "Company Websites",
        description: "Professional corporate websites that represent your brand effectively",
        accent: Accent::gradient(palette::BLUE, palette::CYAN),
        icon: Icon::Globe,
    },
    ServiceEntry {
        label: "E-commerce Platforms",
        description: "Complete online stores with payment gateways and inventory management",
        accent: Accent::gradient(palette::PURPLE, palette::PINK),
        icon: Icon::Code,
    },
    ServiceEntry {
        label: "Mobile Applications",
        description: "Native Android and iOS apps tailored to your business needs",
        accent: Accent::gradient(palette::GREEN, palette::EMERALD),
        icon: Icon::Smartphone,
    },
    ServiceEntry {
        label: "UI/UX Design",
        description: "Modern design and redesign services for better user experience",
        accent: Accent::gradient(palette::ORANGE, palette::RED),
        icon: Icon::Palette,
    },
    ServiceEntry {
        label: "Educational Platforms",
        description: "Learning management systems and course platforms",
        accent: Accent::gradient(palette::INDIGO, palette::PURPLE),
        icon: Icon::GraduationCap,
    },
    ServiceEntry {
        label: "Landing Pages",
        description: "High-converting landing pages for your marketing campaigns",
        accent: Accent::gradient(palette::TEAL, palette::BLUE),
        icon: Icon::FileText,
    },
];

pub const WORKFLOW_INTRO: &str = "Simple and straightforward process to get your project started";

pub const WORKFLOW: [WorkflowStep; 4] = [
    WorkflowStep {
        step: 1,
        label: "Contact Me",
        description: "Share your project idea via WhatsApp or Telegram",
        accent: Accent::solid(palette::BLUE),
        icon: Icon::MessageCircle,
    },
    WorkflowStep {
        step: 2,
        label: "Get Quote",
        description: "Receive a customized quote based on your budget and requirements",
        accent: Accent::solid(palette::PURPLE),
        icon: Icon::FileText,
    },
    WorkflowStep {
        step: 3,
        label: "Team Selection",
        description: "I select the most suitable development team for your needs",
        accent: Accent::solid(palette::GREEN),
        icon: Icon::User,
    },
    WorkflowStep {
        step: 4,
        label: "Project Delivery",
        description: "I oversee the project until full delivery and satisfaction",
        accent: Accent::solid(palette::ORANGE),
        icon: Icon::CheckCircle,
    },
];

pub const CONTACT_INTRO: &str =
    "Ready to start your digital project? Get in touch and let's discuss your ideas";

pub const CONTACTS: [ContactChannel; 3] = [
    ContactChannel {
        label: "WhatsApp",
        handle: "+21030634710",
        action: "Message on WhatsApp",
        url: WHATSAPP_URL,
        accent: Accent::solid(palette::GREEN),
        icon: Icon::MessageCircle,
    },
    ContactChannel {
        label: "Telegram",
        handle: "@Eng_Omar_Hany",
        action: "Message on Telegram",
        url: TELEGRAM_URL,
        accent: Accent::solid(palette::BLUE),
        icon: Icon::MessageCircle,
    },
    ContactChannel {
        label: "Portfolio",
        handle: "View My Work",
        action: "Visit Portfolio",
        url: PORTFOLIO_URL,
        accent: Accent::solid(palette::PURPLE),
        icon: Icon::ExternalLink,
    },
];

pub const CTA_HEADLINE: &str = "Start Your Digital Project with Confidence";
pub const CTA_PITCH: &str = "Let me handle the technical part while you focus on your business goals";

pub const COPYRIGHT: &str = "© 2025 Eng. Omar Hany - Software Project Broker. All rights reserved.";
