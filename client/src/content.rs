//! Static page copy and section identifiers.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_NAME: &str = "Vector24";
pub const TAGLINE: &str = "The solution for controllers on ATC24.";
pub const GITHUB_URL: &str = "https://github.com/awdev1/Vector24";
pub const DISCORD_INVITE_URL: &str = "https://discord.com/invite/kyDgZbnHz3";

/// Served from the site root (`client/public/images`).
pub const ABOUT_IMAGE: &str = "/images/vector24-overview.svg";
pub const ABOUT_IMAGE_ALT: &str = "Vector24 Overview";
pub const ABOUT_COPY: &str = "Vector24 (VTR24) is a simple vector drawing tool made in python and \
    overlays over the roblox minimap without violating TOS. It lets you click and drag to get the \
    heading of an aircraft and draw an approach/extended centreline overlaying the map. This makes \
    vectoring more easier now on ATC24 so you no longer have to guess your headings or where the \
    approach is!";

/// Navigable page regions, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Features,
    About,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Features,
        Section::About,
        Section::Faq,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::About => "about",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    /// Navigation button text.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::About => "About",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Interactive Vector Drawing",
        body: "Click and drag to draw vectors, with heading (angle) displayed dynamically.",
    },
    Feature {
        title: "Position Selection",
        body: "You can select your controlling position so people can see where you are controlling.",
    },
    Feature {
        title: "Discord Rich Presence Integration",
        body: "Automatically updates your Discord status to reflect drawing activity.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 3] = [
    FaqEntry {
        question: "What is Vector24?",
        answer: "Vector24 is an innovative platform aimed at streamlining air traffic control processes.",
    },
    FaqEntry {
        question: "Is there support for Mac?",
        answer: "Mac is currently in beta testing and should be available soon!",
    },
    FaqEntry {
        question: "Can I contribute?",
        answer: "Yes, Vector24 is open source, and code suggestions and changes are welcome!",
    },
];
