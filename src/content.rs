//! Display records for the page. Everything here is static copy.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Camera,
    Film,
    Instagram,
    Facebook,
    Youtube,
    Mail,
    Phone,
    MapPin,
    Menu,
    Close,
    ArrowRight,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Camera => "📷",
            Icon::Film => "🎬",
            Icon::Instagram => "◎",
            Icon::Facebook => "ⓕ",
            Icon::Youtube => "▶",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ArrowRight => "→",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Icon::Camera => "icon-camera",
            Icon::Film => "icon-film",
            Icon::Instagram => "icon-instagram",
            Icon::Facebook => "icon-facebook",
            Icon::Youtube => "icon-youtube",
            Icon::Mail => "icon-mail",
            Icon::Phone => "icon-phone",
            Icon::MapPin => "icon-map-pin",
            Icon::Menu => "icon-menu",
            Icon::Close => "icon-close",
            Icon::ArrowRight => "icon-arrow-right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub category: &'static str,
    pub title: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub heading: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

pub const BRAND: &str = "MUKUMU BIJAP";
pub const PHONE: &str = "+91 98765 43210";
pub const EMAIL: &str = "hello@mukumubijap.com";

pub const PAGE_META: PageMeta = PageMeta {
    title: "Mukumu Bijap | Premium Photography & Film Agency Agartala",
    description: "Mukumu Bijap is Tripura's premier creative agency specializing in cinematic wedding films, commercial brand storytelling, and cultural documentation.",
    keywords: "Tripura Photography, Agartala Wedding Photographer, Mukumu Bijap, Cinematic Video Tripura, Commercial Photography Agartala",
};

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1511285560982-1351c4f809b9?q=80&w=2000&auto=format&fit=crop";

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Portfolio", anchor: "portfolio" },
    NavLink { label: "Services", anchor: "services" },
    NavLink { label: "Philosophy", anchor: "philosophy" },
    NavLink { label: "Contact", anchor: "contact" },
];

pub const PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        category: "The Wedding Chapter",
        title: "Siyari & Rohan",
        image_url: "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?q=80&w=800&auto=format&fit=crop",
        tags: &["Cinematic", "Traditional", "Agartala"],
    },
    PortfolioItem {
        category: "Commercial",
        title: "Handloom Heritage",
        image_url: "https://images.unsplash.com/photo-1452800185063-6db5e12b8e2e?q=80&w=800&auto=format&fit=crop",
        tags: &["Brand", "Fashion", "Risa"],
    },
    PortfolioItem {
        category: "Editorial",
        title: "Hukumu Festival",
        image_url: "https://images.unsplash.com/photo-1533158676154-1b3293dc747b?q=80&w=800&auto=format&fit=crop",
        tags: &["Culture", "Event", "Documentary"],
    },
    PortfolioItem {
        category: "The Wedding Chapter",
        title: "Debbarma Nuptials",
        image_url: "https://images.unsplash.com/photo-1583939003024-3027dc1a994a?q=80&w=800&auto=format&fit=crop",
        tags: &["Candid", "Bridal", "Udaipur"],
    },
    PortfolioItem {
        category: "Music Video",
        title: "Echoes of the Hills",
        image_url: "https://images.unsplash.com/photo-1516280440614-6697288d5d38?q=80&w=800&auto=format&fit=crop",
        tags: &["Production", "Music", "4K"],
    },
    PortfolioItem {
        category: "Portraits",
        title: "Modern Identity",
        image_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=800&auto=format&fit=crop",
        tags: &["Studio", "Headshots", "Lighting"],
    },
];

pub const SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        icon: Icon::Camera,
        title: "Wedding Chronicles",
        description: "Complete coverage of your special days. Includes Pre-wedding conceptual shoots, Cinematic Wedding Films (Teasers + Full Length), and Candid Photography. We understand the nuances of Tripuri, Bengali, and Christian traditions.",
        price: "Starting at ₹45,000",
    },
    ServiceOffering {
        icon: Icon::Film,
        title: "Commercial & Brand",
        description: "Elevate your business with high-end visuals. We produce Product Commercials, Real Estate Walkthroughs, Food Photography for Cafes, and Corporate Event Highlights designed for social media growth.",
        price: "Custom Quotes",
    },
    ServiceOffering {
        icon: Icon::Instagram,
        title: "Digital Content",
        description: "For influencers, musicians, and artists. We create Music Videos, Reels Packages, and High-Fashion Portfolios that define your personal brand.",
        price: "Hourly / Project Basis",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "150+", label: "Weddings Documented" },
    Stat { value: "50+", label: "Commercial Projects" },
    Stat { value: "4K", label: "Resolution Standard" },
    Stat { value: "100%", label: "Client Satisfaction" },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Phone,
        heading: "Call Us",
        text: "+91 98765 43210 (Booking Desk)",
    },
    ContactChannel {
        icon: Icon::Mail,
        heading: "Email",
        text: EMAIL,
    },
    ContactChannel {
        icon: Icon::MapPin,
        heading: "Studio",
        text: "Krishnanagar, Agartala, Tripura - 799001",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: Icon::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: Icon::Youtube, label: "YouTube", href: "#" },
];

pub const EVENT_TYPES: [&str; 6] = [
    "Wedding",
    "Pre-Wedding Shoot",
    "Commercial / Brand",
    "Music Video",
    "Portrait Session",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_keep_fixed_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Portfolio", "Services", "Philosophy", "Contact"]);
    }

    #[test]
    fn nav_links_point_at_lowercase_anchors() {
        for link in NAV_LINKS.iter() {
            assert_eq!(link.href(), format!("#{}", link.label.to_lowercase()));
        }
    }

    #[test]
    fn every_record_has_its_fields() {
        for item in PORTFOLIO.iter() {
            assert!(!item.title.is_empty() && !item.category.is_empty());
            assert!(item.image_url.starts_with("https://"));
            assert!(!item.tags.is_empty());
        }
        for service in SERVICES.iter() {
            assert!(!service.description.is_empty() && !service.price.is_empty());
        }
    }
}
