//! Read-only content rendered by the site.
//!
//! Everything here is `&'static` data compiled into the binary. A [`Catalog`]
//! bundles the slices so callers receive it once at startup and pass it down,
//! instead of reaching for globals. Nothing in this module mutates.

use serde::Serialize;

/// Sentinel category id that selects every project.
pub const ALL_CATEGORIES: &str = "all";

/// Portfolio category (filter button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// Portfolio entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    /// Matches a [`Category::id`] (never the `all` sentinel).
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub client: &'static str,
    pub technologies: &'static [&'static str],
    pub year: &'static str,
}

/// Client quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub avatar: &'static str,
    /// Stars out of five.
    pub rating: u8,
    pub service: &'static str,
    pub date: &'static str,
}

/// Blog teaser card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date (`YYYY-MM-DD`).
    pub date: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
}

impl BlogPost {
    /// `YYYY-MM-DD` rendered as `M/D/YYYY`. Anything else is shown verbatim.
    pub fn display_date(&self) -> String {
        match parse_iso_date(self.date) {
            Some((year, month, day)) => format!("{month}/{day}/{year}"),
            None => self.date.to_string(),
        }
    }
}

fn parse_iso_date(date: &str) -> Option<(u16, u8, u8)> {
    let mut parts = date.splitn(3, '-');
    let year: u16 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some((year, month, day))
}

/// Service card. The slug is also the value of the contact form's
/// `service` select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

/// One of the three "About" highlight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Studio identity shown in the hero, about, contact and footer sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudioProfile {
    pub brand: &'static str,
    pub founder: &'static str,
    pub founded: u16,
    pub email: &'static str,
    pub response_time: &'static str,
    pub experience: &'static str,
    pub tagline: &'static str,
    pub values: &'static [&'static str],
    pub highlights: &'static [Highlight],
}

const CATEGORIES: &[Category] = &[
    Category {
        id: ALL_CATEGORIES,
        name: "All Projects",
    },
    Category {
        id: "ux-ui",
        name: "UX/UI Design",
    },
    Category {
        id: "business-graphics",
        name: "Business Graphics",
    },
    Category {
        id: "copywriting",
        name: "Copywriting & Consulting",
    },
    Category {
        id: "cv-resume",
        name: "CV & Resume",
    },
    Category {
        id: "branding",
        name: "Branding & Logo",
    },
];

const PROJECTS: &[Project] = &[
    // UX/UI Design
    Project {
        id: 1,
        title: "E-commerce Mobile App Redesign",
        category: "ux-ui",
        description: "Complete mobile app redesign focusing on user experience and conversion optimization",
        image: "https://images.pexels.com/photos/6373086/pexels-photo-6373086.jpeg",
        client: "TechCorp Solutions",
        technologies: &["Figma", "Adobe XD", "Principle"],
        year: "2024",
    },
    Project {
        id: 2,
        title: "SaaS Dashboard Interface",
        category: "ux-ui",
        description: "Modern dashboard design with intuitive navigation and data visualization",
        image: "https://images.pexels.com/photos/6612388/pexels-photo-6612388.jpeg",
        client: "DataFlow Inc",
        technologies: &["Figma", "React", "D3.js"],
        year: "2024",
    },
    // Graphics for Business
    Project {
        id: 3,
        title: "Corporate Presentation Design",
        category: "business-graphics",
        description: "Professional presentation template with consistent branding elements",
        image: "https://images.pexels.com/photos/9849933/pexels-photo-9849933.jpeg",
        client: "Business Solutions Ltd",
        technologies: &["PowerPoint", "Illustrator"],
        year: "2023",
    },
    Project {
        id: 4,
        title: "Marketing Brochure Design",
        category: "business-graphics",
        description: "Elegant tri-fold brochure with compelling visual hierarchy",
        image: "https://images.pexels.com/photos/7283202/pexels-photo-7283202.jpeg",
        client: "Marketing Pro Agency",
        technologies: &["InDesign", "Photoshop"],
        year: "2023",
    },
    // Copywriting & Consulting
    Project {
        id: 5,
        title: "Website Content Strategy",
        category: "copywriting",
        description: "Complete website copywriting with SEO optimization and conversion focus",
        image: "https://images.unsplash.com/photo-1574583943689-b71046e8773e",
        client: "StartupX",
        technologies: &["SEO", "Content Strategy"],
        year: "2024",
    },
    Project {
        id: 6,
        title: "Business Consultation Report",
        category: "copywriting",
        description: "Strategic business analysis and growth recommendations report",
        image: "https://images.pexels.com/photos/7681091/pexels-photo-7681091.jpeg",
        client: "Growth Partners",
        technologies: &["Market Research", "Business Analysis"],
        year: "2023",
    },
    // CV & Resume
    Project {
        id: 7,
        title: "Executive Resume Design",
        category: "cv-resume",
        description: "Premium resume design for C-level executives with modern layout",
        image: "https://images.unsplash.com/photo-1490013616775-3ca8865fb129",
        client: "Executive Search Firm",
        technologies: &["InDesign", "Typography"],
        year: "2024",
    },
    Project {
        id: 8,
        title: "Creative Portfolio Design",
        category: "cv-resume",
        description: "Creative professional portfolio with interactive elements",
        image: "https://images.pexels.com/photos/7191982/pexels-photo-7191982.jpeg",
        client: "Creative Agency",
        technologies: &["Figma", "Webflow"],
        year: "2023",
    },
    // Branding & Logo
    Project {
        id: 9,
        title: "Complete Brand Identity",
        category: "branding",
        description: "Full brand identity package with logo, colors, and brand guidelines",
        image: "https://images.pexels.com/photos/7661590/pexels-photo-7661590.jpeg",
        client: "InnovateTech",
        technologies: &["Illustrator", "Brand Strategy"],
        year: "2024",
    },
    Project {
        id: 10,
        title: "Digital Brand Guidelines",
        category: "branding",
        description: "Comprehensive digital brand guidelines and asset library",
        image: "https://images.pexels.com/photos/7661643/pexels-photo-7661643.jpeg",
        client: "DigitalFirst Corp",
        technologies: &["Figma", "Illustrator"],
        year: "2024",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        company: "TechCorp Solutions",
        text: "Geoffrey's UX design transformed our mobile app completely. User engagement increased by 150% after the redesign.",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
        rating: 5,
        service: "UX/UI Design",
        date: "2024-01-15",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        company: "DataFlow Inc",
        text: "The dashboard design exceeded our expectations. GoTech Solutions delivered exceptional quality on time.",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
        rating: 5,
        service: "UX/UI Design",
        date: "2024-01-10",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        company: "StartupX",
        text: "The copywriting and brand strategy work was outstanding. Our conversion rates improved significantly.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
        rating: 5,
        service: "Copywriting",
        date: "2024-01-05",
    },
];

const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "The Future of UX Design in 2024",
        excerpt: "Exploring emerging trends and technologies shaping user experience design.",
        date: "2024-01-15",
        read_time: "5 min read",
        image: "https://images.unsplash.com/photo-1559028006-448665bd7c7f?w=400&h=250&fit=crop",
    },
    BlogPost {
        id: 2,
        title: "Building Brand Identity That Converts",
        excerpt: "How strategic branding drives business growth and customer loyalty.",
        date: "2024-01-10",
        read_time: "7 min read",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=250&fit=crop",
    },
    BlogPost {
        id: 3,
        title: "Copywriting Secrets for Better Conversions",
        excerpt: "Proven copywriting techniques that turn visitors into customers.",
        date: "2024-01-05",
        read_time: "6 min read",
        image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?w=400&h=250&fit=crop",
    },
];

const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        slug: "ux-ui",
        title: "UX/UI Design",
        description: "User-centered design solutions that drive engagement and conversions",
        icon: "🎨",
        features: &[
            "User Research",
            "Wireframing",
            "Prototyping",
            "Usability Testing",
        ],
    },
    ServiceOffering {
        slug: "business-graphics",
        title: "Business Graphics",
        description: "Professional presentations, reports, flyers, and brochures",
        icon: "📊",
        features: &["Presentations", "Reports", "Flyers", "Brochures"],
    },
    ServiceOffering {
        slug: "copywriting",
        title: "Copywriting & Consulting",
        description: "Strategic content and business consultation services",
        icon: "✍️",
        features: &[
            "Website Copy",
            "Content Strategy",
            "Business Analysis",
            "Marketing Copy",
        ],
    },
    ServiceOffering {
        slug: "cv-resume",
        title: "CV & Resume Design",
        description: "Professional resume and pitch deck design",
        icon: "📄",
        features: &[
            "Resume Design",
            "CV Templates",
            "Pitch Decks",
            "Portfolio Design",
        ],
    },
    ServiceOffering {
        slug: "branding",
        title: "Branding & Logo Design",
        description: "Complete brand identity and visual design solutions",
        icon: "🎯",
        features: &[
            "Logo Design",
            "Brand Guidelines",
            "Visual Identity",
            "Mockups",
        ],
    },
    ServiceOffering {
        slug: "grant-writing",
        title: "Grant Proposal Writing",
        description: "Professional grant proposals and business documentation",
        icon: "📝",
        features: &[
            "Grant Writing",
            "Proposal Design",
            "Business Plans",
            "Documentation",
        ],
    },
];

static PROFILE: StudioProfile = StudioProfile {
    brand: "GoTech Solutions",
    founder: "Geoffrey Okoli",
    founded: 2023,
    email: "geoffreyokoliolukaka@gmail.com",
    response_time: "Within 24 hours",
    experience: "10+ years in design & tech",
    tagline: "Bringing ideas to life through clean, user-friendly designs.",
    values: &["Trust", "Honesty", "Professionalism"],
    highlights: &[
        Highlight {
            icon: "🎓",
            title: "Education",
            text: "IT at Maseno University & Software Engineering with ALX Africa",
        },
        Highlight {
            icon: "⚡",
            title: "Experience",
            text: "10+ years of experience in tech and design solutions",
        },
        Highlight {
            icon: "🏆",
            title: "Values",
            text: "Trust, honesty, and professionalism in every project",
        },
    ],
};

/// Portfolio view selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The `all` sentinel: every project, unfiltered.
    #[default]
    All,
    /// Exact match on [`Project::category`].
    Only(String),
}

impl CategoryFilter {
    /// Parse a category id. `"all"` is the sentinel; any other string is
    /// matched verbatim, so an unknown id selects nothing.
    pub fn parse(id: &str) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(id.to_string())
        }
    }

    /// Category id this filter selects (`"all"` for the sentinel).
    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(id) => id,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => project.category == id,
        }
    }

    /// Whether the filter names a category the catalog knows about.
    pub fn is_known(&self, catalog: &Catalog) -> bool {
        catalog.category(self.id()).is_some()
    }
}

/// Immutable bundle of all site content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub profile: &'static StudioProfile,
    pub categories: &'static [Category],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub posts: &'static [BlogPost],
    pub services: &'static [ServiceOffering],
}

impl Catalog {
    /// The content shipped with the site.
    pub fn builtin() -> Self {
        Self {
            profile: &PROFILE,
            categories: CATEGORIES,
            projects: PROJECTS,
            testimonials: TESTIMONIALS,
            posts: POSTS,
            services: SERVICES,
        }
    }

    /// Projects selected by `filter`, in catalog order.
    pub fn filter_projects(&self, filter: &CategoryFilter) -> Vec<&'static Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn category(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn service(&self, slug: &str) -> Option<&'static ServiceOffering> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
