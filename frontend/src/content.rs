//! Copy and imagery for every page. Nothing here changes at runtime.

pub const COMPANY: &str = "DinStack";
pub const TAGLINE: &str =
    "A software service company specialized in creating scalable web and Mobile services";

pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub whatsapp_url: &'static str,
}

pub static CONTACT: ContactDetails = ContactDetails {
    address: "160 Off Aworenshoki Expressway Iduma Street Ikeja Lagos, 12345",
    phone: "+1 (123) 456-7890",
    email: "info@dinstack.com.ng",
    whatsapp_url: "https://wa.me/message/PRNTIYGBIOHLA1",
};

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: "gh", href: "#" },
    SocialLink { label: "LinkedIn", icon: "in", href: "#" },
    SocialLink { label: "Twitter", icon: "𝕏", href: "#" },
    SocialLink { label: "Instagram", icon: "ig", href: "#" },
];

pub static BANNER_IMAGES: &[&str] = &[
    "/banner1.jpg",
    "/banner2.jpg",
    "/banner3.jpg",
    "/banner4.jpg",
];

pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Highlighted on the landing page.
pub static FEATURED_SERVICES: &[Service] = &[
    Service {
        name: "E-commerce Solutions",
        description: "Custom e-commerce websites using Shopify, WordPress, or built from scratch to suit your unique business needs.",
        icon: "🛒",
    },
    Service {
        name: "API Integration & Plugin Development",
        description: "Seamless API adaptations and custom plugin development to extend your website's functionality.",
        icon: "🔌",
    },
    Service {
        name: "Cloud Integration & Upgrades",
        description: "Modernize your web services with cloud integration (AWS, Azure, Oracle) and comprehensive upgrades.",
        icon: "☁️",
    },
    Service {
        name: "Machine Learning Pipeline",
        description: "End-to-end ML solutions from data preprocessing to model deployment and monitoring.",
        icon: "🧠",
    },
    Service {
        name: "Data Analysis",
        description: "Comprehensive data analysis services to extract insights and drive informed decision-making.",
        icon: "📊",
    },
];

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

pub static OFFERINGS: &[Offering] = &[
    Offering {
        title: "Web Development",
        description: "Custom web applications tailored to your specific business needs.",
        icon: "💻",
        features: &["Responsive Design", "Frontend & Backend Development", "API Integration"],
    },
    Offering {
        title: "UI/UX Design",
        description: "Create intuitive and visually appealing interfaces for your digital products.",
        icon: "🎨",
        features: &["User Research", "Wireframing & Prototyping", "Visual Design"],
    },
    Offering {
        title: "E-commerce Solutions",
        description: "Build and optimize online stores to boost your sales and customer experience.",
        icon: "🛒",
        features: &["Custom E-commerce Platforms", "Payment Gateway Integration", "Inventory Management"],
    },
    Offering {
        title: "Cloud Services",
        description: "Leverage cloud technologies to scale your applications and improve performance.",
        icon: "☁️",
        features: &["Cloud Migration", "Serverless Architecture", "DevOps & CI/CD"],
    },
    Offering {
        title: "SEO Optimization",
        description: "Improve your website's visibility and ranking on search engines.",
        icon: "🌐",
        features: &["On-page SEO", "Technical SEO", "Content Optimization"],
    },
    Offering {
        title: "Performance Optimization",
        description: "Enhance your website's speed and efficiency for better user experience.",
        icon: "⚡",
        features: &["Code Optimization", "Caching Strategies", "Load Time Reduction"],
    },
    Offering {
        title: "Machine Learning Pipeline",
        description: "End-to-end ML solutions from data preprocessing to model deployment and monitoring.",
        icon: "🧠",
        features: &["Data Preprocessing", "Model Development", "Deployment & Monitoring"],
    },
    Offering {
        title: "Data Analysis",
        description: "Comprehensive data analysis services to extract insights and drive informed decision-making.",
        icon: "📊",
        features: &["Exploratory Data Analysis", "Statistical Modeling", "Data Visualization"],
    },
];

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        name: "ELPATRON HUB",
        description: "A cutting-edge e-commerce platform for electronics",
        image: "/project1.jpg",
    },
    Project {
        name: "EcoSmart",
        description: "IoT-based smart home solution with custom plugins",
        image: "/project3.jpg",
    },
    Project {
        name: "PredictAI",
        description: "Advanced machine learning pipeline for predictive analytics in finance",
        image: "/project4.svg",
    },
];

pub const MAX_RATING: u8 = 5;

pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub comment: &'static str,
    /// Stars out of `MAX_RATING`.
    pub rating: u8,
    pub image: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rohit Patel",
        company: "TechCorp",
        comment: "DinStack transformed our online presence. Their expertise in e-commerce solutions helped us increase our sales by 200%.",
        rating: 5,
        image: "/customer1.jpg",
    },
    Testimonial {
        name: "Anitha Ryan",
        company: "FitLife",
        comment: "The team at DinStack delivered a robust fitness app that exceeded our expectations. Their cloud integration skills are top-notch!",
        rating: 5,
        image: "/customer2.jpg",
    },
    Testimonial {
        name: "Matthew Dover",
        company: "GreenTech",
        comment: "DinStack's custom plugin development for our IoT platform was crucial in making our product stand out in the market.",
        rating: 4,
        image: "/customer4.jpg",
    },
];

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Expertise",
        description: "Our skilled professionals ensure top-notch service delivery.",
        icon: "🛡️",
    },
    Highlight {
        title: "Efficiency",
        description: "Quick and efficient service to meet your deadlines.",
        icon: "⚡",
    },
    Highlight {
        title: "Satisfaction",
        description: "We stand behind our work with a satisfaction guarantee.",
        icon: "👍",
    },
];

pub struct Developer {
    pub name: &'static str,
    pub role: &'static str,
    pub skills: &'static str,
    pub image: &'static str,
}

pub static DEVELOPERS: &[Developer] = &[
    Developer {
        name: "Shem Itoya",
        role: "Frontend Developer",
        skills: "React, Next.js, Tailwind CSS",
        image: "/developer1.jpg",
    },
    Developer {
        name: "Jeffrey Omamoke",
        role: "Backend Developer",
        skills: "Node.js, Express, MongoDB",
        image: "/developer2.jpg",
    },
    Developer {
        name: "Lesley Ayemi",
        role: "Full Stack Developer",
        skills: "Python, Django, React, PostgreSQL",
        image: "/developer3.jpg",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Michael Adawaren",
        role: "Machine Learning Engineer",
        bio: "Michael is an enthusiastic ML engineer with 5 years of experience in creating machine learning pipelines and interacting with a wide range of APIs.",
        image: "/developer0.jpg",
    },
    TeamMember {
        name: "Shem Itoya",
        role: "Frontend Developer",
        bio: "Shem is a passionate frontend developer with 5 years of experience in creating responsive and user-friendly web applications.",
        image: "/developer1.jpg",
    },
    TeamMember {
        name: "Jeffrey Omamoke",
        role: "Backend Developer",
        bio: "Jeffrey is an experienced backend developer specializing in scalable server-side applications and database management.",
        image: "/developer2.jpg",
    },
    TeamMember {
        name: "David Kim",
        role: "UI/UX Designer",
        bio: "David brings creativity and user-centric design principles to every project, ensuring intuitive and visually appealing interfaces.",
        image: "/developer5.jpg",
    },
    TeamMember {
        name: "Lesley Ayemi",
        role: "Full Stack Developer",
        bio: "Lesley is a versatile full stack developer with expertise in both frontend and backend technologies, bridging the gap between design and functionality.",
        image: "/developer3.jpg",
    },
    TeamMember {
        name: "Ogehuku Chike",
        role: "ML Engineer",
        bio: "Chike is a versatile ML expert and data analyst with expertise in a variety of analysis tools such as Power BI, Tableau, Excel and Python, bringing out the insight the data holds.",
        image: "/developer4.jpg",
    },
    TeamMember {
        name: "Onos Omuah",
        role: "Frontend Developer",
        bio: "Onos is a passionate frontend developer & creative designer turning ideas into engaging digital experiences.",
        image: "/developer8.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_fit_the_star_row() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=MAX_RATING).contains(&t.rating)));
    }

    #[test]
    fn every_offering_lists_features() {
        assert!(OFFERINGS.iter().all(|o| !o.features.is_empty()));
    }

    #[test]
    fn images_are_site_relative() {
        let images = BANNER_IMAGES
            .iter()
            .copied()
            .chain(PROJECTS.iter().map(|p| p.image))
            .chain(TESTIMONIALS.iter().map(|t| t.image))
            .chain(DEVELOPERS.iter().map(|d| d.image))
            .chain(TEAM.iter().map(|m| m.image));
        for image in images {
            assert!(image.starts_with('/'), "{image} is not site-relative");
        }
    }

    #[test]
    fn contact_email_matches_delivery_inbox() {
        assert_eq!(CONTACT.email, crate::config::DESTINATION_ADDRESS);
    }
}
