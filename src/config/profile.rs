//! Static page content. Everything the pages render that isn't computed lives here.

pub struct LinkItem {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub position: &'static str,
    /// Short form for the home page timeline
    pub period: &'static str,
    /// Long form for the experience page
    pub duration: &'static str,
    pub location: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub struct ProfileConfig {
    pub owner_name: &'static str,
    pub window_title: &'static str,
    pub header_links: &'static [LinkItem],
    pub taglines: &'static [&'static str],
    pub bio: &'static str,
    pub experiences: &'static [Experience],
    pub posts_index: LinkItem,
    pub latest_posts: &'static [LinkItem],
    pub projects_index: LinkItem,
    pub recent_projects: &'static [LinkItem],
    pub contact_links: &'static [LinkItem],
    pub opportunities_blurb: &'static str,
    pub resume: LinkItem,
    pub email: LinkItem,
}

pub const PROFILE: ProfileConfig = ProfileConfig {
    owner_name: "Devansh Jain",
    window_title: "Devansh Jain - Developer Portfolio",
    header_links: &[
        LinkItem {
            label: "blog",
            url: "https://substack.com/@devanshjaiin",
        },
        LinkItem {
            label: "letterboxd",
            url: "https://letterboxd.com/Devansh015/",
        },
    ],
    taglines: &[
        "🎓 Third Year Computer Science Student @ Wilfrid Laurier University",
        "🧠 I enjoy building meaningful full-stack apps and exploring AI/ML",
    ],
    bio: "In my spare time, I enjoy film, playing basketball, or going to the gym. Feel free to reach out!",
    experiences: &[
        Experience {
            company: "Jain Consultants",
            position: "Software Engineering Intern",
            period: "May 2025 - Aug 2025",
            duration: "May 2025 - August 2025",
            location: "Toronto, Ontario",
            description: &["• ..."],
            technologies: &["React", "Node.js", "JavaScript", "Python"],
        },
        Experience {
            company: "OneDrug",
            position: "Software Engineering Intern",
            period: "May 2024 - Aug 2024",
            duration: "May 2024 - August 2024",
            location: "Toronto, Ontario",
            description: &["• ..."],
            technologies: &["SQL", "React"],
        },
        Experience {
            company: "Accumine Technologies",
            position: "Software Engineering Intern",
            period: "Sep 2022 - Dec 2022",
            duration: "September 2022 - December 2022",
            location: "Toronto, Ontario",
            description: &["• ..."],
            technologies: &["React"],
        },
    ],
    posts_index: LinkItem {
        label: "See all posts",
        url: "https://substack.com/@devanshjaiin",
    },
    latest_posts: &[
        LinkItem {
            label: "Interning at an Engineering Consulting Firm",
            url: "https://devanshjaiin.substack.com/p/interning-at-an-engineering-firm",
        },
        LinkItem {
            label: "What University Doesn't Teach You About Real World Development",
            url: "https://open.substack.com/pub/devanshjaiin/p/what-university-doesnt-teach-you",
        },
        LinkItem {
            label: "My First Hackathon Experience",
            url: "/blog/learning-relational-algebra",
        },
    ],
    projects_index: LinkItem {
        label: "See all projects",
        url: "https://github.com/Devansh015?tab=repositories",
    },
    recent_projects: &[
        LinkItem {
            label: "CNN made with Tensorflow",
            url: "https://github.com/Devansh015/Tensorflow-CNN",
        },
        LinkItem {
            label: "wluNest – Student Housing Database",
            url: "https://github.com/Devansh015/wluNest-App",
        },
        LinkItem {
            label: "URL Shortener – Fast & Minimal Link Tool in Go",
            url: "https://github.com/Devansh015/go-url-shortner",
        },
    ],
    contact_links: &[
        LinkItem {
            label: "email",
            url: "mailto:devansh_jain@outlook.com",
        },
        LinkItem {
            label: "github",
            url: "https://github.com/Devansh015",
        },
        LinkItem {
            label: "linkedin",
            url: "https://linkedin.com/in/devanshj15",
        },
        LinkItem {
            label: "twitter",
            url: "https://x.com/__devanshjain",
        },
        LinkItem {
            label: "resume",
            url: "/2025Resume.pdf",
        },
    ],
    opportunities_blurb: "I'm actively seeking internships and full-time opportunities in software development.",
    resume: LinkItem {
        label: "📄 View Resume",
        url: "/2025Resume.pdf",
    },
    email: LinkItem {
        label: "📧 Get in Touch",
        url: "mailto:devansh_jain@outlook.com",
    },
};
