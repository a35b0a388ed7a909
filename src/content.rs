//! Static page content: navigation targets, hero strings, profile and
//! project data. Components render these by mapping, so the markup stays
//! free of repeated literals.

/// One navigation entry in the header.
pub struct NavLink {
    /// Fragment href, e.g. `#home`.
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// The section id this link targets (the href without `#`).
    #[must_use]
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#coding-profiles", label: "Coding Profiles" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Strings cycled by the hero typewriter.
pub static TYPED_STRINGS: [&str; 5] = [
    "Crafting Clean Code",
    "Building Modern Web Apps",
    "Turning Ideas into Reality",
    "Design. Develop. Deploy.",
    "Passion for Problem Solving",
];

pub struct SocialLink {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        href: "https://github.com/Saicharan7777",
        icon: "fab fa-github",
        label: "GitHub",
    },
    SocialLink {
        href: "https://x.com/Saicharan3355",
        icon: "fab fa-twitter",
        label: "Twitter",
    },
    SocialLink {
        href: "https://www.instagram.com/saicharan_maddimsetti08/",
        icon: "fab fa-instagram",
        label: "Instagram",
    },
    SocialLink {
        href: "https://m.facebook.com/profile.php?id=61565422881985",
        icon: "fab fa-facebook-f",
        label: "Facebook",
    },
];

pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1oIjfB8pq1Uu393J-QM97MF4eXblmCbT2/view?usp=drive_link";

pub const PORTRAIT_URL: &str =
    "https://uploads.onecompiler.io/42b5cwusm/44b9ypd9g/23P31A4245_Drive_Ready%20(1).png";

/// A coding-profile card.
pub struct Profile {
    pub href: &'static str,
    pub title: &'static str,
    pub logo: &'static str,
    pub logo_alt: &'static str,
    /// Extra class on the logo image, if the icon needs one.
    pub logo_class: &'static str,
}

pub static PROFILES: [Profile; 6] = [
    Profile {
        href: "https://leetcode.com/u/Saicharan_Maddimsetti/",
        title: "LeetCode",
        logo: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/l.png",
        logo_alt: "LeetCode Logo",
        logo_class: "",
    },
    Profile {
        href: "https://github.com/Saicharan7777",
        title: "GitHub",
        logo: "https://cdn.jsdelivr.net/npm/simple-icons@v13/icons/github.svg",
        logo_alt: "GitHub Logo",
        logo_class: "github-svg",
    },
    Profile {
        href: "https://www.hackerrank.com/profile/saicharanmaddim1",
        title: "HackerRank",
        logo: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/hc.png",
        logo_alt: "HackerRank Logo",
        logo_class: "",
    },
    Profile {
        href: "https://www.codechef.com/users/charan_335566",
        title: "CodeChef",
        logo: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/c.png",
        logo_alt: "CodeChef Logo",
        logo_class: "",
    },
    Profile {
        href: "https://codeforces.com/profile/saicharan188",
        title: "Codeforces",
        logo: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/cf.png",
        logo_alt: "Codeforces Logo",
        logo_class: "",
    },
    Profile {
        href: "https://www.geeksforgeeks.org/user/saicharan_3355/",
        title: "GeeksforGeeks",
        logo: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/gfg.png",
        logo_alt: "GeeksforGeeks Logo",
        logo_class: "",
    },
];

pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
}

pub struct SkillCategory {
    pub heading: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        heading: "Programming Languages",
        skills: &[
            Skill { icon: "devicon-c-plain", name: "C" },
            Skill { icon: "devicon-cplusplus-plain", name: "C++" },
            Skill { icon: "devicon-java-plain", name: "Java" },
            Skill { icon: "devicon-python-plain", name: "Python" },
        ],
    },
    SkillCategory {
        heading: "Frontend Development",
        skills: &[
            Skill { icon: "devicon-html5-plain", name: "HTML" },
            Skill { icon: "devicon-css3-plain", name: "CSS" },
            Skill { icon: "devicon-javascript-plain", name: "JavaScript" },
            Skill { icon: "devicon-react-original", name: "React" },
            Skill { icon: "devicon-bootstrap-plain", name: "Bootstrap" },
        ],
    },
    SkillCategory {
        heading: "Backend Development",
        skills: &[Skill { icon: "devicon-nodejs-plain", name: "Node.js" }],
    },
    SkillCategory {
        heading: "Databases",
        skills: &[
            Skill { icon: "devicon-mongodb-plain", name: "MongoDB" },
            Skill { icon: "fas fa-database", name: "DBMS" },
        ],
    },
    SkillCategory {
        heading: "Developer Tools",
        skills: &[
            Skill { icon: "devicon-git-plain", name: "Git" },
            Skill { icon: "devicon-github-original", name: "GitHub" },
        ],
    },
];

pub struct Project {
    pub image: &'static str,
    pub image_alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        image: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/1.png",
        image_alt: "Tic Tac Toe AI",
        title: "Tic Tac Toe (AI)",
        description: "Developed a responsive Tic-Tac-Toe game featuring an unbeatable AI \
                      opponent, implemented using the Minimax algorithm in JavaScript.",
        demo_url: "https://3355.oneapp.dev/",
        code_url: "https://github.com/Saicharan7777/Tic-Tac-Toe",
    },
    Project {
        image: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/2.png",
        image_alt: "Advanced Calculator",
        title: "Advanced Calculator",
        description: "Built a modern, user-friendly calculator with real-time expression \
                      parsing and a theme-able interface using vanilla JavaScript and CSS.",
        demo_url: "https://335566.oneapp.dev/",
        code_url: "https://github.com/Saicharan7777/Calculator-Main",
    },
    Project {
        image: "https://uploads.onecompiler.io/42b5cwusm/43wmyckzh/3.png",
        image_alt: "Level Up Dev",
        title: "Level UP DEV",
        description: "Contributed to an interactive platform designed to help developers \
                      enhance their coding skills through curated challenges and learning \
                      resources.",
        demo_url: "https://chvmkiran.github.io/LevelUpDev/",
        code_url: "https://github.com/Saicharan7777/LeveLUpDev",
    },
];
