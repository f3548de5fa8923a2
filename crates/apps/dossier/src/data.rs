//! Static dossier content. Identity fields are placeholders.

pub(crate) struct Identity {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
}

pub(crate) const IDENTITY: Identity = Identity {
    name: "AGENT J. DOE",
    role: "Software Engineer // Full Stack Developer",
    location: "Undisclosed Location",
    phone: "+00 00000 00000",
    email: "agent@example.com",
    bio: "Motivated software engineer skilled in Java, C, and Python. Comfortable with both \
          front-end (React, Angular) and back-end development. Strong problem-solving skills \
          with a focus on writing clean, efficient code and creating reliable software solutions.",
};

pub(crate) struct Credential {
    pub title: &'static str,
    pub issuer: &'static str,
    pub period: &'static str,
}

pub(crate) const EDUCATION: [Credential; 2] = [
    Credential {
        title: "BCA (Bachelor of Computer App.)",
        issuer: "STATE UNIVERSITY",
        period: "2021 - 2024",
    },
    Credential {
        title: "HSC",
        issuer: "City Higher Secondary School",
        period: "2020 - 2021",
    },
];

pub(crate) const CERTIFICATIONS: [Credential; 1] = [Credential {
    title: "Java Full Stack Certification",
    issuer: "Training Foundation",
    period: "VERIFIED CERTIFICATE",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Clearance {
    Classified,
    Decrypted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MissionFile {
    pub id: &'static str,
    pub codename: &'static str,
    pub client: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub clearance: Clearance,
    pub url: Option<&'static str>,
}

pub(crate) const MISSION_FILES: [MissionFile; 5] = [
    MissionFile {
        id: "p_car",
        codename: "OP_CAR_WALA",
        client: "Car Trading Portal",
        description: "Developed a comprehensive car trading system for buying and selling \
                      vehicles. Implemented a secure PHP backend for admin/user management and \
                      dynamic AJAX interactions for seamless navigation.",
        tech: &["PHP", "MySQL", "JQuery", "AJAX"],
        clearance: Clearance::Classified,
        url: None,
    },
    MissionFile {
        id: "p_sbt",
        codename: "PROTOCOL_SBT",
        client: "School Bus Tracking",
        description: "Architected a real-time tracking system for school transport. Provides \
                      students with route info, location, and handler details. Built with core \
                      PHP and MySQL for reliable data retrieval.",
        tech: &["PHP", "MySQL", "Bootstrap", "JavaScript"],
        clearance: Clearance::Classified,
        url: None,
    },
    MissionFile {
        id: "p_broker",
        codename: "PROJECT_MYBROKER",
        client: "Real Estate App",
        description: "Full-featured real estate application for property transactions. \
                      Includes property management, valuation tools, and direct buyer-seller \
                      communication channels.",
        tech: &["Real Estate Tech", "Web App", "User Comms"],
        clearance: Clearance::Classified,
        url: None,
    },
    MissionFile {
        id: "p_grid",
        codename: "OP_AGENCY_GRID",
        client: "Digital Agency",
        description: "High-performance digital agency interface designed for maximum brand \
                      impact and conversion velocity.",
        tech: &["React", "Next.js", "Modern UI"],
        clearance: Clearance::Decrypted,
        url: Some("https://example.com/agency"),
    },
    MissionFile {
        id: "p_clinic",
        codename: "PROTOCOL_CLINIC",
        client: "HealthTech Solutions",
        description: "Advanced medical administration dashboard providing real-time patient \
                      analytics and resource tracking.",
        tech: &["Dashboard UX", "Healthcare IT", "Data Viz"],
        clearance: Clearance::Decrypted,
        url: Some("https://example.com/clinic"),
    },
];

pub(crate) struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub(crate) struct SkillCategory {
    pub name: &'static str,
    pub skills: [Skill; 4],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub(crate) static SKILL_MATRIX: [SkillCategory; 5] = [
    SkillCategory {
        name: "WEB_TECHNOLOGIES",
        skills: [
            skill("React.js", 90),
            skill("Angular", 85),
            skill("HTML5 / CSS3", 98),
            skill("Web Architecture", 92),
        ],
    },
    SkillCategory {
        name: "PROGRAMMING_LANG",
        skills: [
            skill("JAVA", 90),
            skill("PHP", 88),
            skill("Python", 80),
            skill("C", 75),
        ],
    },
    SkillCategory {
        name: "DATABASE_SYSTEMS",
        skills: [
            skill("MySQL", 95),
            skill("PostgreSQL", 85),
            skill("MongoDB", 88),
            skill("Oracle SQL", 82),
        ],
    },
    SkillCategory {
        name: "FRAMEWORKS",
        skills: [
            skill("Spring Boot", 88),
            skill("Hibernate", 85),
            skill("Bootstrap", 95),
            skill("JDBC", 85),
        ],
    },
    SkillCategory {
        name: "TOOLS_&_SOFT_SKILLS",
        skills: [
            skill("GitHub", 92),
            skill("Postman", 90),
            skill("Team Leadership", 95),
            skill("Problem Solving", 98),
        ],
    },
];

pub(crate) const RESUME_TEXT: &str = "AGENT J. DOE
agent@example.com | +00 00000 00000
Undisclosed Location

PROFILE
Motivated software engineer skilled in programming languages like Java, C, and Python. Comfortable with both front-end and back-end development and working with databases like SQL and MongoDB. Strong problem-solving skills with a focus on writing clean and efficient code. Enjoys learning new technologies and working in a team to create reliable software solutions.

SKILLS
- Web Technologies: HTML5, CSS3, React js, Angular
- Programming Language: JAVA, PHP
- Database: Oracle SQL, MySQL, MongoDB, PostgreSQL
- Frameworks: Bootstrap, Spring Boot, Spring, Hibernate, JDBC
- Tools: GitHub, Postman
- Soft Skills: Results Oriented, Team Leadership, Decision Making, Problem Solving

EDUCATION
- Bachelor of Computer Application (BCA)
  STATE UNIVERSITY | 2021 - 2024
- HSC
  City Higher Secondary School | 2020 - 2021
- SSC
  City Higher Secondary School | 2018 - 2019

PROJECTS
CAR TRADING PORTAL
- Developed a car trading system for customers to sell and purchase cars.
- Used core PHP for backend to handle the functionalities between admin, buyer and seller.
- Used HTML, CSS and JQuery for frontend and MySQL database.
- Features secure user authentication, optimized database design, and AJAX interactions.

SBT SYSTEM (School Bus Tracking System)
- Developed tracking system for bus, where students get info like route, location, handler.
- Used core PHP for backend, MySQL for database.
- Used Javascript, CSS and Bootstrap for frontend.
- Enhances convenience and ensures timely updates.

MYBROKER (Real Estate Web Application)
- Developed a comprehensive real estate application for property transactions.
- Allows users to buy, sell and rent properties.
- Implemented property management, search functionality, valuation tools.
- Integrated user communication features for direct interaction.

CERTIFICATIONS
- Java Full Stack Certification
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_ids_are_unique() {
        for (index, file) in MISSION_FILES.iter().enumerate() {
            assert!(MISSION_FILES[index + 1..]
                .iter()
                .all(|other| other.id != file.id));
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in &SKILL_MATRIX {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{}", skill.name);
            }
        }
    }

    #[test]
    fn resume_header_matches_identity() {
        let mut lines = RESUME_TEXT.lines();
        assert_eq!(lines.next(), Some(IDENTITY.name));
        assert!(lines.next().is_some_and(|line| line.contains(IDENTITY.email)));
    }
}
