//! Static learning metadata for skills: effort, demand, salary impact and study material

use serde::{Deserialize, Serialize};

/// Learning and market profile of a single skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// 1 (easy) to 5 (hard)
    pub difficulty: u8,
    /// Weeks to reach working proficiency
    pub learning_weeks: u32,
    /// 1 (niche) to 10 (everywhere)
    pub market_demand: u8,
    /// Salary multiplier the skill tends to bring
    pub salary_impact: f64,
}

impl SkillProfile {
    /// Profile used for skills without an explicit entry
    pub const NEUTRAL: SkillProfile = SkillProfile {
        difficulty: 3,
        learning_weeks: 8,
        market_demand: 5,
        salary_impact: 1.1,
    };

    const fn new(difficulty: u8, learning_weeks: u32, market_demand: u8, salary_impact: f64) -> Self {
        Self { difficulty, learning_weeks, market_demand, salary_impact }
    }

    /// Return on investment on a 0-100 scale.
    ///
    /// `(demand × salary × 10) / (difficulty × √weeks)`, scaled by ten, rounded and capped.
    pub fn roi_score(&self) -> u8 {
        let difficulty = f64::from(self.difficulty.max(1));
        let weeks = f64::from(self.learning_weeks.max(1));
        let raw = (f64::from(self.market_demand) * self.salary_impact * 10.0) / (difficulty * weeks.sqrt());

        (raw * 10.0).round().clamp(0.0, 100.0) as u8
    }
}

impl Default for SkillProfile {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

const PROFILES: &[(&str, SkillProfile)] = &[
    // Programming languages
    ("javascript", SkillProfile::new(2, 8, 10, 1.2)),
    ("typescript", SkillProfile::new(3, 4, 9, 1.3)),
    ("python", SkillProfile::new(2, 6, 10, 1.3)),
    ("java", SkillProfile::new(3, 10, 8, 1.2)),
    ("cplusplus", SkillProfile::new(4, 12, 6, 1.4)),
    ("rust", SkillProfile::new(5, 16, 7, 1.5)),
    ("golang", SkillProfile::new(3, 8, 8, 1.4)),
    ("csharp", SkillProfile::new(3, 10, 7, 1.2)),
    ("swift", SkillProfile::new(3, 10, 6, 1.3)),
    ("kotlin", SkillProfile::new(3, 8, 7, 1.3)),
    // Frontend
    ("html", SkillProfile::new(1, 2, 8, 1.0)),
    ("css", SkillProfile::new(2, 4, 8, 1.1)),
    ("react", SkillProfile::new(3, 6, 10, 1.3)),
    ("vue", SkillProfile::new(3, 5, 7, 1.2)),
    ("angular", SkillProfile::new(4, 8, 7, 1.2)),
    ("svelte", SkillProfile::new(3, 4, 5, 1.2)),
    ("nextjs", SkillProfile::new(4, 3, 9, 1.3)),
    // Backend
    ("nodejs", SkillProfile::new(3, 4, 9, 1.3)),
    ("express", SkillProfile::new(2, 2, 8, 1.1)),
    ("nestjs", SkillProfile::new(4, 6, 6, 1.2)),
    ("django", SkillProfile::new(3, 6, 7, 1.2)),
    ("flask", SkillProfile::new(2, 3, 6, 1.1)),
    ("springboot", SkillProfile::new(4, 8, 8, 1.3)),
    // Databases
    ("mysql", SkillProfile::new(2, 4, 7, 1.1)),
    ("postgresql", SkillProfile::new(3, 5, 8, 1.2)),
    ("mongodb", SkillProfile::new(2, 3, 8, 1.2)),
    ("redis", SkillProfile::new(2, 2, 7, 1.2)),
    // Cloud & DevOps
    ("aws", SkillProfile::new(4, 12, 10, 1.5)),
    ("docker", SkillProfile::new(3, 4, 9, 1.3)),
    ("kubernetes", SkillProfile::new(5, 12, 9, 1.6)),
    ("terraform", SkillProfile::new(4, 8, 8, 1.4)),
    // Data science
    ("machinelearning", SkillProfile::new(5, 20, 9, 1.7)),
    ("tensorflow", SkillProfile::new(5, 16, 8, 1.6)),
    ("pytorch", SkillProfile::new(5, 16, 8, 1.6)),
    ("pandas", SkillProfile::new(3, 6, 8, 1.3)),
    // Testing
    ("jest", SkillProfile::new(2, 3, 7, 1.1)),
    ("cypress", SkillProfile::new(3, 4, 6, 1.1)),
    ("selenium", SkillProfile::new(4, 6, 5, 1.1)),
    // Mobile
    ("reactnative", SkillProfile::new(4, 8, 7, 1.3)),
    ("flutter", SkillProfile::new(4, 10, 8, 1.4)),
    ("ios", SkillProfile::new(4, 12, 6, 1.3)),
    ("android", SkillProfile::new(4, 12, 7, 1.3)),
];

/// Profile of a skill id, falling back to [`SkillProfile::NEUTRAL`]
pub fn profile(skill: &str) -> SkillProfile {
    PROFILES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, profile)| *profile)
        .unwrap_or_default()
}

/// Where to study a skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResources {
    pub free: Vec<String>,
    pub paid: Vec<String>,
    pub books: Vec<String>,
    pub practice: Vec<String>,
}

struct ResourceSet {
    free: &'static [&'static str],
    paid: &'static [&'static str],
    books: &'static [&'static str],
    practice: &'static [&'static str],
}

const GENERIC_RESOURCES: ResourceSet = ResourceSet {
    free: &["Online tutorials", "Documentation"],
    paid: &["Online courses", "Bootcamps"],
    books: &["Technical books"],
    practice: &["Practice projects"],
};

const RESOURCES: &[(&str, ResourceSet)] = &[
    ("javascript", ResourceSet {
        free: &["MDN Web Docs", "freeCodeCamp", "JavaScript.info"],
        paid: &["Frontend Masters", "Pluralsight", "Udemy"],
        books: &["Eloquent JavaScript", "You Don't Know JS"],
        practice: &["LeetCode", "Codewars", "HackerRank"],
    }),
    ("react", ResourceSet {
        free: &["React Official Docs", "freeCodeCamp", "React Tutorial"],
        paid: &["React Training", "Egghead.io", "Frontend Masters"],
        books: &["Learning React", "React: Up & Running"],
        practice: &["React Challenges", "Build Projects"],
    }),
    ("python", ResourceSet {
        free: &["Python.org Tutorial", "Real Python", "Automate the Boring Stuff"],
        paid: &["Python Institute", "DataCamp", "Coursera"],
        books: &["Python Crash Course", "Effective Python"],
        practice: &["LeetCode", "Project Euler", "Kaggle"],
    }),
    ("aws", ResourceSet {
        free: &["AWS Free Tier", "AWS Training", "Cloud Academy"],
        paid: &["A Cloud Guru", "Linux Academy", "Pluralsight"],
        books: &["AWS Certified Solutions Architect"],
        practice: &["AWS Labs", "Hands-on Projects"],
    }),
    ("docker", ResourceSet {
        free: &["Docker Docs", "Docker Getting Started", "Play with Docker"],
        paid: &["Docker Desktop", "Pluralsight", "Linux Academy"],
        books: &["Docker: Up & Running", "Docker in Action"],
        practice: &["Docker Labs", "Containerize Projects"],
    }),
];

pub fn resources(skill: &str) -> LearningResources {
    let set = RESOURCES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, set)| set)
        .unwrap_or(&GENERIC_RESOURCES);

    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    LearningResources {
        free: owned(set.free),
        paid: owned(set.paid),
        books: owned(set.books),
        practice: owned(set.practice),
    }
}

const GENERIC_PATH: &[&str] = &[
    "Research skill fundamentals",
    "Find quality learning resources",
    "Start with basics and theory",
    "Practice with hands-on exercises",
    "Build projects to apply knowledge",
    "Join communities and forums",
    "Seek feedback and mentorship",
    "Continue practicing and improving",
];

const LEARNING_PATHS: &[(&str, &[&str])] = &[
    ("react", &[
        "Learn JavaScript fundamentals (if needed)",
        "Understand ES6+ features",
        "Learn JSX syntax",
        "Master React components and props",
        "Understand state and lifecycle",
        "Learn React Hooks",
        "Practice with routing (React Router)",
        "Build a complete project",
    ]),
    ("nodejs", &[
        "JavaScript fundamentals",
        "Understand asynchronous programming",
        "Learn Node.js runtime environment",
        "Master npm and package management",
        "Learn Express.js framework",
        "Understand databases integration",
        "Learn authentication and security",
        "Build REST APIs",
    ]),
    ("aws", &[
        "Understand cloud computing basics",
        "Learn AWS core services (EC2, S3, RDS)",
        "Master IAM and security",
        "Learn networking (VPC, subnets)",
        "Understand deployment strategies",
        "Learn monitoring and logging",
        "Practice with AWS CLI/SDKs",
        "Prepare for AWS certification",
    ]),
    ("docker", &[
        "Understand containerization concepts",
        "Learn Docker basics and commands",
        "Master Dockerfile creation",
        "Understand Docker Compose",
        "Learn container networking",
        "Practice with multi-stage builds",
        "Learn Docker security best practices",
        "Integrate with CI/CD pipelines",
    ]),
];

/// Ordered study steps for a skill
pub fn learning_path(skill: &str) -> Vec<String> {
    LEARNING_PATHS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, steps)| *steps)
        .unwrap_or(GENERIC_PATH)
        .iter()
        .map(|step| step.to_string())
        .collect()
}
