//! Static question bank and guidance tables.
//!
//! Everything here is compile-time data: the 15 Likert statements, the
//! three technical subsections, the six WISCAR dimension descriptors,
//! and the lookup tables the guidance layer evaluates against an
//! [`AssessmentData`](crate::types::AssessmentData) record. Nothing in
//! this module is ever mutated at runtime.

use crate::types::{AssessmentData, WiscarDimension};
use serde::Serialize;

pub const APP_TITLE: &str = "Career Compass";
pub const APP_TAGLINE: &str = "Should You Learn Salesforce?";
pub const APP_DESCRIPTION: &str = "A data-backed, modular evaluation designed to help learners \
     determine fit, readiness, and career pathways in Salesforce";

/// Approximate time to complete a full run, shown on the introduction.
pub const ASSESSMENT_MINUTES: u8 = 25;

/// Displayed as text only; the program never opens it.
pub const REFERENCE_URL: &str = "https://trailhead.salesforce.com";

// ---------------------------------------------------------------------
// Psychometric section
// ---------------------------------------------------------------------

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

pub const LIKERT_STATEMENTS: [&str; 15] = [
    "I enjoy building structured process flows and systematic approaches to problems.",
    "I thrive when solving real business problems that impact customers and organizations.",
    "I prefer tools that guide me step-by-step rather than completely open-ended frameworks.",
    "I find satisfaction in automating repetitive tasks and improving efficiency.",
    "I'm comfortable learning new software platforms and adapting to technology changes.",
    "I enjoy helping others understand and use technology effectively.",
    "I like to see the bigger picture of how systems connect and work together.",
    "I'm motivated by continuous learning and professional development opportunities.",
    "I work well with deadlines and can manage multiple projects simultaneously.",
    "I'm interested in understanding how businesses operate and can be improved.",
    "I enjoy troubleshooting and finding solutions to technical problems.",
    "I'm comfortable presenting ideas and solutions to both technical and non-technical audiences.",
    "I prefer collaborative environments where I can work with diverse teams.",
    "I'm excited by the prospect of earning industry certifications and credentials.",
    "I'm willing to invest significant time learning a specialized platform like Salesforce.",
];

/// Labels for ratings 1 through 5, in order.
pub const RATING_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

// ---------------------------------------------------------------------
// Technical section
// ---------------------------------------------------------------------

/// A multiple-choice question with one designated correct option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options`.
    pub correct: usize,
}

/// A titled group of technical questions, presented as one wizard sub-step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechnicalSection {
    pub title: &'static str,
    pub questions: &'static [ChoiceQuestion],
}

pub const TECHNICAL_SECTIONS: [TechnicalSection; 3] = [
    TechnicalSection {
        title: "General Aptitude",
        questions: &[
            ChoiceQuestion {
                id: "aptitude_1",
                prompt: "What comes next in this sequence: 2, 4, 8, 16, ?",
                options: &["24", "32", "20", "18"],
                correct: 1,
            },
            ChoiceQuestion {
                id: "aptitude_2",
                prompt: "If Process A takes 3 steps and Process B takes 5 steps, and they can \
                         run in parallel, what's the minimum total time?",
                options: &["8 steps", "5 steps", "3 steps", "15 steps"],
                correct: 1,
            },
            ChoiceQuestion {
                id: "aptitude_3",
                prompt: "In a flowchart, what shape typically represents a decision point?",
                options: &["Rectangle", "Circle", "Diamond", "Oval"],
                correct: 2,
            },
        ],
    },
    TechnicalSection {
        title: "Basic Tech Concepts",
        questions: &[
            ChoiceQuestion {
                id: "tech_1",
                prompt: "In a database, what is a 'record'?",
                options: &[
                    "A column of data",
                    "A row of related data",
                    "A table name",
                    "A database backup",
                ],
                correct: 1,
            },
            ChoiceQuestion {
                id: "tech_2",
                prompt: "What does GUI stand for in software development?",
                options: &[
                    "General User Interface",
                    "Graphical User Interface",
                    "Global User Integration",
                    "Guided User Interaction",
                ],
                correct: 1,
            },
            ChoiceQuestion {
                id: "tech_3",
                prompt: "What is an API primarily used for?",
                options: &[
                    "Creating user interfaces",
                    "Connecting different software systems",
                    "Writing documentation",
                    "Designing databases",
                ],
                correct: 1,
            },
        ],
    },
    TechnicalSection {
        title: "Salesforce-Specific Knowledge",
        questions: &[
            ChoiceQuestion {
                id: "sf_1",
                prompt: "In Salesforce CRM, what typically comes before an Opportunity in the \
                         sales process?",
                options: &["Account", "Lead", "Contact", "Case"],
                correct: 1,
            },
            ChoiceQuestion {
                id: "sf_2",
                prompt: "What is a Salesforce 'Flow' primarily used for?",
                options: &[
                    "Creating reports",
                    "Automating business processes",
                    "Managing user permissions",
                    "Designing page layouts",
                ],
                correct: 1,
            },
            ChoiceQuestion {
                id: "sf_3",
                prompt: "What programming language is primarily used for custom development in \
                         Salesforce?",
                options: &["Java", "JavaScript", "Apex", "Python"],
                correct: 2,
            },
        ],
    },
];

/// Total question count across all technical sections.
pub fn technical_question_count() -> usize {
    TECHNICAL_SECTIONS.iter().map(|s| s.questions.len()).sum()
}

/// Looks up a technical question by id across all sections.
pub fn find_question(id: &str) -> Option<&'static ChoiceQuestion> {
    TECHNICAL_SECTIONS
        .iter()
        .flat_map(|s| s.questions.iter())
        .find(|q| q.id == id)
}

// ---------------------------------------------------------------------
// WISCAR section
// ---------------------------------------------------------------------

pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MAX: u8 = 100;
pub const SLIDER_STEP: u8 = 5;
pub const SLIDER_DEFAULT: u8 = 50;

/// Display copy for one WISCAR slider.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WiscarDescriptor {
    pub dimension: WiscarDimension,
    pub title: &'static str,
    pub description: &'static str,
    /// First-person statement the user rates themselves against.
    pub statement: &'static str,
}

pub const WISCAR_DESCRIPTORS: [WiscarDescriptor; 6] = [
    WiscarDescriptor {
        dimension: WiscarDimension::Will,
        title: "Will",
        description: "Determination and perseverance to follow through with learning goals",
        statement: "I consistently follow through with learning goals and commitments.",
    },
    WiscarDescriptor {
        dimension: WiscarDimension::Interest,
        title: "Interest",
        description: "Genuine fascination with customer-facing tools and business processes",
        statement: "I find customer-facing business tools and processes genuinely fascinating.",
    },
    WiscarDescriptor {
        dimension: WiscarDimension::Skill,
        title: "Skill",
        description: "Current familiarity with platforms, logic, and GUI tools",
        statement: "I have strong familiarity with software platforms and logical thinking.",
    },
    WiscarDescriptor {
        dimension: WiscarDimension::Cognitive,
        title: "Cognitive",
        description: "Pattern recognition and systematic process design abilities",
        statement: "I excel at recognizing patterns and designing systematic processes.",
    },
    WiscarDescriptor {
        dimension: WiscarDimension::Ability,
        title: "Ability to Learn",
        description: "Openness to feedback and comfort with iterative growth",
        statement: "I am highly receptive to feedback and thrive on continuous learning.",
    },
    WiscarDescriptor {
        dimension: WiscarDimension::RealWorld,
        title: "Real-World Fit",
        description: "Genuine desire for Salesforce-based career opportunities",
        statement: "I have a strong desire to pursue Salesforce-based career opportunities.",
    },
];

// ---------------------------------------------------------------------
// Guidance tables
// ---------------------------------------------------------------------

/// The AssessmentData field a role's fit thresholds are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitMetric {
    Overall,
    Technical,
    WiscarCognitive,
    WiscarInterest,
}

impl FitMetric {
    pub fn read(&self, data: &AssessmentData) -> u8 {
        match self {
            FitMetric::Overall => data.overall_score,
            FitMetric::Technical => data.technical_score,
            FitMetric::WiscarCognitive => data.wiscar_scores.cognitive,
            FitMetric::WiscarInterest => data.wiscar_scores.interest,
        }
    }
}

/// A career role with its fit rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoleProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub skills: [&'static str; 3],
    pub metric: FitMetric,
    /// Metric value at or above which the fit is Excellent.
    pub excellent_at: u8,
    /// Metric value at or above which the fit is Good.
    pub good_at: u8,
}

pub const ROLE_PROFILES: [RoleProfile; 4] = [
    RoleProfile {
        title: "Salesforce Admin",
        description: "Configure and maintain orgs, automate processes",
        skills: ["CRM Logic", "Flow Automation", "Process Analysis"],
        metric: FitMetric::Overall,
        excellent_at: 70,
        good_at: 50,
    },
    RoleProfile {
        title: "Salesforce Developer",
        description: "Build custom logic via Apex & Lightning",
        skills: ["Apex Fundamentals", "Lightning Components", "API Integration"],
        metric: FitMetric::Technical,
        excellent_at: 70,
        good_at: 50,
    },
    RoleProfile {
        title: "Solutions Architect",
        description: "Design end-to-end enterprise solutions",
        skills: ["System Design", "Integration Patterns", "Business Analysis"],
        metric: FitMetric::WiscarCognitive,
        excellent_at: 75,
        good_at: 60,
    },
    RoleProfile {
        title: "Business Analyst",
        description: "Translate business needs into Salesforce solutions",
        skills: ["Requirements Gathering", "Process Mapping", "Stakeholder Communication"],
        metric: FitMetric::WiscarInterest,
        excellent_at: 70,
        good_at: 50,
    },
];

/// How a skill-gap row derives its provided score from AssessmentData.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillSource {
    TechnicalCognitiveMean,
    SkillTechnicalMean,
    Technical,
    CognitivePsychometricMean,
}

impl SkillSource {
    pub fn provided(&self, data: &AssessmentData) -> u8 {
        match self {
            SkillSource::TechnicalCognitiveMean => {
                mean_rounded(data.technical_score, data.wiscar_scores.cognitive)
            }
            SkillSource::SkillTechnicalMean => {
                mean_rounded(data.wiscar_scores.skill, data.technical_score)
            }
            SkillSource::Technical => data.technical_score,
            SkillSource::CognitivePsychometricMean => {
                mean_rounded(data.wiscar_scores.cognitive, data.psychometric_score)
            }
        }
    }
}

// Round-half-up mean of two scores, so 75.5 reports as 76.
fn mean_rounded(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}

/// One row of the skill-gap table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillRequirement {
    pub skill: &'static str,
    pub source: SkillSource,
    pub required: u8,
}

pub const SKILL_REQUIREMENTS: [SkillRequirement; 4] = [
    SkillRequirement {
        skill: "CRM Logic",
        source: SkillSource::TechnicalCognitiveMean,
        required: 85,
    },
    SkillRequirement {
        skill: "Flow Automation",
        source: SkillSource::SkillTechnicalMean,
        required: 80,
    },
    SkillRequirement {
        skill: "Apex Fundamentals",
        source: SkillSource::Technical,
        required: 70,
    },
    SkillRequirement {
        skill: "Process Analysis",
        source: SkillSource::CognitivePsychometricMean,
        required: 75,
    },
];

pub const LEARNING_PATH_YES: [&str; 6] = [
    "Platform Basics: CRM objects, declarative config",
    "Automation Tools: Flows, Workflow rules",
    "UI Customization: Lightning app builder",
    "Developer Tools: Apex, LWC fundamentals",
    "Integration & APIs: Basic REST approaches",
    "Certification Path: Admin → Platform Dev I → Dev II",
];

pub const LEARNING_PATH_MAYBE: [&str; 6] = [
    "Strengthen foundational CRM concepts",
    "Practice with declarative automation tools",
    "Improve structured thinking and problem-solving",
    "Gain hands-on experience with Salesforce Trailhead",
    "Consider starting with Admin track before development",
    "Focus on areas identified as needing development",
];

pub const LEARNING_PATH_NO: [&str; 6] = [
    "Explore front-end low-code tools (PowerApps, Mendix)",
    "Consider project management roles with JIRA",
    "Look into data analysis with Excel or Power BI",
    "Investigate web development (React, Python)",
    "Consider business analyst roles in other platforms",
    "Reassess interests and strengths for better alignment",
];

/// A non-Salesforce career direction, shown when the tier is not Yes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlternativePath {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ALTERNATIVE_PATHS: [AlternativePath; 4] = [
    AlternativePath {
        title: "PowerApps Development",
        description: "Microsoft's low-code platform",
    },
    AlternativePath {
        title: "Project Management",
        description: "Using tools like JIRA, Asana",
    },
    AlternativePath {
        title: "Data Analysis",
        description: "Excel, Power BI, Tableau",
    },
    AlternativePath {
        title: "Web Development",
        description: "React, Angular, Python",
    },
];

// ---------------------------------------------------------------------
// Introduction copy
// ---------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoreDomain {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const CORE_DOMAINS: [CoreDomain; 4] = [
    CoreDomain {
        title: "Admin & Configuration",
        detail: "Salesflows, Reports",
    },
    CoreDomain {
        title: "Developer",
        detail: "Apex, LWC, APIs",
    },
    CoreDomain {
        title: "Automation & Integration",
        detail: "Workflows, Data Integration",
    },
    CoreDomain {
        title: "Architecture & Solutions",
        detail: "System Design",
    },
];

pub const TYPICAL_ROLES: [&str; 5] = [
    "Salesforce Admin",
    "Salesforce Developer",
    "Salesforce Consultant",
    "Solutions Architect",
    "Marketing Automation Specialist",
];

pub const REQUIRED_TRAITS: [&str; 5] = [
    "Analytical thinking",
    "Structure-focused problem solving",
    "Customer-oriented mindset",
    "Adaptability to evolving tech",
    "Process/system design strengths",
];

pub const INTRO_PURPOSE: &str = "Help users assess their fit for Salesforce, covering \
     personality alignment, aptitude for ecosystem concepts, and career suitability.";

pub const WHAT_IS_SALESFORCE: &str = "Salesforce is a powerful CRM and cloud platform used to \
     build business apps, automate processes, and develop with declarative tools and code \
     (Apex/Lightning).";

pub const INTRO_TIME_NOTE: &str = "Take your time and answer honestly for the most accurate \
     results.";
