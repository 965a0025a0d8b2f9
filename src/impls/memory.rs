use crate::core::models::{answer::Answer, question::Question, tag::Tag};
use crate::core::ports::catalog::{Catalog, QuestionCatalog, TagCatalog};
use crate::error::Error;
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    tags: Vec<Tag>,
}

impl MemoryCatalog {
    pub fn new(questions: Vec<Question>, answers: Vec<Answer>, tags: Vec<Tag>) -> Self {
        Self { questions, answers, tags }
    }

    // The demo catalog. Ages are resolved against the supplied instant so the
    // records carry real timestamps instead of display strings.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed_questions(now), seed_answers(now), seed_tags())
    }
}

impl QuestionCatalog for MemoryCatalog {
    fn questions(&self) -> Result<Vec<Question>, Error> {
        Ok(self.questions.clone())
    }

    fn get(&self, id: i32) -> Result<Question, Error> {
        self.questions.iter().find(|q| q.id == id).cloned().ok_or(Error::QuestionNotFound(id))
    }

    fn answers(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        Ok(self.answers.iter().filter(|a| a.question_id == question_id).cloned().collect())
    }
}

impl TagCatalog for MemoryCatalog {
    fn tags(&self) -> Result<Vec<Tag>, Error> {
        Ok(self.tags.clone())
    }
}

impl Catalog for MemoryCatalog {}

#[allow(clippy::too_many_arguments)]
fn question(id: i32, title: &str, description: &str, author: &str, votes: i64, answers: i64, views: i64, tags: &[&str], age: Duration, is_answered: bool, now: DateTime<Utc>) -> Question {
    Question {
        id,
        title: title.into(),
        description: description.into(),
        author: author.into(),
        votes,
        answers,
        views,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: now - age,
        is_answered,
    }
}

fn seed_questions(now: DateTime<Utc>) -> Vec<Question> {
    vec![
        question(
            1,
            "How to implement authentication in React with JWT tokens?",
            "I'm building a React application and need to implement user authentication using JWT tokens. What's the best approach for storing and managing tokens securely?",
            "john_dev",
            15,
            8,
            234,
            &["react", "jwt", "authentication", "security"],
            Duration::hours(2),
            true,
            now,
        ),
        question(
            2,
            "Best practices for CSS Grid vs Flexbox in 2025?",
            "When should I use CSS Grid over Flexbox? I'm confused about which layout method to choose for different scenarios.",
            "css_ninja",
            23,
            12,
            456,
            &["css", "grid", "flexbox", "layout"],
            Duration::hours(4),
            true,
            now,
        ),
        question(
            3,
            "How to optimize React app performance for large datasets?",
            "My React application is becoming slow when rendering large lists of data. What are the best optimization techniques?",
            "performance_guru",
            31,
            6,
            789,
            &["react", "performance", "optimization", "virtualization"],
            Duration::days(1),
            false,
            now,
        ),
        question(
            4,
            "Understanding TypeScript generics with practical examples",
            "I'm struggling to understand TypeScript generics. Can someone explain with real-world examples?",
            "ts_learner",
            18,
            15,
            567,
            &["typescript", "generics", "types"],
            Duration::days(2),
            true,
            now,
        ),
    ]
}

fn seed_answers(now: DateTime<Utc>) -> Vec<Answer> {
    vec![
        Answer {
            id: 1,
            question_id: 1,
            content: "Prefer httpOnly cookies set by the server, or keep the token in memory through a React context. Both avoid the XSS exposure that comes with localStorage.".into(),
            author: "security_expert".into(),
            votes: 23,
            created_at: now - Duration::hours(1),
            is_accepted: true,
        },
        Answer {
            id: 2,
            question_id: 1,
            content: "For production applications a library such as @auth0/auth0-react or firebase/auth handles the security concerns for you and is much simpler than rolling your own.".into(),
            author: "auth_guru".into(),
            votes: 12,
            created_at: now - Duration::minutes(30),
            is_accepted: false,
        },
    ]
}

fn tag(name: &str, count: i64, description: &str) -> Tag {
    Tag {
        name: name.into(),
        count,
        description: description.into(),
    }
}

fn seed_tags() -> Vec<Tag> {
    vec![
        tag("javascript", 1234, "For questions about JavaScript programming language"),
        tag("react", 987, "For questions about React.js library and ecosystem"),
        tag("css", 856, "For questions about Cascading Style Sheets"),
        tag("html", 743, "For questions about HyperText Markup Language"),
        tag("typescript", 654, "For questions about TypeScript programming language"),
        tag("node.js", 567, "For questions about Node.js runtime environment"),
        tag("python", 543, "For questions about Python programming language"),
        tag("api", 432, "For questions about Application Programming Interfaces"),
        tag("authentication", 321, "For questions about user authentication and authorization"),
        tag("database", 298, "For questions about databases and data storage"),
        tag("performance", 276, "For questions about application performance optimization"),
        tag("security", 254, "For questions about application security"),
        tag("testing", 234, "For questions about software testing"),
        tag("deployment", 198, "For questions about application deployment"),
        tag("git", 187, "For questions about Git version control system"),
        tag("docker", 165, "For questions about Docker containerization"),
        tag("aws", 143, "For questions about Amazon Web Services"),
        tag("mongodb", 132, "For questions about MongoDB database"),
        tag("express", 121, "For questions about Express.js framework"),
        tag("vue.js", 109, "For questions about Vue.js framework"),
        tag("angular", 98, "For questions about Angular framework"),
        tag("graphql", 87, "For questions about GraphQL query language"),
        tag("redux", 76, "For questions about Redux state management"),
        tag("webpack", 65, "For questions about Webpack module bundler"),
    ]
}
