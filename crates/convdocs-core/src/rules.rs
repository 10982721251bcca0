/// Built-in convention rules, single source of truth for `Catalog::builtin`.
///
/// Each row is `(id, title, description)`. Ids double as markdown file stems
/// under the category's content directory, so the numeric prefix keeps the
/// files sorted the same way the site lists them.
pub const FRONTEND_RULES: &[(&str, &str, &str)] = &[
    (
        "01-directory-structure",
        "Directory Structure",
        "Rules for organizing the project directory structure",
    ),
    (
        "02-naming-convention",
        "Naming Convention",
        "Naming rules for files, directories, functions, and variables",
    ),
    (
        "03-coding-convention",
        "Coding Convention",
        "General coding style rules",
    ),
    (
        "04-api-fetching-architecture",
        "API Fetching Architecture",
        "Rules for structuring API fetching",
    ),
    (
        "05-performance-optimization",
        "Performance Optimization",
        "Rules for optimizing the performance of React and TypeScript applications",
    ),
    (
        "06-react-typescript-general",
        "React and TypeScript General Rules",
        "General best practices and rules for React and TypeScript projects",
    ),
    (
        "07-typescript-usage",
        "TypeScript Usage",
        "Rules for making effective use of the TypeScript type system",
    ),
];

pub const BACKEND_RULES: &[(&str, &str, &str)] = &[
    (
        "01-general-principles",
        "General Principles",
        "Guiding principles for backend code",
    ),
    (
        "02-application-logic",
        "Application Logic",
        "Where application logic lives and how it is written",
    ),
    ("03-entities", "Entities", "Rules for entity design"),
    (
        "04-repositories",
        "Repositories",
        "Rules for repository interfaces and queries",
    ),
    ("05-services", "Services", "Rules for service layer classes"),
    ("06-dtos", "DTOs", "Rules for data transfer objects"),
    (
        "07-rest-controllers",
        "REST Controllers",
        "Rules for REST controller endpoints",
    ),
    ("08-api-response", "API Response", "Standard API response format"),
    (
        "09-global-exception-handler",
        "Global Exception Handler",
        "Centralized exception handling rules",
    ),
    (
        "10-java-spring-best-practices",
        "Java Spring Best Practices",
        "Best practices for Java and Spring development",
    ),
];

/// Category keys and labels, in the order the site lists them.
pub const CATEGORIES: &[(&str, &str, &[(&str, &str, &str)])] = &[
    ("frontend", "Frontend", FRONTEND_RULES),
    ("backend", "Backend", BACKEND_RULES),
];
