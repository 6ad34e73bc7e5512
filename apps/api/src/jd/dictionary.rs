//! Curated skill dictionaries. Entries are display forms; matching is
//! case-insensitive except for the ambiguous short tokens and `CASE_SENSITIVE`.

pub const LANGUAGES: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Rust", "Ruby", "PHP", "Kotlin",
    "Swift", "Scala", "Perl", "Haskell", "Elixir", "Erlang", "Clojure", "Objective-C", "Dart",
    "Lua", "MATLAB", "Julia", "Bash", "PowerShell", "SQL", "HTML", "CSS", "Solidity", "Groovy",
    "F#", "COBOL", "Fortran",
];

pub const FRAMEWORKS: &[&str] = &[
    "React", "Angular", "Vue", "Next.js", "Node.js", "Express", "Django", "Flask", "FastAPI",
    "Spring", "Spring Boot", "Rails", "Ruby on Rails", "Laravel", ".NET", "ASP.NET", "Svelte",
    "jQuery", "Redux", "GraphQL", "gRPC", "REST", "TensorFlow", "PyTorch", "Keras",
    "scikit-learn", "Pandas", "NumPy", "Spark", "Apache Spark", "Hadoop", "Kafka", "Apache Kafka",
    "Airflow", "dbt", "Tokio", "Actix", "Axum", "React Native", "Flutter", "Tailwind",
    "Bootstrap", "Hibernate", "Celery", "RabbitMQ", "Storybook", "Jest", "Cypress", "Selenium",
    "Playwright", "JUnit", "pytest", "LangChain", "Hugging Face",
];

pub const CLOUD: &[&str] = &[
    "AWS", "Amazon Web Services", "Azure", "Microsoft Azure", "GCP", "Google Cloud Platform",
    "Google Cloud", "Lambda", "EC2", "S3", "CloudFormation", "DynamoDB", "BigQuery", "Heroku",
    "Vercel", "Netlify", "Cloudflare", "Firebase", "Serverless", "OpenStack",
];

pub const DEVOPS: &[&str] = &[
    "Docker", "Kubernetes", "k8s", "Terraform", "Ansible", "Puppet", "Chef", "Jenkins",
    "GitHub Actions", "GitLab CI", "CircleCI", "CI/CD", "Helm", "Prometheus", "Grafana",
    "Datadog", "Splunk", "ELK", "Nginx", "Linux", "Unix", "Git", "Argo CD", "Istio", "Vault",
    "New Relic", "PagerDuty", "Infrastructure as Code", "Microservices", "Observability",
];

pub const DATABASES: &[&str] = &[
    "PostgreSQL", "Postgres", "MySQL", "SQLite", "MongoDB", "Redis", "Cassandra",
    "Elasticsearch", "Oracle", "SQL Server", "MariaDB", "Snowflake", "Redshift", "Neo4j",
    "CockroachDB", "ClickHouse", "DynamoDB", "Memcached", "NoSQL", "Databricks",
];

pub const METHODOLOGIES: &[&str] = &[
    "Agile", "Scrum", "Kanban", "Test-Driven Development", "TDD", "DevOps", "SRE",
    "Site Reliability Engineering", "Machine Learning", "Deep Learning",
    "Natural Language Processing", "NLP", "Computer Vision", "Large Language Models", "LLM",
    "Distributed Systems", "System Design", "Object-Oriented Programming", "OOP",
    "Functional Programming", "Data Structures", "Algorithms", "Unit Testing",
    "Integration Testing", "Code Review", "API Design", "Event-Driven Architecture",
    "Domain-Driven Design", "Security", "Cryptography", "Embedded Systems", "Networking",
];

/// Short tokens that collide with ordinary English; accepted only in their
/// canonical capitalisation and with technical context nearby.
pub const AMBIGUOUS_TECH: &[&str] = &["R", "Go", "C", "AI", "ML"];

pub const MARKETING: &[&str] = &[
    "SEO", "SEM", "Search Engine Optimization", "Google Analytics", "Google Ads", "HubSpot",
    "Marketo", "Salesforce", "Content Marketing", "Email Marketing", "Social Media Marketing",
    "Brand Strategy", "Copywriting", "Marketing Automation", "A/B Testing", "Campaign Management",
    "Demand Generation", "Lead Generation", "Market Research", "Public Relations", "CRM",
    "Mailchimp", "Hootsuite", "Paid Media", "Growth Marketing",
];

pub const FINANCE: &[&str] = &[
    "Financial Modeling", "Financial Analysis", "Forecasting", "Budgeting", "FP&A", "GAAP",
    "IFRS", "Excel", "Accounts Payable", "Accounts Receivable", "Reconciliation", "Audit",
    "Valuation", "DCF", "Bloomberg", "QuickBooks", "NetSuite", "SAP", "Variance Analysis",
    "Risk Management", "Tax", "Treasury", "Financial Reporting", "Underwriting", "ERP",
];

pub const DATA: &[&str] = &[
    "Tableau", "Power BI", "Looker", "Data Analysis", "Data Visualization", "Statistics",
    "Statistical Analysis", "Regression", "ETL", "Data Modeling", "Data Warehousing",
    "Business Intelligence", "A/B Testing", "Excel", "SPSS", "SAS", "Stata", "Dashboards",
    "Data Mining", "Predictive Modeling", "KPI",
];

pub const DESIGN_PM: &[&str] = &[
    "Figma", "Sketch", "Adobe XD", "Photoshop", "Illustrator", "InDesign", "UX", "UI",
    "User Research", "Wireframing", "Prototyping", "Usability Testing", "Design Systems",
    "Interaction Design", "Jira", "Confluence", "Asana", "Trello", "Roadmapping",
    "Product Management", "Project Management", "Stakeholder Management", "Product Strategy",
    "Requirements Gathering", "PRD", "OKRs", "Go-to-Market", "Scrum Master",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Collaboration", "Teamwork", "Problem Solving",
    "Problem-Solving", "Critical Thinking", "Mentorship", "Mentoring", "Ownership",
    "Adaptability", "Time Management", "Attention to Detail", "Creativity", "Initiative",
    "Stakeholder Management", "Decision Making", "Negotiation", "Presentation Skills",
    "Cross-Functional", "Customer Focus", "Accountability", "Curiosity", "Empathy",
    "Self-Motivated", "Organizational Skills", "Interpersonal Skills", "Conflict Resolution",
];

pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Solutions Architect", "AWS Certified Developer", "AWS Certified",
    "Azure Fundamentals", "Google Cloud Certified", "Certified Kubernetes Administrator", "CKA",
    "CKAD", "PMP", "CAPM", "CSM", "Certified ScrumMaster", "PSM", "CISSP", "CISM", "CISA",
    "Security+", "Network+", "CompTIA A+", "CCNA", "CCNP", "CPA", "CFA", "CMA", "Six Sigma",
    "Lean Six Sigma", "ITIL", "Google Analytics Certification", "HubSpot Certification", "SHRM-CP",
    "PHR", "OSCP", "TOGAF",
];

/// Entries that double as everyday words ("excel at", "spring hiring"). These
/// only count when written with their capitalisation.
pub const CASE_SENSITIVE: &[&str] = &[
    "Express", "Excel", "Spring", "Chef", "Puppet", "Swift", "Spark", "Lambda", "Vault", "Rails",
    "Dart", "Julia", "Sketch", "Oracle", "Tax", "Security", "Audit", "Treasury", "REST", "React",
    "Helm",
];

/// Phrases that introduce a technical mention ("experience with Go").
pub const TECH_CONTEXT_CUES: &[&str] = &[
    "experience with", "experience in", "proficiency in", "proficient in", "knowledge of",
    "familiarity with", "familiar with", "expertise in", "programming", "languages",
    "language", "such as", "including", "skills", "stack", "written in", "using", "like",
];

/// Primary technical dictionary, in lookup order.
pub fn technical_dictionaries() -> [&'static [&'static str]; 6] {
    [LANGUAGES, FRAMEWORKS, CLOUD, DEVOPS, DATABASES, METHODOLOGIES]
}

/// Secondary dictionaries consulted for non-engineering postings.
pub fn domain_dictionaries() -> [&'static [&'static str]; 4] {
    [MARKETING, FINANCE, DATA, DESIGN_PM]
}

/// True if `term` appears (case-insensitively) in any hard-skill dictionary.
pub fn is_known_hard_skill(term: &str) -> bool {
    technical_dictionaries()
        .iter()
        .chain(domain_dictionaries().iter())
        .chain(std::iter::once(&AMBIGUOUS_TECH))
        .any(|dict| dict.iter().any(|s| s.eq_ignore_ascii_case(term)))
}

pub fn is_soft_skill(term: &str) -> bool {
    SOFT_SKILLS.iter().any(|s| s.eq_ignore_ascii_case(term))
}
