//! Programmatic usage demo: scores a sample resume against a sample JD and
//! prints the full report plus improvement suggestions.
//!
//! Run with: `cargo run --example score_resume`

use ats_engine::{calculate_ats_score, generate_improvement_suggestions, DEFAULT_SCORE_THRESHOLD};

const SAMPLE_RESUME: &str = r#"
JOHN DOE
john.doe@email.com | (555) 123-4567

PROFESSIONAL SUMMARY
Results-driven Python developer with 5+ years of experience building scalable
data pipelines and microservices. Proven track record of delivering
production-grade systems and optimizing performance.

TECHNICAL SKILLS
Languages: Python, Java, SQL, Bash
Frameworks: Django, Flask, FastAPI
Cloud & DevOps: AWS, Docker, Kubernetes, Jenkins
Databases: PostgreSQL, MongoDB, Redis

PROFESSIONAL EXPERIENCE

Senior Python Developer, Tech Corp
- Architected and developed a real-time data pipeline processing 10M+ events per day
- Optimized database queries, reducing query time by 45%
- Led a team of 4 engineers designing a microservices architecture
- Implemented an automated testing framework, increasing coverage from 60% to 92%
- Mentored 3 junior developers and coordinated monthly code reviews

Python Developer, Data Systems Inc
- Developed ETL pipelines using Python and SQL, processing 500M+ records daily
- Built REST APIs serving 1M+ requests per day with 99.95% uptime
- Integrated machine learning models for customer segmentation

EDUCATION
M.S in Computer Science, State University
B.S in Information Technology, Tech Institute

PROJECTS
Created an open-source data analysis tool with 500+ GitHub stars
"#;

const SAMPLE_JD: &str = r#"
JOB TITLE: Senior Python Developer

ABOUT THE ROLE
We are seeking a Senior Python Developer to join our growing data engineering
team. You will design and build scalable systems processing millions of
events in real time.

KEY RESPONSIBILITIES
- Design and build scalable Python applications and data pipelines
- Architect microservices-based solutions for real-time data processing
- Optimize database performance and SQL queries
- Lead code reviews and mentor junior developers
- Implement automated testing and CI/CD pipelines

REQUIREMENTS
- 5+ years of Python experience
- Strong SQL and database optimization skills
- Experience with Docker, Kubernetes, and AWS
"#;

fn main() {
    let report = calculate_ats_score(SAMPLE_RESUME, SAMPLE_JD);

    println!("Final score: {}/100\n", report.final_score);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );

    println!("\nSuggestions:");
    for suggestion in generate_improvement_suggestions(&report, DEFAULT_SCORE_THRESHOLD) {
        println!("  - {suggestion}");
    }
}
