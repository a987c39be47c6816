//! Built-in career ontology.

use std::collections::BTreeMap;

use super::{CategoryDef, Difficulty, SkillCatalog, SkillRelations};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(description: &str, skills: &[&str]) -> CategoryDef {
    CategoryDef {
        description: description.to_string(),
        skills: names(skills),
        subcategories: BTreeMap::new(),
    }
}

fn subcategory(def: &mut CategoryDef, name: &str, members: &[&str]) {
    def.subcategories.insert(name.to_string(), names(members));
}

fn relations(
    prerequisites: &[&str],
    co_requisites: &[&str],
    next_steps: &[&str],
    difficulty: Difficulty,
    estimated_hours: u32,
) -> SkillRelations {
    SkillRelations {
        prerequisites: names(prerequisites),
        co_requisites: names(co_requisites),
        next_steps: names(next_steps),
        difficulty: Some(difficulty),
        estimated_hours: Some(estimated_hours),
    }
}

pub(super) fn default_catalog() -> SkillCatalog {
    let mut skill_categories = BTreeMap::new();

    let mut programming = category(
        "Programming languages and frameworks",
        &["python", "r", "java", "javascript", "sql", "scala", "go", "rust"],
    );
    subcategory(
        &mut programming,
        "python_ecosystem",
        &["python", "django", "flask", "fastapi", "numpy", "pandas"],
    );
    subcategory(
        &mut programming,
        "web_dev",
        &["javascript", "react", "vue", "node.js", "typescript"],
    );
    subcategory(&mut programming, "jvm_languages", &["java", "scala", "kotlin"]);
    skill_categories.insert("programming".to_string(), programming);

    let mut data_science = category(
        "Data science and machine learning",
        &["machine learning", "statistics", "data visualization", "deep learning", "nlp"],
    );
    subcategory(
        &mut data_science,
        "ml_frameworks",
        &["tensorflow", "pytorch", "scikit-learn", "keras", "mxnet"],
    );
    subcategory(
        &mut data_science,
        "data_viz",
        &["matplotlib", "seaborn", "plotly", "tableau", "powerbi"],
    );
    subcategory(&mut data_science, "big_data", &["spark", "hadoop", "hive", "presto", "kafka"]);
    skill_categories.insert("data_science".to_string(), data_science);

    let mut cloud_devops = category(
        "Cloud computing and DevOps",
        &["aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ci_cd"],
    );
    subcategory(
        &mut cloud_devops,
        "cloud_platforms",
        &["aws", "azure", "gcp", "ibm cloud", "oracle cloud"],
    );
    subcategory(
        &mut cloud_devops,
        "containerization",
        &["docker", "kubernetes", "openshift", "rancher"],
    );
    subcategory(&mut cloud_devops, "infrastructure", &["terraform", "ansible", "puppet", "chef"]);
    skill_categories.insert("cloud_devops".to_string(), cloud_devops);

    let mut data_engineering = category(
        "Data engineering and pipelines",
        &["etl", "data pipelines", "airflow", "dbt", "data warehousing"],
    );
    subcategory(
        &mut data_engineering,
        "orchestration",
        &["airflow", "luigi", "prefect", "dagster"],
    );
    subcategory(
        &mut data_engineering,
        "databases",
        &["postgresql", "mysql", "mongodb", "cassandra", "redis"],
    );
    subcategory(
        &mut data_engineering,
        "streaming",
        &["kafka", "flink", "spark streaming", "pulsar"],
    );
    skill_categories.insert("data_engineering".to_string(), data_engineering);

    let mut soft_skills = category(
        "Professional and interpersonal skills",
        &["communication", "leadership", "problem solving", "teamwork", "project management"],
    );
    subcategory(
        &mut soft_skills,
        "communication",
        &["technical writing", "presentation", "stakeholder management"],
    );
    subcategory(
        &mut soft_skills,
        "leadership",
        &["mentoring", "team leadership", "strategic thinking"],
    );
    skill_categories.insert("soft_skills".to_string(), soft_skills);

    let mut skill_relationships = BTreeMap::new();
    skill_relationships.insert(
        "python".to_string(),
        relations(
            &["programming fundamentals"],
            &["sql"],
            &["pandas", "numpy", "machine learning"],
            Difficulty::Beginner,
            40,
        ),
    );
    skill_relationships.insert(
        "machine learning".to_string(),
        relations(
            &["python", "statistics", "linear algebra"],
            &["numpy", "pandas"],
            &["deep learning", "mlops", "nlp"],
            Difficulty::Intermediate,
            60,
        ),
    );
    skill_relationships.insert(
        "deep learning".to_string(),
        relations(
            &["linear algebra"],
            &["pytorch", "tensorflow"],
            &["nlp", "computer vision"],
            Difficulty::Advanced,
            80,
        ),
    );
    skill_relationships.insert(
        "statistics".to_string(),
        relations(
            &["probability"],
            &[],
            &["machine learning", "data visualization"],
            Difficulty::Intermediate,
            45,
        ),
    );
    skill_relationships.insert(
        "sql".to_string(),
        relations(
            &["database fundamentals"],
            &[],
            &["data warehousing", "dbt"],
            Difficulty::Beginner,
            20,
        ),
    );
    skill_relationships.insert(
        "aws".to_string(),
        relations(
            &["cloud fundamentals"],
            &["linux", "networking basics"],
            &["docker", "kubernetes", "terraform"],
            Difficulty::Intermediate,
            50,
        ),
    );
    skill_relationships.insert(
        "docker".to_string(),
        relations(
            &["linux basics"],
            &["python", "devops concepts"],
            &["kubernetes", "ci_cd"],
            Difficulty::Beginner,
            25,
        ),
    );
    skill_relationships.insert(
        "kubernetes".to_string(),
        relations(
            &["networking basics"],
            &["helm"],
            &["service mesh"],
            Difficulty::Advanced,
            70,
        ),
    );

    SkillCatalog {
        skill_categories,
        skill_relationships,
    }
}
