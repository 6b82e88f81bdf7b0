//! Integration tests for the job matcher

use job_matcher::config::{Config, OutputFormat};
use job_matcher::input::InputManager;
use job_matcher::output::{EvaluationReport, PostingReport, ReportGenerator};
use job_matcher::processing::gap_analyzer::GapOptions;
use job_matcher::processing::job_filter::{ApplyType, FilterSettings, JobPosting, RejectReason};
use job_matcher::processing::keyword_matcher::MatchOptions;
use job_matcher::processing::qualifiers::{
    check_work_location_preference, has_language_requirements, has_visa_sponsorship_requirement, WorkLocation,
};
use job_matcher::processing::skill_scorer::{SkillTiers, TierWeights};
use job_matcher::{normalize, SkillEngine};
use std::path::Path;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn open_settings() -> FilterSettings {
    FilterSettings {
        english_only: false,
        max_applicants: None,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_load_plain_text_posting() {
    let mut manager = InputManager::new();
    let posting = manager
        .load_posting(Path::new("tests/fixtures/backend_job.txt"))
        .await
        .unwrap();

    assert_eq!(posting.title, "Senior Backend Engineer");
    assert!(posting.description.contains("PostgreSQL"));
    assert!(posting.description.contains("fully remote"));
    assert_eq!(posting.apply_type, ApplyType::Unknown);
}

#[tokio::test]
async fn test_load_markdown_posting() {
    let mut manager = InputManager::new();
    let posting = manager
        .load_posting(Path::new("tests/fixtures/frontend_job.md"))
        .await
        .unwrap();

    assert_eq!(posting.title, "Frontend Developer");
    assert!(posting.description.contains("Pixel Works"));
    assert!(posting.description.contains("React"));
    // Markdown syntax is stripped
    assert!(!posting.description.contains("**"));
    assert!(!posting.description.contains("##"));
}

#[tokio::test]
async fn test_load_json_postings() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/jobs.json");
    let postings = manager.load_postings(path).await.unwrap();

    assert_eq!(postings.len(), 2);
    assert_eq!(postings[0].company, "Stream Co");
    assert_eq!(postings[0].applicants, Some(40));
    assert_eq!(postings[0].apply_type, ApplyType::EasyApply);
    assert_eq!(postings[1].apply_type, ApplyType::ExternalApply);

    // Two postings where exactly one was expected
    assert!(manager.load_posting(path).await.is_err());
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/backend_job.txt");

    let first = manager.load_postings(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_postings(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.load_postings(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.load_postings(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[test]
fn test_scenario_tiered_score() {
    let engine = SkillEngine::new().unwrap();
    let tiers = SkillTiers {
        primary: strings(&["JavaScript", "React", "Node.js"]),
        secondary: strings(&["Docker"]),
        tertiary: Vec::new(),
    };
    let weights = TierWeights {
        primary: 10.0,
        secondary: 5.0,
        tertiary: 1.0,
    };

    let result = engine.calculate_skill_score(
        "We need a JavaScript and React developer, 3+ years experience",
        &tiers,
        &weights,
    );

    assert_eq!(result.total_score, 20.0);
    assert_eq!(result.primary_skill_count, 2);
    assert_eq!(result.matched_skills.primary, strings(&["JavaScript", "React"]));
    assert!(result.matched_skills.secondary.is_empty());
}

#[test]
fn test_scenario_visa_sponsorship() {
    assert!(has_visa_sponsorship_requirement(
        "Must be authorized to work in the US, no visa sponsorship"
    ));
}

#[test]
fn test_scenario_work_location() {
    let text = "This is a fully remote, 100% remote position";
    assert!(check_work_location_preference(text, WorkLocation::Remote));
    assert!(!check_work_location_preference(text, WorkLocation::Local));
}

#[test]
fn test_scenario_normalize() {
    assert_eq!(normalize("Node.JS_Backend-Dev", false), "node js backend dev");
}

#[test]
fn test_language_requirement_ignores_english() {
    assert!(has_language_requirements("Fluent in German is a must"));
    assert!(!has_language_requirements("Fluent in English required"));
}

#[test]
fn test_normalization_idempotence() {
    let samples = [
        "Node.JS_Backend-Dev",
        "camelCaseSkill and C# / C++",
        "  lots   of\twhitespace\n",
        "Ünïcödé Straße, naïve café!",
        "react.js + TypeScript (ES2020)",
        "",
        "___---...",
    ];

    for sample in samples {
        for case_sensitive in [false, true] {
            let once = normalize(sample, case_sensitive);
            assert_eq!(normalize(&once, case_sensitive), once, "not idempotent for {:?}", sample);
        }
    }
}

#[test]
fn test_matcher_monotonicity() {
    let engine = SkillEngine::new().unwrap();
    let text = "Python and Go developer with Kubernetes, Terraform and AWS";
    let options = MatchOptions::default();

    let small = strings(&["python", "rust"]);
    let large = strings(&["python", "rust", "kubernetes", "haskell", "aws"]);

    let small_matches = engine.match_keywords(text, &small, &options);
    let large_matches = engine.match_keywords(text, &large, &options);

    assert!(small_matches.len() <= large_matches.len());
    assert!(small_matches.iter().all(|skill| large_matches.contains(skill)));
}

#[test]
fn test_score_additivity() {
    let engine = SkillEngine::new().unwrap();
    let text = "Rust services on Kubernetes with PostgreSQL, Redis and Terraform";
    let tiers = SkillTiers {
        primary: strings(&["rust", "go"]),
        secondary: strings(&["kubernetes", "postgresql"]),
        tertiary: strings(&["redis", "terraform", "ansible"]),
    };
    let weights = TierWeights {
        primary: 7.0,
        secondary: 3.0,
        tertiary: 0.5,
    };

    let result = engine.calculate_skill_score(text, &tiers, &weights);
    let expected = weights.primary * result.matched_skills.primary.len() as f64
        + weights.secondary * result.matched_skills.secondary.len() as f64
        + weights.tertiary * result.matched_skills.tertiary.len() as f64;

    assert_eq!(result.total_score, expected);
    assert_eq!(result.total_score, 7.0 + 6.0 + 1.0);

    let empty = engine.calculate_skill_score(text, &SkillTiers::default(), &weights);
    assert_eq!(empty.total_score, 0.0);
}

#[test]
fn test_primary_gate_independence() {
    let engine = SkillEngine::new().unwrap();
    let settings = FilterSettings {
        skill_levels: SkillTiers {
            primary: strings(&["rust"]),
            secondary: strings(&["go", "python"]),
            tertiary: Vec::new(),
        },
        min_skill_score: 10.0,
        min_primary_skills: 1,
        ..open_settings()
    };

    let rust = engine.evaluate_job(&JobPosting::new("Backend", "Rust services"), &settings);
    let polyglot = engine.evaluate_job(&JobPosting::new("Backend", "Go and Python services"), &settings);

    assert_eq!(rust.score.total_score, polyglot.score.total_score);
    assert_ne!(rust.score.primary_skill_count, polyglot.score.primary_skill_count);
    assert!(rust.accepted);
    assert_eq!(
        polyglot.reason,
        Some(RejectReason::TooFewPrimarySkills { count: 0, min: 1 })
    );
}

#[test]
fn test_known_skill_exclusion() {
    let engine = SkillEngine::new().unwrap();
    let text = "We run Docker and Kubernetes. Terraform is required. Redis is a plus.";
    let options = GapOptions::default();

    for known in ["docker", "kubernetes", "terraform", "redis"] {
        let missing = engine.find_missing_skills(text, &[known], &options);
        assert!(
            missing.iter().all(|skill| skill.skill != known),
            "{} reported missing although known",
            known
        );
        assert!(!missing.is_empty());
    }

    // Known aliases the posting never spells out
    let cases = [
        ("k8s", "Kubernetes experience is required. Redis is a plus.", "kubernetes"),
        ("postgres", "Our data lives in PostgreSQL. Redis is a plus.", "postgresql"),
        ("golang", "Services are written in Go. Redis is a plus.", "golang"),
    ];
    for (known, text, canonical) in cases {
        let missing = engine.find_missing_skills(text, &[known], &options);
        assert!(
            missing.iter().all(|skill| skill.skill != canonical),
            "{} reported missing although {} is known",
            canonical,
            known
        );
        assert!(missing.iter().any(|skill| skill.skill == "redis"));
    }
}

#[test]
fn test_case_insensitive_by_default() {
    let engine = SkillEngine::new().unwrap();
    let options = MatchOptions::default();

    assert_eq!(engine.match_keywords("ReactJS developer", &["react"], &options), vec!["react"]);
    assert_eq!(engine.match_keywords("reactjs developer", &["React"], &options), vec!["React"]);
}

#[tokio::test]
async fn test_gap_analysis_on_fixture() {
    let engine = SkillEngine::new().unwrap();
    let posting = InputManager::new()
        .load_posting(Path::new("tests/fixtures/backend_job.txt"))
        .await
        .unwrap();

    let report = engine.missing_skills_with_details(&posting.search_text(), &["rust", "docker"], &GapOptions::default());
    let names: Vec<&str> = report.missing_skills.iter().map(|s| s.skill.skill.as_str()).collect();

    assert!(names.contains(&"kubernetes"));
    assert!(names.contains(&"terraform"));
    assert!(!names.contains(&"docker"));
    assert!(!names.contains(&"rust"));
    assert_eq!(report.user_skills_count, 2);

    // Enriched output is ordered by ROI
    let rois: Vec<u8> = report.missing_skills.iter().map(|s| s.roi_score).collect();
    assert!(rois.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_evaluate_json_postings() {
    let engine = SkillEngine::new().unwrap();
    let postings = InputManager::new()
        .load_postings(Path::new("tests/fixtures/jobs.json"))
        .await
        .unwrap();

    let settings = FilterSettings {
        keywords: strings(&["python", "java"]),
        ..Default::default()
    };

    let reports: Vec<PostingReport> = postings
        .iter()
        .map(|posting| PostingReport::new(posting, engine.evaluate_job(posting, &settings), None))
        .collect();

    assert!(reports[0].evaluation.accepted);
    assert!(reports[0].evaluation.qualifiers.remote);
    assert_eq!(
        reports[1].evaluation.reason,
        Some(RejectReason::TooManyApplicants { count: 250, max: 100 })
    );
    assert!(reports[1].evaluation.qualifiers.visa_sponsorship);

    let report = EvaluationReport::new(reports, vec!["tests/fixtures/jobs.json".to_string()]);
    assert_eq!(report.summary.accepted, 1);
    assert_eq!(report.summary.rejected, 1);

    let json = ReportGenerator::with_options(false, false, false, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["postings"][1]["evaluation"]["reason"]["kind"], "too_many_applicants");
}

#[tokio::test]
async fn test_ats_response_in_json_posting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scored.json");
    std::fs::write(
        &path,
        r#"{"title": "Data Engineer", "description": "Python and Spark, fully remote.",
            "ats_response": "Score: 62/100\nMatches: Python\nMissing: Spark"}"#,
    )
    .unwrap();

    let posting = InputManager::new().load_posting(&path).await.unwrap();
    assert_eq!(posting.ats_score, None);
    assert_eq!(posting.effective_ats_score(), Some(62));

    let settings = FilterSettings { use_ats: true, ..open_settings() };
    let evaluation = SkillEngine::new().unwrap().evaluate_job(&posting, &settings);
    assert_eq!(evaluation.reason, Some(RejectReason::AtsScoreTooLow { score: 62, min: 70 }));
}

#[test]
fn test_filter_gate_order() {
    let engine = SkillEngine::new().unwrap();
    let mut posting = JobPosting::new("Onsite Java role", "Java work in the office, visa sponsorship available");
    posting.applicants = Some(5);

    let settings = FilterSettings {
        keywords: strings(&["python"]),
        remote_only: true,
        skip_visa_sponsorship: true,
        min_applicants: 10,
        ..open_settings()
    };

    // Applicant gate runs before keyword, location and visa gates
    let evaluation = engine.evaluate_job(&posting, &settings);
    assert_eq!(evaluation.reason, Some(RejectReason::TooFewApplicants { count: 5, min: 10 }));

    posting.applicants = None;
    let evaluation = engine.evaluate_job(&posting, &settings);
    assert_eq!(evaluation.reason, Some(RejectReason::NoKeywordMatches));

    let settings = FilterSettings {
        keywords: Vec::new(),
        ..settings
    };
    let evaluation = engine.evaluate_job(&posting, &settings);
    assert_eq!(evaluation.reason, Some(RejectReason::NotRemote));
}

#[test]
fn test_concurrent_engine_use() {
    let engine = SkillEngine::new().unwrap();
    let tiers = SkillTiers {
        primary: strings(&["rust", "kubernetes"]),
        secondary: strings(&["python"]),
        tertiary: strings(&["redis"]),
    };
    let texts = [
        "Rust and Kubernetes platform engineer",
        "Python data work with Redis caching",
        "Frontend React developer",
        "Rust, Python and Redis in production",
    ];

    let sequential: Vec<f64> = texts
        .iter()
        .map(|text| engine.calculate_skill_score(text, &tiers, &TierWeights::default()).total_score)
        .collect();

    let concurrent: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let engine = &engine;
                let tiers = &tiers;
                scope.spawn(move || engine.calculate_skill_score(text, tiers, &TierWeights::default()).total_score)
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
    assert_eq!(sequential, vec![20.0, 6.0, 0.0, 16.0]);
}

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job-matcher").join("config.toml");

    let mut config = Config::load(Some(&path)).unwrap();
    assert!(path.exists());

    config.filter.skill_levels.primary = strings(&["rust"]);
    config.filter.skip_visa_sponsorship = true;
    config.gaps.max_results = 5;
    config.output.format = OutputFormat::Json;
    config.save_to(&path).unwrap();

    let reloaded = Config::load(Some(&path)).unwrap();
    assert_eq!(reloaded, config);
}
