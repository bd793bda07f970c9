mod fixtures;

use chrono::{Duration, Local, NaiveDate};
use docx_rs::{Docx, Paragraph, Run};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

use doctagger::extract::{Extraction, TextExtractor};
use doctagger::output::OutputFormatter;
use doctagger::scanner::ScanEvent;
use doctagger::{Category, FileTimes, Rule, ScanConfig, Scanner};
use fixtures::{prose, write_file, write_padded, StubMetadata};

fn config_excluding_recent_dates() -> ScanConfig {
    ScanConfig::builder()
        .important_keywords_csv("confidential, bank, marksheet, username, password")
        .from_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        .to_date(NaiveDate::from_ymd_opt(2000, 12, 31).unwrap())
        .build()
}

#[test]
fn test_mixed_folder_scenario() {
    let temp_dir = TempDir::new().unwrap();
    write_padded(temp_dir.path(), "a.txt", "bank statement details here", 6000);
    write_file(temp_dir.path(), "b.txt", "lorem ipsum filler");
    write_padded(temp_dir.path(), "c.txt", &prose(60), 8000);

    let now = Local::now();
    let five_years_ago = now - Duration::days(5 * 366);
    let metadata = StubMetadata::uniform(&["a.txt", "b.txt"], now, now, now)
        .with("c.txt", FileTimes::new(five_years_ago, five_years_ago, now));

    let config = config_excluding_recent_dates();
    let report = Scanner::new(&config)
        .with_metadata_reader(metadata)
        .at(now)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(report.category_of("a.txt"), Some(Category::Important));
    assert_eq!(report.category_of("b.txt"), Some(Category::Junk));
    assert_eq!(report.category_of("c.txt"), Some(Category::Old));

    let text = OutputFormatter::text(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("a.txt --> Tag: important | Created: "));
    assert!(lines[1].starts_with("b.txt --> Tag: junk | Created: "));
    assert!(lines[2].starts_with("c.txt --> Tag: old | Created: "));
    assert!(lines[2].contains(&format!(
        "Created: {}",
        five_years_ago.date_naive().format("%Y-%m-%d")
    )));
}

#[test]
fn test_real_metadata_scan() {
    let temp_dir = TempDir::new().unwrap();
    write_padded(temp_dir.path(), "a.txt", "bank statement details here", 6000);
    write_file(temp_dir.path(), "b.txt", "lorem ipsum filler");
    write_padded(temp_dir.path(), "fresh.txt", &prose(60), 8000);

    let config = config_excluding_recent_dates();
    let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();

    assert_eq!(report.category_of("a.txt"), Some(Category::Important));
    assert_eq!(report.category_of("b.txt"), Some(Category::Junk));
    // Just written, so modified this year.
    assert_eq!(report.category_of("fresh.txt"), Some(Category::New));
}

#[test]
fn test_default_window_tags_long_documents_junk() {
    let temp_dir = TempDir::new().unwrap();
    write_padded(temp_dir.path(), "fresh.txt", &prose(60), 8000);

    let config = ScanConfig::default();
    let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].rule, Rule::JunkDateWindow);
}

#[test]
fn test_metadata_failure_skips_only_that_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "good.txt", "short");
    write_file(temp_dir.path(), "bad.txt", "short");

    let now = Local::now();
    let metadata = StubMetadata::new().with("good.txt", FileTimes::new(now, now, now));

    let config = ScanConfig::default();
    let report = Scanner::new(&config)
        .with_metadata_reader(metadata)
        .scan(temp_dir.path())
        .unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].file, "good.txt");
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file, "bad.txt");
    assert!(!report.is_empty());
}

#[test]
fn test_broken_documents_still_get_a_tag() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "broken.pdf", "%PDF-garbage");
    write_file(temp_dir.path(), "broken.docx", "not a zip");

    let config = ScanConfig::default();
    let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();

    assert_eq!(report.files.len(), 2);
    for record in &report.files {
        assert_eq!(record.category, Category::Junk);
        assert_eq!(record.rule, Rule::JunkShortOrPlaceholder);
    }
}

#[test]
fn test_docx_paragraphs_reach_the_rules() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("march.docx");
    let file = std::fs::File::create(&path).unwrap();
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Bank")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("statement for March")))
        .build()
        .pack(file)
        .unwrap();

    let config = ScanConfig::default();
    let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].category, Category::Important);
    assert_eq!(report.files[0].rule, Rule::ImportantPhrase);
}

struct FixedText(&'static str);

impl TextExtractor for FixedText {
    fn extract(&self, _path: &Path) -> Extraction {
        Extraction::Text(self.0.to_string())
    }
}

#[test]
fn test_custom_extractor_and_streaming() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "one.pdf", "");
    write_file(temp_dir.path(), "two.docx", "");
    write_file(temp_dir.path(), "ignored.csv", "");

    let config = ScanConfig::default();
    let scanner = Scanner::new(&config).with_extractor(FixedText("Payment receipt attached"));

    let mut seen = Vec::new();
    let eligible = scanner
        .scan_with(temp_dir.path(), |event| {
            if let ScanEvent::Categorized(record) = event {
                seen.push((record.file.clone(), record.category));
            }
        })
        .unwrap();

    assert_eq!(eligible, 2);
    assert_eq!(
        seen,
        vec![
            ("one.pdf".to_string(), Category::Important),
            ("two.docx".to_string(), Category::Important),
        ]
    );
}

#[test]
fn test_no_eligible_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "photo.jpg", "x");
    write_file(temp_dir.path(), "notes.md", "x");

    let config = ScanConfig::default();
    let report = Scanner::new(&config).scan(temp_dir.path()).unwrap();

    assert!(report.is_empty());
    assert_eq!(
        OutputFormatter::text(&report),
        "No valid files (.pdf, .docx, .txt) found in the folder.\n"
    );
}

#[test]
fn test_junk_keywords_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let docs = temp_dir.path().join("docs");
    std::fs::create_dir(&docs).unwrap();
    let junk_list = write_file(temp_dir.path(), "junk.txt", "Meadows\n");
    write_padded(&docs, "walk.txt", &prose(60), 8000);

    let config = ScanConfig::builder()
        .load_junk_file(&junk_list)
        .unwrap()
        .from_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        .to_date(NaiveDate::from_ymd_opt(2000, 1, 2).unwrap())
        .build();
    let report = Scanner::new(&config).scan(&docs).unwrap();

    assert_eq!(report.files[0].rule, Rule::JunkKeyword);
}
