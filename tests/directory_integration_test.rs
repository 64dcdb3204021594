// ==========================================
// 目录拉取 + 名单导入集成测试
// ==========================================
// 测试目标: 文件 → 内存目录 → 分页拉取 → 引擎
// ==========================================


use celebration_roster::directory::{
    fetch_all_profiles, load_roster, DirectoryError, InMemoryDirectory,
};
use celebration_roster::domain::UserStatus;
use celebration_roster::engine::{CelebrationEngine, CelebrationView};
use celebration_roster::importer::ImportError;
use std::io::Write;
use tempfile::Builder;
use test_helpers::{birthday_config, ProfileBuilder};

fn write_roster(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write roster");
    file
}

#[tokio::test]
async fn test_csv_roster_through_engine() {
    let file = write_roster(
        ".csv",
        "id,firstName,lastName,status,birthday\n\
         u1,Ada,Lovelace,activated,02.06.1815\n\
         u2,Alan,Turing,pending,03.06.1912\n\
         u3,Grace,Hopper,,09.12.1906\n",
    );

    let directory = InMemoryDirectory::from_file(file.path()).unwrap();

    let active = load_roster(&directory, 1, false).await.unwrap();
    let view = CelebrationEngine::new(birthday_config())
        .evaluate(&active, "01.06.2024")
        .unwrap();
    assert_eq!(view.total_records(), 1);

    let everyone = load_roster(&directory, 1, true).await.unwrap();
    let view = CelebrationEngine::new(birthday_config())
        .evaluate(&everyone, "01.06.2024")
        .unwrap();
    assert_eq!(view.total_records(), 2);
}

#[tokio::test]
async fn test_json_roster_pagination() {
    let mut records: Vec<_> = (0..7)
        .map(|i| {
            ProfileBuilder::new(&format!("u{i}"))
                .name("Ada", &format!("Lovelace{i}"))
                .avatar(&format!("https://cdn/u{i}.png"))
                .birthday("05.06.1990")
                .build()
        })
        .collect();
    records.push(
        ProfileBuilder::new("invited")
            .birthday("05.06.1990")
            .pending()
            .build(),
    );
    let file = write_roster(".json", &serde_json::to_string(&records).unwrap());

    let directory = InMemoryDirectory::from_file(file.path()).unwrap();
    let fetched = fetch_all_profiles(&directory, 3, false).await.unwrap();

    assert_eq!(fetched, records[..7].to_vec());
    assert_eq!(fetched[6].display_name(), "Ada Lovelace6");
    assert_eq!(fetched[0].thumb_url(), Some("https://cdn/u0.png"));
    assert_eq!(directory.request_count(), 3);

    let everyone = fetch_all_profiles(&directory, 3, true).await.unwrap();
    assert_eq!(everyone.len(), 8);
    assert_eq!(everyone[7].status, UserStatus::Pending);
}

#[tokio::test]
async fn test_empty_roster_is_empty_view() {
    let file = write_roster(".csv", "id,firstName,lastName,birthday\n");
    let directory = InMemoryDirectory::from_file(file.path()).unwrap();

    let roster = load_roster(&directory, 10, false).await.unwrap();
    let view = CelebrationEngine::new(birthday_config())
        .evaluate(&roster, "01.06.2024")
        .unwrap();
    assert_eq!(view, CelebrationView::Empty);
}

#[test]
fn test_unsupported_roster_file() {
    let file = write_roster(".xlsx", "");
    let err = InMemoryDirectory::from_file(file.path()).err().unwrap();
    assert!(matches!(
        err,
        DirectoryError::Import(ImportError::UnsupportedFormat(ext)) if ext == "xlsx"
    ));
}
