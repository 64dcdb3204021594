// ==========================================
// 引擎集成测试
// ==========================================
// 测试目标: 从原始配置到分组名单的完整流程
// ==========================================


use celebration_roster::config::WidgetConfig;
use celebration_roster::domain::{BucketKey, RelativeBucket};
use celebration_roster::engine::{CelebrationEngine, CelebrationView, Roster};
use test_helpers::{birthday_config, expect_groups, group_ids, ProfileBuilder};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// 测试 1: 相对分组
// ==========================================

#[test]
fn test_relative_window_before_two_after_five() {
    let mut config = birthday_config();
    config.window.days_before = 2;
    config.window.days_after = 5;
    config.titles.days_before_title = Some("Belated".to_string());
    config.titles.days_after_title = Some("Soon".to_string());
    config.titles.today_title = Some("Today".to_string());

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("far").birthday("10.06.1985").build(),
        ProfileBuilder::new("up").birthday("03.06.1992").build(),
        ProfileBuilder::new("prev").birthday("30.05.1970").build(),
        ProfileBuilder::new("today").birthday("01.06.2001").build(),
        ProfileBuilder::new("too-early").birthday("29.05.1970").build(),
        ProfileBuilder::new("no-field").build(),
    ]);

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&roster, "01.06.2024")
            .unwrap(),
    );

    let keys: Vec<BucketKey> = groups.iter().map(|g| g.key).collect();
    assert_eq!(
        keys,
        vec![
            BucketKey::Relative(RelativeBucket::Previous),
            BucketKey::Relative(RelativeBucket::Today),
            BucketKey::Relative(RelativeBucket::Upcoming),
        ]
    );
    assert_eq!(
        group_ids(&groups),
        vec![ids(&["prev"]), ids(&["today"]), ids(&["up"])]
    );
    let labels: Vec<Option<&str>> = groups.iter().map(|g| g.label.as_deref()).collect();
    assert_eq!(labels, vec![Some("Belated"), Some("Today"), Some("Soon")]);
}

#[test]
fn test_records_within_bucket_follow_day_offset() {
    let mut config = birthday_config();
    config.window.days_after = 10;

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("d9").birthday("10.06.1980").build(),
        ProfileBuilder::new("d2").birthday("03.06.1990").build(),
        ProfileBuilder::new("d5").birthday("06.06.1970").build(),
    ]);

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&roster, "01.06.2024")
            .unwrap(),
    );
    assert_eq!(group_ids(&groups), vec![ids(&["d2", "d5", "d9"])]);
}

#[test]
fn test_month_first_and_mixed_separators() {
    let config = celebration_roster::CelebrationConfig::new(
        "birthday",
        celebration_roster::DateOrder::MonthFirst,
    );

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("slash").birthday("06/03/1990").build(),
        ProfileBuilder::new("iso").birthday("1991-06-04").build(),
    ]);

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&roster, "06/01/2024")
            .unwrap(),
    );
    assert_eq!(group_ids(&groups), vec![ids(&["slash", "iso"])]);
}

#[test]
fn test_whole_month_mode() {
    let mut config = birthday_config();
    config.window.whole_month_mode = true;

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("first").birthday("01.06.1990").build(),
        ProfileBuilder::new("last").birthday("30.06.1990").build(),
        ProfileBuilder::new("july").birthday("01.07.1990").build(),
        ProfileBuilder::new("may").birthday("31.05.1990").build(),
    ]);

    let view = CelebrationEngine::new(config)
        .evaluate(&roster, "15.06.2024")
        .unwrap();
    let groups = expect_groups(view);

    let mut all: Vec<String> = group_ids(&groups).into_iter().flatten().collect();
    all.sort();
    assert_eq!(all, ids(&["first", "last"]));
}

#[test]
fn test_allow_list_and_opt_out() {
    let mut config = birthday_config();
    config.window.days_after = 30;
    config.filter.field_filter = Some("location".to_string());
    config.filter.field_values = vec!["berlin".to_string(), "munich".to_string()];
    config.filter.opt_out_field = Some("celebrate".to_string());
    config.filter.opt_out_values = vec!["no".to_string()];

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("berlin")
            .birthday("05.06.1990")
            .field("location", "BERLIN")
            .build(),
        ProfileBuilder::new("hamburg")
            .birthday("05.06.1990")
            .field("location", "Hamburg")
            .build(),
        ProfileBuilder::new("shy")
            .birthday("05.06.1990")
            .field("location", "Munich")
            .field("celebrate", "No")
            .build(),
        ProfileBuilder::new("unknown").birthday("05.06.1990").build(),
    ]);

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&roster, "01.06.2024")
            .unwrap(),
    );
    assert_eq!(group_ids(&groups), vec![ids(&["berlin"])]);
}

// ==========================================
// 测试 2: 周年分组
// ==========================================

fn tenure_roster() -> Roster {
    Roster::Loaded(vec![
        ProfileBuilder::new("ten").birthday("02.06.2014").build(),
        ProfileBuilder::new("five-a").birthday("03.06.2019").build(),
        ProfileBuilder::new("one").birthday("01.06.2023").build(),
        ProfileBuilder::new("five-b").birthday("01.06.2019").build(),
        ProfileBuilder::new("no-year").birthday("04.06.").build(),
    ])
}

#[test]
fn test_tenure_buckets_ascending_with_labels() {
    let json = r#"{
        "anniversaryProfileFieldId": "birthday",
        "dateOrder": "DD.MM",
        "includeYear": "true",
        "daysAfter": "10",
        "yearWord": "year",
        "yearWordPlural": "years"
    }"#;
    let config = WidgetConfig::from_json_str(json).unwrap().validate().unwrap();

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&tenure_roster(), "01.06.2024")
            .unwrap(),
    );

    let keys: Vec<BucketKey> = groups.iter().map(|g| g.key).collect();
    assert_eq!(
        keys,
        vec![
            BucketKey::TenureYear(1),
            BucketKey::TenureYear(5),
            BucketKey::TenureYear(10),
        ]
    );
    // 组内按日差排序
    assert_eq!(
        group_ids(&groups),
        vec![ids(&["one"]), ids(&["five-b", "five-a"]), ids(&["ten"])]
    );
    let labels: Vec<Option<&str>> = groups.iter().map(|g| g.label.as_deref()).collect();
    assert_eq!(labels, vec![Some("1 year"), Some("5 years"), Some("10 years")]);
}

#[test]
fn test_tenure_reverse_and_special_years() {
    let json = r#"{
        "anniversaryprofilefieldid": "birthday",
        "dateformat": "DD.MM",
        "includeyear": true,
        "splitbyyearreverse": "true",
        "specialYears": "5,10",
        "hideyearheader": true,
        "showdaysafter": 10
    }"#;
    let config = WidgetConfig::from_json_str(json).unwrap().validate().unwrap();

    let groups = expect_groups(
        CelebrationEngine::new(config)
            .evaluate(&tenure_roster(), "01.06.2024")
            .unwrap(),
    );

    let keys: Vec<BucketKey> = groups.iter().map(|g| g.key).collect();
    assert_eq!(keys, vec![BucketKey::TenureYear(10), BucketKey::TenureYear(5)]);
    assert!(groups.iter().all(|g| g.label.is_none()));
}

// ==========================================
// 测试 3: 截断 / 状态 / 幂等
// ==========================================

#[test]
fn test_limit_never_cuts_a_bucket() {
    let mut config = birthday_config();
    config.window.days_before = 5;
    config.window.days_after = 5;
    config.grouping.limit = Some(2);

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("p1").birthday("30.05.1990").build(),
        ProfileBuilder::new("p2").birthday("31.05.1990").build(),
        ProfileBuilder::new("p3").birthday("29.05.1990").build(),
        ProfileBuilder::new("t1").birthday("01.06.1990").build(),
        ProfileBuilder::new("u1").birthday("02.06.1990").build(),
    ]);

    let view = CelebrationEngine::new(config)
        .evaluate(&roster, "01.06.2024")
        .unwrap();
    assert_eq!(view.total_records(), 3);

    let groups = expect_groups(view);
    assert_eq!(group_ids(&groups), vec![ids(&["p3", "p1", "p2"])]);
}

#[test]
fn test_pending_roster_then_loaded_roster() {
    let engine = CelebrationEngine::new(birthday_config());

    assert_eq!(
        engine.evaluate(&Roster::Pending, "01.06.2024").unwrap(),
        CelebrationView::Loading
    );
    assert_eq!(
        engine
            .evaluate(&Roster::Loaded(vec![]), "01.06.2024")
            .unwrap(),
        CelebrationView::Empty
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut config = birthday_config();
    config.window.days_before = 3;
    config.window.days_after = 20;
    let engine = CelebrationEngine::new(config);

    let roster = Roster::Loaded(vec![
        ProfileBuilder::new("a").birthday("15.06.1990").build(),
        ProfileBuilder::new("b").birthday("30.05.1990").build(),
        ProfileBuilder::new("c").birthday("not a date").build(),
    ]);

    let first = engine.evaluate(&roster, "01.06.2024").unwrap();
    let second = engine.evaluate(&roster, "01.06.2024").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total_records(), 2);
}
