// ==========================================
// 纪念日名单引擎 - 命令行入口
// ==========================================
// 用法:
//   celebration-roster <config.json> <roster.csv|roster.json> [today] [locale]
//   celebration-roster --db <db_path> <widget_id> <roster.csv|roster.json> [today]
//   celebration-roster --widget <widget_id> <roster.csv|roster.json> [today]
// today 缺省为本机当天；--widget 使用默认数据库路径
// ==========================================

use anyhow::{bail, Context};
use celebration_roster::config::{ConfigManager, WidgetConfig, WidgetConfigReader};
use celebration_roster::db::get_default_db_path;
use celebration_roster::directory::{load_roster, InMemoryDirectory, DEFAULT_PAGE_SIZE};
use celebration_roster::engine::{CelebrationEngine, DateCore};
use celebration_roster::i18n::{set_locale, t, t_with_args};
use celebration_roster::presenter::{EnglishMonthDay, Presenter, StaticHost, WidgetBody};
use celebration_roster::{logging, APP_NAME, VERSION};
use std::path::{Path, PathBuf};

/// 解析后的命令行参数
struct CliArgs {
    config_source: ConfigSource,
    roster_path: PathBuf,
    today: Option<String>,
    locale: Option<String>,
}

enum ConfigSource {
    JsonFile(PathBuf),
    Store { db_path: String, widget_id: String },
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    match args {
        [flag, db_path, widget_id, roster, rest @ ..] if flag == "--db" && rest.len() <= 1 => {
            Some(CliArgs {
                config_source: ConfigSource::Store {
                    db_path: db_path.clone(),
                    widget_id: widget_id.clone(),
                },
                roster_path: PathBuf::from(roster),
                today: rest.first().cloned(),
                locale: None,
            })
        }
        [flag, widget_id, roster, rest @ ..] if flag == "--widget" && rest.len() <= 1 => {
            Some(CliArgs {
                config_source: ConfigSource::Store {
                    db_path: get_default_db_path(),
                    widget_id: widget_id.clone(),
                },
                roster_path: PathBuf::from(roster),
                today: rest.first().cloned(),
                locale: None,
            })
        }
        [config, roster, rest @ ..] if !config.starts_with("--") && rest.len() <= 2 => {
            Some(CliArgs {
                config_source: ConfigSource::JsonFile(PathBuf::from(config)),
                roster_path: PathBuf::from(roster),
                today: rest.first().cloned(),
                locale: rest.get(1).cloned(),
            })
        }
        _ => None,
    }
}

async fn load_widget_config(source: &ConfigSource) -> anyhow::Result<WidgetConfig> {
    match source {
        ConfigSource::JsonFile(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
            Ok(WidgetConfig::from_json_str(&json)?)
        }
        ConfigSource::Store { db_path, widget_id } => {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            tracing::info!(db_path = %db_path, widget_id = %widget_id, "从配置库读取组件配置");
            let manager = ConfigManager::new(db_path)?;
            Ok(manager.load_widget_config(widget_id).await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = parse_args(&args) else {
        eprintln!("{} {}", APP_NAME, VERSION);
        eprintln!("{}", t("cli.usage"));
        bail!("invalid arguments");
    };

    if let Some(locale) = &cli.locale {
        set_locale(locale);
    }

    // 步骤1: 读取并校验配置
    let config = load_widget_config(&cli.config_source).await?.validate()?;

    // 步骤2: 加载名单
    let directory = InMemoryDirectory::from_file(&cli.roster_path)?;
    let roster = load_roster(
        &directory,
        DEFAULT_PAGE_SIZE,
        config.presentation.include_pending,
    )
    .await?;
    if let celebration_roster::Roster::Loaded(records) = &roster {
        eprintln!(
            "{}",
            t_with_args(
                "cli.loaded",
                &[
                    ("count", &records.len().to_string()),
                    ("path", &cli.roster_path.display().to_string()),
                ]
            )
        );
    }

    // 步骤3: 计算名单
    let today = cli.today.unwrap_or_else(|| {
        DateCore::today_string(config.date_order, chrono::Local::now().date_naive())
    });
    let engine = CelebrationEngine::new(config);
    let view = engine.evaluate(&roster, &today)?;

    // 步骤4: 输出
    let frontend_url = std::env::var("CELEBRATION_ROSTER_FRONTEND_URL")
        .unwrap_or_else(|_| "http://localhost".to_string());
    let host = StaticHost::new(&frontend_url);
    let widget = Presenter::new(&host, &EnglishMonthDay).render(&view, engine.config());

    if let Some(title) = &widget.title {
        println!("{}", title);
    }
    match &widget.body {
        WidgetBody::Hidden => println!("{}", t("cli.hidden")),
        WidgetBody::Message(message) => println!("{}", message),
        WidgetBody::Groups(groups) => {
            for group in groups {
                if let Some(label) = &group.label {
                    println!("== {} ==", label);
                }
                for entry in &group.entries {
                    match &entry.date {
                        Some(date) => println!(
                            "  {} ({})  {}",
                            entry.display_name, date, entry.profile_link
                        ),
                        None => println!("  {}  {}", entry.display_name, entry.profile_link),
                    }
                }
            }
            println!(
                "{}",
                t_with_args("cli.total", &[("count", &view.total_records().to_string())])
            );
        }
    }

    Ok(())
}
