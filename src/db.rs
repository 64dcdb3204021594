// ==========================================
// 纪念日名单引擎 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置表结构（scope_id 为组件实例 ID）
pub const CONFIG_KV_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS config_kv (
    scope_id   TEXT NOT NULL,
    key        TEXT NOT NULL,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (scope_id, key)
);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表（幂等）
pub fn ensure_config_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CONFIG_KV_SCHEMA)
}

/// 默认数据库路径
///
/// 优先读取环境变量 CELEBRATION_ROSTER_DB_PATH，否则放在用户数据目录下
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("CELEBRATION_ROSTER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir
            .join("celebration-roster")
            .join("celebration_roster.db")
            .to_string_lossy()
            .to_string(),
        None => "./celebration_roster.db".to_string(),
    }
}
