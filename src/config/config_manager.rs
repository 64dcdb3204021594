// ==========================================
// 纪念日名单引擎 - 配置管理器
// ==========================================
// 职责: 组件配置的加载、查询、覆写与快照
// 存储: config_kv 表 (scope_id + key → value)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::widget_config::WidgetConfig;
use crate::config::widget_config_reader::WidgetConfigReader;
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例（自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 并建表（幂等）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> ConfigResult<Self> {
        {
            let guard = lock(&conn)?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    /// 读取单个配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, scope_id: &str, key: &str) -> ConfigResult<Option<String>> {
        let conn = lock(&self.conn)?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![scope_id, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 写入配置值（存在则覆盖）
    pub fn upsert_config_value(&self, scope_id: &str, key: &str, value: &str) -> ConfigResult<()> {
        let conn = lock(&self.conn)?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![scope_id, key, value],
        )?;

        Ok(())
    }

    /// 读取作用域下全部配置
    pub fn list_scope(&self, scope_id: &str) -> ConfigResult<HashMap<String, String>> {
        let conn = lock(&self.conn)?;

        let mut stmt =
            conn.prepare("SELECT key, value FROM config_kv WHERE scope_id = ?1 ORDER BY key")?;
        let rows = stmt.query_map(params![scope_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map = HashMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(config_map)
    }

    /// 获取作用域配置快照（JSON 格式）
    pub fn get_config_snapshot(&self, scope_id: &str) -> ConfigResult<String> {
        let config_map = self.list_scope(scope_id)?;
        Ok(serde_json::to_string(&config_map)?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - 恢复的配置项数量
    ///
    /// # 注意
    /// - 覆盖同名配置，不删除快照之外的配置
    pub fn restore_config_from_snapshot(
        &self,
        scope_id: &str,
        snapshot_json: &str,
    ) -> ConfigResult<usize> {
        let config_map: HashMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut conn = lock(&self.conn)?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for (key, value) in config_map.iter() {
            count += tx.execute(
                "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
                params![scope_id, key, value],
            )?;
        }

        tx.commit()?;

        tracing::info!(scope_id, restored = count, "配置快照已恢复");
        Ok(count)
    }
}

fn lock(conn: &Arc<Mutex<Connection>>) -> ConfigResult<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|e| ConfigError::LockError(e.to_string()))
}

// ==========================================
// WidgetConfigReader Trait 实现
// ==========================================
#[async_trait]
impl WidgetConfigReader for ConfigManager {
    async fn load_widget_config(&self, widget_id: &str) -> ConfigResult<WidgetConfig> {
        let pairs = self.list_scope(widget_id)?;
        if pairs.is_empty() {
            return Err(ConfigError::ScopeNotFound {
                scope: widget_id.to_string(),
            });
        }

        tracing::debug!(widget_id, keys = pairs.len(), "读取组件配置");
        WidgetConfig::from_key_values(&pairs)
    }
}
