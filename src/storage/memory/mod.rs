//! 内存存储实现
//!
//! 每次调用前随机等待一段时间，模拟异步接口的网络延迟。
//! 并发写入为最后写入者生效。

pub mod seed;

use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

use super::{Collections, EntityStorage};
use crate::config::MockConfig;
use crate::errors::{MadrasaError, Result};
use crate::models::Entity;
use crate::utils::random_code::generate_base36;

/// 新记录ID中随机部分的长度
const ID_RANDOM_LEN: usize = 9;

/// 模拟延迟范围（毫秒，含两端）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Latency {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms,
            max_ms: max_ms.max(min_ms),
        }
    }

    pub fn none() -> Self {
        Self::new(0, 0)
    }

    async fn wait(&self) {
        let ms = if self.max_ms > self.min_ms {
            rand::rng().random_range(self.min_ms..=self.max_ms)
        } else {
            self.min_ms
        };
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

pub struct MemoryStorage {
    collections: Collections,
    latency: Latency,
}

impl MemoryStorage {
    pub fn new(collections: Collections, latency: Latency) -> Self {
        Self {
            collections,
            latency,
        }
    }

    pub fn seeded(latency: Latency) -> Self {
        Self::new(Collections::seeded(), latency)
    }

    pub fn empty(latency: Latency) -> Self {
        Self::new(Collections::default(), latency)
    }

    /// 按配置创建
    pub fn from_config(config: &MockConfig) -> Self {
        let latency = Latency::new(config.latency_min_ms, config.latency_max_ms);
        let storage = if config.seed {
            Self::seeded(latency)
        } else {
            Self::empty(latency)
        };
        info!(
            "Memory storage ready (seeded: {}, latency: {}-{} ms)",
            config.seed, latency.min_ms, latency.max_ms
        );
        storage
    }
}

impl MemoryStorage {
    /// 在写锁内原地修改一条记录
    ///
    /// 检查与修改在同一把锁内完成，闭包返回错误时不应留下改动。
    pub async fn modify<T, R, F>(&self, id: &str, f: F) -> Result<R>
    where
        T: Entity,
        F: FnOnce(&mut T) -> Result<R>,
    {
        self.latency.wait().await;
        let mut records = T::collection(&self.collections).write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        f(record)
    }
}

fn not_found<T: Entity>(id: &str) -> MadrasaError {
    MadrasaError::not_found(format!("{} {} not found", T::KIND.title(), id))
}

#[async_trait::async_trait]
impl<T: Entity> EntityStorage<T> for MemoryStorage {
    async fn list(&self) -> Result<Vec<T>> {
        self.latency.wait().await;
        Ok(T::collection(&self.collections).read().await.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<T> {
        self.latency.wait().await;
        T::collection(&self.collections)
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn create(&self, form: T::Form) -> Result<T> {
        self.latency.wait().await;
        let mut records = T::collection(&self.collections).write().await;

        // 在写锁内生成，保证ID唯一
        let id = loop {
            let candidate = format!("{}{}", T::ID_PREFIX, generate_base36(ID_RANDOM_LEN));
            if !records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
            debug!("Generated duplicate {} id {}, retrying", T::KIND, candidate);
        };

        let record = T::build(id, None, form)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, form: T::Form) -> Result<T> {
        self.latency.wait().await;
        let mut records = T::collection(&self.collections).write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;

        let record = T::build(id.to_string(), Some(&records[index]), form)?;
        records[index] = record.clone();
        Ok(record)
    }

    async fn save(&self, record: T) -> Result<T> {
        self.latency.wait().await;
        let mut records = T::collection(&self.collections).write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| not_found::<T>(record.id()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        self.latency.wait().await;
        let mut records = T::collection(&self.collections).write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classrooms::entities::Classroom;
    use crate::models::classrooms::requests::ClassroomForm;
    use crate::models::departments::entities::Department;
    use crate::models::departments::requests::DepartmentForm;
    use crate::models::teachers::entities::Teacher;
    use std::collections::HashSet;

    fn department(name: &str) -> DepartmentForm {
        DepartmentForm {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let storage = MemoryStorage::empty(Latency::none());
        let mut ids = HashSet::new();
        for i in 0..200 {
            let created: Department = storage.create(department(&format!("Dept {i}"))).await.unwrap();
            assert_eq!(created.id.len(), ID_RANDOM_LEN);
            assert!(ids.insert(created.id));
        }
    }

    #[tokio::test]
    async fn test_classroom_ids_are_prefixed() {
        let storage = MemoryStorage::seeded(Latency::none());
        let form = ClassroomForm {
            grade_id: "3".to_string(),
            teacher_id: "tchr-009".to_string(),
            academic_year_id: "2024-25".to_string(),
            ..ClassroomForm::default()
        };
        let created: Classroom = storage.create(form).await.unwrap();
        assert!(created.id.starts_with("cls-"));
        assert_eq!(created.id.len(), 4 + ID_RANDOM_LEN);
        assert_eq!(created.grade_id, 3);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_unedited_fields() {
        let storage = MemoryStorage::seeded(Latency::none());
        let before: Teacher = storage.fetch_by_id("1").await.unwrap();
        let mut form = before.to_form();
        form.name = "Ahmed Khan Al-Hafiz".to_string();

        let updated: Teacher = storage.update("1", form).await.unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.user_id, before.user_id);
        assert_eq!(updated.name, "Ahmed Khan Al-Hafiz");
    }

    #[tokio::test]
    async fn test_missing_records() {
        let storage = MemoryStorage::seeded(Latency::none());
        let err = EntityStorage::<Department>::fetch_by_id(&storage, "404")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(
            EntityStorage::<Department>::update(&storage, "404", department("x"))
                .await
                .is_err()
        );
        assert!(
            !EntityStorage::<Department>::remove(&storage, "404")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let storage = MemoryStorage::seeded(Latency::none());
        let before = EntityStorage::<Department>::list(&storage).await.unwrap();
        assert!(EntityStorage::<Department>::remove(&storage, "1").await.unwrap());
        let after = EntityStorage::<Department>::list(&storage).await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|d| d.id != "1"));
    }

    #[tokio::test]
    async fn test_modify_in_place() {
        let storage = MemoryStorage::seeded(Latency::none());
        let old = storage
            .modify::<Department, _, _>("1", |d| Ok(std::mem::replace(&mut d.name, "Seerah".to_string())))
            .await
            .unwrap();
        let current: Department = storage.fetch_by_id("1").await.unwrap();
        assert_eq!(current.name, "Seerah");
        assert_ne!(old, "Seerah");

        let err = storage
            .modify::<Department, (), _>("1", |_| Err(MadrasaError::validation("rejected")))
            .await
            .unwrap_err();
        assert!(matches!(err, MadrasaError::Validation(_)));
        let current: Department = storage.fetch_by_id("1").await.unwrap();
        assert_eq!(current.name, "Seerah");

        assert!(
            storage
                .modify::<Department, (), _>("404", |_| Ok(()))
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let storage = MemoryStorage::seeded(Latency::new(20, 30));
        let started = std::time::Instant::now();
        let _ = EntityStorage::<Department>::list(&storage).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
