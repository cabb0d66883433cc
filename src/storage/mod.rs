//! 数据存储层
//!
//! 所有实体共用 [`EntityStorage`] 接口；当前只有内存实现。

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::Result;
use crate::models::{
    Entity, batches::entities::Batch, classrooms::entities::Classroom,
    departments::entities::Department, due_fees::entities::DueFee,
    fee_settings::entities::FeeSetting, staff::entities::StaffMember,
    students::entities::Student, subjects::entities::Subject, teachers::entities::Teacher,
    transactions::entities::Transaction,
};

pub mod memory;

#[async_trait::async_trait]
pub trait EntityStorage<T: Entity>: Send + Sync {
    // 列出全部记录
    async fn list(&self) -> Result<Vec<T>>;
    // 通过ID获取记录，不存在时返回 NotFound
    async fn fetch_by_id(&self, id: &str) -> Result<T>;
    // 由表单值创建记录并生成新ID
    async fn create(&self, form: T::Form) -> Result<T>;
    // 由表单值更新记录，ID保持不变
    async fn update(&self, id: &str, form: T::Form) -> Result<T>;
    // 整条替换已有记录
    async fn save(&self, record: T) -> Result<T>;
    // 删除记录，返回是否存在
    async fn remove(&self, id: &str) -> Result<bool>;
}

/// 单个实体集合
#[derive(Debug)]
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().await
    }
}

/// 全部实体集合
#[derive(Debug, Default)]
pub struct Collections {
    pub students: Collection<Student>,
    pub teachers: Collection<Teacher>,
    pub staff: Collection<StaffMember>,
    pub classrooms: Collection<Classroom>,
    pub subjects: Collection<Subject>,
    pub batches: Collection<Batch>,
    pub departments: Collection<Department>,
    pub fee_settings: Collection<FeeSetting>,
    pub due_fees: Collection<DueFee>,
    pub transactions: Collection<Transaction>,
}

impl Collections {
    /// 带初始数据的集合
    pub fn seeded() -> Self {
        use memory::seed;
        Self {
            students: Collection::new(seed::students()),
            teachers: Collection::new(seed::teachers()),
            staff: Collection::new(seed::staff()),
            classrooms: Collection::new(seed::classrooms()),
            subjects: Collection::new(seed::subjects()),
            batches: Collection::new(seed::batches()),
            departments: Collection::new(seed::departments()),
            fee_settings: Collection::new(seed::fee_settings()),
            due_fees: Collection::new(seed::due_fees()),
            transactions: Collection::new(seed::transactions()),
        }
    }
}
