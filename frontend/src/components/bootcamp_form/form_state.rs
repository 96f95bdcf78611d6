//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与预填
//! - 数据的重置
//! - 数据到 `BootcampForm` 的转换（校验在 `forms` 模块）

use kodigo_shared::Bootcamp;
use leptos::prelude::*;

use crate::forms::{BootcampForm, FieldErrors};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub technologies: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            technologies: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::default()),
            submitting: RwSignal::new(false),
        }
    }

    /// 用记录预填（编辑）
    pub fn fill(&self, record: &Bootcamp) {
        let form = BootcampForm::from_record(record);
        self.name.set(form.name);
        self.description.set(form.description);
        self.technologies.set(form.technologies);
        self.errors.set(FieldErrors::default());
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.technologies.set(String::new());
        self.errors.set(FieldErrors::default());
    }

    pub fn to_form(&self) -> BootcampForm {
        BootcampForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            technologies: self.technologies.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
