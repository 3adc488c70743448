//! # 输出包数据模型
//!
//! 一次单元求值的全部输出：槽位标识 → 文本 / 富文本 / 图表描述。
//! 输出包每次求值整体新建，整体交付，消费方不会看到新旧槽位混杂的状态。
//!
//! ## 依赖关系
//! - 被 `units/` 构建
//! - 被 `binding/graph.rs` 交付到 `OutputSink`
//! - 被 `commands/` 和 `render/` 消费

use crate::models::chart::ChartDescription;

use serde::Serialize;
use std::collections::BTreeMap;

/// 富文本中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichLine {
    pub text: String,
    /// 是否加粗强调
    pub emphasis: bool,
}

impl RichLine {
    pub fn plain(text: impl Into<String>) -> Self {
        RichLine {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        RichLine {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// 槽位值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum OutputValue {
    Text(String),
    Rich(Vec<RichLine>),
    Chart(ChartDescription),
}

/// 输出包
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct OutputBundle {
    slots: BTreeMap<String, OutputValue>,
}

impl OutputBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, slot: impl Into<String>, text: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), OutputValue::Text(text.into()));
        self
    }

    pub fn rich(mut self, slot: impl Into<String>, lines: Vec<RichLine>) -> Self {
        self.slots.insert(slot.into(), OutputValue::Rich(lines));
        self
    }

    pub fn chart(mut self, slot: impl Into<String>, chart: ChartDescription) -> Self {
        self.slots.insert(slot.into(), OutputValue::Chart(chart));
        self
    }

    pub fn get(&self, slot: &str) -> Option<&OutputValue> {
        self.slots.get(slot)
    }

    /// 取文本槽位
    pub fn get_text(&self, slot: &str) -> Option<&str> {
        match self.slots.get(slot) {
            Some(OutputValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// 取富文本槽位
    pub fn get_rich(&self, slot: &str) -> Option<&[RichLine]> {
        match self.slots.get(slot) {
            Some(OutputValue::Rich(lines)) => Some(lines),
            _ => None,
        }
    }

    /// 取图表槽位
    pub fn get_chart(&self, slot: &str) -> Option<&ChartDescription> {
        match self.slots.get(slot) {
            Some(OutputValue::Chart(c)) => Some(c),
            _ => None,
        }
    }

    /// 所有图表槽位（按槽位名排序）
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartDescription)> {
        self.slots.iter().filter_map(|(k, v)| match v {
            OutputValue::Chart(c) => Some((k.as_str(), c)),
            _ => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputValue)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
