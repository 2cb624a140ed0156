//! Voice Context - Catalog

use serde::Serialize;

use super::VoiceError;

/// 音色描述
///
/// `index` 即该音色在目录中的位置，对外作为音色 ID；
/// `engine_id` 是合成引擎内部用于选择音色的标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    pub index: usize,
    pub engine_id: String,
    pub name: String,
}

/// 音色目录
///
/// 不变量:
/// - 进程生命周期内只读
/// - `voices[i].index == i`
#[derive(Debug, Clone, Default)]
pub struct VoiceCatalog {
    voices: Vec<VoiceInfo>,
}

impl VoiceCatalog {
    /// 由引擎报告的 (engine_id, name) 序列构建目录，保持原有顺序
    pub fn new<I, S1, S2>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S1, S2)>,
        S1: Into<String>,
        S2: Into<String>,
    {
        let voices = entries
            .into_iter()
            .enumerate()
            .map(|(index, (engine_id, name))| VoiceInfo {
                index,
                engine_id: engine_id.into(),
                name: name.into(),
            })
            .collect();

        Self { voices }
    }

    pub fn list(&self) -> &[VoiceInfo] {
        &self.voices
    }

    pub fn get(&self, index: usize) -> Option<&VoiceInfo> {
        self.voices.get(index)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// 解析请求中的音色索引
    ///
    /// 接受整数文本（允许首尾空白），负数、越界或非整数均视为无效
    pub fn resolve(&self, raw: &str) -> Result<&VoiceInfo, VoiceError> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.get(index))
            .ok_or_else(|| VoiceError::InvalidIndex(raw.to_string()))
    }
}
