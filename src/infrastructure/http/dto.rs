//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::voice::VoiceInfo;

// ============================================================================
// Token DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// 从 query 或 JSON body 中读取令牌
#[derive(Debug, Default, Deserialize)]
pub struct TokenParam {
    #[serde(default)]
    pub token: Option<String>,
}

// ============================================================================
// Speech DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// 整数或整数字符串；`null` 视为未提供
    #[serde(default)]
    pub voice: Option<Value>,
}

impl SynthesizeRequest {
    /// 音色索引的文本形式，非整数值原样保留交由目录校验
    pub fn voice_text(&self) -> Option<String> {
        match self.voice.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub download_link: String,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoiceResponse {
    pub id: usize,
    pub name: String,
}

impl From<VoiceInfo> for VoiceResponse {
    fn from(voice: VoiceInfo) -> Self {
        Self {
            id: voice.index,
            name: voice.name,
        }
    }
}
