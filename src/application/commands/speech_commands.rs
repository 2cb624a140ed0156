//! Speech Commands

/// 合成语音命令
///
/// 字段均按请求原样保留，缺失校验由 handler 完成
#[derive(Debug, Clone, Default)]
pub struct Synthesize {
    pub text: Option<String>,
    pub token: Option<String>,
    /// 音色索引的文本形式（如 `"2"`）
    pub voice: Option<String>,
}
